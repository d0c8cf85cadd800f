use chrono::Utc;
use itertools::Itertools;
use log::{error, info};

use bodytracker_metrics::{bmi, body_fat};
use bodytracker_model::{history::History, measurement::BodyFatResult, profile::UserProfile};
use bodytracker_store::profile::ProfileRepository;

use crate::forms::{FieldError, MeasurementForm, ProfileForm};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {}", .0.iter().join("; "))]
    Validation(Vec<FieldError>),
    #[error("calculation failed")]
    Metrics(#[from] body_fat::Error),
    #[error("storage operation failed")]
    Storage(#[from] bodytracker_store::profile::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// BMI derived on demand from the profile's free-text weight and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    pub value: f64,
    pub category: bmi::Category,
}

/// Ties the calculator and the profile store together: everything a
/// screen does goes through one of these operations, and every failure
/// comes back as a value the screen can show and retry.
pub struct Tracker {
    repository: Box<dyn ProfileRepository>,
}

impl Tracker {
    pub fn new(repository: Box<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn profile(&self) -> Result<Option<UserProfile>> {
        Ok(self.repository.load_profile().await?)
    }

    pub async fn history(&self) -> Result<History> {
        Ok(self.repository.load_history().await?)
    }

    /// Validates the form and overwrites the stored profile wholesale.
    pub async fn save_profile(&self, form: &ProfileForm) -> Result<UserProfile> {
        let profile = form.validate().map_err(Error::Validation)?;
        self.repository.save_profile(&profile).await?;
        info!("Saved profile for {}", profile.name);
        Ok(profile)
    }

    /// Parses the measurement form, computes the body-fat percentage,
    /// records it under today's date, and returns the reading together
    /// with the updated history.
    pub async fn record_body_fat(
        &self,
        form: &MeasurementForm,
    ) -> Result<(BodyFatResult, History)> {
        let (gender, measurements) = form.parse().map_err(Error::Validation)?;
        let percentage = match body_fat::percentage(gender, &measurements) {
            Ok(percentage) => percentage,
            Err(e) => {
                error!("Calculation rejected: {}", e);
                return Err(e.into());
            }
        };

        let result = BodyFatResult::new(Utc::now().date_naive(), round2(percentage));
        let history = self.repository.append_history(result.clone()).await?;
        info!(
            "Recorded body fat reading of {}%, history holds {} entries",
            result.body_fat_percentage,
            history.len()
        );
        Ok((result, history))
    }

    /// BMI for the stored profile, if one exists and its weight and
    /// height parse as numbers.
    pub async fn profile_bmi(&self) -> Result<Option<BmiReading>> {
        let Some(profile) = self.repository.load_profile().await? else {
            return Ok(None);
        };
        let (Some(weight), Some(height)) = (profile.weight_kg(), profile.height_cm()) else {
            return Ok(None);
        };

        let value = bmi::bmi(weight, height);
        Ok(Some(BmiReading {
            value,
            category: bmi::Category::from_bmi(value),
        }))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
