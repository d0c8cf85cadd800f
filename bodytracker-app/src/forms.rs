//! Raw-text form input, validated field by field.
//!
//! Validation collects every failing field instead of stopping at the
//! first, so a caller can report all of them at once.

use std::str::FromStr;

use bodytracker_model::{
    measurement::{Gender, Measurements},
    profile::UserProfile,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("gender must be male or female")]
    UnknownGender,
}

/// Raw profile form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub nationality: String,
    pub weight: String,
    pub height: String,
    pub address: String,
}

impl ProfileForm {
    /// Checks every field and builds the profile record only when all of
    /// them pass: text fields must be non-empty, age/weight/height numeric
    /// and positive, and the email must have a plausible shape.
    pub fn validate(&self) -> Result<UserProfile, Vec<FieldError>> {
        let mut errors = Vec::new();

        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("age", &self.age),
            ("nationality", &self.nationality),
            ("weight", &self.weight),
            ("height", &self.height),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::Missing(field));
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(self.email.trim()) {
            errors.push(FieldError::InvalidEmail);
        }

        for (field, value) in [
            ("age", &self.age),
            ("weight", &self.weight),
            ("height", &self.height),
        ] {
            if let Some(error) = check_positive_number(field, value) {
                errors.push(error);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UserProfile::new(
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            self.age.trim().to_string(),
            self.nationality.trim().to_string(),
            self.weight.trim().to_string(),
            self.height.trim().to_string(),
            self.address.trim().to_string(),
        ))
    }
}

/// Raw calculator form input. Hip may be left empty; whether that is an
/// error depends on the selected gender and is decided by the calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementForm {
    pub gender: String,
    pub waist: String,
    pub neck: String,
    pub height: String,
    pub hip: String,
}

impl MeasurementForm {
    pub fn parse(&self) -> Result<(Gender, Measurements), Vec<FieldError>> {
        let mut errors = Vec::new();

        let gender = match Gender::from_str(self.gender.trim()) {
            Ok(gender) => Some(gender),
            Err(_) => {
                errors.push(FieldError::UnknownGender);
                None
            }
        };

        let waist = parse_measurement("waist", &self.waist, &mut errors);
        let neck = parse_measurement("neck", &self.neck, &mut errors);
        let height = parse_measurement("height", &self.height, &mut errors);

        let hip = if self.hip.trim().is_empty() {
            None
        } else {
            parse_measurement("hip", &self.hip, &mut errors)
        };

        match (gender, waist, neck, height) {
            (Some(gender), Some(waist), Some(neck), Some(height)) if errors.is_empty() => {
                Ok((gender, Measurements::new(waist, neck, height, hip)))
            }
            _ => Err(errors),
        }
    }
}

fn parse_measurement(field: &'static str, value: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    if value.trim().is_empty() {
        errors.push(FieldError::Missing(field));
        return None;
    }
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed > 0.0 => Some(parsed),
        Ok(_) => {
            errors.push(FieldError::NotPositive(field));
            None
        }
        Err(_) => {
            errors.push(FieldError::NotNumeric(field));
            None
        }
    }
}

fn check_positive_number(field: &'static str, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed > 0.0 => None,
        Ok(_) => Some(FieldError::NotPositive(field)),
        Err(_) => Some(FieldError::NotNumeric(field)),
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
