//! Body-fat percentage via the U.S. Navy circumference method.

use bodytracker_model::measurement::{Gender, Measurements};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("hip measurement is required for female calculations")]
    MissingHip,
}

type Result<T> = std::result::Result<T, Error>;

/// Estimates body-fat percentage from circumference measurements in
/// centimeters.
///
/// The female variant requires a hip measurement and fails closed when it
/// is absent. The result is always within [0, 100]: out-of-range formula
/// output is clamped, and a non-finite value (a non-positive log argument,
/// e.g. waist no larger than neck) collapses to 0 instead of propagating.
pub fn percentage(gender: Gender, measurements: &Measurements) -> Result<f64> {
    let raw = match gender {
        Gender::Male => {
            86.010 * (measurements.waist - measurements.neck).log10()
                - 70.041 * measurements.height.log10()
                + 36.76
        }
        Gender::Female => {
            let hip = measurements.hip.ok_or(Error::MissingHip)?;
            163.205 * (measurements.waist + hip - measurements.neck).log10()
                - 97.684 * measurements.height.log10()
                - 78.387
        }
    };

    Ok(clamp(raw))
}

fn clamp(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
