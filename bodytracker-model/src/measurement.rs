use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(strum::Display, strum::EnumString),
    strum(ascii_case_insensitive, serialize_all = "lowercase")
)]
pub enum Gender {
    Male,
    Female,
}

/// Circumference measurements in centimeters, as entered for one
/// calculation. Transient, never persisted. Hip is only meaningful for
/// the female variant of the Navy formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub waist: f64,
    pub neck: f64,
    pub height: f64,
    pub hip: Option<f64>,
}

impl Measurements {
    pub fn new(waist: f64, neck: f64, height: f64, hip: Option<f64>) -> Self {
        Self {
            waist,
            neck,
            height,
            hip,
        }
    }
}

/// One computed body-fat reading, stamped with the calendar day it was
/// taken. Serialized field names match the records the mobile app wrote.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyFatResult {
    pub date: NaiveDate,
    #[cfg_attr(feature = "serde", serde(rename = "bodyFatPercentage"))]
    pub body_fat_percentage: f64,
}

impl BodyFatResult {
    pub fn new(date: NaiveDate, body_fat_percentage: f64) -> Self {
        Self {
            date,
            body_fat_percentage,
        }
    }
}
