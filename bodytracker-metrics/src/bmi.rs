//! Body Mass Index and the standard category buckets.

use std::fmt;

/// BMI from weight in kilograms and height in centimeters. Not clamped.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / height_m.powf(2.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl Category {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Category::Underweight
        } else if bmi < 25.0 {
            Category::NormalWeight
        } else if bmi < 30.0 {
            Category::Overweight
        } else {
            Category::Obese
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        };
        f.write_str(label)
    }
}
