pub mod bmi;
pub mod body_fat;
