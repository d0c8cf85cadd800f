pub mod history;
pub mod measurement;
pub mod profile;
