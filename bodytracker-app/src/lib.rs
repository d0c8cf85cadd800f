pub mod forms;
pub mod state;
pub mod tracker;

pub use tracker::Tracker;
