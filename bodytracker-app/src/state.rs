//! Immutable view model for the screens.
//!
//! The original app kept current form values and results in ambient
//! mutable component state. Here the whole visible state is one value;
//! `apply` consumes an event and returns the next state, leaving the
//! previous one untouched.

use bodytracker_model::{history::History, measurement::BodyFatResult, profile::UserProfile};

/// A blocking, user-facing notification. Errors are retryable: the user
/// re-enters input or repeats the save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub profile: Option<UserProfile>,
    pub history: History,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ProfileLoaded(Option<UserProfile>),
    ProfileSaved(UserProfile),
    HistoryLoaded(History),
    ResultRecorded(BodyFatResult, History),
    Failed(String),
    NoticeDismissed,
}

impl AppState {
    pub fn apply(&self, event: Event) -> AppState {
        match event {
            Event::ProfileLoaded(profile) => AppState {
                profile,
                notice: None,
                ..self.clone()
            },
            Event::ProfileSaved(profile) => AppState {
                profile: Some(profile),
                notice: Some(Notice::Info(
                    "Your details have been saved successfully!".to_string(),
                )),
                ..self.clone()
            },
            Event::HistoryLoaded(history) => AppState {
                history,
                ..self.clone()
            },
            Event::ResultRecorded(result, history) => AppState {
                history,
                notice: Some(Notice::Info(format!(
                    "Your body fat percentage is {}%",
                    result.body_fat_percentage
                ))),
                ..self.clone()
            },
            Event::Failed(message) => AppState {
                notice: Some(Notice::Error(message)),
                ..self.clone()
            },
            Event::NoticeDismissed => AppState {
                notice: None,
                ..self.clone()
            },
        }
    }
}
