use crate::measurement::BodyFatResult;

/// Maximum number of readings retained per device.
pub const HISTORY_CAPACITY: usize = 8;

/// Bounded, append-only log of body-fat readings in insertion order.
///
/// Pushing onto a full history evicts the oldest entry first, so the log
/// always holds the `HISTORY_CAPACITY` most recent readings. On the wire
/// this is a plain JSON array, compatible with the records the mobile app
/// wrote; oversized stored arrays are trimmed to the most recent entries
/// when read back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<BodyFatResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from stored entries, keeping only the most recent
    /// `HISTORY_CAPACITY` of them.
    pub fn from_entries(mut entries: Vec<BodyFatResult>) -> Self {
        if entries.len() > HISTORY_CAPACITY {
            entries.drain(..entries.len() - HISTORY_CAPACITY);
        }
        Self { entries }
    }

    pub fn push(&mut self, result: BodyFatResult) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(result);
    }

    pub fn entries(&self) -> &[BodyFatResult] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&BodyFatResult> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for History {
    type Item = BodyFatResult;
    type IntoIter = std::vec::IntoIter<BodyFatResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for History {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.entries, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for History {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<BodyFatResult> = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn reading(day: u32, percentage: f64) -> BodyFatResult {
        BodyFatResult::new(
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            percentage,
        )
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut history = History::new();
        history.push(reading(1, 20.0));
        history.push(reading(2, 21.0));
        history.push(reading(3, 19.5));

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0], reading(1, 20.0));
        assert_eq!(history.latest(), Some(&reading(3, 19.5)));
    }

    #[test]
    fn ninth_push_evicts_the_oldest() {
        let mut history = History::new();
        for day in 1..=9 {
            history.push(reading(day, day as f64));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0], reading(2, 2.0));
        assert_eq!(history.latest(), Some(&reading(9, 9.0)));
    }

    #[test]
    fn from_entries_trims_to_most_recent() {
        let entries: Vec<_> = (1..=12).map(|day| reading(day, day as f64)).collect();
        let history = History::from_entries(entries);

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0], reading(5, 5.0));
        assert_eq!(history.latest(), Some(&reading(12, 12.0)));
    }
}
