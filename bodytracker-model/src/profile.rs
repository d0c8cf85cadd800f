/// The single persisted user-identity record.
///
/// All fields are free text at rest, including the numeric ones; the
/// original records store them as entered and parse on demand. A profile
/// is either complete (every field present after a successful save) or
/// absent entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: String,
    pub nationality: String,
    pub weight: String,
    pub height: String,
    pub address: String,
}

impl UserProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        age: String,
        nationality: String,
        weight: String,
        height: String,
        address: String,
    ) -> Self {
        Self {
            name,
            email,
            age,
            nationality,
            weight,
            height,
            address,
        }
    }

    pub fn age(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.trim().parse().ok()
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height.trim().parse().ok()
    }
}
