use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Mood values below this fall into the darker bucket; this value and above are lighter.
pub const MOOD_THRESHOLD: u8 = 50;

pub const MAX_MOOD: u8 = 100;

/// Slider value in `0..=100`, bucketed into one of two descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > MAX_MOOD {
            return Err(DomainError::invalid_input(format!(
                "Mood must be between 0 and {MAX_MOOD}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_light(&self) -> bool {
        self.0 >= MOOD_THRESHOLD
    }

    /// Pick `light` for the upper bucket, `dark` otherwise.
    pub fn describe<'a>(&self, dark: &'a str, light: &'a str) -> &'a str {
        if self.is_light() {
            light
        } else {
            dark
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self(MOOD_THRESHOLD)
    }
}

impl TryFrom<u8> for Mood {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}
