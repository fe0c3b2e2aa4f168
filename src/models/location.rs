use serde::{Deserialize, Serialize};

/// Longest trailor tag kept on a record. Longer tags are cut on parse.
pub const MAX_TAG_LENGTH: usize = 15;

/// Where a boat is stored, together with the detail for that kind of storage.
///
/// - `Slip`: numbered slip on the water
/// - `Land`: dry storage bay, identified by a single letter
/// - `Trailor`: kept on a trailor, identified by its licence tag
/// - `Storage`: numbered indoor storage unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Location {
    Slip(i32),
    Land(char),
    Trailor(String),
    Storage(i32),
}

impl Location {
    pub fn kind(&self) -> LocationKind {
        match self {
            Self::Slip(_) => LocationKind::Slip,
            Self::Land(_) => LocationKind::Land,
            Self::Trailor(_) => LocationKind::Trailor,
            Self::Storage(_) => LocationKind::Storage,
        }
    }

    /// The detail as written in the data file.
    pub fn detail(&self) -> String {
        match self {
            Self::Slip(number) | Self::Storage(number) => number.to_string(),
            Self::Land(bay) => bay.to_string(),
            Self::Trailor(tag) => tag.clone(),
        }
    }
}

/// The discriminator of a [`Location`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Slip,
    Land,
    Trailor,
    Storage,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slip => "slip",
            Self::Land => "land",
            Self::Trailor => "trailor",
            Self::Storage => "storage",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "slip" => Some(Self::Slip),
            "land" => Some(Self::Land),
            "trailor" => Some(Self::Trailor),
            "storage" => Some(Self::Storage),
            _ => None,
        }
    }

    /// Monthly charge per foot of boat length.
    pub fn monthly_rate(&self) -> f64 {
        match self {
            Self::Slip => 12.50,
            Self::Land => 14.00,
            Self::Trailor => 25.00,
            Self::Storage => 11.20,
        }
    }
}
