use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::location::{Location, LocationKind};
use crate::codec::{self, ParseRejection};

/// Longest boat name kept on a record, in characters.
pub const MAX_NAME_LENGTH: usize = 127;

/// A boat registered at the marina.
///
/// Names identify boats for lookup, compared without regard to ASCII case.
/// They are not required to be unique; the registry always resolves to the
/// first match in its current order.
///
/// `amount_owed` is an unconstrained balance. Payments are guarded against
/// exceeding it, but nothing stops it from going negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    pub name: String,
    /// Length in feet.
    pub length: f64,
    pub location: Location,
    pub amount_owed: f64,
}

impl Boat {
    pub fn kind(&self) -> LocationKind {
        self.location.kind()
    }

    /// The fee this boat accrues for one month at its current location.
    pub fn monthly_fee(&self) -> f64 {
        self.length * self.kind().monthly_rate()
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_line(self))
    }
}

impl FromStr for Boat {
    type Err = ParseRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_line(s)
    }
}
