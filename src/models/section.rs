use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::TicketError;

/// Seção do trem. Só existem duas: "A" e "B".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Section {
    A,
    B,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::A, Section::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::A => "A",
            Section::B => "B",
        }
    }

    /// Section for the next allocation given how many seats are currently taken.
    pub fn for_active_count(active: usize) -> Self {
        if active % 2 == 0 {
            Section::A
        } else {
            Section::B
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = TicketError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "A" => Ok(Section::A),
            "B" => Ok(Section::B),
            other => Err(TicketError::InvalidSection(other.to_string())),
        }
    }
}
