use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ethnicity {
    White,
    Black,
    Japanese,
    Chinese,
    Latino,
}

impl Ethnicity {
    /// Canonical order; lexicon files list one entry per ethnicity in this order.
    pub const ALL: [Ethnicity; 5] = [
        Self::White,
        Self::Black,
        Self::Japanese,
        Self::Chinese,
        Self::Latino,
    ];

    pub fn as_key(&self) -> &'static str {
        match *self {
            Self::White => "white",
            Self::Black => "black",
            Self::Japanese => "japanese",
            Self::Chinese => "chinese",
            Self::Latino => "latino",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "white" => Some(Self::White),
            "black" => Some(Self::Black),
            "japanese" => Some(Self::Japanese),
            "chinese" => Some(Self::Chinese),
            "latino" => Some(Self::Latino),
            _ => None,
        }
    }
}

impl fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
