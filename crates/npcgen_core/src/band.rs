//! Coarse trait bands and the Gaussian parameters that refine each band into
//! an exact numeric value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean and standard deviation for one band's normal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParams {
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    Young,
    Adult,
    Old,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [Self::Young, Self::Adult, Self::Old];

    pub fn gaussian(&self) -> GaussianParams {
        let (mean, std_dev) = match *self {
            Self::Young => (20.0, 4.0),
            Self::Adult => (35.0, 5.0),
            Self::Old => (55.0, 5.0),
        };
        GaussianParams { mean, std_dev }
    }

    pub fn as_key(&self) -> &'static str {
        match *self {
            Self::Young => "young",
            Self::Adult => "adult",
            Self::Old => "old",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "young" => Some(Self::Young),
            "adult" => Some(Self::Adult),
            "old" => Some(Self::Old),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeightBand {
    Short,
    Average,
    Tall,
}

impl HeightBand {
    pub const ALL: [HeightBand; 3] = [Self::Short, Self::Average, Self::Tall];

    /// Sampling population approximating the height prior: short twice,
    /// average four times, tall once.
    pub const POPULATION: [HeightBand; 7] = [
        Self::Short,
        Self::Short,
        Self::Average,
        Self::Average,
        Self::Average,
        Self::Average,
        Self::Tall,
    ];

    pub fn gaussian(&self) -> GaussianParams {
        let (mean, std_dev) = match *self {
            Self::Short => (150.0, 10.0),
            Self::Average => (175.0, 10.0),
            Self::Tall => (190.0, 10.0),
        };
        GaussianParams { mean, std_dev }
    }

    pub fn as_key(&self) -> &'static str {
        match *self {
            Self::Short => "short",
            Self::Average => "average",
            Self::Tall => "tall",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "short" => Some(Self::Short),
            "average" => Some(Self::Average),
            "tall" => Some(Self::Tall),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeightBand {
    Thin,
    Normal,
    Fat,
}

impl WeightBand {
    pub const ALL: [WeightBand; 3] = [Self::Thin, Self::Normal, Self::Fat];

    /// Sampling population for the weight prior: thin four times, normal
    /// three times, fat once.
    pub const POPULATION: [WeightBand; 8] = [
        Self::Thin,
        Self::Thin,
        Self::Thin,
        Self::Thin,
        Self::Normal,
        Self::Normal,
        Self::Normal,
        Self::Fat,
    ];

    /// Weight means are height-relative, so the character's height must be
    /// resolved before the weight is sampled.
    pub fn gaussian(&self, height_cm: i32) -> GaussianParams {
        let offset = match *self {
            Self::Thin => -110,
            Self::Normal => -95,
            Self::Fat => -80,
        };
        GaussianParams {
            mean: f64::from(height_cm + offset),
            std_dev: 5.0,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match *self {
            Self::Thin => "thin",
            Self::Normal => "normal",
            Self::Fat => "fat",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "thin" => Some(Self::Thin),
            "normal" => Some(Self::Normal),
            "fat" => Some(Self::Fat),
            _ => None,
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl fmt::Display for HeightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl fmt::Display for WeightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
