use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::band::{AgeBand, HeightBand, WeightBand};
use crate::ethnicity::Ethnicity;
use crate::sex::Sex;

/// In-memory record of one character's full attribute set. Created empty at
/// session start, mutated field by field by the generator and by user edits,
/// overwritten wholesale on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub surname: String,
    pub ethnicity: Ethnicity,
    pub sex: Sex,
    pub age_band: AgeBand,
    pub age_years: i32,
    pub height_band: HeightBand,
    pub height_cm: i32,
    pub weight_band: WeightBand,
    pub weight_kg: i32,
    pub profession: String,
    pub short_description: String,
    pub long_description: String,
    pub clothes: String,
    pub pockets: String,
    pub weapons: String,
    pub portrait: Option<PathBuf>,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            name: String::new(),
            surname: String::new(),
            ethnicity: Ethnicity::White,
            sex: Sex::Male,
            age_band: AgeBand::Adult,
            age_years: 0,
            height_band: HeightBand::Average,
            height_cm: 0,
            weight_band: WeightBand::Normal,
            weight_kg: 0,
            profession: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            clothes: String::new(),
            pockets: String::new(),
            weapons: String::new(),
            portrait: None,
        }
    }
}

impl CharacterSheet {
    pub fn name_and_surname(&self) -> String {
        let combined = format!("{} {}", self.name, self.surname);
        combined.trim().to_string()
    }
}

/// Which categories the next randomize pass should touch. Defaults to all,
/// matching a fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomizeFlags {
    pub ethnicity: bool,
    pub sex: bool,
    pub age: bool,
    pub height: bool,
    pub weight: bool,
    pub profession: bool,
    pub armed: bool,
}

impl Default for RandomizeFlags {
    fn default() -> Self {
        Self {
            ethnicity: true,
            sex: true,
            age: true,
            height: true,
            weight: true,
            profession: true,
            armed: true,
        }
    }
}

impl RandomizeFlags {
    pub fn none() -> Self {
        Self {
            ethnicity: false,
            sex: false,
            age: false,
            height: false,
            weight: false,
            profession: false,
            armed: false,
        }
    }
}
