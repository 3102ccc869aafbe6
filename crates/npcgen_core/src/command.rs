//! Command model: each user action maps to one state transition over the
//! character sheet. Both the CLI and GUI shells dispatch through [`apply`]
//! instead of mutating the sheet from widget callbacks.

use crate::band::{AgeBand, HeightBand, WeightBand};
use crate::core_api::{CharacterSheet, Generator, RandomizeFlags};
use crate::ethnicity::Ethnicity;
use crate::sex::Sex;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RandomizeAll(RandomizeFlags),
    RerollName,
    RerollSurname,
    RerollBothNames,
    RerollAgeYears,
    RerollHeightCm,
    RerollWeightKg,
    SetEthnicity(Ethnicity),
    SetSex(Sex),
    SetAgeBand(AgeBand),
    SetHeightBand(HeightBand),
    SetWeightBand(WeightBand),
    SetProfession(String),
    SetShortDescription(String),
    SetLongDescription(String),
    SetClothes(String),
    SetPockets(String),
    SetWeapons(String),
}

pub fn apply(command: Command, sheet: &mut CharacterSheet, generator: &mut Generator) {
    match command {
        Command::RandomizeAll(flags) => generator.randomize(sheet, &flags),
        Command::RerollName => {
            if let Some(name) = generator.roll_first_name(sheet.ethnicity, sheet.sex) {
                sheet.name = name;
            }
        }
        Command::RerollSurname => {
            if let Some(surname) = generator.roll_surname(sheet.ethnicity) {
                sheet.surname = surname;
            }
        }
        Command::RerollBothNames => {
            apply(Command::RerollName, sheet, generator);
            apply(Command::RerollSurname, sheet, generator);
        }
        Command::RerollAgeYears => sheet.age_years = generator.roll_age_years(sheet.age_band),
        Command::RerollHeightCm => sheet.height_cm = generator.roll_height_cm(sheet.height_band),
        Command::RerollWeightKg => {
            sheet.weight_kg = generator.roll_weight_kg(sheet.weight_band, sheet.height_cm);
        }
        Command::SetEthnicity(ethnicity) => sheet.ethnicity = ethnicity,
        Command::SetSex(sex) => sheet.sex = sex,
        // picking a band rerolls its exact value so band and number never
        // disagree
        Command::SetAgeBand(band) => {
            sheet.age_band = band;
            sheet.age_years = generator.roll_age_years(band);
        }
        Command::SetHeightBand(band) => {
            sheet.height_band = band;
            sheet.height_cm = generator.roll_height_cm(band);
        }
        Command::SetWeightBand(band) => {
            sheet.weight_band = band;
            sheet.weight_kg = generator.roll_weight_kg(band, sheet.height_cm);
        }
        Command::SetProfession(profession) => sheet.profession = profession,
        Command::SetShortDescription(text) => sheet.short_description = text,
        Command::SetLongDescription(text) => sheet.long_description = text,
        Command::SetClothes(text) => sheet.clothes = text,
        Command::SetPockets(text) => sheet.pockets = text,
        Command::SetWeapons(text) => sheet.weapons = text,
    }
}
