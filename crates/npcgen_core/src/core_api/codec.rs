//! Character file codec: `key = value` lines in a fixed order. The format is
//! positional; keys are written for readability but parsing maps line index
//! to field. Values carry no escaping, so embedded newlines are unsupported
//! (text containing `" = "` survives because only the first separator splits).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::band::{AgeBand, HeightBand, WeightBand};
use crate::ethnicity::Ethnicity;
use crate::sex::Sex;

use super::error::{CoreError, CoreErrorCode};
use super::types::CharacterSheet;

pub const FIELD_COUNT: usize = 15;
const SEPARATOR: &str = " = ";

/// Serialization order. Deserialization relies on this order, not on the keys.
pub const FIELD_KEYS: [&str; FIELD_COUNT] = [
    "name_and_surname",
    "ethnicity",
    "sex",
    "age",
    "years",
    "height",
    "centimeters",
    "weight",
    "kilograms",
    "profession",
    "short_description",
    "long_description",
    "clothes",
    "pockets",
    "weapons",
];

pub fn serialize(sheet: &CharacterSheet) -> String {
    let values = field_values(sheet);
    let mut out = String::new();
    for (key, value) in FIELD_KEYS.iter().zip(values.iter()) {
        out.push_str(key);
        out.push_str(SEPARATOR);
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn deserialize(contents: &str) -> Result<CharacterSheet, CoreError> {
    let mut values = Vec::with_capacity(FIELD_COUNT);
    for (index, line) in contents.lines().take(FIELD_COUNT).enumerate() {
        let Some((_, value)) = line.split_once(SEPARATOR) else {
            return Err(CoreError::new(
                CoreErrorCode::MalformedRecord,
                format!("line {} has no key/value separator", index + 1),
            ));
        };
        values.push(value);
    }
    if values.len() < FIELD_COUNT {
        return Err(CoreError::new(
            CoreErrorCode::MalformedRecord,
            format!("expected {FIELD_COUNT} fields, found {}", values.len()),
        ));
    }

    let (name, surname) = split_full_name(values[0]);
    let sheet = CharacterSheet {
        name,
        surname,
        ethnicity: Ethnicity::from_key(values[1])
            .ok_or_else(|| malformed("ethnicity", values[1]))?,
        sex: Sex::from_key(values[2]).ok_or_else(|| malformed("sex", values[2]))?,
        age_band: AgeBand::from_key(values[3]).ok_or_else(|| malformed("age", values[3]))?,
        age_years: parse_int("years", values[4])?,
        height_band: HeightBand::from_key(values[5])
            .ok_or_else(|| malformed("height", values[5]))?,
        height_cm: parse_int("centimeters", values[6])?,
        weight_band: WeightBand::from_key(values[7])
            .ok_or_else(|| malformed("weight", values[7]))?,
        weight_kg: parse_int("kilograms", values[8])?,
        profession: values[9].to_string(),
        short_description: values[10].to_string(),
        long_description: values[11].to_string(),
        clothes: values[12].to_string(),
        pockets: values[13].to_string(),
        weapons: values[14].to_string(),
        portrait: None,
    };
    Ok(sheet)
}

pub fn save_to_file(sheet: &CharacterSheet, path: &Path) -> Result<(), CoreError> {
    fs::write(path, serialize(sheet)).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Io,
            format!("failed to write {}: {e}", path.display()),
        )
    })
}

pub fn load_from_file(path: &Path) -> Result<CharacterSheet, CoreError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == io::ErrorKind::NotFound {
            CoreErrorCode::MissingFile
        } else {
            CoreErrorCode::Io
        };
        CoreError::new(code, format!("failed to read {}: {e}", path.display()))
    })?;
    deserialize(&contents)
}

/// Character files are named after the character they hold.
pub fn default_save_path(characters_dir: &Path, sheet: &CharacterSheet) -> PathBuf {
    characters_dir.join(format!("{}.txt", sheet.name_and_surname()))
}

fn field_values(sheet: &CharacterSheet) -> [String; FIELD_COUNT] {
    [
        sheet.name_and_surname(),
        sheet.ethnicity.as_key().to_string(),
        sheet.sex.as_key().to_string(),
        sheet.age_band.as_key().to_string(),
        sheet.age_years.to_string(),
        sheet.height_band.as_key().to_string(),
        sheet.height_cm.to_string(),
        sheet.weight_band.as_key().to_string(),
        sheet.weight_kg.to_string(),
        sheet.profession.clone(),
        sheet.short_description.clone(),
        sheet.long_description.clone(),
        sheet.clothes.clone(),
        sheet.pockets.clone(),
        sheet.weapons.clone(),
    ]
}

fn split_full_name(value: &str) -> (String, String) {
    match value.split_once(' ') {
        Some((name, surname)) => (name.to_string(), surname.to_string()),
        None => (value.to_string(), String::new()),
    }
}

fn malformed(field: &str, value: &str) -> CoreError {
    CoreError::new(
        CoreErrorCode::MalformedRecord,
        format!("invalid {field} value {value:?}"),
    )
}

fn parse_int(field: &str, value: &str) -> Result<i32, CoreError> {
    value.trim().parse().map_err(|_| malformed(field, value))
}
