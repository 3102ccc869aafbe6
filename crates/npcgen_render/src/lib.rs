use std::fmt::Write as _;

use npcgen_core::core_api::CharacterSheet;
use serde_json::{Map as JsonMap, Value as JsonValue};

const LABEL_WIDTH: usize = 13;

/// Which sheet fields a shell asked for. Band fields cover both the symbolic
/// band and its exact numeric value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub name: bool,
    pub ethnicity: bool,
    pub sex: bool,
    pub age: bool,
    pub height: bool,
    pub weight: bool,
    pub profession: bool,
    pub short_description: bool,
    pub long_description: bool,
    pub clothes: bool,
    pub pockets: bool,
    pub weapons: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.name
            || self.ethnicity
            || self.sex
            || self.age
            || self.height
            || self.weight
            || self.profession
            || self.short_description
            || self.long_description
            || self.clothes
            || self.pockets
            || self.weapons
    }
}

/// Full character sheet as readable text.
pub fn render_text(sheet: &CharacterSheet) -> String {
    let mut out = String::new();
    push_row(&mut out, "Name", &sheet.name_and_surname());
    push_row(&mut out, "Ethnicity", sheet.ethnicity.as_key());
    push_row(&mut out, "Sex", sheet.sex.as_key());
    push_row(
        &mut out,
        "Age",
        &format!("{} ({} years)", sheet.age_band.as_key(), sheet.age_years),
    );
    push_row(
        &mut out,
        "Height",
        &format!("{} ({} cm)", sheet.height_band.as_key(), sheet.height_cm),
    );
    push_row(
        &mut out,
        "Weight",
        &format!("{} ({} kg)", sheet.weight_band.as_key(), sheet.weight_kg),
    );
    push_row(&mut out, "Profession", &sheet.profession);
    if !sheet.short_description.is_empty() {
        push_row(&mut out, "Description", &sheet.short_description);
    }
    if !sheet.long_description.is_empty() {
        push_row(&mut out, "Details", &sheet.long_description);
    }
    if !sheet.clothes.is_empty() {
        push_row(&mut out, "Clothes", &sheet.clothes);
    }
    if !sheet.pockets.is_empty() {
        push_row(&mut out, "Pockets", &sheet.pockets);
    }
    if !sheet.weapons.is_empty() {
        push_row(&mut out, "Weapons", &sheet.weapons);
    }
    out
}

/// Selected fields as `key = value` lines, one per field.
pub fn render_text_selected(sheet: &CharacterSheet, fields: &FieldSelection) -> String {
    let mut out = String::new();
    for (key, value) in selected_pairs(sheet, fields) {
        let _ = writeln!(out, "{key} = {value}");
    }
    out
}

pub fn render_json(sheet: &CharacterSheet) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "name_and_surname".to_string(),
        JsonValue::String(sheet.name_and_surname()),
    );
    out.insert(
        "ethnicity".to_string(),
        JsonValue::String(sheet.ethnicity.as_key().to_string()),
    );
    out.insert(
        "sex".to_string(),
        JsonValue::String(sheet.sex.as_key().to_string()),
    );
    out.insert(
        "age".to_string(),
        JsonValue::String(sheet.age_band.as_key().to_string()),
    );
    out.insert("years".to_string(), JsonValue::from(sheet.age_years));
    out.insert(
        "height".to_string(),
        JsonValue::String(sheet.height_band.as_key().to_string()),
    );
    out.insert("centimeters".to_string(), JsonValue::from(sheet.height_cm));
    out.insert(
        "weight".to_string(),
        JsonValue::String(sheet.weight_band.as_key().to_string()),
    );
    out.insert("kilograms".to_string(), JsonValue::from(sheet.weight_kg));
    out.insert(
        "profession".to_string(),
        JsonValue::String(sheet.profession.clone()),
    );
    out.insert(
        "short_description".to_string(),
        JsonValue::String(sheet.short_description.clone()),
    );
    out.insert(
        "long_description".to_string(),
        JsonValue::String(sheet.long_description.clone()),
    );
    out.insert(
        "clothes".to_string(),
        JsonValue::String(sheet.clothes.clone()),
    );
    out.insert(
        "pockets".to_string(),
        JsonValue::String(sheet.pockets.clone()),
    );
    out.insert(
        "weapons".to_string(),
        JsonValue::String(sheet.weapons.clone()),
    );
    JsonValue::Object(out)
}

pub fn render_json_selected(sheet: &CharacterSheet, fields: &FieldSelection) -> JsonValue {
    let full = render_json(sheet);
    let JsonValue::Object(full) = full else {
        return JsonValue::Object(JsonMap::new());
    };
    let mut out = JsonMap::new();
    for (key, value) in full {
        if is_selected(fields, &key) {
            out.insert(key, value);
        }
    }
    JsonValue::Object(out)
}

fn is_selected(fields: &FieldSelection, key: &str) -> bool {
    match key {
        "name_and_surname" => fields.name,
        "ethnicity" => fields.ethnicity,
        "sex" => fields.sex,
        "age" | "years" => fields.age,
        "height" | "centimeters" => fields.height,
        "weight" | "kilograms" => fields.weight,
        "profession" => fields.profession,
        "short_description" => fields.short_description,
        "long_description" => fields.long_description,
        "clothes" => fields.clothes,
        "pockets" => fields.pockets,
        "weapons" => fields.weapons,
        _ => false,
    }
}

fn selected_pairs(sheet: &CharacterSheet, fields: &FieldSelection) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if fields.name {
        out.push(("name_and_surname", sheet.name_and_surname()));
    }
    if fields.ethnicity {
        out.push(("ethnicity", sheet.ethnicity.as_key().to_string()));
    }
    if fields.sex {
        out.push(("sex", sheet.sex.as_key().to_string()));
    }
    if fields.age {
        out.push(("age", sheet.age_band.as_key().to_string()));
        out.push(("years", sheet.age_years.to_string()));
    }
    if fields.height {
        out.push(("height", sheet.height_band.as_key().to_string()));
        out.push(("centimeters", sheet.height_cm.to_string()));
    }
    if fields.weight {
        out.push(("weight", sheet.weight_band.as_key().to_string()));
        out.push(("kilograms", sheet.weight_kg.to_string()));
    }
    if fields.profession {
        out.push(("profession", sheet.profession.clone()));
    }
    if fields.short_description {
        out.push(("short_description", sheet.short_description.clone()));
    }
    if fields.long_description {
        out.push(("long_description", sheet.long_description.clone()));
    }
    if fields.clothes {
        out.push(("clothes", sheet.clothes.clone()));
    }
    if fields.pockets {
        out.push(("pockets", sheet.pockets.clone()));
    }
    if fields.weapons {
        out.push(("weapons", sheet.weapons.clone()));
    }
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let width = LABEL_WIDTH;
    let _ = writeln!(out, "{label:<width$}{value}");
}
