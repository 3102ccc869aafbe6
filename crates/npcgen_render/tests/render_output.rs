use npcgen_core::band::{AgeBand, HeightBand, WeightBand};
use npcgen_core::core_api::CharacterSheet;
use npcgen_core::ethnicity::Ethnicity;
use npcgen_core::sex::Sex;
use npcgen_render::{FieldSelection, render_json, render_json_selected, render_text, render_text_selected};
use serde_json::json;

fn sample_sheet() -> CharacterSheet {
    CharacterSheet {
        name: "Diego".to_string(),
        surname: "Garcia".to_string(),
        ethnicity: Ethnicity::Latino,
        sex: Sex::Male,
        age_band: AgeBand::Adult,
        age_years: 37,
        height_band: HeightBand::Average,
        height_cm: 178,
        weight_band: WeightBand::Normal,
        weight_kg: 82,
        profession: "baker".to_string(),
        short_description: "broad-shouldered".to_string(),
        long_description: String::new(),
        clothes: "apron over work shirt".to_string(),
        pockets: String::new(),
        weapons: "Glock 17, AK-47".to_string(),
        portrait: None,
    }
}

#[test]
fn text_rows_are_label_padded() {
    let text = render_text(&sample_sheet());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Name         Diego Garcia");
    assert_eq!(lines[1], "Ethnicity    latino");
    assert_eq!(lines[3], "Age          adult (37 years)");
    assert_eq!(lines[4], "Height       average (178 cm)");
    assert_eq!(lines[5], "Weight       normal (82 kg)");
}

#[test]
fn text_omits_empty_optional_fields() {
    let text = render_text(&sample_sheet());

    assert!(text.contains("Description  broad-shouldered"));
    assert!(text.contains("Clothes      apron over work shirt"));
    assert!(text.contains("Weapons      Glock 17, AK-47"));
    assert!(!text.contains("Details"));
    assert!(!text.contains("Pockets"));
}

#[test]
fn selected_text_emits_key_value_lines() {
    let fields = FieldSelection {
        name: true,
        height: true,
        ..FieldSelection::default()
    };
    let text = render_text_selected(&sample_sheet(), &fields);

    assert_eq!(
        text,
        "name_and_surname = Diego Garcia\nheight = average\ncentimeters = 178\n"
    );
}

#[test]
fn json_carries_every_field_in_file_order() {
    let value = render_json(&sample_sheet());
    let object = value.as_object().expect("expected a json object");

    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
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
        ]
    );
    assert_eq!(object["name_and_surname"], json!("Diego Garcia"));
    assert_eq!(object["years"], json!(37));
    assert_eq!(object["kilograms"], json!(82));
    assert_eq!(object["long_description"], json!(""));
}

#[test]
fn selected_json_keeps_only_requested_fields() {
    let fields = FieldSelection {
        age: true,
        weight: true,
        weapons: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&sample_sheet(), &fields);

    assert_eq!(
        value,
        json!({
            "age": "adult",
            "years": 37,
            "weight": "normal",
            "kilograms": 82,
            "weapons": "Glock 17, AK-47",
        })
    );
}

#[test]
fn empty_selection_reports_nothing_selected() {
    assert!(!FieldSelection::default().is_any_selected());
    assert!(
        FieldSelection {
            pockets: true,
            ..FieldSelection::default()
        }
        .is_any_selected()
    );
    assert_eq!(
        render_text_selected(&sample_sheet(), &FieldSelection::default()),
        ""
    );
}
