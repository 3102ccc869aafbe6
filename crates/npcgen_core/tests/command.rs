use std::path::PathBuf;

use npcgen_core::band::{AgeBand, HeightBand, WeightBand};
use npcgen_core::command::{Command, apply};
use npcgen_core::core_api::{CharacterSheet, Generator, RandomizeFlags};
use npcgen_core::ethnicity::Ethnicity;
use npcgen_core::lexicon::Lexicon;
use npcgen_core::sex::Sex;

fn fixture_generator(seed: u64) -> Generator {
    let lexicon =
        Lexicon::load(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/config_files"));
    Generator::with_seed(lexicon, seed)
}

#[test]
fn set_ethnicity_only_touches_ethnicity() {
    let mut generator = fixture_generator(1);
    let mut sheet = CharacterSheet::default();
    sheet.name = "Wei".to_string();

    apply(Command::SetEthnicity(Ethnicity::Japanese), &mut sheet, &mut generator);

    assert_eq!(sheet.ethnicity, Ethnicity::Japanese);
    assert_eq!(sheet.name, "Wei");
}

#[test]
fn reroll_name_follows_the_current_ethnicity_and_sex() {
    let mut generator = fixture_generator(2);
    let mut sheet = CharacterSheet::default();

    apply(Command::SetEthnicity(Ethnicity::Japanese), &mut sheet, &mut generator);
    apply(Command::SetSex(Sex::Female), &mut sheet, &mut generator);
    apply(Command::RerollBothNames, &mut sheet, &mut generator);

    assert_eq!(sheet.name, "Yuki");
    assert_eq!(sheet.surname, "Sato");
}

#[test]
fn setting_a_band_rerolls_its_numeric_value() {
    let mut generator = fixture_generator(3);
    let mut sheet = CharacterSheet::default();

    apply(Command::SetAgeBand(AgeBand::Old), &mut sheet, &mut generator);
    assert_eq!(sheet.age_band, AgeBand::Old);
    assert!(sheet.age_years > 30, "old age {} too low", sheet.age_years);

    apply(Command::SetHeightBand(HeightBand::Tall), &mut sheet, &mut generator);
    assert_eq!(sheet.height_band, HeightBand::Tall);
    assert!(sheet.height_cm > 150, "tall height {} too low", sheet.height_cm);

    apply(Command::SetWeightBand(WeightBand::Thin), &mut sheet, &mut generator);
    assert_eq!(sheet.weight_band, WeightBand::Thin);
    // thin mean is height minus 110
    let expected = sheet.height_cm - 110;
    assert!(
        (sheet.weight_kg - expected).abs() < 30,
        "thin weight {} far from {expected}",
        sheet.weight_kg
    );
}

#[test]
fn set_weight_band_reads_the_sheet_height() {
    let mut generator = fixture_generator(4);
    let mut sheet = CharacterSheet {
        height_cm: 200,
        ..CharacterSheet::default()
    };

    apply(Command::SetWeightBand(WeightBand::Fat), &mut sheet, &mut generator);
    // fat mean is height minus 80
    assert!(
        (sheet.weight_kg - 120).abs() < 30,
        "fat weight {} far from 120",
        sheet.weight_kg
    );
}

#[test]
fn text_setters_store_verbatim() {
    let mut generator = fixture_generator(5);
    let mut sheet = CharacterSheet::default();

    apply(
        Command::SetLongDescription("Walks with a limp.".to_string()),
        &mut sheet,
        &mut generator,
    );
    apply(Command::SetPockets("lint".to_string()), &mut sheet, &mut generator);
    apply(Command::SetWeapons(String::new()), &mut sheet, &mut generator);

    assert_eq!(sheet.long_description, "Walks with a limp.");
    assert_eq!(sheet.pockets, "lint");
    assert_eq!(sheet.weapons, "");
}

#[test]
fn randomize_all_respects_the_flags() {
    let mut generator = fixture_generator(6);
    let mut sheet = CharacterSheet {
        age_band: AgeBand::Young,
        age_years: 19,
        ..CharacterSheet::default()
    };

    let mut flags = RandomizeFlags::none();
    flags.height = true;
    flags.weight = true;
    apply(Command::RandomizeAll(flags), &mut sheet, &mut generator);

    assert_eq!(sheet.age_band, AgeBand::Young);
    assert_eq!(sheet.age_years, 19);
    assert!(sheet.height_cm > 0);
    assert!(sheet.weight_kg > 0);
}

#[test]
fn reroll_weight_uses_the_current_height() {
    let mut generator = fixture_generator(7);
    let mut sheet = CharacterSheet {
        height_band: HeightBand::Tall,
        height_cm: 195,
        weight_band: WeightBand::Normal,
        ..CharacterSheet::default()
    };

    apply(Command::RerollWeightKg, &mut sheet, &mut generator);
    // normal mean is height minus 95
    assert!(
        (sheet.weight_kg - 100).abs() < 30,
        "weight {} far from 100",
        sheet.weight_kg
    );
}
