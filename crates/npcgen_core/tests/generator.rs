use std::collections::BTreeMap;
use std::path::PathBuf;

use npcgen_core::band::{AgeBand, HeightBand, WeightBand};
use npcgen_core::core_api::{CharacterSheet, Generator, RandomizeFlags};
use npcgen_core::ethnicity::Ethnicity;
use npcgen_core::lexicon::Lexicon;
use npcgen_core::sex::Sex;

fn fixture_lexicon() -> Lexicon {
    Lexicon::load(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/config_files"))
}

#[test]
fn names_come_from_the_lexicon() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 7);

    // the fixture holds a single entry per list, so every draw is forced
    assert_eq!(
        generator.roll_first_name(Ethnicity::White, Sex::Male),
        Some("John".to_string())
    );
    assert_eq!(
        generator.roll_surname(Ethnicity::White),
        Some("Smith".to_string())
    );
    assert_eq!(generator.roll_weapons(), "Glock 17, AK-47");
}

#[test]
fn empty_lexicon_yields_no_names() {
    let mut generator = Generator::with_seed(Lexicon::load(&PathBuf::from("/no/such/dir")), 7);

    assert_eq!(generator.roll_first_name(Ethnicity::Black, Sex::Female), None);
    assert_eq!(generator.roll_surname(Ethnicity::Black), None);
    assert_eq!(generator.roll_profession(), None);
    assert_eq!(generator.roll_weapons(), "");
}

#[test]
fn seeded_generators_replay_the_same_character() {
    let mut first = Generator::with_seed(fixture_lexicon(), 42);
    let mut second = Generator::with_seed(fixture_lexicon(), 42);

    let mut sheet_a = CharacterSheet::default();
    let mut sheet_b = CharacterSheet::default();
    first.randomize(&mut sheet_a, &RandomizeFlags::default());
    second.randomize(&mut sheet_b, &RandomizeFlags::default());

    assert_eq!(sheet_a, sheet_b);
}

#[test]
fn age_samples_cluster_around_the_band_mean() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 1);
    let cases = [
        (AgeBand::Young, 20.0),
        (AgeBand::Adult, 35.0),
        (AgeBand::Old, 55.0),
    ];

    for (band, expected_mean) in cases {
        let total: i64 = (0..10_000)
            .map(|_| i64::from(generator.roll_age_years(band)))
            .sum();
        let mean = total as f64 / 10_000.0;
        assert!(
            (mean - expected_mean).abs() < 1.0,
            "{band} mean {mean} too far from {expected_mean}"
        );
    }
}

#[test]
fn height_samples_cluster_around_the_band_mean() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 2);
    let cases = [
        (HeightBand::Short, 150.0),
        (HeightBand::Average, 175.0),
        (HeightBand::Tall, 190.0),
    ];

    for (band, expected_mean) in cases {
        let total: i64 = (0..10_000)
            .map(|_| i64::from(generator.roll_height_cm(band)))
            .sum();
        let mean = total as f64 / 10_000.0;
        assert!(
            (mean - expected_mean).abs() < 1.0,
            "{band} mean {mean} too far from {expected_mean}"
        );
    }
}

#[test]
fn weight_mean_tracks_height() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 3);
    let cases = [
        (WeightBand::Thin, 180, 70.0),
        (WeightBand::Normal, 180, 85.0),
        (WeightBand::Fat, 180, 100.0),
        (WeightBand::Normal, 160, 65.0),
    ];

    for (band, height_cm, expected_mean) in cases {
        let total: i64 = (0..10_000)
            .map(|_| i64::from(generator.roll_weight_kg(band, height_cm)))
            .sum();
        let mean = total as f64 / 10_000.0;
        assert!(
            (mean - expected_mean).abs() < 1.0,
            "{band} at {height_cm}cm: mean {mean} too far from {expected_mean}"
        );
    }
}

#[test]
fn height_band_draws_follow_the_weighted_population() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 4);
    let mut counts: BTreeMap<HeightBand, u32> = BTreeMap::new();
    for _ in 0..70_000 {
        *counts.entry(generator.roll_height_band()).or_default() += 1;
    }

    // expected 2:4:1 out of 7, with a generous band for sampling noise
    let short = f64::from(counts[&HeightBand::Short]) / 70_000.0;
    let average = f64::from(counts[&HeightBand::Average]) / 70_000.0;
    let tall = f64::from(counts[&HeightBand::Tall]) / 70_000.0;
    assert!((short - 2.0 / 7.0).abs() < 0.02, "short ratio {short}");
    assert!((average - 4.0 / 7.0).abs() < 0.02, "average ratio {average}");
    assert!((tall - 1.0 / 7.0).abs() < 0.02, "tall ratio {tall}");
}

#[test]
fn weight_band_draws_follow_the_weighted_population() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 5);
    let mut counts: BTreeMap<WeightBand, u32> = BTreeMap::new();
    for _ in 0..80_000 {
        *counts.entry(generator.roll_weight_band()).or_default() += 1;
    }

    let thin = f64::from(counts[&WeightBand::Thin]) / 80_000.0;
    let normal = f64::from(counts[&WeightBand::Normal]) / 80_000.0;
    let fat = f64::from(counts[&WeightBand::Fat]) / 80_000.0;
    assert!((thin - 0.5).abs() < 0.02, "thin ratio {thin}");
    assert!((normal - 0.375).abs() < 0.02, "normal ratio {normal}");
    assert!((fat - 0.125).abs() < 0.02, "fat ratio {fat}");
}

#[test]
fn randomize_fills_every_flagged_field() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 6);
    let mut sheet = CharacterSheet::default();
    generator.randomize(&mut sheet, &RandomizeFlags::default());

    assert!(!sheet.name.is_empty());
    assert!(!sheet.surname.is_empty());
    assert!(sheet.age_years > 0);
    assert!(sheet.height_cm > 0);
    assert!(sheet.weight_kg > 0);
    assert!(["baker", "smith", "teacher"].contains(&sheet.profession.as_str()));
    assert_eq!(sheet.weapons, "Glock 17, AK-47");
}

#[test]
fn randomize_leaves_unflagged_fields_alone() {
    let mut generator = Generator::with_seed(fixture_lexicon(), 8);
    let mut sheet = CharacterSheet {
        ethnicity: Ethnicity::Chinese,
        sex: Sex::Female,
        age_band: AgeBand::Old,
        age_years: 61,
        profession: "cartographer".to_string(),
        weapons: "none".to_string(),
        ..CharacterSheet::default()
    };

    let mut flags = RandomizeFlags::none();
    flags.height = true;
    flags.weight = true;
    generator.randomize(&mut sheet, &flags);

    assert_eq!(sheet.ethnicity, Ethnicity::Chinese);
    assert_eq!(sheet.sex, Sex::Female);
    assert_eq!(sheet.age_years, 61);
    assert_eq!(sheet.profession, "cartographer");
    assert_eq!(sheet.weapons, "none");
    assert!(sheet.height_cm > 0);
    assert!(sheet.weight_kg > 0);
    // names regenerate against the pinned ethnicity and sex
    assert_eq!(sheet.name, "Mei");
    assert_eq!(sheet.surname, "Wang");
}

#[test]
fn weight_is_rolled_against_the_fresh_height() {
    // weight means sit ~100kg under height, so a weight drawn against a
    // default (zero) height would come out far below zero
    let mut generator = Generator::with_seed(fixture_lexicon(), 9);
    for _ in 0..100 {
        let mut sheet = CharacterSheet::default();
        generator.randomize(&mut sheet, &RandomizeFlags::default());
        assert!(
            sheet.weight_kg > sheet.height_cm - 145,
            "weight {} implausibly low for height {}",
            sheet.weight_kg,
            sheet.height_cm
        );
    }
}
