use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::band::{AgeBand, GaussianParams, HeightBand, WeightBand};
use crate::ethnicity::Ethnicity;
use crate::lexicon::Lexicon;
use crate::sex::Sex;

use super::types::{CharacterSheet, RandomizeFlags};

/// Draws trait values from the lexicon and the per-band distributions.
/// Owns its RNG so a seeded generator replays the same character.
#[derive(Debug, Clone)]
pub struct Generator {
    lexicon: Lexicon,
    rng: ChaCha8Rng,
}

impl Generator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(lexicon: Lexicon, seed: u64) -> Self {
        Self {
            lexicon,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn roll_ethnicity(&mut self) -> Ethnicity {
        Ethnicity::ALL[self.rng.gen_range(0..Ethnicity::ALL.len())]
    }

    pub fn roll_sex(&mut self) -> Sex {
        Sex::ALL[self.rng.gen_range(0..Sex::ALL.len())]
    }

    pub fn roll_age_band(&mut self) -> AgeBand {
        AgeBand::ALL[self.rng.gen_range(0..AgeBand::ALL.len())]
    }

    /// Height bands are drawn from the weighted population, not uniformly
    /// over the three bands.
    pub fn roll_height_band(&mut self) -> HeightBand {
        HeightBand::POPULATION[self.rng.gen_range(0..HeightBand::POPULATION.len())]
    }

    pub fn roll_weight_band(&mut self) -> WeightBand {
        WeightBand::POPULATION[self.rng.gen_range(0..WeightBand::POPULATION.len())]
    }

    pub fn roll_age_years(&mut self, band: AgeBand) -> i32 {
        sample_gaussian(band.gaussian(), &mut self.rng)
    }

    pub fn roll_height_cm(&mut self, band: HeightBand) -> i32 {
        sample_gaussian(band.gaussian(), &mut self.rng)
    }

    /// The weight mean is height-relative; callers must pass the already
    /// resolved height, never a stale one.
    pub fn roll_weight_kg(&mut self, band: WeightBand, height_cm: i32) -> i32 {
        sample_gaussian(band.gaussian(height_cm), &mut self.rng)
    }

    /// `None` when the lexicon has no names for this ethnicity and sex; the
    /// caller keeps whatever name it already had.
    pub fn roll_first_name(&mut self, ethnicity: Ethnicity, sex: Sex) -> Option<String> {
        self.lexicon
            .first_names(ethnicity, sex)
            .choose(&mut self.rng)
            .cloned()
    }

    pub fn roll_surname(&mut self, ethnicity: Ethnicity) -> Option<String> {
        self.lexicon.surnames(ethnicity).choose(&mut self.rng).cloned()
    }

    pub fn roll_profession(&mut self) -> Option<String> {
        self.lexicon.professions().choose(&mut self.rng).cloned()
    }

    /// One pistol and one rifle. Empty lists degrade to whichever half is
    /// available, or an empty string.
    pub fn roll_weapons(&mut self) -> String {
        let pistol = self.lexicon.pistols().choose(&mut self.rng).cloned();
        let rifle = self.lexicon.rifles().choose(&mut self.rng).cloned();
        match (pistol, rifle) {
            (Some(pistol), Some(rifle)) => format!("{pistol}, {rifle}"),
            (Some(weapon), None) | (None, Some(weapon)) => weapon,
            (None, None) => String::new(),
        }
    }

    /// Randomize every flagged category in dependency order: ethnicity, sex,
    /// age, height, weight (reads the height resolved just above), profession,
    /// weapons, then regenerate the name from the now-current ethnicity/sex.
    pub fn randomize(&mut self, sheet: &mut CharacterSheet, flags: &RandomizeFlags) {
        if flags.ethnicity {
            sheet.ethnicity = self.roll_ethnicity();
        }
        if flags.sex {
            sheet.sex = self.roll_sex();
        }
        if flags.age {
            sheet.age_band = self.roll_age_band();
            sheet.age_years = self.roll_age_years(sheet.age_band);
        }
        if flags.height {
            sheet.height_band = self.roll_height_band();
            sheet.height_cm = self.roll_height_cm(sheet.height_band);
        }
        if flags.weight {
            sheet.weight_band = self.roll_weight_band();
            sheet.weight_kg = self.roll_weight_kg(sheet.weight_band, sheet.height_cm);
        }
        if flags.profession
            && let Some(profession) = self.roll_profession()
        {
            sheet.profession = profession;
        }
        if flags.armed {
            sheet.weapons = self.roll_weapons();
        }
        if let Some(name) = self.roll_first_name(sheet.ethnicity, sheet.sex) {
            sheet.name = name;
        }
        if let Some(surname) = self.roll_surname(sheet.ethnicity) {
            sheet.surname = surname;
        }
    }
}

/// Truncated to an integer, deliberately unclamped: extreme draws can produce
/// implausible values, matching the documented sampling model.
fn sample_gaussian<R: Rng>(params: GaussianParams, rng: &mut R) -> i32 {
    let normal =
        Normal::new(params.mean, params.std_dev).expect("band std deviations are positive");
    normal.sample(rng) as i32
}
