//! Read-only name, surname, and category lists used as sampling populations.
//!
//! File encodings are line-oriented:
//! - `names.txt` holds one line per ethnicity in [`Ethnicity::ALL`] order,
//!   each line of the form `male:John,Peter;female:Anna,Mary`.
//! - `surnames.txt` holds a single line of the form
//!   `white:Smith,Jones;black:Okafor;...` keyed by ethnicity.
//! - category lists (`professions.txt`, `pistols.txt`, `rifles.txt`) hold a
//!   single comma-separated line, sorted alphabetically after load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::warn;

use crate::core_api::{CoreError, CoreErrorCode};
use crate::ethnicity::Ethnicity;
use crate::sex::Sex;

pub const NAMES_FILE: &str = "names.txt";
pub const SURNAMES_FILE: &str = "surnames.txt";
pub const PROFESSIONS_FILE: &str = "professions.txt";
pub const PISTOLS_FILE: &str = "pistols.txt";
pub const RIFLES_FILE: &str = "rifles.txt";

type NameTable = BTreeMap<Ethnicity, BTreeMap<Sex, Vec<String>>>;
type SurnameTable = BTreeMap<Ethnicity, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    names: NameTable,
    surnames: SurnameTable,
    professions: Vec<String>,
    pistols: Vec<String>,
    rifles: Vec<String>,
}

impl Lexicon {
    /// Load every list from `config_dir`. A missing or unreadable file is
    /// logged and replaced by an empty structure; the session continues with
    /// degraded data rather than aborting.
    pub fn load(config_dir: &Path) -> Self {
        let names = load_names(&config_dir.join(NAMES_FILE)).unwrap_or_else(|e| {
            warn!("{e}; continuing with empty name lists");
            NameTable::new()
        });
        let surnames = load_surnames(&config_dir.join(SURNAMES_FILE)).unwrap_or_else(|e| {
            warn!("{e}; continuing with empty surname lists");
            SurnameTable::new()
        });
        let professions = load_category_list(&config_dir.join(PROFESSIONS_FILE))
            .unwrap_or_else(|e| {
                warn!("{e}; continuing with no professions");
                Vec::new()
            });
        let pistols = load_category_list(&config_dir.join(PISTOLS_FILE)).unwrap_or_else(|e| {
            warn!("{e}; continuing with no pistols");
            Vec::new()
        });
        let rifles = load_category_list(&config_dir.join(RIFLES_FILE)).unwrap_or_else(|e| {
            warn!("{e}; continuing with no rifles");
            Vec::new()
        });

        Self {
            names,
            surnames,
            professions,
            pistols,
            rifles,
        }
    }

    pub fn first_names(&self, ethnicity: Ethnicity, sex: Sex) -> &[String] {
        self.names
            .get(&ethnicity)
            .and_then(|by_sex| by_sex.get(&sex))
            .map_or(&[], Vec::as_slice)
    }

    pub fn surnames(&self, ethnicity: Ethnicity) -> &[String] {
        self.surnames.get(&ethnicity).map_or(&[], Vec::as_slice)
    }

    pub fn professions(&self) -> &[String] {
        &self.professions
    }

    pub fn pistols(&self) -> &[String] {
        &self.pistols
    }

    pub fn rifles(&self) -> &[String] {
        &self.rifles
    }
}

/// Parse the per-ethnicity name table. Every ethnicity and sex is guaranteed
/// an entry afterwards; data missing from the file becomes an empty list.
pub fn load_names(path: &Path) -> Result<NameTable, CoreError> {
    let contents = read_file(path)?;
    let mut names = NameTable::new();

    for (ethnicity, line) in Ethnicity::ALL.iter().zip(contents.lines()) {
        let mut by_sex: BTreeMap<Sex, Vec<String>> = BTreeMap::new();
        for part in line.split(';') {
            let Some((sex_key, list)) = part.split_once(':') else {
                continue;
            };
            let Some(sex) = Sex::from_key(sex_key.trim()) else {
                warn!(
                    "unknown sex key {:?} in {} line for {ethnicity}",
                    sex_key.trim(),
                    path.display()
                );
                continue;
            };
            by_sex.insert(sex, split_list(list));
        }
        for sex in Sex::ALL {
            by_sex.entry(sex).or_default();
        }
        names.insert(*ethnicity, by_sex);
    }

    for ethnicity in Ethnicity::ALL {
        names
            .entry(ethnicity)
            .or_insert_with(|| Sex::ALL.iter().map(|sex| (*sex, Vec::new())).collect());
    }

    Ok(names)
}

/// Parse the single-line surname table keyed by ethnicity.
pub fn load_surnames(path: &Path) -> Result<SurnameTable, CoreError> {
    let contents = read_file(path)?;
    let mut surnames = SurnameTable::new();

    let line = contents.lines().next().unwrap_or("");
    for part in line.split(';') {
        let Some((ethnicity_key, list)) = part.split_once(':') else {
            continue;
        };
        let Some(ethnicity) = Ethnicity::from_key(ethnicity_key.trim()) else {
            warn!(
                "unknown ethnicity key {:?} in {}",
                ethnicity_key.trim(),
                path.display()
            );
            continue;
        };
        surnames.insert(ethnicity, split_list(list));
    }

    for ethnicity in Ethnicity::ALL {
        surnames.entry(ethnicity).or_default();
    }

    Ok(surnames)
}

/// Load one flat category list, sorted alphabetically.
pub fn load_category_list(path: &Path) -> Result<Vec<String>, CoreError> {
    let contents = read_file(path)?;
    let mut items = split_list(contents.lines().next().unwrap_or(""));
    items.sort();
    Ok(items)
}

fn read_file(path: &Path) -> Result<String, CoreError> {
    fs::read_to_string(path).map_err(|e| {
        CoreError::new(
            CoreErrorCode::MissingFile,
            format!("failed to read {}: {e}", path.display()),
        )
    })
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
