use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::warn;

/// Returned for every key the loaded table does not contain.
pub const PLACEHOLDER: &str = "Translation not found!";

/// One language's key to display-string table, loaded once at startup and
/// passed to whatever needs display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translator {
    entries: BTreeMap<String, String>,
}

impl Translator {
    /// Load `file_name` from `languages_dir`. A missing or unreadable file
    /// produces an empty table: every lookup then returns the placeholder,
    /// and no error escapes to the caller.
    pub fn load(languages_dir: &Path, file_name: &str) -> Self {
        let path = languages_dir.join(file_name);
        match fs::read_to_string(&path) {
            Ok(contents) => Self {
                entries: parse_language_file(&contents),
            },
            Err(e) => {
                warn!(
                    "failed to read language file {}: {e}; all lookups will return the placeholder",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Exact-match lookup; unmatched keys yield [`PLACEHOLDER`].
    pub fn translate(&self, key: &str) -> &str {
        self.entries.get(key).map_or(PLACEHOLDER, String::as_str)
    }

    /// Translate each key and join the results into one phrase.
    pub fn translate_phrase<'a, I>(&self, keys: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter()
            .map(|key| self.translate(key))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Language files are `key = value` lines, the same line shape the character
/// codec writes, so a table serialized in this form round-trips through
/// [`Translator::load`].
fn parse_language_file(contents: &str) -> BTreeMap<String, String> {
    contents
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(" = ")?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
