mod codec;
mod error;
mod generator;
mod types;

pub use codec::{
    FIELD_COUNT, FIELD_KEYS, default_save_path, deserialize, load_from_file, save_to_file,
    serialize,
};
pub use error::{CoreError, CoreErrorCode};
pub use generator::Generator;
pub use types::{CharacterSheet, RandomizeFlags};
