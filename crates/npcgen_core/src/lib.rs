pub mod band;
pub mod command;
pub mod core_api;
pub mod ethnicity;
pub mod layout;
pub mod lexicon;
pub mod sex;
pub mod translate;
