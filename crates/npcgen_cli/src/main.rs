use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use npcgen_core::band::{AgeBand, HeightBand, WeightBand};
use npcgen_core::core_api::{
    CharacterSheet, CoreError, Generator, RandomizeFlags, default_save_path, load_from_file,
    save_to_file,
};
use npcgen_core::ethnicity::Ethnicity;
use npcgen_core::layout::DataDirs;
use npcgen_core::lexicon::Lexicon;
use npcgen_core::sex::Sex;
use npcgen_render::{
    FieldSelection, render_json, render_json_selected, render_text, render_text_selected,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum EthnicityArg {
    White,
    Black,
    Japanese,
    Chinese,
    Latino,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SexArg {
    Male,
    Female,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AgeBandArg {
    Young,
    Adult,
    Old,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HeightBandArg {
    Short,
    Average,
    Tall,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum WeightBandArg {
    Thin,
    Normal,
    Fat,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Existing character file to load instead of generating a new character
    #[arg(value_name = "CHARACTER.txt")]
    path: Option<PathBuf>,
    /// Root directory holding config_files/, languages/ and characters/
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,
    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,
    /// Pin the ethnicity instead of randomizing it
    #[arg(long = "set-ethnicity", value_enum)]
    set_ethnicity: Option<EthnicityArg>,
    #[arg(long = "set-sex", value_enum)]
    set_sex: Option<SexArg>,
    #[arg(long = "set-age-band", value_enum)]
    set_age_band: Option<AgeBandArg>,
    #[arg(long = "set-height-band", value_enum)]
    set_height_band: Option<HeightBandArg>,
    #[arg(long = "set-weight-band", value_enum)]
    set_weight_band: Option<WeightBandArg>,
    #[arg(long = "set-profession")]
    set_profession: Option<String>,
    /// Skip the weapon roll
    #[arg(long)]
    unarmed: bool,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    ethnicity: bool,
    #[arg(long)]
    sex: bool,
    #[arg(long)]
    age: bool,
    #[arg(long)]
    height: bool,
    #[arg(long)]
    weight: bool,
    #[arg(long)]
    profession: bool,
    #[arg(long = "short-description")]
    short_description: bool,
    #[arg(long = "long-description")]
    long_description: bool,
    #[arg(long)]
    clothes: bool,
    #[arg(long)]
    pockets: bool,
    #[arg(long)]
    weapons: bool,
    #[arg(long)]
    json: bool,
    /// Save the character under characters/<name>.txt
    #[arg(long)]
    save: bool,
    /// Save the character to an explicit path
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CoreError> {
    let dirs = DataDirs::from_root(&cli.data_dir);

    let sheet = match &cli.path {
        Some(path) => load_from_file(path)?,
        None => generate(cli, &dirs),
    };

    if cli.save {
        let characters_dir = dirs.ensure_characters_dir()?;
        let path = default_save_path(&characters_dir, &sheet);
        save_to_file(&sheet, &path)?;
        eprintln!("saved {}", path.display());
    }
    if let Some(path) = &cli.output {
        save_to_file(&sheet, path)?;
        eprintln!("saved {}", path.display());
    }

    let fields = field_selection(cli);
    let output = match (cli.json, fields.is_any_selected()) {
        (true, true) => pretty_json(&render_json_selected(&sheet, &fields)),
        (true, false) => pretty_json(&render_json(&sheet)),
        (false, true) => render_text_selected(&sheet, &fields),
        (false, false) => render_text(&sheet),
    };
    print!("{output}");
    Ok(())
}

/// Build a fresh character: pinned traits are set directly and excluded from
/// the randomize pass; pinned bands still get their exact value rolled, and
/// the weight is re-resolved whenever a pin could have left it stale.
fn generate(cli: &Cli, dirs: &DataDirs) -> CharacterSheet {
    let lexicon = Lexicon::load(&dirs.config_files());
    let mut generator = match cli.seed {
        Some(seed) => Generator::with_seed(lexicon, seed),
        None => Generator::new(lexicon),
    };

    let mut sheet = CharacterSheet::default();
    let mut flags = RandomizeFlags::default();

    if let Some(arg) = cli.set_ethnicity {
        sheet.ethnicity = to_ethnicity(arg);
        flags.ethnicity = false;
    }
    if let Some(arg) = cli.set_sex {
        sheet.sex = to_sex(arg);
        flags.sex = false;
    }
    if let Some(arg) = cli.set_age_band {
        sheet.age_band = to_age_band(arg);
        flags.age = false;
    }
    if let Some(arg) = cli.set_height_band {
        sheet.height_band = to_height_band(arg);
        flags.height = false;
    }
    if let Some(arg) = cli.set_weight_band {
        sheet.weight_band = to_weight_band(arg);
        flags.weight = false;
    }
    if let Some(profession) = &cli.set_profession {
        sheet.profession = profession.clone();
        flags.profession = false;
    }
    if cli.unarmed {
        flags.armed = false;
    }

    generator.randomize(&mut sheet, &flags);

    if !flags.age {
        sheet.age_years = generator.roll_age_years(sheet.age_band);
    }
    if !flags.height {
        sheet.height_cm = generator.roll_height_cm(sheet.height_band);
    }
    if !flags.height || !flags.weight {
        sheet.weight_kg = generator.roll_weight_kg(sheet.weight_band, sheet.height_cm);
    }

    sheet
}

fn field_selection(cli: &Cli) -> FieldSelection {
    FieldSelection {
        name: cli.name,
        ethnicity: cli.ethnicity,
        sex: cli.sex,
        age: cli.age,
        height: cli.height,
        weight: cli.weight,
        profession: cli.profession,
        short_description: cli.short_description,
        long_description: cli.long_description,
        clothes: cli.clothes,
        pockets: cli.pockets,
        weapons: cli.weapons,
    }
}

fn pretty_json(value: &serde_json::Value) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(text) => format!("{text}\n"),
        Err(_) => "{}\n".to_string(),
    }
}

fn to_ethnicity(arg: EthnicityArg) -> Ethnicity {
    match arg {
        EthnicityArg::White => Ethnicity::White,
        EthnicityArg::Black => Ethnicity::Black,
        EthnicityArg::Japanese => Ethnicity::Japanese,
        EthnicityArg::Chinese => Ethnicity::Chinese,
        EthnicityArg::Latino => Ethnicity::Latino,
    }
}

fn to_sex(arg: SexArg) -> Sex {
    match arg {
        SexArg::Male => Sex::Male,
        SexArg::Female => Sex::Female,
    }
}

fn to_age_band(arg: AgeBandArg) -> AgeBand {
    match arg {
        AgeBandArg::Young => AgeBand::Young,
        AgeBandArg::Adult => AgeBand::Adult,
        AgeBandArg::Old => AgeBand::Old,
    }
}

fn to_height_band(arg: HeightBandArg) -> HeightBand {
    match arg {
        HeightBandArg::Short => HeightBand::Short,
        HeightBandArg::Average => HeightBand::Average,
        HeightBandArg::Tall => HeightBand::Tall,
    }
}

fn to_weight_band(arg: WeightBandArg) -> WeightBand {
    match arg {
        WeightBandArg::Thin => WeightBand::Thin,
        WeightBandArg::Normal => WeightBand::Normal,
        WeightBandArg::Fat => WeightBand::Fat,
    }
}
