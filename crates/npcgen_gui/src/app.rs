use std::path::Path;

use npcgen_core::band::{AgeBand, HeightBand, WeightBand};
use npcgen_core::command::{self, Command};
use npcgen_core::core_api::{
    CharacterSheet, Generator, RandomizeFlags, default_save_path, load_from_file, save_to_file,
};
use npcgen_core::ethnicity::Ethnicity;
use npcgen_core::layout::DataDirs;
use npcgen_core::lexicon::Lexicon;
use npcgen_core::sex::Sex;
use npcgen_core::translate::Translator;

use crate::portrait::resolve_portrait;

/// The one window. All widget interactions are collected as [`Command`]s and
/// applied after the frame is laid out; the widgets themselves hold no logic.
pub struct NpcgenApp {
    dirs: DataDirs,
    translator: Translator,
    generator: Generator,
    sheet: CharacterSheet,
    flags: RandomizeFlags,
    short_desc_buffer: String,
    long_desc_buffer: String,
    clothes_buffer: String,
    pockets_buffer: String,
    weapons_buffer: String,
    portrait_buffer: String,
    file_name_buffer: String,
    status: String,
    show_quit_confirm: bool,
    allowed_to_close: bool,
}

impl NpcgenApp {
    pub fn new(data_root: &Path, language: &str, seed: Option<u64>) -> Self {
        let dirs = DataDirs::from_root(data_root);
        let translator = Translator::load(&dirs.languages(), language);
        let lexicon = Lexicon::load(&dirs.config_files());
        let mut generator = match seed {
            Some(seed) => Generator::with_seed(lexicon, seed),
            None => Generator::new(lexicon),
        };

        // a fresh session starts with a fully randomized character
        let mut sheet = CharacterSheet::default();
        generator.randomize(&mut sheet, &RandomizeFlags::default());

        let mut app = Self {
            dirs,
            translator,
            generator,
            sheet,
            flags: RandomizeFlags::default(),
            short_desc_buffer: String::new(),
            long_desc_buffer: String::new(),
            clothes_buffer: String::new(),
            pockets_buffer: String::new(),
            weapons_buffer: String::new(),
            portrait_buffer: String::new(),
            file_name_buffer: String::new(),
            status: String::new(),
            show_quit_confirm: false,
            allowed_to_close: false,
        };
        app.sync_buffers();
        app
    }

    pub fn window_title(&self) -> String {
        self.translator.translate("title").to_string()
    }

    fn sync_buffers(&mut self) {
        self.short_desc_buffer = self.sheet.short_description.clone();
        self.long_desc_buffer = self.sheet.long_description.clone();
        self.clothes_buffer = self.sheet.clothes.clone();
        self.pockets_buffer = self.sheet.pockets.clone();
        self.weapons_buffer = self.sheet.weapons.clone();
    }

    fn dispatch(&mut self, commands: Vec<Command>) {
        let mut resync = false;
        for cmd in commands {
            if matches!(cmd, Command::RandomizeAll(_)) {
                resync = true;
            }
            command::apply(cmd, &mut self.sheet, &mut self.generator);
        }
        if resync {
            self.sync_buffers();
        }
    }

    fn save_character(&mut self) {
        let result = self.dirs.ensure_characters_dir().and_then(|dir| {
            let path = if self.file_name_buffer.trim().is_empty() {
                default_save_path(&dir, &self.sheet)
            } else {
                dir.join(format!("{}.txt", self.file_name_buffer.trim()))
            };
            save_to_file(&self.sheet, &path).map(|()| path)
        });
        self.status = match result {
            Ok(path) => format!("{} {}", self.translator.translate("saved"), path.display()),
            Err(e) => e.to_string(),
        };
    }

    fn load_character(&mut self) {
        let path = self
            .dirs
            .characters()
            .join(format!("{}.txt", self.file_name_buffer.trim()));
        // a malformed file leaves the current sheet untouched
        match load_from_file(&path) {
            Ok(sheet) => {
                self.sheet = sheet;
                self.sync_buffers();
                self.status =
                    format!("{} {}", self.translator.translate("loaded"), path.display());
            }
            Err(e) => self.status = e.to_string(),
        }
    }
}

impl eframe::App for NpcgenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands: Vec<Command> = Vec::new();
        let mut save_clicked = false;
        let mut load_clicked = false;

        egui::TopBottomPanel::top("file_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.translator.translate("file"));
                ui.text_edit_singleline(&mut self.file_name_buffer);
                if ui.button(self.translator.translate("save")).clicked() {
                    save_clicked = true;
                }
                if ui.button(self.translator.translate("load")).clicked() {
                    load_clicked = true;
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("ethnicity"));
                    for ethnicity in Ethnicity::ALL {
                        let label = self.translator.translate(ethnicity.as_key());
                        if ui.radio(self.sheet.ethnicity == ethnicity, label).clicked() {
                            commands.push(Command::SetEthnicity(ethnicity));
                        }
                    }
                    ui.checkbox(&mut self.flags.ethnicity, "");
                });

                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("sex"));
                    for sex in Sex::ALL {
                        let label = self.translator.translate(sex.as_key());
                        if ui.radio(self.sheet.sex == sex, label).clicked() {
                            commands.push(Command::SetSex(sex));
                        }
                    }
                    ui.checkbox(&mut self.flags.sex, "");
                });

                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("age"));
                    for band in AgeBand::ALL {
                        let label = self.translator.translate(band.as_key());
                        if ui.radio(self.sheet.age_band == band, label).clicked() {
                            commands.push(Command::SetAgeBand(band));
                        }
                    }
                    ui.label(format!(
                        "{} {}",
                        self.sheet.age_years,
                        self.translator.translate("years")
                    ));
                    ui.checkbox(&mut self.flags.age, "");
                });

                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("height"));
                    for band in HeightBand::ALL {
                        let label = self.translator.translate(band.as_key());
                        if ui.radio(self.sheet.height_band == band, label).clicked() {
                            commands.push(Command::SetHeightBand(band));
                        }
                    }
                    ui.label(format!(
                        "{} {}",
                        self.sheet.height_cm,
                        self.translator.translate("centimeters")
                    ));
                    ui.checkbox(&mut self.flags.height, "");
                });

                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("weight"));
                    for band in WeightBand::ALL {
                        let label = self.translator.translate(band.as_key());
                        if ui.radio(self.sheet.weight_band == band, label).clicked() {
                            commands.push(Command::SetWeightBand(band));
                        }
                    }
                    ui.label(format!(
                        "{} {}",
                        self.sheet.weight_kg,
                        self.translator.translate("kilograms")
                    ));
                    ui.checkbox(&mut self.flags.weight, "");
                });

                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("profession"));
                    egui::ComboBox::from_id_salt("profession")
                        .selected_text(self.sheet.profession.clone())
                        .show_ui(ui, |ui| {
                            for profession in self.generator.lexicon().professions() {
                                let selected = self.sheet.profession == *profession;
                                if ui.selectable_label(selected, profession).clicked() {
                                    commands.push(Command::SetProfession(profession.clone()));
                                }
                            }
                        });
                    ui.checkbox(&mut self.flags.profession, "");
                    ui.label(self.translator.translate("is_armed"));
                    ui.checkbox(&mut self.flags.armed, "");
                });

                if ui
                    .button(self.translator.translate("randomize_checked"))
                    .clicked()
                {
                    commands.push(Command::RandomizeAll(self.flags));
                }

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("name_and_surname"));
                    ui.heading(self.sheet.name_and_surname());
                });
                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("new"));
                    if ui.button(self.translator.translate("name")).clicked() {
                        commands.push(Command::RerollName);
                    }
                    if ui.button(self.translator.translate("surname")).clicked() {
                        commands.push(Command::RerollSurname);
                    }
                    if ui.button(self.translator.translate("both_names")).clicked() {
                        commands.push(Command::RerollBothNames);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(self.translator.translate("portrait"));
                    ui.text_edit_singleline(&mut self.portrait_buffer);
                    if ui.button(self.translator.translate("load")).clicked() {
                        self.sheet.portrait = Some(resolve_portrait(
                            &self.dirs.portraits(),
                            self.portrait_buffer.trim(),
                        ));
                    }
                    if let Some(portrait) = &self.sheet.portrait {
                        ui.label(portrait.display().to_string());
                    }
                });

                ui.separator();

                ui.label(self.translator.translate("description"));
                if ui.text_edit_multiline(&mut self.short_desc_buffer).changed() {
                    commands.push(Command::SetShortDescription(self.short_desc_buffer.clone()));
                }
                ui.label(self.translator.translate("long_description"));
                if ui.text_edit_multiline(&mut self.long_desc_buffer).changed() {
                    commands.push(Command::SetLongDescription(self.long_desc_buffer.clone()));
                }
                ui.label(self.translator.translate("clothes"));
                if ui.text_edit_multiline(&mut self.clothes_buffer).changed() {
                    commands.push(Command::SetClothes(self.clothes_buffer.clone()));
                }
                ui.label(self.translator.translate("pockets"));
                if ui.text_edit_multiline(&mut self.pockets_buffer).changed() {
                    commands.push(Command::SetPockets(self.pockets_buffer.clone()));
                }
                ui.label(self.translator.translate("weapons"));
                if ui.text_edit_multiline(&mut self.weapons_buffer).changed() {
                    commands.push(Command::SetWeapons(self.weapons_buffer.clone()));
                }
            });
        });

        self.dispatch(commands);
        if save_clicked {
            self.save_character();
        }
        if load_clicked {
            self.load_character();
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_quit_confirm = true;
        }
        if self.show_quit_confirm {
            egui::Window::new(self.translator.translate("quit_title"))
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(self.translator.translate("quit_dialog"));
                    ui.horizontal(|ui| {
                        if ui.button(self.translator.translate("yes")).clicked() {
                            self.allowed_to_close = true;
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                        if ui.button(self.translator.translate("no")).clicked() {
                            self.show_quit_confirm = false;
                        }
                    });
                });
        }
    }
}
