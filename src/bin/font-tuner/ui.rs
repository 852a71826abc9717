//! UI rendering methods for the font settings window.

use crate::FontTunerApp;
use crate::constants::{FAMILY_COMBO_WIDTH, PAGE_MAX_WIDTH, PREVIEW_TEXT};
use eframe::egui;
use font_tuner::catalog::MenuOptions;
use font_tuner::page::AdvancedAction;
use font_tuner::sizes::{FIXED_STANDARD_SIZE_GAP, SizeSlider, nearest_index};

impl FontTunerApp {
    /// Renders the bottom status bar.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Changes apply immediately and are saved automatically");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                });
            });
        });
    }

    /// Renders the settings page itself.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(PAGE_MAX_WIDTH);

                ui.heading("Fonts");
                ui.add_space(8.0);

                self.show_size_section(ui);
                ui.add_space(16.0);
                self.show_families_section(ui);
                ui.add_space(16.0);
                self.show_encoding_section(ui);
                ui.add_space(16.0);
                self.show_advanced_section(ui);
            });
        });
    }

    /// Renders the size sliders and the live preview under them.
    fn show_size_section(&mut self, ui: &mut egui::Ui) {
        ui.strong("Size");
        ui.separator();

        egui::Grid::new("size_sliders")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Font size");
                let response = size_slider(ui, &mut self.page.size_slider);
                if response.changed() || response.drag_stopped() {
                    self.page.default_index_changed(&mut self.prefs);
                }
                ui.end_row();

                ui.label("Minimum font size");
                let response = size_slider(ui, &mut self.page.minimum_slider);
                if response.changed() || response.drag_stopped() {
                    self.page.minimum_index_changed(&mut self.prefs);
                }
                ui.end_row();
            });

        ui.add_space(4.0);
        ui.weak(format!(
            "Fixed-width text stays {FIXED_STANDARD_SIZE_GAP}px below the standard size \
             (currently {}px).",
            self.prefs.default_fixed_font_size
        ));

        ui.add_space(8.0);
        ui.label(egui::RichText::new(PREVIEW_TEXT).size(self.page.default_size() as f32));
        ui.label(
            egui::RichText::new(PREVIEW_TEXT)
                .size(self.prefs.default_fixed_font_size as f32)
                .family(egui::FontFamily::Monospace),
        );
    }

    /// Renders the four font family dropdowns.
    fn show_families_section(&mut self, ui: &mut egui::Ui) {
        ui.strong("Font families");
        ui.separator();

        let Some(options) = self.page.options() else {
            self.show_pending_row(ui);
            return;
        };

        egui::Grid::new("font_families")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                family_combo(
                    ui,
                    "standard_font",
                    "Standard",
                    &mut self.prefs.families.standard,
                    options,
                );
                family_combo(
                    ui,
                    "serif_font",
                    "Serif",
                    &mut self.prefs.families.serif,
                    options,
                );
                family_combo(
                    ui,
                    "sans_serif_font",
                    "Sans-serif",
                    &mut self.prefs.families.sans_serif,
                    options,
                );
                family_combo(
                    ui,
                    "fixed_font",
                    "Fixed-width",
                    &mut self.prefs.families.fixed,
                    options,
                );
            });
    }

    /// Renders the default encoding dropdown.
    fn show_encoding_section(&mut self, ui: &mut egui::Ui) {
        ui.strong("Encoding");
        ui.separator();

        let Some(options) = self.page.options() else {
            self.show_pending_row(ui);
            return;
        };

        egui::Grid::new("encoding")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Default encoding");

                let encoding = &mut self.prefs.default_encoding;
                let selected = options
                    .encoding_label(encoding)
                    .unwrap_or(encoding.as_str())
                    .to_owned();
                egui::ComboBox::from_id_salt("default_encoding")
                    .width(FAMILY_COMBO_WIDTH)
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for option in &options.encodings {
                            ui.selectable_value(encoding, option.value.clone(), &option.label);
                        }
                    });
                ui.end_row();
            });
    }

    /// Renders the advanced settings row with its install-dependent gate.
    fn show_advanced_section(&mut self, ui: &mut egui::Ui) {
        ui.strong("Advanced");
        ui.separator();

        let action = self.page.advanced_action();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Advanced font settings");
                ui.weak(self.page.advanced_sublabel());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let enabled = action != AdvancedAction::Unavailable;
                if ui
                    .add_enabled(enabled, egui::Button::new("Open"))
                    .clicked()
                {
                    self.open_advanced(action);
                }
            });
        });
    }

    /// Placeholder row shown until the catalog arrives (or fails).
    fn show_pending_row(&self, ui: &mut egui::Ui) {
        if self.catalog_failed {
            ui.weak("Font list unavailable");
        } else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak("Loading font list…");
            });
        }
    }

    fn open_advanced(&mut self, action: AdvancedAction) {
        match action {
            AdvancedAction::OpenCompanionSettings => {
                if let Err(err) = self.proxy.open_advanced_settings() {
                    self.error_toast(format!("Failed to open advanced settings: {err}"));
                }
            }
            AdvancedAction::OpenStoreUrl(url) => {
                if let Err(err) = open::that(&url) {
                    self.error_toast(format!("Failed to open {url}: {err}"));
                }
            }
            AdvancedAction::Unavailable => {}
        }
    }
}

/// Adds a discrete size slider whose positions map to table entries.
fn size_slider(ui: &mut egui::Ui, slider: &mut SizeSlider) -> egui::Response {
    let table = slider.table();
    let max_index = slider.max_index();

    let response = ui.add(
        egui::Slider::new(&mut slider.index, 0..=max_index)
            .custom_formatter(move |index, _| format!("{}px", table[index as usize]))
            .custom_parser(move |text| {
                let px: i32 = text.trim().trim_end_matches("px").trim().parse().ok()?;
                Some(nearest_index(table, px) as f64)
            }),
    );
    slider.set_dragging(response.dragged());
    response
}

/// Adds one labelled font family dropdown row.
fn family_combo(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut String,
    options: &MenuOptions,
) {
    ui.label(label);

    // Preference values missing from the catalog still show as-is.
    let selected = options.font_label(value).unwrap_or(value.as_str()).to_owned();
    egui::ComboBox::from_id_salt(id)
        .width(FAMILY_COMBO_WIDTH)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for option in &options.fonts {
                ui.selectable_value(value, option.value.clone(), &option.label);
            }
        });
    ui.end_row();
}
