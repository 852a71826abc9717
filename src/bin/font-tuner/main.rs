#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod constants;
mod proxy;
mod ui;

use clap::Parser;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use font_tuner::page::FontsPage;
use font_tuner::prefs::FontPrefs;
use proxy::FontsProxy;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Browser-style font preference settings")]
struct Args {
    /// RON catalog file to load instead of the embedded one.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Directory scanned for the advanced fonts companion.
    #[arg(long, value_name = "DIR")]
    extensions_dir: Option<PathBuf>,
}

/// Main application state for the font settings window.
pub struct FontTunerApp {
    prefs: FontPrefs,
    page: FontsPage,
    proxy: FontsProxy,
    toasts: Toasts,
    catalog_failed: bool,
}

impl FontTunerApp {
    fn new(cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        let toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let prefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let mut proxy = FontsProxy::new(args.catalog, args.extensions_dir);
        proxy.fetch_fonts_data(cc.egui_ctx.clone());
        proxy.observe_extension_availability(cc.egui_ctx.clone());

        Self {
            prefs,
            page: FontsPage::new(),
            proxy,
            toasts,
            catalog_failed: false,
        }
    }

    fn error_toast(&mut self, text: String) {
        log::warn!("{text}");
        self.toasts.add(Toast {
            kind: ToastKind::Error,
            text: text.into(),
            options: ToastOptions::default()
                .duration_in_seconds(8.0)
                .show_icon(true),
            ..Default::default()
        });
    }

    /// Takes in whatever the proxy finished since the last frame.
    fn poll_proxy(&mut self) {
        if let Some(result) = self.proxy.poll_fonts_data() {
            match result {
                Ok(catalog) => self.page.set_fonts_data(&catalog),
                Err(err) => {
                    self.catalog_failed = true;
                    self.error_toast(format!("Failed to load font catalog: {err}"));
                }
            }
        }

        if let Some(installed) = self.proxy.poll_extension_state() {
            self.page.set_advanced_installed(installed);
        }
    }
}

impl eframe::App for FontTunerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_proxy();
        self.page.observe_prefs(&mut self.prefs);

        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        // Show toasts
        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Font Tuner",
        options,
        Box::new(|cc| Ok(Box::new(FontTunerApp::new(cc, args)))),
    )
}
