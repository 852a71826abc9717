//! Host-side services the fonts page talks to.
//!
//! The page needs two things from its host: a catalog of font families,
//! encodings and the companion's store URL, and a live answer to "is the
//! advanced fonts companion installed?". The catalog is a RON file (embedded
//! or user-supplied) loaded on a background thread; the install state comes
//! from watching an extensions directory for the companion executable.

use crate::constants::{COMPANION_BIN, COMPANION_DIR};
use eframe::egui;
use font_tuner::catalog::FontCatalog;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use thiserror::Error;

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

const CATALOG_ASSET: &str = "fonts.ron";

/// Errors that can occur while loading the font catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("fonts.ron not found in embedded assets")]
    AssetNotFound,
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid UTF-8 in catalog: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::de::SpannedError),
    #[error("catalog loader stopped before reporting a result")]
    ChannelClosed,
}

/// Where the catalog is read from.
#[derive(Debug, Clone)]
enum CatalogSource {
    /// The fonts.ron bundled into the binary.
    Embedded,
    /// A user-supplied file, via --catalog.
    Path(PathBuf),
}

fn load_catalog(source: &CatalogSource) -> Result<FontCatalog, CatalogError> {
    let text = match source {
        CatalogSource::Embedded => {
            let file = Assets::get(CATALOG_ASSET).ok_or(CatalogError::AssetNotFound)?;
            std::str::from_utf8(&file.data)?.to_owned()
        }
        CatalogSource::Path(path) => fs::read_to_string(path).map_err(|err| CatalogError::Io {
            path: path.clone(),
            source: err,
        })?,
    };
    Ok(ron::from_str(&text)?)
}

/// Default extensions directory under the platform data dir.
fn default_extensions_dir() -> Option<PathBuf> {
    Some(dirs::data_dir()?.join("font-tuner").join("extensions"))
}

/// Full path the companion executable is expected at.
fn companion_path(extensions_dir: &Path) -> PathBuf {
    extensions_dir
        .join(COMPANION_DIR)
        .join(format!("{COMPANION_BIN}{}", std::env::consts::EXE_SUFFIX))
}

fn companion_installed(extensions_dir: &Path) -> bool {
    companion_path(extensions_dir).is_file()
}

/// Bridges the settings page to its host services.
pub struct FontsProxy {
    catalog_source: CatalogSource,
    extensions_dir: Option<PathBuf>,
    catalog_rx: Option<Receiver<Result<FontCatalog, CatalogError>>>,
    extension_rx: Option<Receiver<bool>>,
    /// The watcher must be kept alive for events to fire
    _watcher: Option<RecommendedWatcher>,
}

impl FontsProxy {
    pub fn new(catalog_path: Option<PathBuf>, extensions_dir: Option<PathBuf>) -> Self {
        let catalog_source = match catalog_path {
            Some(path) => CatalogSource::Path(path),
            None => CatalogSource::Embedded,
        };

        Self {
            catalog_source,
            extensions_dir: extensions_dir.or_else(default_extensions_dir),
            catalog_rx: None,
            extension_rx: None,
            _watcher: None,
        }
    }

    /// Starts loading the font catalog on a background thread.
    pub fn fetch_fonts_data(&mut self, ctx: egui::Context) {
        let (tx, rx) = mpsc::channel();
        let source = self.catalog_source.clone();

        thread::spawn(move || {
            let result = load_catalog(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.catalog_rx = Some(rx);
    }

    /// Returns the catalog result once the loader finishes, then never again.
    pub fn poll_fonts_data(&mut self) -> Option<Result<FontCatalog, CatalogError>> {
        let result = match self.catalog_rx.as_ref()?.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(CatalogError::ChannelClosed)),
        };

        if result.is_some() {
            self.catalog_rx = None;
        }
        result
    }

    /// Starts reporting whether the companion is installed, now and whenever
    /// the extensions directory changes.
    pub fn observe_extension_availability(&mut self, ctx: egui::Context) {
        let Some(dir) = self.extensions_dir.clone() else {
            log::warn!("No data directory available; companion detection disabled");
            return;
        };

        if let Err(err) = fs::create_dir_all(&dir) {
            log::warn!(
                "Failed to create extensions directory {}: {err}",
                dir.display()
            );
        }

        let (tx, rx) = mpsc::channel();
        // Report the current state before any directory event fires.
        let _ = tx.send(companion_installed(&dir));

        let watch_dir = dir.clone();
        let watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res
                && matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(_)
                )
            {
                let _ = tx.send(companion_installed(&watch_dir));
                ctx.request_repaint();
            }
        });

        match watcher {
            Ok(mut watcher) => match watcher.watch(&dir, RecursiveMode::Recursive) {
                Ok(()) => {
                    log::info!("Watching extensions directory: {}", dir.display());
                    self._watcher = Some(watcher);
                }
                Err(err) => {
                    log::warn!(
                        "Failed to watch extensions directory {}: {err}",
                        dir.display()
                    );
                }
            },
            Err(err) => {
                log::warn!("Failed to create extensions watcher: {err}");
            }
        }

        self.extension_rx = Some(rx);
    }

    /// Latest reported install state, if any arrived since the last poll.
    pub fn poll_extension_state(&mut self) -> Option<bool> {
        let rx = self.extension_rx.as_ref()?;

        let mut latest = None;
        let mut disconnected = false;

        // Drain all pending updates, keeping only the most recent
        loop {
            match rx.try_recv() {
                Ok(installed) => latest = Some(installed),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            log::warn!("Extensions watcher channel disconnected");
            self.extension_rx = None;
        }

        latest
    }

    /// Launches the companion's settings window.
    pub fn open_advanced_settings(&self) -> std::io::Result<()> {
        let dir = self.extensions_dir.as_deref().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no extensions directory")
        })?;
        std::process::Command::new(companion_path(dir)).spawn()?;
        Ok(())
    }
}
