//! Common CLI utility functions shared across commands.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use mtreplay_core::config::ExtractConfig;
use mtreplay_core::{Config, ExportFormat, Extractor, Mode, VehicleNames, default_file_name};
use tracing::{debug, warn};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "mtreplay.toml";

/// Replay file extension used when expanding directories.
pub const REPLAY_EXTENSION: &str = "mtreplay";

/// Options shared by every command.
pub struct Settings {
    pub config: Config,
    pub vehicle_names: VehicleNames,
}

impl Settings {
    pub fn load(config_path: Option<&Path>, names_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path)?;
        let vehicle_names = load_vehicle_names(&config, names_path)?;
        Ok(Self {
            config,
            vehicle_names,
        })
    }

    /// Extractor from the config, with the command-line tail margin taking precedence.
    pub fn extractor(&self, tail_margin: Option<usize>) -> Extractor {
        let config = ExtractConfig {
            tail_margin: tail_margin.unwrap_or(self.config.extract.tail_margin),
        };
        let extractor = Extractor::from_config(&config);
        debug!("Extractor tail margin: {}", extractor.tail_margin());
        extractor
    }
}

/// Load the config: an explicit path must parse, the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path).with_context(|| format!("Failed to load config {:?}", path));
    }

    let default = Path::new(DEFAULT_CONFIG_FILE);
    if !default.exists() {
        return Ok(Config::default());
    }
    match Config::load(default) {
        Ok(config) => {
            debug!("Loaded config from {:?}", default);
            Ok(config)
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Ok(Config::default())
        }
    }
}

/// Builtin vehicle names, overridden by the CLI file or else the config file.
pub fn load_vehicle_names(config: &Config, path: Option<&Path>) -> Result<VehicleNames> {
    let mut names = VehicleNames::builtin();
    if let Some(path) = path.or(config.vehicle_names.as_deref()) {
        let overrides = VehicleNames::load(path)
            .with_context(|| format!("Failed to load vehicle names {:?}", path))?;
        names.extend(overrides);
    }
    Ok(names)
}

/// Expand directories to the replay files they contain (non-recursive).
pub fn expand_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let entries =
                fs::read_dir(path).with_context(|| format!("Failed to read directory {:?}", path))?;
            for entry in entries {
                let file = entry?.path();
                if file.is_file() && file.extension().is_some_and(|ext| ext == REPLAY_EXTENSION) {
                    files.push(file);
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Open the export destination. Returns the path written to, `None` for stdout.
pub fn open_output(
    output: Option<&str>,
    mode: Mode,
    format: ExportFormat,
) -> Result<(Box<dyn Write>, Option<PathBuf>)> {
    match output {
        Some("-") => {
            let writer: Box<dyn Write> = Box::new(io::stdout().lock());
            Ok((writer, None))
        }
        Some(path) => create_file(PathBuf::from(path)),
        None => create_file(PathBuf::from(default_file_name(mode, format, &Local::now()))),
    }
}

fn create_file(path: PathBuf) -> Result<(Box<dyn Write>, Option<PathBuf>)> {
    let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
    let writer: Box<dyn Write> = Box::new(BufWriter::new(file));
    Ok((writer, Some(path)))
}
