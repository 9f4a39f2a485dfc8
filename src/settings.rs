use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::{
    error::{Error, Result},
    validator::Length,
};

const DEFAULT_CLIPBOARD_TIMEOUT: i64 = 40;
const DEFAULT_LENGTH_HINT: i64 = 8;

/// Typed view of the merged configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Seconds before a copied password is removed from the clipboard, 0 keeps it there.
    pub clipboard_timeout: u64,
    /// Example length shown in the empty length field.
    pub length_hint: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clipboard_timeout: DEFAULT_CLIPBOARD_TIMEOUT as u64,
            length_hint: DEFAULT_LENGTH_HINT as usize,
        }
    }
}

impl Settings {
    pub fn from_config(settings: &config::Config) -> Result<Self> {
        let clipboard_timeout: i64 = settings.get("clipboard_timeout")?;
        let clipboard_timeout = u64::try_from(clipboard_timeout)
            .map_err(|_| Error::Generic("clipboard_timeout can't be negative"))?;

        let length_hint: i64 = settings.get("length_hint")?;
        let length_hint = Length::try_from(length_hint)
            .map_err(|err| Error::GenericDyn(format!("invalid length_hint: {err}")))?;

        Ok(Self {
            clipboard_timeout,
            length_hint: length_hint.get(),
        })
    }
}

fn default_settings() -> Result<config::Config> {
    let mut settings = config::Config::default();
    settings.set_default("clipboard_timeout", DEFAULT_CLIPBOARD_TIMEOUT)?;
    settings.set_default("length_hint", DEFAULT_LENGTH_HINT)?;

    Ok(settings)
}

/// Applies the settings that comes from environmental variables on top of `settings`.
///
/// Unset variables leave `settings` untouched, config refuses to merge an empty layer.
pub fn var_settings(
    settings: &mut config::Config,
    clipboard_timeout: &Option<String>,
) -> Result<()> {
    if let Some(timeout) = clipboard_timeout {
        settings.set("clipboard_timeout", timeout.as_str())?;
    }

    Ok(())
}

pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    match xdg_config_home {
        Some(p) => Ok(p.join("passgen").join("settings.toml")),
        None => match home {
            Some(h) => Ok(h.join(".config").join("passgen").join("settings.toml")),
            None => Err(Error::GenericDyn("no home directory set".to_owned())),
        },
    }
}

pub fn file_settings(config_file: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(config_file.to_path_buf()).required(false)
}

/// Merges the built in defaults, the settings file and the environment, in that order.
///
/// Returns the merged configuration together with the location of the settings file, which
/// doesn't have to exist.
pub fn read_config(
    clipboard_timeout: &Option<String>,
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(config::Config, PathBuf)> {
    let mut settings = default_settings()?;

    let config_file_location = xdg_config_file_location(home, xdg_config_home)?;
    settings.merge(file_settings(&config_file_location))?;

    var_settings(&mut settings, clipboard_timeout)?;

    Ok((settings, config_file_location))
}

pub fn save_config(settings: &Settings, config_file_location: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(settings)?;

    if let Some(parent) = config_file_location.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_file_location, contents)?;
    info!("wrote settings to {}", config_file_location.display());

    Ok(())
}

/// Reads the typed settings, writing the defaults to the settings file if there isn't one yet.
pub fn load_settings(
    clipboard_timeout: &Option<String>,
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<Settings> {
    let (config, config_file_location) = read_config(clipboard_timeout, home, xdg_config_home)?;
    let settings = Settings::from_config(&config)?;

    if !config_file_location.exists() {
        if let Err(err) = save_config(&Settings::default(), &config_file_location) {
            warn!("couldn't write default settings: {err}");
        }
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings;
