use crate::i18n::{LocaleSource, RegistryOptions};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime settings for the demo binary, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of `<locale>.json` documents
    pub locales_dir: PathBuf,

    pub default_locale: String,

    /// `None` keeps the registry default
    pub separator: Option<String>,

    pub debug: bool,
}

impl Config {
    /// Read settings from `I18N_*` environment variables, with defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locales_dir: std::env::var("I18N_LOCALES_DIR")
                .unwrap_or_else(|_| "demos/locales".to_string())
                .into(),
            default_locale: std::env::var("I18N_DEFAULT_LOCALE")
                .unwrap_or_else(|_| "en".to_string()),
            separator: std::env::var("I18N_SEPARATOR")
                .ok()
                .filter(|separator| !separator.is_empty()),
            debug: std::env::var("I18N_DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }

    /// Read every locale document from `locales_dir`.
    pub fn load_sources(&self) -> Result<Vec<LocaleSource>> {
        load_locale_dir(&self.locales_dir)
    }

    /// Registry input built from this config and the documents on disk.
    pub fn registry_options(&self) -> Result<RegistryOptions> {
        Ok(RegistryOptions {
            default_locale: self.default_locale.clone(),
            locales: self.load_sources()?,
            separator: self.separator.clone(),
            debug: self.debug,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load every `*.json` file in `dir` as a locale named after the file stem.
///
/// Files are returned sorted by name so registration order is stable.
pub fn load_locale_dir(dir: &Path) -> Result<Vec<LocaleSource>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read locales directory: {:?}", dir))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list locales directory: {:?}", dir))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let locale = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .with_context(|| format!("Locale file has no name: {:?}", path))?;
            let document = fs::read(&path)
                .with_context(|| format!("Failed to read locale file: {:?}", path))?;
            Ok(LocaleSource { locale, document })
        })
        .collect()
}
