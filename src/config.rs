use std::{
    fs,
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::LocaleStore;

pub const CONFIG_FILE_NAME: &str = ".pagetextrc.json";

/// Language tag shape accepted for locales: "en", "zh-CN", "sr-Latn-RS".
static LOCALE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_locale", alias = "primaryLocale")]
    pub default_locale: String,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_locales() -> Vec<String> {
    vec![default_locale()]
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            locales: default_locales(),
            default_locale: default_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every locale must look like a language tag (it doubles as a file name)
    /// and the locale list must form a valid [`LocaleStore`].
    pub fn validate(&self) -> Result<()> {
        for locale in self.locales.iter().chain(Some(&self.default_locale)) {
            if !LOCALE_TAG_REGEX.is_match(locale) {
                bail!("Invalid locale in config: \"{}\"", locale);
            }
        }
        self.locale_store()?;
        Ok(())
    }

    pub fn locale_store(&self) -> Result<LocaleStore> {
        LocaleStore::new(self.locales.iter().cloned(), self.default_locale.clone())
            .context("Invalid locale configuration")
    }

    /// Messages directory resolved against `project_root`.
    pub fn messages_root_in(&self, project_root: &Path) -> PathBuf {
        resolve_against(project_root, Path::new(&self.messages_root))
    }
}

/// Join `path` onto `base`, dropping `.` components so reported paths stay
/// clean. Absolute paths are returned as given.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    base.join(relative)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config resolve against.
    pub project_root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let project_root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                project_root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            project_root: start_dir.to_path_buf(),
        }),
    }
}
