//! Layered configuration for novella.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. `config.{toml,yaml,json}` in the platform configuration directory
//! 3. An explicitly requested file (format chosen by extension)
//! 4. `NOVELLA_`-prefixed environment variables, `__` separating levels
//!    (`NOVELLA_TOC__STRIP_SERIES_PREFIX=false`)

pub mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use novella_toc::Options;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

const ENV_PREFIX: &str = "NOVELLA_";
const ENV_SPLIT: &str = "__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table-of-contents normalization.
    pub toc: Options,
}
impl Config {
    /// Loads configuration from the default locations.
    pub fn load() -> Result<Self> {
        Loader::default().load()
    }

    fn validate(&self) -> Result<()> {
        if self.toc.sentinels.iter().any(|sentinel| sentinel.trim().is_empty()) {
            exn::bail!(ErrorKind::Invalid("toc.sentinels"));
        }
        if self.toc.max_range == 0 {
            exn::bail!(ErrorKind::Invalid("toc.max_range"));
        }
        Ok(())
    }
}

/// Builder deciding where configuration is read from.
#[derive(Debug, Clone)]
pub struct Loader {
    config_dir: Option<PathBuf>,
    file: Option<PathBuf>,
}
impl Default for Loader {
    fn default() -> Self {
        Self {
            config_dir: ProjectDirs::from("", "", "novella").map(|dirs| dirs.config_dir().to_path_buf()),
            file: None,
        }
    }
}
impl Loader {
    /// Overrides (or with `None`, disables) the configuration directory.
    #[must_use]
    pub fn config_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.config_dir = dir.map(Into::into);
        self
    }

    /// Adds an explicit configuration file, which must exist.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(dir) = &self.config_dir {
            tracing::trace!(dir = %dir.display(), "Searching configuration directory");
            figment = figment
                .merge(Toml::file(dir.join("config.toml")))
                .merge(Yaml::file(dir.join("config.yaml")))
                .merge(Json::file(dir.join("config.json")));
        }
        if let Some(path) = &self.file {
            figment = merge_file(figment, path)?;
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split(ENV_SPLIT)))
    }

    #[instrument(skip(self), fields(config_dir = ?self.config_dir, file = ?self.file))]
    pub fn load(&self) -> Result<Config> {
        let config: Config = self.figment()?.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.is_file() {
        exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
    }
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    Ok(match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    })
}
