//! Configuration discovery for the CLI.
//!
//! A diagram is compiled with the first configuration file found, in order:
//!
//! 1. the `--config` path,
//! 2. the path in the `GRAFFOWL_CONFIG` environment variable,
//! 3. `graffowl.toml` in the input diagram's directory,
//! 4. `config.toml` in the user's platform config directory.
//!
//! Without any of them the defaults apply. A path named explicitly, by flag
//! or environment, must exist.

use std::{
    env, fmt, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use graffowl::{GraffowlError, config::AppConfig};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "GRAFFOWL_CONFIG";

/// Per-project configuration file, looked up beside the input diagram.
pub const PROJECT_FILE: &str = "graffowl.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Missing configuration file {} (from {origin})", .path.display())]
    MissingFile { path: PathBuf, origin: Origin },

    #[error("Failed to read configuration file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<ConfigError> for GraffowlError {
    fn from(err: ConfigError) -> Self {
        GraffowlError::Io(io::Error::other(err))
    }
}

/// Where a configuration file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Flag,
    Environment,
    Project,
    User,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flag => "--config",
            Self::Environment => CONFIG_ENV,
            Self::Project => PROJECT_FILE,
            Self::User => "user config directory",
        })
    }
}

/// The places a configuration file may come from for one run.
#[derive(Debug, Default)]
struct Search {
    flag: Option<PathBuf>,
    environment: Option<PathBuf>,
    project_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
}

impl Search {
    fn new(flag: Option<&Path>, input: &Path) -> Self {
        Self {
            flag: flag.map(Path::to_path_buf),
            environment: env::var_os(CONFIG_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            project_dir: input.parent().map(Path::to_path_buf),
            user_dir: ProjectDirs::from("org", "graffowl", "graffowl")
                .map(|dirs| dirs.config_dir().to_path_buf()),
        }
    }

    /// The configuration file to load, or `None` for the defaults.
    fn locate(&self) -> Result<Option<(Origin, PathBuf)>, ConfigError> {
        let named = [
            (Origin::Flag, self.flag.as_ref()),
            (Origin::Environment, self.environment.as_ref()),
        ];
        if let Some((origin, path)) = named
            .into_iter()
            .find_map(|(origin, path)| path.map(|path| (origin, path)))
        {
            if !path.is_file() {
                return Err(ConfigError::MissingFile {
                    path: path.clone(),
                    origin,
                });
            }
            return Ok(Some((origin, path.clone())));
        }

        let discovered = [
            (Origin::Project, self.project_dir.as_ref().map(|dir| dir.join(PROJECT_FILE))),
            (Origin::User, self.user_dir.as_ref().map(|dir| dir.join("config.toml"))),
        ];
        for (origin, path) in discovered {
            match path {
                Some(path) if path.is_file() => return Ok(Some((origin, path))),
                Some(path) => debug!(path:? = path, origin:% = origin; "No configuration file"),
                None => debug!(origin:% = origin; "Configuration location unavailable"),
            }
        }
        Ok(None)
    }

    fn load(&self) -> Result<AppConfig, ConfigError> {
        match self.locate()? {
            Some((origin, path)) => {
                info!(path:? = path, origin:% = origin; "Loading configuration");
                parse_file(&path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

/// Loads the configuration for compiling `input`.
///
/// # Errors
///
/// Returns an error when a file named by `--config` or `GRAFFOWL_CONFIG`
/// does not exist, or when the chosen file cannot be read or parsed.
pub fn load_config(flag: Option<&Path>, input: &Path) -> Result<AppConfig, GraffowlError> {
    Ok(Search::new(flag, input).load()?)
}

fn parse_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
