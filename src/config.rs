//! Server configuration from environment variables.
//!
//! | Variable           | Default               |
//! |--------------------|-----------------------|
//! | `PORT`             | `3000`                |
//! | `STATIC_DIR`       | `static`              |
//! | `IMAGES_DIR`       | `<STATIC_DIR>/images` |
//! | `IMAGES_BASE_PATH` | `/images`             |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_IMAGES_SUBDIR: &str = "images";
const DEFAULT_IMAGES_BASE_PATH: &str = "/images";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Directory served as static files at `/`.
    pub static_dir: PathBuf,
    /// Directory scanned by `/api/images`.
    pub images_dir: PathBuf,
    /// Public URL prefix for listed images.
    pub images_base_path: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let images_dir = lookup("IMAGES_DIR").map_or_else(|| static_dir.join(DEFAULT_IMAGES_SUBDIR), PathBuf::from);
        let images_base_path = lookup("IMAGES_BASE_PATH")
            .map(|raw| raw.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_IMAGES_BASE_PATH.to_owned());

        Ok(Self { port, static_dir, images_dir, images_base_path })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            images_dir: PathBuf::from(DEFAULT_STATIC_DIR).join(DEFAULT_IMAGES_SUBDIR),
            images_base_path: DEFAULT_IMAGES_BASE_PATH.to_owned(),
        }
    }
}
