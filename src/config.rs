//! Run configuration
//!
//! Everything platform specific is resolved here, once, into an
//! [`ExportConfig`]. The rest of the crate only sees plain paths.

use crate::{ExportError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Language used when none is given
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// File name prefix of the card table in the data directory
pub const CARDS_FILE_PREFIX: &str = "data_cards";

/// File name prefix of the localization table in the data directory
pub const LOC_FILE_PREFIX: &str = "data_loc";

/// Extension shared by the client's data tables
pub const DATA_FILE_EXTENSION: &str = ".mtga";

/// Operating systems the client ships on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Anything else; the client has no default install location here
    Unsupported(&'static str),
}

impl Platform {
    /// Platform this binary was built for
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unsupported(std::env::consts::OS)
        }
    }

    /// Default location of the client log
    pub fn default_log_path(&self, home: &Path) -> Result<PathBuf> {
        match self {
            Platform::Windows => Ok(home
                .join("AppData")
                .join("LocalLow")
                .join("Wizards Of The Coast")
                .join("MTGA")
                .join("Player.log")),
            Platform::MacOs => Ok(home
                .join("Library")
                .join("Logs")
                .join("Wizards Of The Coast")
                .join("MTGA")
                .join("Player2.log")),
            Platform::Unsupported(os) => Err(ExportError::UnsupportedPlatform(os.to_string())),
        }
    }

    /// Default location of the downloaded data tables
    pub fn default_data_dir(&self, home: &Path) -> Result<PathBuf> {
        match self {
            Platform::Windows => Ok(PathBuf::from(
                r"C:\Program Files\Wizards of the Coast\MTGA\MTGA_Data\Downloads\Data",
            )),
            Platform::MacOs => Ok(home
                .join("Library")
                .join("Application Support")
                .join("com.wizards.mtga")
                .join("Downloads")
                .join("Data")),
            Platform::Unsupported(os) => Err(ExportError::UnsupportedPlatform(os.to_string())),
        }
    }
}

/// Explicit settings that take precedence over platform defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub log_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub language: Option<String>,
}

/// Resolved paths and language for one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub log_path: PathBuf,
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub language: String,
}

impl ExportConfig {
    /// Resolve the configuration for the current machine
    pub fn from_environment(overrides: ConfigOverrides) -> Result<Self> {
        let now = chrono::Utc::now().timestamp_millis();
        Self::resolve(Platform::detect(), dirs::home_dir(), now, overrides)
    }

    /// Resolve the configuration from explicit inputs
    ///
    /// `home` is only required for settings that fall back to a default.
    /// The default export directory is `~/MTGABulkExport/<timestamp_millis>`.
    pub fn resolve(
        platform: Platform,
        home: Option<PathBuf>,
        timestamp_millis: i64,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let home_dir = || {
            home.clone()
                .ok_or_else(|| ExportError::Config("home directory not found".to_string()))
        };

        let log_path = match overrides.log_path {
            Some(path) => path,
            None => platform.default_log_path(&home_dir()?)?,
        };
        let data_dir = match overrides.data_dir {
            Some(path) => path,
            None => platform.default_data_dir(&home_dir()?)?,
        };
        let export_dir = match overrides.export_dir {
            Some(path) => path,
            None => home_dir()?
                .join("MTGABulkExport")
                .join(timestamp_millis.to_string()),
        };

        Ok(ExportConfig {
            log_path,
            data_dir,
            export_dir,
            language: overrides
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }

    /// Path of the card table inside the data directory
    pub fn cards_path(&self) -> Result<PathBuf> {
        find_data_file(&self.data_dir, CARDS_FILE_PREFIX)
    }

    /// Path of the localization table inside the data directory
    pub fn loc_path(&self) -> Result<PathBuf> {
        find_data_file(&self.data_dir, LOC_FILE_PREFIX)
    }
}

/// Find the `<prefix>*.mtga` file in the data directory
///
/// The client names its tables with a content hash suffix. When more than
/// one candidate exists the lexicographically first is used.
pub fn find_data_file(data_dir: &Path, prefix: &str) -> Result<PathBuf> {
    let entries = std::fs::read_dir(data_dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            ExportError::Config(format!("data directory not found: {}", data_dir.display()))
        }
        _ => ExportError::IoError(e),
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(prefix) && name.ends_with(DATA_FILE_EXTENSION) {
            candidates.push(entry.path());
        }
    }

    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| ExportError::DataFileNotFound {
            prefix: prefix.to_string(),
            dir: data_dir.to_path_buf(),
        })
}
