//! Session configuration and validation.
//!
//! [`SessionConfig`] is the builder-input for [`Session::new()`](crate::Session::new).
//! [`validate()`](SessionConfig::validate) checks the puzzle dimensions
//! before anything touches the filesystem.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use hanoi_core::RESERVED_ROD_COUNT;
use hanoi_record::RecordsDirectory;

/// Rods used when none are configured.
pub const DEFAULT_RODS: u32 = 3;
/// Disks used when none are configured.
pub const DEFAULT_DISKS: u32 = 4;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A puzzle needs at least one rod.
    ZeroRods,
    /// A puzzle needs at least one disk.
    ZeroDisks,
    /// The rod count is the reserved marker value.
    ReservedRodCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRods => write!(f, "rods must be at least 1"),
            Self::ZeroDisks => write!(f, "disks must be at least 1"),
            Self::ReservedRodCount => {
                write!(f, "rod count {RESERVED_ROD_COUNT} is reserved")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SessionConfig ──────────────────────────────────────────────────

/// Everything needed to start a [`Session`](crate::Session).
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Number of rods. Default: 3.
    pub rods: u32,
    /// Number of disks. Default: 4.
    pub disks: u32,
    /// Name stored in every record header; truncated to 32 bytes.
    pub username: String,
    /// Directory record files are created in. Must already exist.
    pub records_dir: PathBuf,
    /// Seed for record file names. `None` draws names from entropy.
    pub name_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rods: DEFAULT_RODS,
            disks: DEFAULT_DISKS,
            username: String::new(),
            records_dir: PathBuf::from("."),
            name_seed: None,
        }
    }
}

impl SessionConfig {
    /// Check the puzzle dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rods == 0 {
            return Err(ConfigError::ZeroRods);
        }
        if self.rods == RESERVED_ROD_COUNT {
            return Err(ConfigError::ReservedRodCount);
        }
        if self.disks == 0 {
            return Err(ConfigError::ZeroDisks);
        }
        Ok(())
    }

    /// Build the records directory this configuration describes.
    pub fn records_directory(&self) -> RecordsDirectory {
        match self.name_seed {
            Some(seed) => RecordsDirectory::with_seed(&self.records_dir, seed),
            None => RecordsDirectory::new(&self.records_dir),
        }
    }
}
