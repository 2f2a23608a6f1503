//! Where record files live and what they are called.
//!
//! A [`RecordsDirectory`] is the configuration every
//! [`SessionRecorder`](crate::SessionRecorder) is created from. File names
//! are 12 characters drawn independently from `[a-z0-9]` followed by
//! [`FILE_EXTENSION`]. Collisions are not checked; with 36^12 names the
//! odds are negligible.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of random characters in a record file name.
pub const FILENAME_LEN: usize = 12;

/// Extension of every record file.
pub const FILE_EXTENSION: &str = "hanoi-puzzle";

/// Characters a record file name is drawn from.
pub const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Placeholder character used in [`RecordsDirectory::template`].
const TEMPLATE_CHAR: char = 'X';

/// Directory configuration for session records.
///
/// Replacing the configuration means building a new value; nothing is
/// global.
///
/// ```
/// use hanoi_record::RecordsDirectory;
///
/// let mut records = RecordsDirectory::with_seed("/var/lib/hanoi/", 7);
/// assert_eq!(
///     records.template().to_str(),
///     Some("/var/lib/hanoi/XXXXXXXXXXXX.hanoi-puzzle")
/// );
/// let path = records.next_path();
/// assert_eq!(path.parent(), Some(std::path::Path::new("/var/lib/hanoi")));
/// ```
pub struct RecordsDirectory {
    dir: PathBuf,
    rng: ChaCha8Rng,
}

impl RecordsDirectory {
    /// Records go to `dir`; names are drawn from an entropy-seeded RNG.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::from_rng(dir.into(), ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Records go to `dir`; names are reproducible for a given `seed`.
    pub fn with_seed(dir: impl Into<PathBuf>, seed: u64) -> Self {
        Self::from_rng(dir.into(), ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(dir: PathBuf, rng: ChaCha8Rng) -> Self {
        Self {
            dir: normalize(dir),
            rng,
        }
    }

    /// The directory records are created in, without a trailing separator.
    pub fn directory(&self) -> &Path {
        &self.dir
    }

    /// The path pattern every generated name follows, with placeholders
    /// where the random characters go.
    pub fn template(&self) -> PathBuf {
        let stem: String = std::iter::repeat_n(TEMPLATE_CHAR, FILENAME_LEN).collect();
        self.dir.join(format!("{stem}.{FILE_EXTENSION}"))
    }

    /// Draw a fresh record path.
    pub fn next_path(&mut self) -> PathBuf {
        let stem: String = (0..FILENAME_LEN)
            .map(|_| char::from(ALPHABET[self.rng.random_range(0..ALPHABET.len())]))
            .collect();
        self.dir.join(format!("{stem}.{FILE_EXTENSION}"))
    }
}

impl fmt::Debug for RecordsDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordsDirectory")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

/// Drop trailing separators by rebuilding from components.
fn normalize(dir: PathBuf) -> PathBuf {
    if dir.as_os_str().is_empty() {
        return dir;
    }
    dir.components().collect()
}
