use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::play::Play;
use crate::storage::{decode_plays, encode_plays, seed_plays};

/// Persistent slot holding the play collection.
pub trait PlayStore {
    /// Load the saved collection, or the seed collection when nothing
    /// usable has been saved.
    fn load(&self) -> Result<Vec<Play>>;

    /// Replace the saved collection.
    fn save(&mut self, plays: &[Play]) -> Result<()>;
}

/// A store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PlayStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Play>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        let plays = match bytes.map(String::from_utf8).transpose() {
            Ok(contents) => decode_plays(contents.as_deref()),
            Err(e) => {
                warn!(
                    "{} is not valid UTF-8 ({}), starting from the seed play",
                    self.path.display(),
                    e.utf8_error()
                );
                seed_plays()
            }
        };
        debug!("Loaded {} plays from {}", plays.len(), self.path.display());
        Ok(plays)
    }

    fn save(&mut self, plays: &[Play]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // A failed write leaves the previous file intact.
        let temp_path = self.temp_path();
        fs::write(&temp_path, encode_plays(plays)?)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Saved {} plays to {}", plays.len(), self.path.display());
        Ok(())
    }
}

/// A store kept in memory, holding the same serialized text a file would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl PlayStore for MemoryStore {
    fn load(&self) -> Result<Vec<Play>> {
        Ok(decode_plays(self.contents.as_deref()))
    }

    fn save(&mut self, plays: &[Play]) -> Result<()> {
        self.contents = Some(encode_plays(plays)?);
        Ok(())
    }
}
