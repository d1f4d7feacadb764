use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the snip document.
///
/// The collection always persists as `{ "forecasts": [ ... ] }`; a document
/// missing the key deserializes as an empty collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastFile {
    #[serde(default)]
    pub forecasts: Vec<String>,
}

/// Storage manager for the snip collection
///
/// Owns one JSON document path. Every operation reads the whole collection
/// and every mutation rewrites it; there is no cache and no locking, so
/// concurrent writers race and the last write wins.
#[derive(Debug, Clone)]
pub struct SnipStore {
    data_file: PathBuf,
}

impl SnipStore {
    /// Creates a store over an explicit document path.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Opens the store at its configured location.
    ///
    /// The `WXSNIPS_FILE` environment variable overrides the default
    /// per-user data directory location.
    pub fn open_default() -> Result<Self> {
        if let Some(path) = std::env::var_os("WXSNIPS_FILE") {
            return Ok(Self::new(PathBuf::from(path)));
        }

        let data_dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join("wxsnips");

        fs::create_dir_all(&data_dir)?;

        Ok(Self::new(data_dir.join("snips.json")))
    }

    /// Path of the snip document.
    pub fn path(&self) -> &Path {
        &self.data_file
    }

    /// Reads the snip collection from disk.
    ///
    /// A missing file, an unreadable file, malformed JSON, or a document
    /// without a usable `forecasts` array all degrade to an empty collection.
    pub fn list(&self) -> Vec<String> {
        if !self.data_file.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("failed to read {}: {}", self.data_file.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<ForecastFile>(&content) {
            Ok(document) => document.forecasts,
            Err(err) => {
                log::warn!(
                    "malformed snip document {}: {}",
                    self.data_file.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Appends a snip to the end of the collection and persists.
    ///
    /// The caller ensures the text is non-empty after trimming; the store
    /// does not re-validate.
    pub fn add(&self, text: impl Into<String>) -> bool {
        let mut snips = self.list();
        snips.push(text.into());
        self.save(&snips)
    }

    /// Replaces the snip at `index` and persists.
    ///
    /// An out-of-bounds index leaves the collection untouched, but the
    /// unchanged document is still written and that write's success returned.
    pub fn update(&self, index: usize, text: impl Into<String>) -> bool {
        let mut snips = self.list();
        if let Some(slot) = snips.get_mut(index) {
            *slot = text.into();
        }
        self.save(&snips)
    }

    /// Removes the snip at `index` and persists; later snips shift down.
    ///
    /// An out-of-bounds index attempts no write and reports failure.
    pub fn delete(&self, index: usize) -> bool {
        let mut snips = self.list();
        if index >= snips.len() {
            return false;
        }
        snips.remove(index);
        self.save(&snips)
    }

    /// Rewrites the whole document from the given collection.
    ///
    /// Reports persistence success; a failed write leaves the previously
    /// persisted state in place and is never fatal.
    pub fn save(&self, snips: &[String]) -> bool {
        match self.persist(snips) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("failed to save {}: {:#}", self.data_file.display(), err);
                false
            }
        }
    }

    fn persist(&self, snips: &[String]) -> Result<()> {
        let document = ForecastFile {
            forecasts: snips.to_vec(),
        };

        let content =
            serde_json::to_string_pretty(&document).context("Failed to serialize snip document")?;

        fs::write(&self.data_file, content).context("Failed to write snip document")
    }
}
