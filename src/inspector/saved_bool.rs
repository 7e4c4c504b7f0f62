// src/inspector/saved_bool.rs

use bevy::log::{debug, error, info, warn};
use directories_next::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "BevyAppOrg";
const APPLICATION: &str = "AttributeInspector";
const STORE_FILE: &str = "foldouts.json";

/// Persisted boolean cells keyed by string, backed by a JSON file or kept in memory.
#[derive(Debug, Default)]
pub struct SavedBoolStore {
    values: BTreeMap<String, bool>,
    path: Option<PathBuf>,
    dirty: bool,
}

pub fn default_store_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(STORE_FILE))
    } else {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "Could not determine project directories for foldout state.",
        ))
    }
}

impl SavedBoolStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let values = match fs::File::open(&path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                error!("SavedBoolStore: Failed to parse {:?}: {}", path, e);
                io::Error::new(ErrorKind::InvalidData, format!("Failed to parse foldout state: {}", e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("SavedBoolStore: {:?} not found, starting empty.", path);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        debug!("SavedBoolStore: loaded {} cells from {:?}", values.len(), path);
        Ok(Self {
            values,
            path: Some(path),
            dirty: false,
        })
    }

    pub fn open_default() -> io::Result<Self> {
        Self::open(default_store_path()?)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the stored value, creating the cell with `default` when unseen.
    pub fn load_or_create(&mut self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(value) => *value,
            None => {
                self.values.insert(key.to_string(), default);
                self.dirty = true;
                default
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    /// Stores `value` and writes the file immediately when it changed.
    pub fn set(&mut self, key: &str, value: bool) {
        if self.values.insert(key.to_string(), value) != Some(value) {
            self.dirty = true;
            if let Err(e) = self.flush() {
                warn!("SavedBoolStore: failed to persist '{}': {}", key, e);
            }
        }
    }

    /// Removes every cell whose key starts with `prefix`; returns how many went.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        let before = self.values.len();
        self.values.retain(|key, _| !key.starts_with(prefix));
        let removed = before - self.values.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    pub fn clear(&mut self) -> usize {
        self.remove_prefix("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes pending changes. In-memory stores just clear the dirty flag.
    pub fn flush(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let writer = BufWriter::new(fs::File::create(path)?);
            serde_json::to_writer_pretty(writer, &self.values).map_err(|e| {
                error!("SavedBoolStore: Failed to serialize to {:?}: {}", path, e);
                io::Error::new(ErrorKind::Other, e)
            })?;
            debug!("SavedBoolStore: wrote {} cells to {:?}", self.values.len(), path);
        }
        self.dirty = false;
        Ok(())
    }
}
