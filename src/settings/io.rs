// src/settings/io.rs
use bevy::log::{debug, error, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "BevyAppOrg";
const APPLICATION: &str = "AttributeInspector";
const CONFIG_FILE: &str = "inspector_settings.json";

pub fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "Could not determine project directories for inspector settings.",
        ))
    }
}

pub fn load_settings_from_file<T: for<'de> serde::de::Deserialize<'de> + Default>() -> io::Result<T> {
    load_settings_from_path(&get_config_path()?)
}

/// Missing file yields `T::default()`; a file that does not parse is an error.
pub fn load_settings_from_path<T: for<'de> serde::de::Deserialize<'de> + Default>(
    config_file: &Path,
) -> io::Result<T> {
    info!("InspectorSettings: Attempting to load settings from {:?}", config_file);
    match fs::File::open(config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => {
                    info!("InspectorSettings: Successfully deserialized settings.");
                    Ok(settings)
                }
                Err(e) => {
                    error!("InspectorSettings: Failed to parse settings file {:?}: {}", config_file, e);
                    Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Failed to parse settings file: {}", e),
                    ))
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("InspectorSettings: Settings file not found at {:?}. Returning default.", config_file);
            Ok(Default::default())
        }
        Err(e) => {
            error!("InspectorSettings: Failed to open settings file {:?}: {}", config_file, e);
            Err(e)
        }
    }
}

/// Loads settings, logging and falling back to defaults on any failure.
pub fn load_or_default<T: for<'de> serde::de::Deserialize<'de> + Default>() -> T {
    load_settings_from_file().unwrap_or_else(|e| {
        error!("InspectorSettings: Using defaults: {}", e);
        T::default()
    })
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> io::Result<()> {
    save_settings_to_path(settings, &get_config_path()?)
}

pub fn save_settings_to_path<T: serde::Serialize>(settings: &T, config_file: &Path) -> io::Result<()> {
    info!("InspectorSettings: Saving settings to {:?}", config_file);
    let file = fs::File::create(config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|e| {
        error!("InspectorSettings: Failed to serialize settings to {:?}: {}", config_file, e);
        io::Error::new(ErrorKind::Other, e)
    })?;
    debug!("InspectorSettings: wrote {:?}", config_file);
    Ok(())
}
