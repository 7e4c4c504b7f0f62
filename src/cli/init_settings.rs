// src/cli/init_settings.rs
use std::io::Write;
use std::path::Path;

use crate::inspector::error::InspectorResult;
use crate::settings::io::{
    get_config_path, load_settings_from_file, load_settings_from_path, save_settings_to_file,
    save_settings_to_path,
};
use crate::settings::InspectorSettings;

/// Rewrites the settings file with every field present, keeping values already set.
/// Without a path the platform config directory is used.
pub fn run(config_file: Option<&Path>, out: &mut impl Write) -> InspectorResult<()> {
    let written = match config_file {
        Some(path) => {
            let settings: InspectorSettings = load_settings_from_path(path)?;
            save_settings_to_path(&settings, path)?;
            path.to_path_buf()
        }
        None => {
            let settings: InspectorSettings = load_settings_from_file()?;
            save_settings_to_file(&settings)?;
            get_config_path()?
        }
    };
    writeln!(out, "Wrote inspector settings to {}", written.display())?;
    Ok(())
}
