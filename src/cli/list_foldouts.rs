// src/cli/list_foldouts.rs
use std::io::Write;
use std::path::Path;

use crate::inspector::error::InspectorResult;
use crate::inspector::saved_bool::SavedBoolStore;

pub fn run(store_path: &Path, out: &mut impl Write) -> InspectorResult<()> {
    let store = SavedBoolStore::open(store_path)?;
    writeln!(out, "Foldout store: {}\n", store_path.display())?;
    if store.is_empty() {
        writeln!(out, "(no foldout state recorded)")?;
        return Ok(());
    }

    writeln!(out, "{:<10} {}", "State", "Key")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for (key, expanded) in store.iter() {
        let state = if expanded { "expanded" } else { "collapsed" };
        writeln!(out, "{:<10} {}", state, key)?;
    }
    writeln!(out, "\n{} entries", store.len())?;
    Ok(())
}
