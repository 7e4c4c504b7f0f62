// src/cli/reset_foldouts.rs
use std::io::Write;
use std::path::Path;

use crate::inspector::error::InspectorResult;
use crate::inspector::saved_bool::SavedBoolStore;

/// Removes every key, or only the keys of `owner` and the owners nested in it.
pub fn run(store_path: &Path, owner: Option<&str>, out: &mut impl Write) -> InspectorResult<()> {
    let mut store = SavedBoolStore::open(store_path)?;
    let removed = match owner {
        Some(owner) => store.remove_prefix(&format!("{}/", owner.trim_end_matches('/'))),
        None => store.clear(),
    };
    store.flush()?;
    writeln!(out, "Removed {} foldout state(s) from {}", removed, store_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(path: &Path) {
        let mut store = SavedBoolStore::open(path).unwrap();
        store.set("resource:Ship/group:Advanced", true);
        store.set("resource:Ship/runtime/field:bank", true);
        store.set("resource:ShipYard/group:Docks", true);
    }

    #[test]
    fn resets_one_owner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foldouts.json");
        seeded_store(&path);

        let mut out = Vec::new();
        run(&path, Some("resource:Ship"), &mut out).unwrap();

        let store = SavedBoolStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("resource:ShipYard/group:Docks"), Some(true));
        assert!(String::from_utf8(out).unwrap().starts_with("Removed 2"));
    }

    #[test]
    fn resets_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foldouts.json");
        seeded_store(&path);

        run(&path, None, &mut Vec::new()).unwrap();
        assert!(SavedBoolStore::open(&path).unwrap().is_empty());
    }
}
