//! Registry persistence with file locking.
//!
//! The registry is stored as a single JSON snapshot, replaced atomically on
//! every save. A crashed or failed save leaves the previous consistent
//! snapshot intact, which is what makes a catalog operation's paired
//! ledger+products write hit disk all-or-nothing.
//!
//! Unlike a lossable cache, a corrupted snapshot here is an infrastructure
//! failure and propagates as [`Error::Store`] — silently starting over with
//! an empty registry would discard the inventory database.

use crate::{Error, Registry, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl Registry {
    /// Load the registry from a file with shared locking.
    ///
    /// A missing file is a fresh install and yields an empty registry.
    /// Unreadable or unparseable contents are an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No registry file found at {:?}, starting empty", path);
            return Ok(Self::new());
        }

        let file = File::open(path)?;

        // Shared lock for reading
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        match serde_json::from_str::<Registry>(&contents) {
            Ok(registry) => {
                tracing::debug!("Loaded registry from {:?}", path);
                Ok(registry)
            }
            Err(e) => Err(Error::Store(format!(
                "registry file {} is corrupted: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Save the registry to a file with exclusive locking.
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file in the target directory
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Temp file must live in the same directory for the rename to be atomic
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "registry path missing parent")
        })?)?;

        // Exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace old registry file
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved registry to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WarehouseKind;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("registry.json");

        let mut registry = Registry::new();
        let id = registry
            .create("Fruit cellar", 100.0, WarehouseKind::Fruit)
            .unwrap();
        registry.add_product(id, "Apple", 10.0);
        registry.add_product(id, "Banana", 5.0);

        registry.save(&path).unwrap();
        let loaded = Registry::load(&path).unwrap();

        assert_eq!(loaded, registry);
        let w = loaded.get(id).unwrap();
        assert_eq!(w.products()["Apple"], 10.0);
        assert_eq!(w.balance(), 15.0);
    }

    #[test]
    fn test_next_id_survives_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("registry.json");

        let mut registry = Registry::new();
        let id = registry.create("A", 10.0, WarehouseKind::Fruit).unwrap();
        registry.delete(id);
        registry.save(&path).unwrap();

        let mut loaded = Registry::load(&path).unwrap();
        let next = loaded.create("B", 10.0, WarehouseKind::Fruit).unwrap();
        assert!(next > id);
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let registry = Registry::load(&path).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_corrupted_file_is_store_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corrupted.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let result = Registry::load(&path);
        assert!(matches!(result, Err(Error::Store(_))));
    }

    #[test]
    fn test_atomic_save() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("registry.json");

        Registry::new().save(&path).unwrap();

        // Verify registry file exists and no stray temp files remain
        assert!(path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "registry.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only registry.json, found extras: {:?}",
            extras
        );
    }
}
