use std::fs;
use std::path::{Path, PathBuf};

use keeper_core::collapse;
use keeper_logging::{keeper_error, keeper_info, keeper_warn};

use crate::persist::AtomicFileWriter;

/// The single persistence slot: one JSON file holding the item array.
///
/// Both directions swallow failures. A slot that cannot be read yields an
/// empty list; a slot that cannot be written is logged and skipped, and the
/// in-memory list stays authoritative for the session.
pub struct ItemSlot {
    path: PathBuf,
}

impl ItemSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the slot at startup. Missing, unreadable, and unparseable all
    /// yield an empty list. The loaded array is collapsed by normalized key
    /// so a hand-edited slot cannot seed duplicate entries.
    pub fn load(&self) -> Vec<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Vec::new();
            }
            Err(err) => {
                keeper_warn!("Failed to read item slot {:?}: {}", self.path, err);
                return Vec::new();
            }
        };

        let items: Vec<String> = match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(err) => {
                keeper_warn!("Failed to parse item slot {:?}: {}", self.path, err);
                return Vec::new();
            }
        };

        keeper_info!("Loaded {} item(s) from {:?}", items.len(), self.path);
        collapse(&items)
    }

    /// Writes the item array after a mutation. Failures are logged and
    /// swallowed.
    pub fn save(&self, items: &[String]) {
        let content = match serde_json::to_string(items) {
            Ok(text) => text,
            Err(err) => {
                keeper_error!("Failed to serialize item slot: {}", err);
                return;
            }
        };

        let (dir, filename) = match (self.path.parent(), self.path.file_name()) {
            (Some(dir), Some(name)) => (dir.to_path_buf(), name.to_string_lossy().into_owned()),
            _ => {
                keeper_error!("Item slot path has no parent directory: {:?}", self.path);
                return;
            }
        };

        let writer = AtomicFileWriter::new(dir);
        if let Err(err) = writer.write(&filename, &content) {
            keeper_error!("Failed to write item slot {:?}: {}", self.path, err);
        }
    }
}
