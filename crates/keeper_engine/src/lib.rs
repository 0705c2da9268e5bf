//! Keeper engine: persistence slot and file import/export adapters.
mod export;
mod filename;
mod import;
mod persist;
mod slot;

pub use export::{
    export_json, export_txt, ExportError, ExportSummary, EXPORT_STEM, EXPORT_TYPE, EXPORT_VERSION,
};
pub use filename::timestamped_filename;
pub use import::{parse_import, ImportError};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use slot::ItemSlot;
