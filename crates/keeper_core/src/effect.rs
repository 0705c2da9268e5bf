/// I/O requested by the core and executed by the platform layer.
///
/// Effects carry a snapshot of the list so the executor never reaches back
/// into state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write this snapshot of the list to the persistence slot.
    PersistItems { items: Vec<String> },
    /// Serialize this snapshot to a JSON export file.
    ExportJson { items: Vec<String> },
    /// Serialize this snapshot to a plain-text export file.
    ExportTxt { items: Vec<String> },
}
