use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use keeper_core::{Effect, Msg};
use keeper_engine::{export_json, export_txt, parse_import, ExportError, ExportSummary, ItemSlot};
use keeper_logging::{keeper_info, keeper_warn};

/// Executes core effects synchronously and returns any follow-up messages.
///
/// Persist failures stay silent toward the user (the slot already logs
/// them); export outcomes are fed back so the status line can report them.
pub(crate) struct EffectRunner {
    slot: ItemSlot,
    export_dir: PathBuf,
}

impl EffectRunner {
    pub(crate) fn new(slot: ItemSlot, export_dir: PathBuf) -> Self {
        Self { slot, export_dir }
    }

    /// Startup read of the persistence slot.
    pub(crate) fn load_items(&self) -> Vec<String> {
        self.slot.load()
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistItems { items } => {
                    self.slot.save(&items);
                }
                Effect::ExportJson { items } => {
                    feedback.push(report_export(export_json(
                        &self.export_dir,
                        &items,
                        Utc::now(),
                    )));
                }
                Effect::ExportTxt { items } => {
                    feedback.push(report_export(export_txt(
                        &self.export_dir,
                        &items,
                        Utc::now(),
                    )));
                }
            }
        }
        feedback
    }
}

fn report_export(result: Result<ExportSummary, ExportError>) -> Msg {
    match result {
        Ok(summary) => {
            keeper_info!(
                "Exported {} item(s) to {:?}",
                summary.item_count,
                summary.path
            );
            Msg::ExportFinished {
                path: summary.path.display().to_string(),
            }
        }
        Err(err) => {
            keeper_warn!("Export failed: {}", err);
            Msg::ExportFailed {
                message: err.to_string(),
            }
        }
    }
}

/// Reads and parses an import file, producing the message for the core.
///
/// Read and parse failures both leave the list untouched; the returned
/// `ImportFailed` only drives the status line.
pub(crate) fn load_import_file(path: &Path) -> Msg {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            keeper_warn!("Failed to read import file {:?}: {}", path, err);
            return Msg::ImportFailed {
                message: format!("Import failed: {err}"),
            };
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match parse_import(&file_name, &content) {
        Ok(candidates) => Msg::ImportParsed(candidates),
        Err(err) => {
            keeper_warn!("Failed to parse import file {:?}: {}", path, err);
            Msg::ImportFailed {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use keeper_core::{Effect, Msg};
    use keeper_engine::ItemSlot;
    use tempfile::TempDir;

    use super::{load_import_file, EffectRunner};

    fn runner_in(temp: &TempDir) -> EffectRunner {
        EffectRunner::new(
            ItemSlot::new(temp.path().join(".keeper_items.json")),
            temp.path().join("exports"),
        )
    }

    #[test]
    fn persist_effect_round_trips_through_the_slot() {
        let temp = TempDir::new().unwrap();
        let runner = runner_in(&temp);

        let feedback = runner.run(vec![Effect::PersistItems {
            items: vec!["Apple".to_owned(), "Banana".to_owned()],
        }]);

        assert!(feedback.is_empty());
        assert_eq!(runner.load_items(), vec!["Apple", "Banana"]);
    }

    #[test]
    fn export_effect_writes_a_file_and_reports_the_path() {
        let temp = TempDir::new().unwrap();
        let runner = runner_in(&temp);

        let feedback = runner.run(vec![Effect::ExportJson {
            items: vec!["Apple".to_owned()],
        }]);

        match feedback.as_slice() {
            [Msg::ExportFinished { path }] => {
                let written = load_import_file(std::path::Path::new(path));
                assert_eq!(written, Msg::ImportParsed(vec!["Apple".to_owned()]));
            }
            other => panic!("unexpected feedback: {other:?}"),
        }
    }

    #[test]
    fn unreadable_import_file_reports_a_failure_message() {
        let temp = TempDir::new().unwrap();
        let msg = load_import_file(&temp.path().join("missing.txt"));
        match msg {
            Msg::ImportFailed { message } => assert!(message.starts_with("Import failed: ")),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn text_import_file_is_tokenized() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("words.txt");
        std::fs::write(&path, "apple, banana\ncherry pie").unwrap();

        assert_eq!(
            load_import_file(&path),
            Msg::ImportParsed(vec![
                "apple".to_owned(),
                "banana".to_owned(),
                "cherry".to_owned(),
                "pie".to_owned(),
            ])
        );
    }
}
