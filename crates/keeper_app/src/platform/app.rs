use std::io::{self, Write};
use std::path::Path;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use keeper_core::{update, AppState, Msg};
use keeper_engine::ItemSlot;
use keeper_logging::keeper_info;

use super::effects::{load_import_file, EffectRunner};
use super::{logging, ui};

const SLOT_FILENAME: &str = ".keeper_items.json";
const LOG_FILENAME: &str = "keeper.log";
const EXPORT_DIRNAME: &str = "exports";

pub(crate) fn run_app() -> io::Result<()> {
    let data_dir = std::env::current_dir()?;
    logging::initialize(&data_dir.join(LOG_FILENAME));
    keeper_info!("keeper starting in {:?}", data_dir);

    let runner = EffectRunner::new(
        ItemSlot::new(data_dir.join(SLOT_FILENAME)),
        data_dir.join(EXPORT_DIRNAME),
    );

    let mut app = App::new(runner);
    let restored = app.runner.load_items();
    app.dispatch(Msg::ItemsRestored(restored));

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    app.state.consume_dirty();
    app.render(&mut stdout)?;

    loop {
        let event = event::read()?;
        if let Control::Quit = app.handle_event(event) {
            break;
        }
        let core_dirty = app.state.consume_dirty();
        if core_dirty || std::mem::take(&mut app.ui_dirty) {
            app.render(&mut stdout)?;
        }
    }

    Ok(())
}

enum Control {
    Continue,
    Quit,
}

/// Terminal event loop state: the core state plus presentation-only bits
/// (cursor, selection, import prompt) the core has no business knowing.
struct App {
    state: AppState,
    runner: EffectRunner,
    /// Char index of the entry-field cursor.
    cursor: usize,
    /// Selected row of the item list.
    selected: Option<usize>,
    /// Path buffer while the import prompt is open.
    import_prompt: Option<String>,
    /// Presentation changed without the core noticing.
    ui_dirty: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            cursor: 0,
            selected: None,
            import_prompt: None,
            ui_dirty: false,
        }
    }

    /// Runs a message through the core, executes its effects, and feeds any
    /// follow-up messages straight back in.
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for follow_up in self.runner.run(effects) {
            let state = std::mem::take(&mut self.state);
            let (state, rest) = update(state, follow_up);
            debug_assert!(rest.is_empty());
            self.state = state;
        }

        self.clamp_presentation();
    }

    fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Paste(text) => {
                self.handle_paste(text);
                Control::Continue
            }
            Event::Resize(..) => {
                self.ui_dirty = true;
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_shortcut(key.code);
        }
        if self.import_prompt.is_some() {
            self.handle_prompt_key(key.code);
            return Control::Continue;
        }

        match key.code {
            KeyCode::Enter => self.dispatch(Msg::Submitted),
            KeyCode::Esc => self.dispatch(Msg::InputCleared),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => {
                if let Some(index) = self.selected {
                    if let Some(item) = self.state.items().get(index).cloned() {
                        self.dispatch(Msg::ItemDeleted(item));
                    }
                } else {
                    self.delete_char_at();
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                self.ui_dirty = true;
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input_chars());
                self.ui_dirty = true;
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.ui_dirty = true;
            }
            KeyCode::End => {
                self.cursor = self.input_chars();
                self.ui_dirty = true;
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => {}
        }
        Control::Continue
    }

    fn handle_shortcut(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Char('c') => return Control::Quit,
            KeyCode::Char('s') => self.dispatch(Msg::ExportJsonRequested),
            KeyCode::Char('t') => self.dispatch(Msg::ExportTxtRequested),
            KeyCode::Char('o') => {
                self.import_prompt = Some(String::new());
                self.ui_dirty = true;
            }
            KeyCode::Char('l') => self.dispatch(Msg::ListCleared),
            _ => {}
        }
        Control::Continue
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                if let Some(path) = self.import_prompt.take() {
                    self.ui_dirty = true;
                    let path = path.trim().to_owned();
                    if !path.is_empty() {
                        let msg = load_import_file(Path::new(&path));
                        self.dispatch(msg);
                    }
                }
            }
            KeyCode::Esc => {
                self.import_prompt = None;
                self.ui_dirty = true;
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.import_prompt.as_mut() {
                    prompt.pop();
                    self.ui_dirty = true;
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = self.import_prompt.as_mut() {
                    prompt.push(c);
                    self.ui_dirty = true;
                }
            }
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: String) {
        if let Some(prompt) = self.import_prompt.as_mut() {
            prompt.push_str(text.trim());
            self.ui_dirty = true;
            return;
        }

        let offset = self.cursor_byte_offset();
        let pasted_chars = text.chars().count();
        self.dispatch(Msg::Pasted {
            text,
            cursor: offset,
        });
        self.cursor = (self.cursor + pasted_chars).min(self.input_chars());
    }

    fn insert_char(&mut self, c: char) {
        let mut text = self.state.input().to_owned();
        text.insert(byte_offset(&text, self.cursor), c);
        self.cursor += 1;
        self.dispatch(Msg::InputChanged(text));
    }

    fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut text = self.state.input().to_owned();
        text.remove(byte_offset(&text, self.cursor - 1));
        self.cursor -= 1;
        self.dispatch(Msg::InputChanged(text));
    }

    fn delete_char_at(&mut self) {
        let mut text = self.state.input().to_owned();
        if self.cursor >= text.chars().count() {
            return;
        }
        text.remove(byte_offset(&text, self.cursor));
        self.dispatch(Msg::InputChanged(text));
    }

    fn move_selection_up(&mut self) {
        if self.state.items().is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None | Some(0) => 0,
            Some(index) => index - 1,
        });
        self.ui_dirty = true;
    }

    fn move_selection_down(&mut self) {
        let count = self.state.items().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(index) => (index + 1).min(count - 1),
        });
        self.ui_dirty = true;
    }

    fn input_chars(&self) -> usize {
        self.state.input().chars().count()
    }

    fn cursor_byte_offset(&self) -> usize {
        byte_offset(self.state.input(), self.cursor)
    }

    /// Keeps cursor and selection valid after the core changed underneath.
    fn clamp_presentation(&mut self) {
        self.cursor = self.cursor.min(self.input_chars());
        let count = self.state.items().len();
        self.selected = match self.selected {
            Some(_) if count == 0 => None,
            Some(index) => Some(index.min(count - 1)),
            None => None,
        };
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let view = self.state.view();
        ui::render(
            out,
            &ui::UiFrame {
                view: &view,
                cursor: self.cursor,
                selected: self.selected,
                import_prompt: self.import_prompt.as_deref(),
            },
        )
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Puts the terminal into raw mode for the session and restores it on drop,
/// including the panic path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(
            out,
            DisableBracketedPaste,
            LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    }
}
