//! Full-screen rendering of the view model with crossterm.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color, Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use keeper_core::{AppViewModel, StatusKind};

const INPUT_PREFIX: &str = "> ";
const PROMPT_PREFIX: &str = "Import file path: ";
const KEY_HELP: &str =
    "enter add | up/down select | del remove | ^S/^T export | ^O import | ^L clear list | ^Q quit";

pub(crate) struct UiFrame<'a> {
    pub view: &'a AppViewModel,
    /// Char index of the entry-field cursor.
    pub cursor: usize,
    /// App-local list selection.
    pub selected: Option<usize>,
    /// Path buffer of the import prompt, when open.
    pub import_prompt: Option<&'a str>,
}

pub(crate) fn render(out: &mut impl Write, frame: &UiFrame<'_>) -> io::Result<()> {
    let view = frame.view;
    queue!(out, Hide, Clear(ClearType::All), MoveTo(0, 0))?;

    queue!(
        out,
        Print("keeper".bold()),
        Print("  |  duplicate-free lists".dim())
    )?;
    queue!(
        out,
        MoveTo(0, 1),
        Print(format!("{} item(s) saved", view.item_count).dim())
    )?;

    let input_row = 3u16;
    queue!(out, MoveTo(0, input_row), Print(INPUT_PREFIX), Print(&view.input))?;
    if view.live_duplicate {
        queue!(out, Print("  [already in the list]".with(Color::Yellow)))?;
    }

    if !view.status.message.is_empty() {
        let styled = view.status.message.clone().with(status_color(view.status.kind));
        queue!(out, MoveTo(0, input_row + 1), Print(styled))?;
    }

    let mut row = input_row + 3;
    let mut prompt_row = None;
    if let Some(prompt) = frame.import_prompt {
        queue!(out, MoveTo(0, row), Print(PROMPT_PREFIX.bold()), Print(prompt))?;
        prompt_row = Some(row);
        row += 2;
    }

    for (index, item) in view.items.iter().enumerate() {
        queue!(out, MoveTo(0, row))?;
        if frame.selected == Some(index) {
            queue!(out, Print(format!("> {item}").bold()))?;
        } else {
            queue!(out, Print(format!("  {item}")))?;
        }
        row += 1;
    }

    queue!(out, MoveTo(0, row + 1), Print(KEY_HELP.dim()))?;

    // Park the visible cursor where the next character lands.
    match (frame.import_prompt, prompt_row) {
        (Some(prompt), Some(at)) => {
            let col = clamp_col(PROMPT_PREFIX.chars().count() + prompt.chars().count());
            queue!(out, MoveTo(col, at), Show)?;
        }
        _ => {
            let col = clamp_col(INPUT_PREFIX.len() + frame.cursor);
            queue!(out, MoveTo(col, input_row), Show)?;
        }
    }

    out.flush()
}

fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Idle => Color::Grey,
        StatusKind::Added | StatusKind::Batch => Color::Green,
        StatusKind::Duplicate | StatusKind::Empty => Color::Yellow,
        StatusKind::Preview => Color::Cyan,
        StatusKind::Error => Color::Red,
    }
}

fn clamp_col(col: usize) -> u16 {
    col.min(u16::MAX as usize) as u16
}
