use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use anyhow::Context;
use vocab_types::AppEvent;

use crate::state::AppState;
use crate::ui;

/// Whether the loop keeps reading input
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one event to the session and print the outcome
pub fn handle_event(
    state: &mut AppState,
    event: AppEvent,
    out: &mut impl Write,
) -> anyhow::Result<Flow> {
    tracing::debug!("Handling {:?}", event);

    match event {
        AppEvent::NextWord => show_next_word(state, out)?,
        AppEvent::SaveCurrent => match state.session.save_current() {
            Some(entry) => writeln!(out, "Saved '{}'.", entry.term())?,
            None => writeln!(out, "Nothing to save yet.")?,
        },
        AppEvent::ListSaved => ui::render_saved_list(out, state.session.saved())?,
        AppEvent::ShowSaved(index) => match state.session.saved_entry(index) {
            Ok(entry) => ui::render_detail(out, entry)?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        AppEvent::DeleteSaved(offsets) => {
            let indices: BTreeSet<usize> = offsets.into_iter().collect();
            match state.session.delete_saved(&indices) {
                Ok(removed) => writeln!(out, "Removed {removed}.")?,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        AppEvent::Reload => match state.load_dictionary() {
            Ok(count) => writeln!(out, "Loaded {count} words.")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        AppEvent::Help => writeln!(out, "{}", ui::HELP)?,
        AppEvent::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn show_next_word(state: &mut AppState, out: &mut impl Write) -> anyhow::Result<()> {
    match state.session.next_word() {
        Ok(word) => ui::render_word(out, word)?,
        Err(e) => writeln!(out, "error: {e}")?,
    }
    Ok(())
}

/// App's main loop: load, show a first word, then serve commands until EOF or quit
pub fn event_loop(
    state: &mut AppState,
    mut input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    if let Err(e) = state.load_dictionary() {
        tracing::error!("Dictionary unavailable: {e}");
        writeln!(out, "error: {e}")?;
    }
    show_next_word(state, &mut out)?;
    out.flush()?;

    tracing::info!("[EVENT_LOOP] Waiting for commands");
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }

        // Undecodable bytes become U+FFFD and fail as an unknown command
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<AppEvent>() {
            Ok(event) => {
                if handle_event(state, event, &mut out)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        out.flush()?;
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}
