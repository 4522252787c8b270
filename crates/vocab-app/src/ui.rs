use std::io::Write;

use vocab_types::{DictionaryEntry, Word};

pub const HELP: &str = "\
commands:
  next, n              show a new random word
  save, s              save the word on screen
  list, l              list saved words
  show <i>             open saved word i
  delete <i> [<j>...]  remove saved words
  reload               re-read the dictionary
  help, h              this text
  quit, q              exit";

pub fn render_word(out: &mut impl Write, word: &Word) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", word.term)?;
    writeln!(out)?;
    writeln!(out, "  {}", word.definition)?;
    writeln!(out)
}

/// Saved words, numbered from 1
pub fn render_saved_list(out: &mut impl Write, entries: &[DictionaryEntry]) -> std::io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No saved words yet.");
    }

    writeln!(out, "Saved Words")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, entry.term())?;
    }
    Ok(())
}

pub fn render_detail(out: &mut impl Write, entry: &DictionaryEntry) -> std::io::Result<()> {
    render_word(out, &entry.word())
}
