//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI.

use crate::core::{Keyboard, Tile, Word};
use crate::game::GameSession;
use crate::output::formatters::{colored_keyboard, colored_row};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple game on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if the dictionary cannot supply a target.
pub fn run_simple<R: Rng>(session: &mut GameSession<'_, R>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout)
}

/// Run the simple game against arbitrary input and output streams
///
/// # Errors
///
/// Same as [`run_simple`].
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<R, I, O>(
    session: &mut GameSession<'_, R>,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let length = session.config().word_length;

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    Plurdle - Simple Mode                     ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the hidden {length}-letter word in {} tries.",
        session.max_tries()
    )?;
    writeln!(output, "Green = right spot, yellow = elsewhere in the word.")?;
    writeln!(output, "Commands: ':quit' to exit, ':new' for a new word\n")?;

    session.initialize()?;
    let mut history: Vec<(Word, Vec<Tile>)> = Vec::new();
    let mut keyboard = Keyboard::new();

    loop {
        let prompt = format!("Guess {}/{}", session.tries() + 1, session.max_tries());
        let Some(line) = read_line(input, output, &prompt)? else {
            return Ok(());
        };

        // Commands carry a ':' prefix so that every word stays guessable
        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                session.initialize()?;
                history.clear();
                keyboard.reset();
                writeln!(output, "\n🔄 New word chosen!\n")?;
                continue;
            }
            _ => {}
        }

        let guess = match Word::with_length(&line, length) {
            Ok(word) => word,
            Err(e) => {
                writeln!(output, "❌ {e}\n")?;
                continue;
            }
        };

        let scored = match session.submit_guess(&guess) {
            Ok(scored) => scored,
            Err(e) if e.is_recoverable() => {
                writeln!(output, "❌ {e}\n")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let tiles = scored.score.tiles(&scored.guess);
        keyboard.record(&scored.guess, &tiles);
        history.push((scored.guess, tiles));

        writeln!(output)?;
        for (word, tiles) in &history {
            writeln!(output, "  {}", colored_row(word, tiles))?;
        }
        writeln!(output)?;
        for row in colored_keyboard(&keyboard) {
            writeln!(output, "  {row}")?;
        }
        writeln!(output)?;

        if session.is_active() {
            continue;
        }

        if scored.win {
            writeln!(output, "{}", "🎉 You win :)".bright_green().bold())?;
            writeln!(
                output,
                "Solved in {} {}",
                history.len(),
                if history.len() == 1 { "guess" } else { "guesses" }
            )?;
        } else if let Some(target) = session.revealed_target() {
            writeln!(
                output,
                "{} {}",
                "You lose. :( The word was".red(),
                target.shout().bright_yellow().bold()
            )?;
        }

        let again = read_line(input, output, "Play again? (yes/no)")?.unwrap_or_default();
        if matches!(again.to_lowercase().as_str(), "yes" | "y") {
            session.initialize()?;
            history.clear();
            keyboard.reset();
            writeln!(output, "\n🔄 New game started!\n")?;
        } else {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
