//! Single key prompts for review and drill sessions.

use anyhow::Result;
use anyhow::bail;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;
use termion::clear;
use termion::event::Event;
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use termion::raw::RawTerminal;

/// Keys that end the session from a prompt.
#[derive(Clone, Copy)]
enum Quit {
    /// `q` or Ctrl-C.
    Letter,
    /// Ctrl-C only, for prompts where any key is an answer.
    Interrupt,
}

fn ends_session(key: Key, quit: Quit) -> bool {
    match key {
        Key::Ctrl('c') => true,
        Key::Char('q') => matches!(quit, Quit::Letter),
        _ => false,
    }
}

/// Reads keys until `select` accepts one.
fn read_key<T>(
    stdout: &mut RawTerminal<std::io::Stdout>,
    quit: Quit,
    mut select: impl FnMut(Key) -> Option<T>,
) -> Result<T> {
    for event in stdin().events() {
        let Event::Key(key) = event? else {
            continue;
        };

        if ends_session(key, quit) {
            write!(stdout, "\r\n")?;
            stdout.flush()?;

            bail!("Session ended early")
        }

        if let Some(selection) = select(key) {
            return Ok(selection);
        }
    }

    bail!("Input closed")
}

/// Displays the given prompt and waits for a yes / no answer. Yes, or the right arrow, maps to
/// true.
pub fn binary(prompt: impl AsRef<str>) -> Result<bool> {
    let mut stdout = stdout().into_raw_mode()?;
    write!(stdout, "{} [y/n] ", prompt.as_ref())?;
    stdout.flush()?;

    let selection = read_key(&mut stdout, Quit::Letter, |key| match key {
        Key::Char('y') | Key::Right => Some(true),
        Key::Char('n') | Key::Left => Some(false),
        _ => None,
    })?;

    write!(stdout, "{}\r\n", if selection { "yes" } else { "no" })?;
    stdout.flush()?;

    Ok(selection)
}

/// Asks for one of `count` alternatives, by number (`1`..) or letter (`a`..).
pub fn choice(prompt: impl AsRef<str>, count: usize) -> Result<usize> {
    let mut stdout = stdout().into_raw_mode()?;
    write!(stdout, "{} ", prompt.as_ref())?;
    stdout.flush()?;

    let selection = read_key(&mut stdout, Quit::Letter, |key| match key {
        Key::Char(c) => option_index(c, count),
        _ => None,
    })?;

    write!(stdout, "{}\r\n", option_letter(selection))?;
    stdout.flush()?;

    Ok(selection)
}

/// Displays the given prompt and waits until a key is pressed.
pub fn any(prompt: impl AsRef<str>) -> Result<()> {
    let mut stdout = stdout().into_raw_mode()?;
    write!(stdout, "{}", prompt.as_ref())?;
    stdout.flush()?;

    read_key(&mut stdout, Quit::Interrupt, |_| Some(()))?;

    write!(stdout, "\r{}", clear::AfterCursor)?;
    stdout.flush()?;

    Ok(())
}

pub fn option_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

fn option_index(c: char, count: usize) -> Option<usize> {
    let index = match c {
        '1'..='9' => c as usize - '1' as usize,
        'a'..='z' => c as usize - 'a' as usize,
        'A'..='Z' => c as usize - 'A' as usize,
        _ => return None,
    };

    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_to_options() {
        assert_eq!(option_index('1', 4), Some(0));
        assert_eq!(option_index('4', 4), Some(3));
        assert_eq!(option_index('5', 4), None);
        assert_eq!(option_index('b', 4), Some(1));
        assert_eq!(option_index('D', 4), Some(3));
        assert_eq!(option_index('e', 4), None);
        assert_eq!(option_index('?', 4), None);
    }

    #[test]
    fn q_only_quits_answer_prompts() {
        assert!(ends_session(Key::Char('q'), Quit::Letter));
        assert!(ends_session(Key::Ctrl('c'), Quit::Letter));
        assert!(!ends_session(Key::Char('y'), Quit::Letter));

        assert!(!ends_session(Key::Char('q'), Quit::Interrupt));
        assert!(ends_session(Key::Ctrl('c'), Quit::Interrupt));
    }

    #[test]
    fn letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
    }
}
