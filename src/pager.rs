//! Page-at-a-time display of rendered output on an interactive terminal.
//!
//! The pager is a small state machine over a [PagerTerminal]:
//! it streams lines until the screen is full, then waits for a key.
//! `q` quits, space shows the next page, Enter shows one more line.

use std::io;

use console::{Key, Term};

/// Where the pager is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Writing lines to the screen
    Streaming,
    /// Screen is full; waiting for the user
    AwaitingInput,
    /// Input exhausted or user quit
    Done,
}

/// What the user asked for at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerKey {
    Quit,
    NextPage,
    NextLine,
}

/// The terminal operations the pager needs
pub trait PagerTerminal {
    /// Visible rows
    fn height(&self) -> usize;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt`, block for one key, then erase the prompt
    fn prompt(&mut self, prompt: &str) -> io::Result<PagerKey>;
}

/// Prompt text for a given completion percentage
pub fn prompt_text(percent: usize) -> String {
    format!("-- More ({}%) -- ", percent)
}

pub struct Pager<T: PagerTerminal> {
    term: T,
    total: usize,
    shown: usize,
    /// Lines written since the last prompt
    window: usize,
    state: PagerState,
}

impl<T: PagerTerminal> Pager<T> {
    /// A pager for `total` lines
    pub fn new(term: T, total: usize) -> Self {
        Pager {
            term,
            total,
            shown: 0,
            window: 0,
            state: PagerState::Streaming,
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn into_terminal(self) -> T {
        self.term
    }

    /// Rows per page; one row is left for the prompt
    fn page_size(&self) -> usize {
        self.term.height().saturating_sub(1).max(1)
    }

    fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        (self.shown * 100 + self.total / 2) / self.total
    }

    /// Offer one line to the pager.
    ///
    /// When the page is full the user is prompted before `line` is
    /// written, so the line that triggered the prompt is never dropped
    /// unless the user quits.
    pub fn push_line(&mut self, line: &str) -> io::Result<PagerState> {
        if self.state == PagerState::Done {
            return Ok(self.state);
        }

        if self.window >= self.page_size() {
            self.state = PagerState::AwaitingInput;
            let prompt = prompt_text(self.percent());
            match self.term.prompt(&prompt)? {
                PagerKey::Quit => {
                    self.state = PagerState::Done;
                    return Ok(self.state);
                }
                PagerKey::NextPage => self.window = 0,
                PagerKey::NextLine => self.window = self.page_size() - 1,
            }
            self.state = PagerState::Streaming;
        }

        self.term.write_line(line)?;
        self.shown += 1;
        self.window += 1;
        Ok(self.state)
    }

    /// Mark the input as exhausted
    pub fn finish(&mut self) -> PagerState {
        self.state = PagerState::Done;
        self.state
    }
}

/// Page every line of `text` through `term`
pub fn page<T: PagerTerminal>(term: T, text: &str) -> io::Result<PagerState> {
    let lines: Vec<&str> = text.lines().collect();
    let mut pager = Pager::new(term, lines.len());

    for line in lines {
        if pager.push_line(line)? == PagerState::Done {
            return Ok(PagerState::Done);
        }
    }

    Ok(pager.finish())
}

/// [PagerTerminal] over a `console` terminal
pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    pub fn new(term: Term) -> Self {
        ConsoleTerminal { term }
    }
}

impl PagerTerminal for ConsoleTerminal {
    fn height(&self) -> usize {
        let (rows, _cols) = self.term.size();
        rows as usize
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<PagerKey> {
        self.term.write_str(prompt)?;
        let key = self.term.read_key()?;
        self.term.clear_line()?;

        Ok(match key {
            Key::Char('q') | Key::Char('Q') => PagerKey::Quit,
            Key::Enter => PagerKey::NextLine,
            _ => PagerKey::NextPage,
        })
    }
}
