//! Output sink - where rendered text goes.
//!
//! Resolves the output file name, picks a style adapter for the
//! destination and drives a renderer into it.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use console::{Style, Term};
use tracing::debug;

use crate::domain::ChangeLog;
use crate::error::{ChangelogError, Result};
use crate::pager::{self, ConsoleTerminal};
use crate::render::{Color, OutputFormat, RenderOptions, StyleDirective, StyledSink};

/// Where the report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output, optionally through the pager
    Stdout { page: bool },
    File(PathBuf),
}

/// Resolve the output file name for `format`.
///
/// A path without extension gets the format token appended (`log` and
/// `log.` both become `log.md`). A path with an extension must name the
/// format, ignoring case.
///
/// # Errors
/// * [ChangelogError::InvalidExtension] - If the extension names another format
pub fn resolve_output_path(path: &Path, format: OutputFormat) -> Result<PathBuf> {
    match path.extension().filter(|ext| !ext.is_empty()) {
        None => {
            let mut name = path.as_os_str().to_owned();
            if !name.to_string_lossy().ends_with('.') {
                name.push(".");
            }
            name.push(format.token());
            Ok(PathBuf::from(name))
        }
        Some(ext) => {
            let ext = ext.to_string_lossy();
            if format.matches_extension(&ext) {
                Ok(path.to_path_buf())
            } else {
                Err(ChangelogError::InvalidExtension(ext.into_owned()))
            }
        }
    }
}

/// Adapter that drops style directives
pub struct PlainSink<W: Write> {
    inner: W,
}

impl<W: Write> PlainSink<W> {
    pub fn new(inner: W) -> Self {
        PlainSink { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> StyledSink for PlainSink<W> {
    fn span(&mut self, text: &str, _style: Option<StyleDirective>) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n")
    }
}

/// Adapter that turns style directives into ANSI escapes
pub struct TerminalSink<W: Write> {
    inner: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(inner: W) -> Self {
        TerminalSink { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> StyledSink for TerminalSink<W> {
    fn span(&mut self, text: &str, style: Option<StyleDirective>) -> io::Result<()> {
        match style {
            Some(directive) => write!(self.inner, "{}", console_style(directive).apply_to(text)),
            None => self.inner.write_all(text.as_bytes()),
        }
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n")
    }
}

/// Map a style directive onto a `console` style
pub fn console_style(directive: StyleDirective) -> Style {
    let style = Style::new().force_styling(true);
    let style = match directive.foreground {
        Color::White => style.white().bright(),
        Color::DarkGreen => style.green(),
        Color::DarkYellow => style.yellow(),
        Color::DarkGray => style.black().bright(),
    };
    match directive.background {
        Color::White => style.on_white().on_bright(),
        Color::DarkGreen => style.on_green(),
        Color::DarkYellow => style.on_yellow(),
        Color::DarkGray => style.on_black().on_bright(),
    }
}

/// Render `changelog` in `format` to `destination`.
///
/// Files are created (or truncated) only once rendering starts and are
/// closed on every exit path. Stdout is styled when it is a terminal.
pub fn write_report(
    format: OutputFormat,
    changelog: &ChangeLog,
    options: &RenderOptions,
    destination: &Destination,
) -> Result<()> {
    let renderer = crate::render::renderer_for(format);

    match destination {
        Destination::File(path) => {
            debug!("Writing {} report to {}", format, path.display());
            let file = File::create(path).map_err(|e| {
                ChangelogError::Io(io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.display(), e),
                ))
            })?;
            let mut sink = PlainSink::new(BufWriter::new(file));
            renderer.render(changelog, options, &mut sink)?;
            sink.into_inner().flush()?;
        }
        Destination::Stdout { page } => {
            let term = Term::stdout();
            let attended = term.is_term();

            if *page && attended {
                let mut sink = TerminalSink::new(Vec::new());
                renderer.render(changelog, options, &mut sink)?;
                let text = String::from_utf8_lossy(&sink.into_inner()).into_owned();
                pager::page(ConsoleTerminal::new(term), &text)?;
            } else if attended {
                let mut sink = TerminalSink::new(io::stdout().lock());
                renderer.render(changelog, options, &mut sink)?;
                sink.into_inner().flush()?;
            } else {
                let mut sink = PlainSink::new(io::stdout().lock());
                renderer.render(changelog, options, &mut sink)?;
                sink.into_inner().flush()?;
            }
        }
    }

    Ok(())
}
