//! Style directives and the sink renderers write through.
//!
//! Renderers never touch the terminal. They attach symbolic
//! [`StyleDirective`]s to text spans and an output adapter decides what to
//! do with them (see [`crate::output`]).

use std::io;

use crate::domain::BucketKey;

/// Symbolic terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    DarkGreen,
    DarkYellow,
    DarkGray,
}

/// Foreground/background pairing attached to a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleDirective {
    pub foreground: Color,
    pub background: Color,
}

impl StyleDirective {
    pub const TAG_BANNER: StyleDirective = StyleDirective {
        foreground: Color::White,
        background: Color::DarkGreen,
    };

    pub const UNTAGGED_BANNER: StyleDirective = StyleDirective {
        foreground: Color::White,
        background: Color::DarkYellow,
    };

    pub const DATE_BANNER: StyleDirective = StyleDirective {
        foreground: Color::White,
        background: Color::DarkGray,
    };

    /// Banner style for a bucket header
    pub fn banner(key: &BucketKey) -> Self {
        if key.is_untagged() {
            StyleDirective::UNTAGGED_BANNER
        } else {
            StyleDirective::TAG_BANNER
        }
    }
}

/// Destination of rendered text
pub trait StyledSink {
    /// Write a span of text, optionally styled
    fn span(&mut self, text: &str, style: Option<StyleDirective>) -> io::Result<()>;

    /// Terminate the current line
    fn end_line(&mut self) -> io::Result<()>;

    /// Write an unstyled line
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.span(text, None)?;
        self.end_line()
    }
}

/// A span recorded by [`CapturedSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Option<StyleDirective>,
}

/// Sink that keeps rendered output as data
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CapturedSink {
    lines: Vec<Vec<Span>>,
    current: Vec<Span>,
}

impl CapturedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed lines; a trailing unterminated line is not included
    pub fn lines(&self) -> &[Vec<Span>] {
        &self.lines
    }

    /// Output with styles dropped and every line terminated by `\n`
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for span in line {
                out.push_str(&span.text);
            }
            out.push('\n');
        }
        for span in &self.current {
            out.push_str(&span.text);
        }
        out
    }
}

impl StyledSink for CapturedSink {
    fn span(&mut self, text: &str, style: Option<StyleDirective>) -> io::Result<()> {
        self.current.push(Span {
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.lines.push(std::mem::take(&mut self.current));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_banner_style_depends_on_key() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            StyleDirective::banner(&BucketKey::untagged(date)),
            StyleDirective::UNTAGGED_BANNER
        );
        assert_eq!(
            StyleDirective::banner(&BucketKey::new("v1.0", date)),
            StyleDirective::TAG_BANNER
        );
    }

    #[test]
    fn test_captured_sink_records_spans() {
        let mut sink = CapturedSink::new();
        sink.span(" v1.0 ", Some(StyleDirective::TAG_BANNER)).unwrap();
        sink.end_line().unwrap();
        sink.line("plain").unwrap();

        assert_eq!(sink.lines().len(), 2);
        assert_eq!(sink.lines()[0][0].style, Some(StyleDirective::TAG_BANNER));
        assert_eq!(sink.lines()[1][0].style, None);
        assert_eq!(sink.text(), " v1.0 \nplain\n");
    }
}
