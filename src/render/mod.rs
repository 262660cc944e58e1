//! Renderer set - serializes a [`ChangeLog`] into one output format
//!
//! Each format is a [`Renderer`] implementation; [`renderer_for`] maps an
//! [`OutputFormat`] to its implementation so adding a format only touches
//! the lookup. Renderers are pure: the same changelog and options always
//! produce the same text.

pub mod html;
pub mod markdown;
pub mod rtf;
pub mod style;
pub mod text;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use rtf::RtfRenderer;
pub use style::{CapturedSink, Color, StyleDirective, StyledSink};
pub use text::TextRenderer;

use std::fmt::{self, Write as _};
use std::io;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::config::{ColorsConfig, Config};
use crate::domain::{BucketKey, ChangeLog};
use crate::error::ChangelogError;

/// Label that precedes the attribution link
pub const CREDIT_LABEL: &str = "Generated with";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Txt,
    Md,
    Html,
    Rtf,
}

impl OutputFormat {
    /// Lower-case token, also used as the file extension
    pub fn token(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Md => "md",
            OutputFormat::Html => "html",
            OutputFormat::Rtf => "rtf",
        }
    }

    /// Whether `extension` names this format, ignoring case
    pub fn matches_extension(&self, extension: &str) -> bool {
        extension.eq_ignore_ascii_case(self.token())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for OutputFormat {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(OutputFormat::Txt),
            "md" => Ok(OutputFormat::Md),
            "html" => Ok(OutputFormat::Html),
            "rtf" => Ok(OutputFormat::Rtf),
            _ => Err(ChangelogError::UnknownFormat(s.to_string())),
        }
    }
}

/// An RGB color used by the markup formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS functional notation, e.g. `rgb(0,100,0)`
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }

    /// RTF color table entry body, e.g. `\red0\green100\blue0`
    pub fn rtf(&self) -> String {
        format!("\\red{}\\green{}\\blue{}", self.0, self.1, self.2)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

/// Banner colors for the markup formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb,
    pub tagged_background: Rgb,
    pub untagged_background: Rgb,
}

impl Palette {
    /// Background for a bucket header
    pub fn background(&self, key: &BucketKey) -> Rgb {
        if key.is_untagged() {
            self.untagged_background
        } else {
            self.tagged_background
        }
    }
}

impl From<&ColorsConfig> for Palette {
    fn from(colors: &ColorsConfig) -> Self {
        Palette {
            foreground: colors.foreground.into(),
            tagged_background: colors.tagged_background.into(),
            untagged_background: colors.untagged_background.into(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from(&ColorsConfig::default())
    }
}

/// Presentation options shared by every renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Omit the trailing attribution line
    pub suppress_credit: bool,
    /// Echoed verbatim in the footer
    pub branch_name: String,
    pub date_format: String,
    pub credit_url: String,
    pub palette: Palette,
}

impl RenderOptions {
    /// Options with default configuration for `branch_name`
    pub fn new(branch_name: impl Into<String>) -> Self {
        RenderOptions::from_config(&Config::default(), branch_name, false)
    }

    pub fn from_config(config: &Config, branch_name: impl Into<String>, suppress_credit: bool) -> Self {
        RenderOptions {
            suppress_credit,
            branch_name: branch_name.into(),
            date_format: config.date_format.clone(),
            credit_url: config.credit_url.clone(),
            palette: Palette::from(&config.colors),
        }
    }

    /// Format a bucket date with the configured pattern.
    ///
    /// Falls back to ISO 8601 when the pattern cannot be rendered.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A format-specific serializer
pub trait Renderer {
    /// Write `changelog` to `sink`. Sink errors are returned unchanged.
    fn render(
        &self,
        changelog: &ChangeLog,
        options: &RenderOptions,
        sink: &mut dyn StyledSink,
    ) -> io::Result<()>;
}

/// Look up the renderer for a format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Txt => Box::new(TextRenderer),
        OutputFormat::Md => Box::new(MarkdownRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Rtf => Box::new(RtfRenderer),
    }
}

/// Render to a string with styles dropped
pub fn render_to_string(
    format: OutputFormat,
    changelog: &ChangeLog,
    options: &RenderOptions,
) -> String {
    let mut sink = CapturedSink::new();
    // CapturedSink never fails
    let _ = renderer_for(format).render(changelog, options, &mut sink);
    sink.text()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens_round_trip() {
        for format in [
            OutputFormat::Txt,
            OutputFormat::Md,
            OutputFormat::Html,
            OutputFormat::Rtf,
        ] {
            assert_eq!(format.token().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_format_parse_accepts_text_alias_and_case() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Txt);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(ChangelogError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_matches_extension_ignores_case() {
        assert!(OutputFormat::Md.matches_extension("MD"));
        assert!(!OutputFormat::Md.matches_extension("txt"));
        assert!(!OutputFormat::Txt.matches_extension("text"));
    }

    #[test]
    fn test_default_date_format_is_long_date() {
        let options = RenderOptions::new("main");
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(options.format_date(date), "Sunday, March 3, 2024");
    }

    #[test]
    fn test_unrenderable_date_format_falls_back_to_iso() {
        let mut options = RenderOptions::new("main");
        options.date_format = "%Q".to_string();
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(options.format_date(date), "2024-03-03");
    }

    #[test]
    fn test_rgb_notations() {
        assert_eq!(Rgb(0, 100, 0).css(), "rgb(0,100,0)");
        assert_eq!(Rgb(255, 165, 0).rtf(), "\\red255\\green165\\blue0");
    }

    #[test]
    fn test_every_format_is_deterministic() {
        let log = fixtures::sample();
        let options = RenderOptions::new("main");
        for format in [
            OutputFormat::Txt,
            OutputFormat::Md,
            OutputFormat::Html,
            OutputFormat::Rtf,
        ] {
            assert_eq!(
                render_to_string(format, &log, &options),
                render_to_string(format, &log, &options)
            );
        }
    }

    #[test]
    fn test_every_format_handles_empty_changelog() {
        let log = crate::changelog::build_changelog("main", &[], &[]).changelog;
        let options = RenderOptions::new("main");
        for format in [
            OutputFormat::Txt,
            OutputFormat::Md,
            OutputFormat::Html,
            OutputFormat::Rtf,
        ] {
            let out = render_to_string(format, &log, &options);
            assert!(out.contains("Branch: main"), "{} output: {}", format, out);
        }
    }

    #[test]
    fn test_suppress_credit_removes_attribution_everywhere() {
        let log = fixtures::sample();
        let mut options = RenderOptions::new("main");
        options.suppress_credit = true;
        for format in [
            OutputFormat::Txt,
            OutputFormat::Md,
            OutputFormat::Html,
            OutputFormat::Rtf,
        ] {
            let out = render_to_string(format, &log, &options);
            assert!(!out.contains(CREDIT_LABEL), "{} output: {}", format, out);
        }
    }
}
