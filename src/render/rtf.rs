use std::io;

use super::style::StyledSink;
use super::{RenderOptions, Renderer, CREDIT_LABEL};
use crate::domain::ChangeLog;

// Color table indexes (\cf / \highlight)
const FOREGROUND: u8 = 1;
const TAGGED_BACKGROUND: u8 = 2;
const UNTAGGED_BACKGROUND: u8 = 3;

/// Rich Text Format document
pub struct RtfRenderer;

impl Renderer for RtfRenderer {
    fn render(
        &self,
        changelog: &ChangeLog,
        options: &RenderOptions,
        sink: &mut dyn StyledSink,
    ) -> io::Result<()> {
        let palette = &options.palette;

        sink.line(r"{\rtf1\ansi{\fonttbl\f0\fmodern Courier New;}")?;
        sink.line(&format!(
            r"{{\colortbl;{};{};{};}}",
            palette.foreground.rtf(),
            palette.tagged_background.rtf(),
            palette.untagged_background.rtf()
        ))?;

        for bucket in changelog.buckets() {
            let highlight = if bucket.key.is_untagged() {
                UNTAGGED_BACKGROUND
            } else {
                TAGGED_BACKGROUND
            };

            sink.line(&format!(
                r"{{\pard\li0\cf{}\highlight{}\b1  {} }}\line\b1 {}\b0\par",
                FOREGROUND,
                highlight,
                escape_rtf(&bucket.key.name),
                escape_rtf(&options.format_date(bucket.key.date))
            ))?;

            sink.line(r"{\pard\li400")?;

            for message in &bucket.messages {
                sink.line(&format!(r"\bullet  {}\line", escape_message(message)))?;
            }

            sink.line(r"\par}")?;
        }

        sink.line(&format!(
            r"\fs20Branch: {}\line",
            escape_rtf(&options.branch_name)
        ))?;

        if !options.suppress_credit {
            let url = escape_rtf(&options.credit_url);
            sink.line(&format!(
                r#"\fs20{}: {{\field{{\*\fldinst HYPERLINK "{url}"}}{{\fldrslt {url}}}}}\line"#,
                CREDIT_LABEL,
                url = url
            ))?;
        }

        sink.line("}")
    }
}

/// Escape RTF control characters.
///
/// `\`, `{` and `}` become hex escapes; characters outside ASCII become
/// `\uN?` escapes of their UTF-16 code units. Each character is escaped
/// exactly once, so a backslash produced by an escape is never re-escaped.
pub fn escape_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\'5c"),
            '{' => out.push_str(r"\'7b"),
            '}' => out.push_str(r"\'7d"),
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // RTF takes signed 16-bit values
                    out.push_str(&format!(r"\u{}?", *unit as i16));
                }
            }
        }
    }
    out
}

/// Escape a commit message for a bullet line.
///
/// Messages with more than one line break get an explicit RTF line break
/// and tab per break; a single break is left as is.
fn escape_message(message: &str) -> String {
    let escaped = escape_rtf(message);
    if escaped.matches('\n').count() > 1 {
        escaped.replace('\n', "\\line\\tab\n")
    } else {
        escaped
    }
}
