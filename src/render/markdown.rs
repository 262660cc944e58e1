use std::io;

use super::style::StyledSink;
use super::{RenderOptions, Renderer, CREDIT_LABEL};
use crate::domain::ChangeLog;

/// Markdown with inline-styled bucket headers
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(
        &self,
        changelog: &ChangeLog,
        options: &RenderOptions,
        sink: &mut dyn StyledSink,
    ) -> io::Result<()> {
        let palette = &options.palette;

        for bucket in changelog.buckets() {
            sink.line(&format!(
                "#### <span style=\"background-color:{};color:{}\">{}</span>",
                palette.background(&bucket.key).css(),
                palette.foreground.css(),
                bucket.key.name
            ))?;
            sink.line(&format!("**{}**", options.format_date(bucket.key.date)))?;

            for message in &bucket.messages {
                // Two trailing spaces force a hard break inside the list item
                sink.line(&format!("- {}", message.replace('\n', "  \n&ensp;")))?;
            }
        }

        sink.end_line()?;
        sink.line(&format!("Branch: {}<br>", options.branch_name))?;

        if !options.suppress_credit {
            sink.line(&format!(
                "{}: [{url}]({url})",
                CREDIT_LABEL,
                url = options.credit_url
            ))?;
        }

        Ok(())
    }
}
