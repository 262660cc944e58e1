use std::io;

use super::style::{StyleDirective, StyledSink};
use super::{RenderOptions, Renderer, CREDIT_LABEL};
use crate::domain::ChangeLog;

/// Plain text with styled banner lines for terminals
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(
        &self,
        changelog: &ChangeLog,
        options: &RenderOptions,
        sink: &mut dyn StyledSink,
    ) -> io::Result<()> {
        for bucket in changelog.buckets() {
            sink.span(
                &format!(" {} ", bucket.key.name),
                Some(StyleDirective::banner(&bucket.key)),
            )?;
            sink.end_line()?;

            sink.span(
                &format!(" {} ", options.format_date(bucket.key.date)),
                Some(StyleDirective::DATE_BANNER),
            )?;
            sink.end_line()?;

            for message in &bucket.messages {
                sink.line(&format!("  {}", message.replace('\n', "\n\t")))?;
            }

            sink.end_line()?;
        }

        sink.line(&format!("Branch: {}", options.branch_name))?;

        if !options.suppress_credit {
            sink.end_line()?;
            sink.line(&format!("{}: {}", CREDIT_LABEL, options.credit_url))?;
        }

        Ok(())
    }
}
