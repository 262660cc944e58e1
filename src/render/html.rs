use std::io;

use super::style::StyledSink;
use super::{RenderOptions, Renderer, CREDIT_LABEL};
use crate::domain::ChangeLog;

/// HTML page with one table per bucket
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(
        &self,
        changelog: &ChangeLog,
        options: &RenderOptions,
        sink: &mut dyn StyledSink,
    ) -> io::Result<()> {
        let palette = &options.palette;

        sink.line("<html>")?;
        sink.line("<body>")?;

        for bucket in changelog.buckets() {
            sink.line(&format!(
                "<b style=\"background-color:{};color:{}\">&nbsp;{}&nbsp;</b>",
                palette.background(&bucket.key).css(),
                palette.foreground.css(),
                escape_html(&bucket.key.name)
            ))?;
            sink.line("<table>")?;
            sink.line(&format!(
                "<tr><td><b>{}</b></td></tr>",
                options.format_date(bucket.key.date)
            ))?;

            for message in &bucket.messages {
                let message = escape_html(message).replace('\n', "<br>\n&ensp;&ensp;");
                sink.line(&format!("<tr><td>&nbsp;&#x2022;&nbsp;{}</td></tr>", message))?;
            }

            sink.line("</table>")?;
            sink.line("<br>")?;
        }

        sink.line(&format!("Branch: {}<br>", escape_html(&options.branch_name)))?;

        if !options.suppress_credit {
            sink.line(&format!(
                "{}: <a href=\"{url}\">{url}</a>",
                CREDIT_LABEL,
                url = options.credit_url
            ))?;
        }

        sink.line("</body>")?;
        sink.line("</html>")
    }
}

/// Escape the characters that would otherwise be read as markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::sample;
    use crate::render::{render_to_string, OutputFormat};

    #[test]
    fn test_html_layout() {
        let mut options = RenderOptions::new("main");
        options.credit_url = "https://example.com/gen".to_string();

        let out = render_to_string(OutputFormat::Html, &sample(), &options);

        assert_eq!(
            out,
            "<html>\n\
             <body>\n\
             <b style=\"background-color:rgb(255,165,0);color:rgb(255,255,255)\">&nbsp;Untagged&nbsp;</b>\n\
             <table>\n\
             <tr><td><b>Sunday, March 3, 2024</b></td></tr>\n\
             <tr><td>&nbsp;&#x2022;&nbsp;Fix typo</td></tr>\n\
             </table>\n\
             <br>\n\
             <b style=\"background-color:rgb(0,100,0);color:rgb(255,255,255)\">&nbsp;v1.0&nbsp;</b>\n\
             <table>\n\
             <tr><td><b>Thursday, February 1, 2024</b></td></tr>\n\
             <tr><td>&nbsp;&#x2022;&nbsp;Release 1.0</td></tr>\n\
             <tr><td>&nbsp;&#x2022;&nbsp;Add parser<br>\n&ensp;&ensp;with tests</td></tr>\n\
             </table>\n\
             <br>\n\
             Branch: main<br>\n\
             Generated with: <a href=\"https://example.com/gen\">https://example.com/gen</a>\n\
             </body>\n\
             </html>\n"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("Use Vec<u8> & friends > arrays"),
            "Use Vec&lt;u8&gt; &amp; friends &gt; arrays"
        );
    }

    #[test]
    fn test_html_branch_name_is_escaped() {
        let log = crate::changelog::build_changelog("feat<x>&y", &[], &[]).changelog;
        let mut options = RenderOptions::new("feat<x>&y");
        options.suppress_credit = true;

        let out = render_to_string(OutputFormat::Html, &log, &options);

        assert!(out.contains("Branch: feat&lt;x&gt;&amp;y<br>\n"));
        assert!(!out.contains("feat<x>"));
    }

    #[test]
    fn test_html_empty_changelog_is_well_formed() {
        let log = crate::changelog::build_changelog("main", &[], &[]).changelog;
        let mut options = RenderOptions::new("main");
        options.suppress_credit = true;

        let out = render_to_string(OutputFormat::Html, &log, &options);

        assert_eq!(out, "<html>\n<body>\nBranch: main<br>\n</body>\n</html>\n");
    }
}
