//! Markdown rendering for catalog descriptions.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Enables strikethrough, tables and autolinks. The output goes through
/// `ammonia` before it reaches `inner_html`, so a remote catalog cannot
/// inject script.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    ammonia::clean(&render(markdown, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_lists_and_emphasis() {
        let html = markdown_to_html("**Fast** checkout\n\n- UPI\n- Cards\n");
        assert!(html.contains("<strong>Fast</strong>"));
        assert!(html.contains("<li>UPI</li>"));
    }

    #[test]
    fn test_strips_script() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hello"));
    }
}
