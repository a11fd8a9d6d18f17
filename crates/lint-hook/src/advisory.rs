//! The advisory panel payload.
//!
//! One advisory is raised per flagged check. Hosts that render HTML can use
//! [`Advisory::body_html`] as-is; text hosts lay out the typed fields
//! themselves.

/// A titled advisory describing one diagnostic and a suggested fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Panel title (from the configuration).
    pub title: String,
    /// One-based line number of the diagnostic.
    pub line: u32,
    /// The diagnostic message as parsed from the checker output.
    pub message: String,
    /// The derived one-line suggestion.
    pub suggestion: String,
}

impl Advisory {
    /// Render the fixed panel markup.
    ///
    /// Interpolated text is escaped, so messages such as ``in <module>`` do
    /// not break the markup.
    pub fn body_html(&self) -> String {
        format!(
            "<div style=\"padding:8px;max-width:300px;\">\
             <b>Error on line {}:</b><br>{}<hr>\
             <b>Suggested fix:</b><br>{}</div>",
            self.line,
            escape_html(&self.message),
            escape_html(&self.suggestion),
        )
    }
}

/// Escape `& < >` for embedding in the panel markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_html_contains_all_fields() {
        let advisory = Advisory {
            title: "Python Linter".to_string(),
            line: 4,
            message: "SyntaxError: invalid syntax".to_string(),
            suggestion: "Check for a missing ':' or an unbalanced bracket.".to_string(),
        };

        let html = advisory.body_html();
        assert!(html.contains("<b>Error on line 4:</b>"));
        assert!(html.contains("SyntaxError: invalid syntax"));
        assert!(html.contains("<b>Suggested fix:</b>"));
        assert!(html.contains("unbalanced bracket"));
    }

    #[test]
    fn test_body_html_escapes_markup_in_message() {
        let advisory = Advisory {
            title: "t".to_string(),
            line: 1,
            message: "error in <module> & friends".to_string(),
            suggestion: "a < b".to_string(),
        };

        let html = advisory.body_html();
        assert!(html.contains("error in &lt;module&gt; &amp; friends"));
        assert!(html.contains("a &lt; b"));
        assert!(!html.contains("<module>"));
    }
}
