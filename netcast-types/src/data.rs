//! Parsed status-query payloads

use std::fmt;

/// One `<data>` element returned by a TV status query
///
/// Fragments are owned trees detached from the response document, so they
/// can outlive the HTTP exchange that produced them. A sequence of fragments
/// preserves document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFragment {
    /// Element tag name
    pub name: String,

    /// Element attributes in document order
    pub attributes: Vec<(String, String)>,

    /// Text content before the first child element
    pub text: Option<String>,

    /// Child elements in document order
    pub children: Vec<DataFragment>,
}

impl DataFragment {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create an element with text content
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Find the first direct child with the given tag name
    pub fn find(&self, name: &str) -> Option<&DataFragment> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text content, or the empty string when the element has none
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

impl fmt::Display for DataFragment {
    /// Serialize back to XML (no declaration, no added whitespace)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_attr(value, &mut out);
            out.push('"');
        }

        if self.text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return f.write_str(&out);
        }

        out.push('>');
        if let Some(text) = &self.text {
            escape_text(text, &mut out);
        }
        f.write_str(&out)?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fragment_text() {
        let frag = DataFragment::with_text("data", "5");
        assert_eq!(frag.text(), "5");
        assert_eq!(frag.to_string(), "<data>5</data>");
    }

    #[test]
    fn test_fragment_empty() {
        let frag = DataFragment::new("data");
        assert_eq!(frag.text(), "");
        assert_eq!(frag.to_string(), "<data/>");
    }

    #[test]
    fn test_fragment_children() {
        let mut frag = DataFragment::new("data");
        frag.children.push(DataFragment::with_text("major", "7"));
        frag.children.push(DataFragment::with_text("minor", "1"));

        assert_eq!(frag.find("minor").map(DataFragment::text), Some("1"));
        assert!(frag.find("physicalNum").is_none());
        assert_eq!(
            frag.to_string(),
            "<data><major>7</major><minor>1</minor></data>"
        );
    }

    #[test]
    fn test_fragment_escaping() {
        let mut frag = DataFragment::with_text("data", "a < b & c");
        frag.attributes.push(("type".into(), "\"q\"".into()));

        assert_eq!(
            frag.to_string(),
            "<data type=\"&quot;q&quot;\">a &lt; b &amp; c</data>"
        );
    }
}
