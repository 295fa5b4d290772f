//! Page format implementations
//!
//! Provides generators for the supported page formats: Markdown and HTML.

pub mod html;
pub mod markdown;

pub use html::HtmlPages;
pub use markdown::MarkdownPages;

use std::fmt;
use std::str::FromStr;

/// Supported page output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// Markdown pages (render well in GitHub and editors)
    Markdown,
    /// Self-contained HTML pages with embedded CSS
    Html,
}

impl PageFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl FromStr for PageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown page format: {s}")),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(PageFormat::from_str("md").unwrap(), PageFormat::Markdown);
        assert_eq!(
            PageFormat::from_str("Markdown").unwrap(),
            PageFormat::Markdown
        );
        assert_eq!(PageFormat::from_str("HTML").unwrap(), PageFormat::Html);
        assert!(PageFormat::from_str("pdf").is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(PageFormat::Markdown.extension(), "md");
        assert_eq!(PageFormat::Html.extension(), "html");
    }
}
