use crate::markdown::{render_styled_markdown, split_title};

/// Long-form content block rendered from markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub body_html: String,
}

impl Article {
    /// The leading `# ` line becomes the title; the rest is rendered to HTML.
    pub fn from_markdown(source: &str) -> Self {
        let (title, body) = split_title(source);
        Self {
            title: title.unwrap_or_default(),
            body_html: render_styled_markdown(body),
        }
    }
}
