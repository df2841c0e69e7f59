use dioxus::prelude::*;

use basin_common::content::{ContentError, SiteContent};

const SITE_TOML: &str = include_str!("../../../docs/site.toml");
const FAQ_MD: &str = include_str!("../../../docs/faq.md");
const ARTICLE_MD: &str = include_str!("../../../docs/drainage.md");

/// Build the page content from the documents embedded at compile time.
pub fn load_site_content() -> Result<SiteContent, ContentError> {
    let content = SiteContent::from_sources(SITE_TOML, FAQ_MD, ARTICLE_MD)?;
    tracing::info!(
        "Loaded site content: {} services, {} FAQ entries",
        content.services.offerings.len(),
        content.faq.entries.len()
    );
    Ok(content)
}

/// Read-only page content provided by `App`.
pub fn use_site_content() -> SiteContent {
    use_context::<SiteContent>()
}
