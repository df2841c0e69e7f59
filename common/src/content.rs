use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::article::Article;
use crate::business::BusinessIdentity;
use crate::faq::{parse_faq, FaqDocument};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid site config: {0}")]
    InvalidSiteConfig(#[from] toml::de::Error),
}

/// A call-to-action link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    /// Link target. When absent the business phone number is dialled.
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    /// Trailing word of the title drawn in the accent colour.
    pub highlight: String,
    pub subtitle: String,
    pub background_image: String,
    pub primary_cta: CallToAction,
    pub emergency_cta: CallToAction,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyBanner {
    pub heading: String,
    pub cta: CallToAction,
}

/// One card in the services grid. `icon` is a Font Awesome class list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesSection {
    pub heading: String,
    pub subtitle: String,
    #[serde(default)]
    pub offerings: Vec<ServiceOffering>,
}

/// The parts of the site authored in `site.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub business: BusinessIdentity,
    pub hero: Hero,
    pub emergency: EmergencyBanner,
    pub services: ServicesSection,
}

impl SiteConfig {
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(source)?)
    }
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub business: BusinessIdentity,
    pub hero: Hero,
    pub emergency: EmergencyBanner,
    pub services: ServicesSection,
    pub faq: FaqDocument,
    pub article: Article,
}

impl SiteContent {
    /// Assemble the site from its three authored sources.
    ///
    /// Only the TOML config can be malformed; markdown is taken as written.
    pub fn from_sources(
        site_toml: &str,
        faq_md: &str,
        article_md: &str,
    ) -> Result<Self, ContentError> {
        let SiteConfig {
            business,
            hero,
            emergency,
            services,
        } = SiteConfig::from_toml(site_toml)?;
        Ok(Self {
            business,
            hero,
            emergency,
            services,
            faq: parse_faq(faq_md),
            article: Article::from_markdown(article_md),
        })
    }

    /// Resolve a call-to-action target, defaulting to the phone number.
    pub fn cta_href(&self, cta: &CallToAction) -> String {
        cta.href
            .clone()
            .unwrap_or_else(|| self.business.phone.tel_href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r##"
[business]
name = "Test Drains"
legal_name = "Test Drains LLC"
tagline = "We clear drains."
city = "Springfield"
region = "IL"
phone = "5551234567"
address_lines = ["1 Main St", "Springfield, IL 62701"]
service_zip_codes = ["62701", "62702"]
hours = "Always"

[hero]
badge = "Number one"
title = "Drain"
highlight = "Clearing"
subtitle = "Fast."
background_image = "https://example.com/bg.jpg"
primary_cta = { label = "View Services", href = "#services" }
emergency_cta = { label = "Call" }

[emergency]
heading = "Flooding?"
cta = { label = "Get Help Now" }

[services]
heading = "Services"
subtitle = "What we do"

[[services.offerings]]
icon = "fas fa-water"
title = "Yard Drainage"
description = "Clearing yard drains."
"##;

    #[test]
    fn test_from_sources() {
        let content = SiteContent::from_sources(SITE, "## Q\nA\n", "# T\n\nBody\n").unwrap();
        assert_eq!(content.business.name, "Test Drains");
        assert_eq!(content.business.phone.display(), "(555) 123-4567");
        assert_eq!(content.business.service_area(), "62701 and 62702");
        assert_eq!(content.services.offerings.len(), 1);
        assert_eq!(content.faq.entries.len(), 1);
        assert_eq!(content.article.title, "T");
    }

    #[test]
    fn test_cta_href_defaults_to_phone() {
        let content = SiteContent::from_sources(SITE, "", "").unwrap();
        assert_eq!(content.cta_href(&content.hero.primary_cta), "#services");
        assert_eq!(content.cta_href(&content.hero.emergency_cta), "tel:5551234567");
        assert_eq!(content.cta_href(&content.emergency.cta), "tel:5551234567");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let err = SiteContent::from_sources("[business]\nname = \"x\"\n", "", "").unwrap_err();
        assert!(matches!(err, ContentError::InvalidSiteConfig(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(SiteConfig::from_toml("business = [").is_err());
    }
}
