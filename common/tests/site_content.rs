use basin_common::content::SiteContent;
use basin_common::disclosure::{Chevron, DisclosureList, DisclosureState};

const SITE_TOML: &str = include_str!("../../docs/site.toml");
const FAQ_MD: &str = include_str!("../../docs/faq.md");
const ARTICLE_MD: &str = include_str!("../../docs/drainage.md");

fn load() -> SiteContent {
    SiteContent::from_sources(SITE_TOML, FAQ_MD, ARTICLE_MD).expect("embedded content should load")
}

fn visible_answers(list: &DisclosureList) -> Vec<usize> {
    list.iter()
        .enumerate()
        .filter(|(_, item)| item.view().answer.is_some())
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn business_identity_matches_site() {
    let content = load();
    let business = &content.business;
    assert_eq!(business.name, "Frozen Basin Pros");
    assert_eq!(business.phone.display(), "(844) 340-6413");
    assert_eq!(business.phone.tel_href(), "tel:8443406413");
    assert_eq!(business.address_lines.len(), 2);
    assert_eq!(business.service_area(), "60540, 60563, and 60564");
}

#[test]
fn three_service_cards_in_order() {
    let content = load();
    let titles: Vec<_> = content
        .services
        .offerings
        .iter()
        .map(|o| o.title.as_str())
        .collect();
    assert_eq!(titles, ["Basin Thawing", "Storm Drain Cleaning", "Yard Drainage"]);
    assert_eq!(content.services.offerings[0].icon, "fas fa-snowflake");
}

#[test]
fn hero_ctas_resolve() {
    let content = load();
    assert_eq!(content.cta_href(&content.hero.primary_cta), "#services");
    assert_eq!(content.cta_href(&content.hero.emergency_cta), "tel:8443406413");
}

#[test]
fn article_title_and_emphasis() {
    let content = load();
    assert_eq!(content.article.title, "Naperville Winter Drainage Defense");
    assert!(content
        .article
        .body_html
        .contains("<strong>High-Pressure Steam Thawing:</strong>"));
}

/// The damage list keeps its bullets, the process list its numbers, and the
/// section headings their weight.
#[test]
fn article_lists_and_headings_carry_styling() {
    let html = load().article.body_html;
    assert!(html.contains("<ul class=\"list-disc pl-5 space-y-2\">\n<li><strong>Surface Flooding:</strong>"));
    assert!(html.contains("<ol class=\"list-decimal pl-5 space-y-4\">\n<li><strong>High-Pressure Steam Thawing:</strong>"));
    assert!(html.contains("<h3 class=\"text-xl font-bold text-slate-800\">Why Your Catch Basin Floods</h3>"));
    assert!(html.contains("<h3 class=\"text-xl font-bold text-slate-800\">Our Professional Thawing Process</h3>"));
    assert!(!html.contains("<ul>"));
    assert!(!html.contains("<ol>"));
    assert!(!html.contains("<h3>"));
}

#[test]
fn faq_document_has_four_entries() {
    let content = load();
    assert_eq!(content.faq.title.as_deref(), Some("Frequently Asked Questions"));
    assert_eq!(
        content.faq.intro,
        "Common questions about winter drainage maintenance in Illinois."
    );
    assert_eq!(content.faq.entries.len(), 4);
    assert_eq!(
        content.faq.entries[0].question,
        "What causes a catch basin to freeze?"
    );
    assert!(content.faq.entries[3].answer.starts_with("Regular cleaning"));
}

/// Four questions, no answers visible; opening one shows only that answer;
/// closing it restores the initial picture; two can be open together.
#[test]
fn faq_disclosure_scenario() {
    let content = load();
    let mut list = DisclosureList::initialize(content.faq.entries.clone());

    assert_eq!(list.len(), 4);
    assert!(visible_answers(&list).is_empty());
    for (item, entry) in list.iter().zip(&content.faq.entries) {
        assert_eq!(item.view().question, entry.question);
        assert_eq!(item.view().chevron, Chevron::Down);
    }

    assert_eq!(list.toggle(1), Some(DisclosureState::Expanded));
    assert_eq!(visible_answers(&list), vec![1]);
    assert_eq!(
        list.get(1).unwrap().view().answer,
        Some(content.faq.entries[1].answer.as_str())
    );

    assert_eq!(list.toggle(1), Some(DisclosureState::Collapsed));
    assert!(visible_answers(&list).is_empty());

    list.toggle(0);
    list.toggle(2);
    assert_eq!(visible_answers(&list), vec![0, 2]);
    assert_eq!(list.expanded_indices(), vec![0, 2]);
}
