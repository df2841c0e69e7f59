use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag};

const UNORDERED_LIST_CLASS: &str = "list-disc pl-5 space-y-2";
const ORDERED_LIST_CLASS: &str = "list-decimal pl-5 space-y-4";
const SUBHEADING_CLASSES: [&str; 3] = ["text-xl", "font-bold", "text-slate-800"];

fn options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts
}

/// Render a markdown fragment to HTML.
pub fn render_markdown(source: &str) -> String {
    let mut html_out = String::new();
    html::push_html(&mut html_out, Parser::new_ext(source, options()));
    html_out
}

/// Render long-form markdown with list and heading classes attached.
///
/// Bare `<ul>`, `<ol>` and `<h3>`-and-below tags lose their markers and
/// weight under the Tailwind reset, so the classes are set on the tags.
pub fn render_styled_markdown(source: &str) -> String {
    let events = Parser::new_ext(source, options()).map(|event| match event {
        Event::Start(Tag::List(None)) => {
            Event::Html(format!("<ul class=\"{UNORDERED_LIST_CLASS}\">\n").into())
        }
        Event::Start(Tag::List(Some(1))) => {
            Event::Html(format!("<ol class=\"{ORDERED_LIST_CLASS}\">\n").into())
        }
        Event::Start(Tag::List(Some(start))) => Event::Html(
            format!("<ol start=\"{start}\" class=\"{ORDERED_LIST_CLASS}\">\n").into(),
        ),
        Event::Start(Tag::Heading {
            level,
            id,
            mut classes,
            attrs,
        }) if level >= HeadingLevel::H3 => {
            classes.extend(SUBHEADING_CLASSES.into_iter().map(CowStr::Borrowed));
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            })
        }
        other => other,
    });

    let mut html_out = String::new();
    html::push_html(&mut html_out, events);
    html_out
}

/// Split a leading `# Title` line off a document.
///
/// Blank lines before the title are skipped. Returns the title (if any) and
/// the remainder of the document.
pub(crate) fn split_title(source: &str) -> (Option<String>, &str) {
    let trimmed = source.trim_start_matches(['\n', '\r']);
    let (first, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
    match first.trim_end().strip_prefix("# ") {
        Some(title) => (Some(title.trim().to_string()), rest),
        None => (None, source),
    }
}
