use dioxus::prelude::*;

use basin_common::disclosure::DisclosureList;

use super::accordion::Accordion;
use super::site_content::use_site_content;

#[component]
pub fn FaqView() -> Element {
    let faq = use_site_content().faq;
    let title = faq.title.unwrap_or_else(|| "Frequently Asked Questions".to_string());
    let list = use_hook(|| DisclosureList::initialize(faq.entries));

    rsx! {
        section { class: "bg-white py-24",
            div { class: "max-w-3xl mx-auto px-4",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-slate-900 mb-4", "{title}" }
                    if !faq.intro.is_empty() {
                        p { class: "text-slate-600", "{faq.intro}" }
                    }
                }
                Accordion { list }
            }
        }
    }
}
