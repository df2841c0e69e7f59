use dioxus::prelude::*;

use basin_common::content::ServiceOffering;

use super::site_content::use_site_content;

#[component]
pub fn ServiceCard(offering: ServiceOffering) -> Element {
    rsx! {
        div { class: "bg-white p-8 rounded-2xl border border-slate-100 shadow-xl shadow-slate-200/50 hover:shadow-2xl hover:shadow-blue-200/40 transition-all group",
            div { class: "w-16 h-16 bg-blue-50 rounded-2xl flex items-center justify-center mb-6 group-hover:bg-blue-600 transition-colors",
                i { class: "{offering.icon} text-3xl text-blue-600 group-hover:text-white" }
            }
            h3 { class: "text-xl font-bold mb-4 text-slate-800", "{offering.title}" }
            p { class: "text-slate-600 leading-relaxed", "{offering.description}" }
        }
    }
}

#[component]
pub fn Services() -> Element {
    let content = use_site_content();
    let section = content.services;

    rsx! {
        section { id: "services", class: "py-24 max-w-7xl mx-auto px-4",
            div { class: "text-center mb-16",
                h2 { class: "text-3xl md:text-4xl font-bold text-slate-900 mb-4", "{section.heading}" }
                p { class: "text-slate-600 max-w-xl mx-auto", "{section.subtitle}" }
            }
            div { class: "grid md:grid-cols-3 gap-8",
                for (i, offering) in section.offerings.into_iter().enumerate() {
                    ServiceCard { key: "{i}", offering }
                }
            }
        }
    }
}
