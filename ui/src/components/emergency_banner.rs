use dioxus::prelude::*;

use super::site_content::use_site_content;

/// Call-out strip under the hero naming the zip codes served.
#[component]
pub fn EmergencyBanner() -> Element {
    let content = use_site_content();
    let banner = &content.emergency;
    let zips = content.business.service_area();
    let href = content.cta_href(&banner.cta);

    rsx! {
        section { class: "bg-blue-600 py-10",
            div { class: "max-w-7xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-8 text-white",
                div { class: "flex items-center gap-6",
                    div { class: "w-16 h-16 rounded-full bg-white/20 flex items-center justify-center text-3xl",
                        i { class: "fas fa-exclamation-triangle" }
                    }
                    div {
                        h3 { class: "text-xl font-bold", "{banner.heading}" }
                        p { class: "text-blue-100",
                            "Our teams are stationed locally for the {zips} zip codes."
                        }
                    }
                }
                a {
                    href: "{href}",
                    class: "bg-white text-blue-600 px-10 py-4 rounded-xl font-bold text-lg hover:bg-slate-100 transition-colors shadow-xl",
                    "{banner.cta.label}"
                }
            }
        }
    }
}
