use chrono::Datelike;
use dioxus::prelude::*;

use basin_common::business::copyright_notice;

use super::site_content::use_site_content;

#[component]
pub fn Footer() -> Element {
    let content = use_site_content();
    let business = content.business;
    let tel = business.phone.tel_href();
    let phone = business.phone.display();
    let year = chrono::Local::now().year();
    let notice = copyright_notice(year, &business.legal_name);

    rsx! {
        footer { class: "bg-slate-900 text-slate-300 py-16",
            div { class: "max-w-7xl mx-auto px-4",
                div { class: "grid md:grid-cols-3 gap-12 mb-12",
                    div {
                        div { class: "flex items-center gap-2 mb-6",
                            i { class: "fas fa-snowflake text-blue-500 text-2xl" }
                            span { class: "font-bold text-xl tracking-tight text-white uppercase",
                                "{business.name}"
                            }
                        }
                        p { class: "text-slate-400 leading-relaxed", "{business.tagline}" }
                    }
                    div {
                        h4 { class: "text-white font-bold text-lg mb-6", "Service Area" }
                        ul { class: "space-y-3",
                            li { class: "flex items-start gap-3",
                                i { class: "fas fa-map-marker-alt text-blue-500 mt-1" }
                                span {
                                    for (i, line) in business.address_lines.iter().enumerate() {
                                        if i > 0 {
                                            br {}
                                        }
                                        "{line}"
                                    }
                                }
                            }
                            li { class: "flex items-center gap-3",
                                i { class: "fas fa-clock text-blue-500" }
                                span { "{business.hours}" }
                            }
                        }
                    }
                    div {
                        h4 { class: "text-white font-bold text-lg mb-6", "Contact Us" }
                        a {
                            href: "{tel}",
                            class: "flex items-center gap-3 text-2xl font-bold text-blue-400 hover:text-blue-300 transition-colors mb-4",
                            i { class: "fas fa-phone-alt" }
                            "{phone}"
                        }
                        p { class: "text-slate-500", "Call anytime for immediate emergency service." }
                    }
                }
                div { class: "border-t border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-slate-500",
                    p { "{notice}" }
                    div { class: "flex gap-6",
                        a { href: "#", class: "hover:text-white transition-colors", "Privacy Policy" }
                        a { href: "#", class: "hover:text-white transition-colors", "Terms of Service" }
                    }
                }
            }
        }
    }
}
