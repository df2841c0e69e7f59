use dioxus::prelude::*;

use super::site_content::use_site_content;

#[component]
pub fn Header() -> Element {
    let content = use_site_content();
    let business = &content.business;
    let tel = business.phone.tel_href();
    let phone = business.phone.display();

    rsx! {
        header { class: "sticky top-0 z-50 bg-white/95 backdrop-blur-sm border-b border-slate-200 shadow-sm",
            div { class: "max-w-7xl mx-auto px-4 h-20 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    i { class: "fas fa-snowflake text-blue-600 text-2xl" }
                    span { class: "font-bold text-xl tracking-tight text-blue-900 uppercase",
                        "{business.name}"
                    }
                }
                a {
                    href: "{tel}",
                    class: "bg-blue-600 hover:bg-blue-700 text-white px-6 py-2.5 rounded-full font-bold flex items-center gap-2 transition-all shadow-lg hover:shadow-blue-200 active:scale-95",
                    i { class: "fas fa-phone" }
                    span { class: "hidden sm:inline", "{phone}" }
                    span { class: "sm:hidden", "Call" }
                }
            }
        }
    }
}
