use dioxus::prelude::*;

use super::site_content::use_site_content;

const OVERLAY: &str = "linear-gradient(rgba(15, 23, 42, 0.75), rgba(30, 58, 138, 0.75))";

#[component]
pub fn Hero() -> Element {
    let content = use_site_content();
    let hero = &content.hero;
    let background = format!(
        "background-image: {OVERLAY}, url(\"{}\"); background-position: center; background-size: cover;",
        hero.background_image
    );
    let primary_href = content.cta_href(&hero.primary_cta);
    let emergency_href = content.cta_href(&hero.emergency_cta);

    rsx! {
        section { class: "relative h-[70vh] min-h-[500px] flex items-center justify-center text-white overflow-hidden",
            div { class: "absolute inset-0 z-0", style: "{background}" }
            div { class: "relative z-10 max-w-4xl mx-auto px-4 text-center",
                div { class: "inline-block bg-blue-600/30 backdrop-blur-md border border-blue-400/30 px-4 py-1.5 rounded-full text-blue-100 font-semibold text-sm mb-6 uppercase tracking-widest",
                    "{hero.badge}"
                }
                h1 { class: "text-4xl md:text-6xl font-extrabold mb-6 leading-tight",
                    "{hero.title} "
                    span { class: "text-blue-400", "{hero.highlight}" }
                }
                p { class: "text-lg md:text-xl text-slate-200 mb-10 max-w-2xl mx-auto leading-relaxed",
                    "{hero.subtitle}"
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    a {
                        href: "{primary_href}",
                        class: "bg-white text-blue-900 hover:bg-slate-100 px-8 py-4 rounded-lg font-bold transition-colors",
                        "{hero.primary_cta.label}"
                    }
                    a {
                        href: "{emergency_href}",
                        class: "bg-blue-500 hover:bg-blue-400 text-white px-8 py-4 rounded-lg font-bold transition-colors flex items-center justify-center gap-2",
                        "{hero.emergency_cta.label}"
                    }
                }
            }
        }
    }
}
