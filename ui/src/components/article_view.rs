use dioxus::prelude::*;

use super::site_content::use_site_content;

/// Long-form content block, pre-rendered from markdown.
#[component]
pub fn ArticleView() -> Element {
    let article = use_site_content().article;

    rsx! {
        section { class: "bg-slate-100 py-24",
            div { class: "max-w-4xl mx-auto px-4",
                div { class: "bg-white p-8 md:p-12 rounded-3xl shadow-xl border border-slate-200",
                    h2 { class: "text-3xl font-bold text-slate-900 mb-8 border-l-4 border-blue-600 pl-6",
                        "{article.title}"
                    }
                    div {
                        class: "prose prose-slate max-w-none space-y-6 text-slate-700 leading-relaxed",
                        dangerous_inner_html: "{article.body_html}"
                    }
                }
            }
        }
    }
}
