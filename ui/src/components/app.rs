use dioxus::prelude::*;

use basin_common::content::SiteContent;

use super::article_view::ArticleView;
use super::emergency_banner::EmergencyBanner;
use super::faq_view::FaqView;
use super::footer::Footer;
use super::header::Header;
use super::hero::Hero;
use super::services::Services;
use super::site_content::{load_site_content, use_site_content};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let loaded = use_hook(|| load_site_content().map_err(|e| e.to_string()));

    match loaded {
        Ok(content) => rsx! { Site { content } },
        Err(err) => {
            tracing::error!("Failed to load site content: {err}");
            rsx! { ContentErrorView { message: err } }
        }
    }
}

#[component]
fn Site(content: SiteContent) -> Element {
    use_context_provider(|| content);

    rsx! {
        document::Script { src: "{TAILWIND_CDN}" }
        document::Link { rel: "stylesheet", href: "{FONT_AWESOME_CSS}" }
        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    let content = use_site_content();
    let description = content.hero.subtitle.clone();

    rsx! {
        document::Meta { name: "description", content: "{description}" }
        div { class: "min-h-screen flex flex-col",
            Header {}
            main { class: "flex-grow",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

/// Route component: the single landing page.
#[component]
fn Home() -> Element {
    rsx! {
        Hero {}
        EmergencyBanner {}
        Services {}
        ArticleView {}
        FaqView {}
    }
}

/// Route component: anything other than `/` links back home.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No page at /{path}");

    rsx! {
        section { class: "py-24 max-w-3xl mx-auto px-4 text-center",
            h2 { class: "text-3xl font-bold text-slate-900 mb-4", "Page not found" }
            p { class: "text-slate-600 mb-8", "There is nothing at /{path}." }
            Link {
                class: "bg-blue-600 hover:bg-blue-700 text-white px-8 py-4 rounded-lg font-bold",
                to: Route::Home {},
                "Back to home"
            }
        }
    }
}

#[component]
fn ContentErrorView(message: String) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-slate-100 px-4",
            div { class: "bg-white p-8 rounded-2xl shadow-xl max-w-xl",
                h1 { class: "text-2xl font-bold text-slate-900 mb-4", "This page could not be built" }
                p { class: "field-error text-red-600", "{message}" }
            }
        }
    }
}
