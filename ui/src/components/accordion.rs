use dioxus::prelude::*;

use basin_common::disclosure::{Chevron, DisclosureItem, DisclosureList, DisclosureState};
use basin_common::markdown::render_markdown;

fn chevron_class(chevron: Chevron) -> &'static str {
    match chevron {
        Chevron::Down => "fas fa-chevron-down text-slate-400 transition-transform duration-300",
        Chevron::Up => "fas fa-chevron-down text-slate-400 transition-transform duration-300 rotate-180 text-blue-500",
    }
}

/// Answer panel classes. The panel stays mounted so height and opacity
/// can transition between states.
fn panel_class(state: DisclosureState) -> &'static str {
    match state {
        DisclosureState::Collapsed => {
            "accordion-body overflow-hidden transition-all duration-300 ease-in-out max-h-0 opacity-0"
        }
        DisclosureState::Expanded => {
            "accordion-body overflow-hidden transition-all duration-300 ease-in-out max-h-96 mt-4 opacity-100"
        }
    }
}

/// Renders each item with its own open/closed state.
///
/// Items are independent: any number may be open at once.
#[component]
pub fn Accordion(list: DisclosureList) -> Element {
    rsx! {
        div { class: "space-y-2",
            for (i, item) in list.into_items().into_iter().enumerate() {
                AccordionItem { key: "{i}", index: i, item }
            }
        }
    }
}

#[component]
pub fn AccordionItem(index: usize, item: DisclosureItem) -> Element {
    let mut item = use_signal(|| item);
    let answer_html = use_hook(|| render_markdown(item.peek().answer()));

    let current = item.read();
    let view = current.view();
    let state = current.state();
    let expanded = state.is_expanded();
    let hidden = !expanded;
    let question = view.question.to_string();
    let chevron = chevron_class(view.chevron);
    let panel = panel_class(state);
    drop(current);

    rsx! {
        div { class: "accordion-section border-b border-slate-200 py-6 last:border-0",
            button {
                r#type: "button",
                class: "accordion-header w-full flex items-center justify-between text-left group",
                aria_expanded: "{expanded}",
                onclick: move |_| {
                    let state = item.write().toggle();
                    tracing::debug!("FAQ item {index} {state}");
                },
                span { class: "text-lg font-semibold text-slate-800 group-hover:text-blue-600 transition-colors",
                    "{question}"
                }
                i { class: "{chevron}" }
            }
            div { class: "{panel}", aria_hidden: "{hidden}",
                div {
                    class: "text-slate-600 leading-relaxed bg-slate-50 p-4 rounded-xl border border-slate-100",
                    dangerous_inner_html: "{answer_html}"
                }
            }
        }
    }
}
