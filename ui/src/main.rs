mod components;

use tracing::Level;

fn main() {
    // Fails only when a subscriber is already installed.
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(components::app::App);
}
