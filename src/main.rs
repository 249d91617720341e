use dioxus::prelude::*;

mod components;
mod diagnostics;
mod playlist;
mod transport;
mod utils;

use components::{AudioController, AudioState, PlayerBar, TrackList};
use playlist::Playlist;
use transport::Transport;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Meta { name: "theme-color", content: "#09090b" }
        document::Title { "PlayDeck" }
        document::Stylesheet { href: APP_CSS }

        Shell {}
    }
}

/// Owns every piece of widget state and provides it via context. With zero
/// tracks the widget deactivates entirely: nothing is wired, no audio
/// element is created.
#[component]
fn Shell() -> Element {
    let playlist = use_signal(Playlist::load);
    let transport = use_signal(|| Transport::new(playlist.peek().len()));
    let audio_state = use_signal(AudioState::default);

    use_context_provider(|| playlist);
    use_context_provider(|| transport);
    use_context_provider(|| audio_state);

    if playlist().is_empty() {
        return rsx! {
            div { class: "empty-state", "No tracks to play" }
        };
    }

    rsx! {
        AudioController {}
        div { class: "player-shell",
            PlayerBar {}
            TrackList {}
        }
    }
}
