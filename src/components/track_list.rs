use dioxus::prelude::*;

use crate::components::Icon;
use crate::playlist::{Playlist, Track};
use crate::transport::Transport;

/// The playlist rows. Clicking the active row toggles play/pause in place;
/// clicking any other row switches to it and starts playback.
#[component]
pub fn TrackList() -> Element {
    let playlist = use_context::<Signal<Playlist>>();
    let mut transport = use_context::<Signal<Transport>>();

    let snapshot = transport();
    let tracks: Vec<Track> = playlist().tracks().to_vec();

    rsx! {
        div { class: "track-list",
            for track in tracks {
                {
                    let index = track.index;
                    let number = index + 1;
                    let active = index == snapshot.current();
                    let row_class = if active && snapshot.is_playing() {
                        "track active playing"
                    } else if active {
                        "track active"
                    } else {
                        "track"
                    };
                    rsx! {
                        button {
                            key: "{index}",
                            class: "{row_class}",
                            r#type: "button",
                            onclick: move |_| transport.write().track_clicked(index),
                            if active && snapshot.is_playing() {
                                span { class: "track-no",
                                    Icon { name: "music".to_string(), class: "icon-sm".to_string() }
                                }
                            } else {
                                span { class: "track-no", "{number}" }
                            }
                            span { "{track.title}" }
                        }
                    }
                }
            }
        }
    }
}
