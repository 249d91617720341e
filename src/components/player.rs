use dioxus::prelude::*;

use crate::components::{seek_to, AudioState, Icon};
use crate::playlist::Playlist;
use crate::transport::{seek_target, Transport};
use crate::utils::fmt_time;

/// Transport bar: cover art, track title, prev/play-pause/next buttons, and
/// the progress slider with its time labels.
#[component]
pub fn PlayerBar() -> Element {
    let playlist = use_context::<Signal<Playlist>>();
    let mut transport = use_context::<Signal<Transport>>();
    let audio_state = use_context::<Signal<AudioState>>();

    let snapshot = transport();
    let current_time = (audio_state().current_time)();
    let duration = (audio_state().duration)();

    let list = playlist();
    let title = list
        .track(snapshot.current())
        .map(|t| t.title.clone())
        .unwrap_or_default();
    let cover = list.cover().map(str::to_string);

    let percent = if duration > 0.0 {
        (current_time / duration * 100.0).round() as i32
    } else {
        0
    };
    let total_label = if duration > 0.0 {
        fmt_time(duration)
    } else {
        "--:--".to_string()
    };

    let on_seek_commit = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<f64>() {
            seek_to(seek_target(value, duration));
        }
    };

    rsx! {
        div { class: "now-playing",
            if let Some(cover_url) = cover {
                img { class: "cover", src: "{cover_url}", alt: "{title}" }
            } else {
                div { class: "cover-fallback",
                    Icon { name: "music".to_string(), class: "icon".to_string() }
                }
            }
            p { class: "title", "{title}" }
        }

        div { class: "transport",
            button {
                id: "prev-btn",
                class: "button-prev",
                r#type: "button",
                disabled: !snapshot.prev_enabled(),
                onclick: move |_| transport.write().prev(),
                Icon { name: "prev".to_string(), class: "icon".to_string() }
            }
            button {
                id: "play-pause-btn",
                class: if snapshot.is_playing() { "button-playpause playing" } else { "button-playpause" },
                r#type: "button",
                onclick: move |_| transport.write().toggle(),
                if snapshot.is_playing() {
                    Icon { name: "pause".to_string(), class: "icon".to_string() }
                } else {
                    Icon { name: "play".to_string(), class: "icon".to_string() }
                }
            }
            button {
                id: "next-btn",
                class: "button-next",
                r#type: "button",
                disabled: !snapshot.next_enabled(),
                onclick: move |_| transport.write().next(),
                Icon { name: "next".to_string(), class: "icon".to_string() }
            }
        }

        div { class: "progress-row",
            span { class: "time-elapsed", {fmt_time(current_time)} }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                value: percent,
                // While the slider is held, the poll loop leaves its value
                // alone; the seek applies on commit.
                onmousedown: move |_| transport.write().begin_drag(),
                onmouseup: move |_| transport.write().end_drag(),
                onchange: on_seek_commit,
            }
            span { class: "time-total", "{total_label}" }
        }
    }
}
