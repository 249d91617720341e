//! Audio manager - drives the single audio element outside of the component
//! render cycle. The transport signal is the source of truth; effects push it
//! into the element, and a poll loop mirrors the element's real state back.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::playlist::Playlist;
#[cfg(target_arch = "wasm32")]
use crate::transport::Transport;

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Playback position state shared with the transport bar.
#[derive(Clone)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            current_time: Signal::new(0.0),
            duration: Signal::new(0.0),
        }
    }
}

/// Initialize the page-lifetime audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("playdeck-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("playdeck-audio");
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Seek to a specific position in the current track.
#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(position);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_position: f64) {}

#[cfg(target_arch = "wasm32")]
fn web_try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

/// Feature-detect the media session integration once per page load.
#[cfg(target_arch = "wasm32")]
fn media_session_available() -> bool {
    thread_local! {
        static AVAILABLE: Cell<Option<bool>> = Cell::new(None);
    }

    AVAILABLE.with(|slot| {
        if let Some(known) = slot.get() {
            return known;
        }
        let available = window()
            .map(|w| {
                let nav: wasm_bindgen::JsValue = w.navigator().into();
                js_sys::Reflect::get(&nav, &"mediaSession".into())
                    .map(|session| !session.is_undefined() && !session.is_null())
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        slot.set(Some(available));
        available
    })
}

/// Republish the OS-level now-playing metadata for the active track.
#[cfg(target_arch = "wasm32")]
fn publish_media_metadata(title: &str, artwork: Option<&str>) {
    if !media_session_available() {
        return;
    }
    let Some(win) = window() else {
        return;
    };
    let nav: wasm_bindgen::JsValue = win.navigator().into();
    let Ok(session) = js_sys::Reflect::get(&nav, &"mediaSession".into()) else {
        return;
    };

    let init = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&init, &"title".into(), &title.into());
    let _ = js_sys::Reflect::set(&init, &"artist".into(), &"".into());
    let _ = js_sys::Reflect::set(&init, &"album".into(), &"".into());
    if let Some(src) = artwork {
        let art = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&art, &"src".into(), &src.into());
        let list = js_sys::Array::new();
        list.push(&art);
        let _ = js_sys::Reflect::set(&init, &"artwork".into(), &list);
    }

    let win_js: wasm_bindgen::JsValue = win.into();
    let Ok(ctor) = js_sys::Reflect::get(&win_js, &"MediaMetadata".into()) else {
        return;
    };
    let Ok(ctor) = ctor.dyn_into::<js_sys::Function>() else {
        return;
    };
    let args = js_sys::Array::of1(&init);
    if let Ok(metadata) = js_sys::Reflect::construct(&ctor, &args) {
        let _ = js_sys::Reflect::set(&session, &"metadata".into(), &metadata);
    }
}

/// Map hardware previous/next media keys onto the transport buttons.
#[cfg(target_arch = "wasm32")]
fn ensure_media_session_handlers() {
    if !media_session_available() {
        return;
    }
    let _ = js_sys::eval(
        r#"
(() => {
  if (window.__playdeckMediaSessionInit) {
    return true;
  }

  if (!("mediaSession" in navigator)) {
    window.__playdeckMediaSessionInit = true;
    return true;
  }

  const clickById = (id) => {
    const element = document.getElementById(id);
    if (element && typeof element.click === "function") {
      element.click();
    }
  };

  try {
    navigator.mediaSession.setActionHandler("previoustrack", () => clickById("prev-btn"));
  } catch (_err) {}
  try {
    navigator.mediaSession.setActionHandler("nexttrack", () => clickById("next-btn"));
  } catch (_err) {}

  window.__playdeckMediaSessionInit = true;
  return true;
})();
"#,
    );
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let playlist = use_context::<Signal<Playlist>>();
    let transport = use_context::<Signal<Transport>>();
    let audio_state = use_context::<Signal<AudioState>>();

    let last_src = use_signal(|| None::<String>);

    // One-time setup: create the element, install media key handlers, and
    // poll the element's real state back into the signals.
    {
        let mut transport = transport.clone();
        let audio_state = audio_state.clone();
        use_effect(move || {
            let Some(_audio) = get_or_create_audio_element() else {
                return;
            };
            ensure_media_session_handlers();

            let mut current_time_signal = audio_state.peek().current_time;
            let mut duration_signal = audio_state.peek().duration;

            spawn(async move {
                let mut last_emit = 0.0f64;
                let mut last_duration = -1.0f64;
                let mut ended_for_track: Option<usize> = None;
                let mut paused_streak: u8 = 0;
                let mut playing_streak: u8 = 0;

                loop {
                    gloo_timers::future::TimeoutFuture::new(200).await;

                    let Some(audio) = get_or_create_audio_element() else {
                        continue;
                    };

                    // While the slider is held, nothing overwrites its value.
                    let dragging = transport.peek().is_dragging();

                    let time = audio.current_time();
                    if !dragging && (time - last_emit).abs() >= 0.2 {
                        last_emit = time;
                        current_time_signal.set(time);
                    }

                    let dur = audio.duration();
                    if !dragging && !dur.is_nan() && (dur - last_duration).abs() > 0.5 {
                        last_duration = dur;
                        duration_signal.set(dur);
                    }

                    // Keep the playing marker synced when playback is
                    // controlled outside our buttons (media keys etc.).
                    let paused = audio.paused();
                    if paused {
                        paused_streak = paused_streak.saturating_add(1);
                        playing_streak = 0;
                    } else {
                        playing_streak = playing_streak.saturating_add(1);
                        paused_streak = 0;
                    }

                    if transport.peek().is_playing() && paused_streak >= 2 && !audio.ended() {
                        transport.write().set_playing(false);
                    } else if !transport.peek().is_playing() && playing_streak >= 2 {
                        transport.write().set_playing(true);
                    }

                    if audio.ended() {
                        let index = transport.peek().current();
                        if ended_for_track == Some(index) {
                            continue;
                        }
                        ended_for_track = Some(index);
                        transport.write().track_ended();
                    } else {
                        ended_for_track = None;
                    }
                }
            });
        });
    }

    // Point the element at the selected track whenever it changes.
    {
        let playlist = playlist.clone();
        let transport = transport.clone();
        let audio_state = audio_state.clone();
        let mut last_src = last_src.clone();
        use_effect(move || {
            let index = transport().current();
            let Some(track) = playlist.peek().track(index).cloned() else {
                return;
            };

            if Some(&track.url) == last_src.peek().as_ref() {
                return;
            }
            last_src.set(Some(track.url.clone()));

            if let Some(audio) = get_or_create_audio_element() {
                audio.set_src(&track.url);
                // A fresh source starts from zero.
                let mut current_time_signal = audio_state.peek().current_time;
                current_time_signal.set(0.0);

                publish_media_metadata(&track.title, playlist.peek().cover());

                if transport.peek().is_playing() {
                    web_try_play(&audio);
                } else {
                    let _ = audio.pause();
                }
            }
        });
    }

    // Apply play/pause state changes.
    {
        let transport = transport.clone();
        use_effect(move || {
            let playing = transport().is_playing();
            if let Some(audio) = get_or_create_audio_element() {
                if playing {
                    if audio.paused() {
                        web_try_play(&audio);
                    }
                } else if !audio.paused() {
                    let _ = audio.pause();
                }
            }
        });
    }

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}
