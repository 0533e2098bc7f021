//! Audio Playback
//!
//! At most one clip plays at a time. Starting a clip stops the current one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Something that can be stopped
pub trait Playback {
    fn stop(&mut self);
}

/// A started browser clip. The `onended` handler lives as long as the clip
/// and is released when the clip leaves the slot.
pub struct BrowserClip {
    audio: HtmlAudioElement,
    _on_ended: Closure<dyn FnMut()>,
}

impl Playback for BrowserClip {
    fn stop(&mut self) {
        self.audio.set_onended(None);
        let _ = self.audio.pause();
        self.audio.set_current_time(0.0);
    }
}

#[derive(Debug)]
struct Clip<P> {
    token: u64,
    name: String,
    handle: P,
}

/// Single "currently playing" slot. Each play gets a fresh token, so a late
/// end or failure event from a replaced clip cannot clear its successor,
/// even when both share a name.
#[derive(Debug)]
pub struct AudioSlot<P: Playback> {
    current: Option<Clip<P>>,
    last_token: u64,
}

impl<P: Playback> Default for AudioSlot<P> {
    fn default() -> Self {
        Self { current: None, last_token: 0 }
    }
}

impl<P: Playback> AudioSlot<P> {
    pub fn playing(&self) -> Option<&str> {
        self.current.as_ref().map(|clip| clip.name.as_str())
    }

    /// Stop whatever is playing, then start the clip built by `start`, which
    /// receives the token of this play. Returns that token.
    pub fn play_with<E>(&mut self, name: String, start: impl FnOnce(u64) -> Result<P, E>) -> Result<u64, E> {
        self.stop();
        self.last_token = self.last_token.wrapping_add(1);
        let token = self.last_token;
        let handle = start(token)?;
        self.current = Some(Clip { token, name, handle });
        Ok(token)
    }

    pub fn stop(&mut self) {
        if let Some(mut clip) = self.current.take() {
            clip.handle.stop();
        }
    }

    /// The play identified by `token` ended on its own. Ignored if another
    /// play took over since.
    pub fn finished(&mut self, token: u64) -> bool {
        if self.current.as_ref().is_some_and(|clip| clip.token == token) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Browser audio player shared through context
#[derive(Clone, Copy)]
pub struct AudioPlayer {
    slot: StoredValue<AudioSlot<BrowserClip>, LocalStorage>,
    playing: RwSignal<Option<String>>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self {
            slot: StoredValue::new_local(AudioSlot::default()),
            playing: RwSignal::new(None),
        }
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.playing.with(|p| p.as_deref() == Some(name))
    }

    pub fn stop(&self) {
        self.slot.update_value(|slot| slot.stop());
        self.playing.set(None);
    }

    pub fn play_url(&self, name: String, url: &str) {
        let player = *self;
        let mut now_playing = None;
        self.slot.update_value(|slot| {
            if let Err(e) = slot.play_with(name.clone(), |token| start_clip(player, token, &name, url)) {
                log::warn!("[AUDIO] Error playing {}: {:?}", name, e);
            }
            now_playing = slot.playing().map(str::to_string);
        });
        self.playing.set(now_playing);
    }

    fn finished(&self, token: u64) {
        let mut cleared = false;
        self.slot.update_value(|slot| cleared = slot.finished(token));
        if cleared {
            self.playing.set(None);
        }
    }
}

fn start_clip(player: AudioPlayer, token: u64, name: &str, url: &str) -> Result<BrowserClip, JsValue> {
    let audio = HtmlAudioElement::new_with_src(url)?;
    let on_ended = Closure::<dyn FnMut()>::new(move || player.finished(token));
    audio.set_onended(Some(on_ended.as_ref().unchecked_ref()));

    let promise = audio.play()?;
    let name = name.to_string();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[AUDIO] Error playing {}: {:?}", name, e);
            player.finished(token);
        }
    });

    Ok(BrowserClip { audio, _on_ended: on_ended })
}
