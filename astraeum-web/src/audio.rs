//! Thin cue player over the platform audio element.
//!
//! Constructed once by the app root and passed down; playback failures are
//! logged and swallowed so a muted or restrictive browser never breaks the
//! game flow.

use web_sys::HtmlAudioElement;

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Victory,
    Defeat,
    Notification,
}

impl AudioCue {
    #[must_use]
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::Victory => "static/audio/victory.ogg",
            Self::Defeat => "static/audio/defeat.ogg",
            Self::Notification => "static/audio/notice.ogg",
        }
    }
}

#[derive(Debug, Default)]
pub struct AudioService;

impl AudioService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn play(&self, cue: AudioCue) {
        // Async autoplay rejections surface through the returned promise and
        // are left to the browser console; only setup failures land here.
        let started = HtmlAudioElement::new_with_src(cue.asset_path())
            .and_then(|element| element.play());
        if let Err(err) = started {
            dom::console_error(&format!(
                "Audio cue unavailable: {}",
                dom::js_error_message(&err)
            ));
        }
    }
}
