use log::{info, warn};
use macroquad::audio::{self, PlaySoundParams, Sound};
use std::path::Path;

/// Sound effects the simulation can trigger.
pub trait AudioSink {
    /// Short cue played when blobs are born
    fn play_pop(&mut self);

    /// Silence or restore all audio
    fn set_muted(&mut self, muted: bool);
}

/// Sink that plays nothing (tests, headless runs, missing assets)
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_pop(&mut self) {}

    fn set_muted(&mut self, _muted: bool) {}
}

const POP_FILE: &str = "button-click.wav";
const MUSIC_FILE: &str = "game-music.ogg";

/// macroquad-backed audio: looping background music plus a pop cue.
/// Either sound may be missing, in which case it is simply skipped.
pub struct MacroquadAudio {
    pop: Option<Sound>,
    music: Option<Sound>,
    muted: bool,
}

async fn load_optional(dir: &Path, file: &str) -> Option<Sound> {
    let path = dir.join(file);
    let path_str = path.to_string_lossy();
    match audio::load_sound(&path_str).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            warn!("audio: could not load {path_str}: {e:?}");
            None
        }
    }
}

impl MacroquadAudio {
    /// Load sounds from `assets_dir` and start the music loop
    pub async fn load(assets_dir: &Path) -> Self {
        let pop = load_optional(assets_dir, POP_FILE).await;
        let music = load_optional(assets_dir, MUSIC_FILE).await;

        if let Some(music) = &music {
            audio::play_sound(
                music,
                PlaySoundParams {
                    looped: true,
                    volume: 1.0,
                },
            );
        }
        info!(
            "audio: pop={} music={}",
            pop.is_some(),
            music.is_some()
        );

        Self {
            pop,
            music,
            muted: false,
        }
    }

    /// Stop everything before the window goes away
    pub fn shutdown(&mut self) {
        if let Some(music) = self.music.take() {
            audio::stop_sound(&music);
        }
        if let Some(pop) = self.pop.take() {
            audio::stop_sound(&pop);
        }
    }
}

impl AudioSink for MacroquadAudio {
    fn play_pop(&mut self) {
        if self.muted {
            return;
        }
        if let Some(pop) = &self.pop {
            audio::play_sound_once(pop);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(music) = &self.music {
            audio::set_sound_volume(music, if muted { 0.0 } else { 1.0 });
        }
    }
}

impl Drop for MacroquadAudio {
    fn drop(&mut self) {
        self.shutdown();
    }
}
