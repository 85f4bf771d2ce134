//! Messages exchanged with the audio thread.
//!
//! Locomotion audio cues map onto these commands: looping cues
//! ([`AudioCue::is_looping`]) are streamed music tracks, the rest are
//! one-shot sound effects. Every cue is loaded under its [`AudioCue::name`].

use bevy_ecs::message::Message;

use crate::locomotion::AudioCue;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    StopFx { id: String },
    Shutdown,
}

impl AudioCmd {
    /// Load command for `cue` from `dir`.
    pub fn load_cue(cue: AudioCue, dir: &str) -> Self {
        let id = cue.name().to_string();
        if cue.is_looping() {
            AudioCmd::LoadMusic {
                path: format!("{}/{}.ogg", dir, cue.name().to_lowercase()),
                id,
            }
        } else {
            AudioCmd::LoadFx {
                path: format!("{}/{}.wav", dir, cue.name().to_lowercase()),
                id,
            }
        }
    }

    pub fn play_cue(cue: AudioCue) -> Self {
        let id = cue.name().to_string();
        if cue.is_looping() {
            AudioCmd::PlayMusic { id, looped: true }
        } else {
            AudioCmd::PlayFx { id }
        }
    }

    pub fn stop_cue(cue: AudioCue) -> Self {
        let id = cue.name().to_string();
        if cue.is_looping() {
            AudioCmd::StopMusic { id }
        } else {
            AudioCmd::StopFx { id }
        }
    }
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicFinished { id: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxFinished { id: String },
}
