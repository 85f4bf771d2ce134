//! Audio thread and the systems that bridge it with the ECS world.
//!
//! - [`audio_thread`] owns the Raylib audio device on its own OS thread and
//!   processes [`AudioCmd`] messages, answering with [`AudioMessage`]s.
//! - [`forward_audio_cmds`] sends this frame's commands over the channel.
//! - [`poll_audio_messages`] drains the thread's replies into the ECS.
//!
//! Raylib audio calls stay on one thread; the game thread only talks to it
//! through `crossbeam_channel`.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the `AudioMessage` queue.
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Log failures reported by the audio thread.
pub fn log_audio_failures(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } | AudioMessage::FxLoadFailed { id, error } => {
                error!("Audio '{}' failed to load: {}", id, error)
            }
            other => debug!("Audio: {:?}", other),
        }
    }
}

/// Forward this frame's [`AudioCmd`]s to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // The receiver only disappears during shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the `AudioCmd` queue.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Blocks until [`AudioCmd::Shutdown`] arrives. Music streams are pumped
/// every iteration; looped tracks restart when they end.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            // Keep draining so senders never block on a dead thread.
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };

    info!("Audio thread starting");

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut fx_playing: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("Music loaded id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: format!("{}: {}", path, e),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    } else {
                        warn!("Music play ignored id='{}' (not loaded)", id);
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("Fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: format!("{}: {}", path, e),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                        fx_playing.insert(id);
                    } else {
                        warn!("Fx play ignored id='{}' (not loaded)", id);
                    }
                }
                AudioCmd::StopFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.stop();
                    }
                }
                AudioCmd::Shutdown => {
                    info!("Audio shutdown requested");
                    break 'run;
                }
            }
        }

        // Pump streams and detect natural ends.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended {
            if looped.contains(&id) {
                if let Some(music) = musics.get(&id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(&id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id });
            }
        }

        let fx_ended: Vec<String> = fx_playing
            .iter()
            .filter(|id| !sounds.get(*id).map(|s| s.is_playing()).unwrap_or(false))
            .cloned()
            .collect();
        for id in fx_ended {
            fx_playing.remove(&id);
            let _ = tx_evt.send(AudioMessage::FxFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    // Handles must drop before the device.
    sounds.clear();
    musics.clear();
    info!("Audio thread exiting");
}
