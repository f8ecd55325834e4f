//! Sound effect playback on a dedicated thread.
//!
//! - [`audio_thread`] owns the raylib audio device and every loaded
//!   [`Sound`], and reacts to [`AudioCmd`]s.
//! - [`poll_audio_messages`] drains the thread's replies into the ECS
//!   message queue each frame.
//! - [`update_bevy_audio_messages`] advances that queue.
//! - [`log_audio_messages`] reports failures.
//!
//! raylib audio calls never leave the audio thread; the game thread only
//! talks to it over `crossbeam_channel`.

use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;

pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("fx '{}' failed to load: {}", id, error)
            }
            AudioMessage::FxPlayFailed { id } => warn!("fx '{}' is not loaded", id),
            other => debug!("audio: {:?}", other),
        }
    }
}

/// Entry point of the audio thread. Runs until [`AudioCmd::Shutdown`] or
/// until the command channel closes.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            return;
        }
    };
    info!("audio thread starting (id={:?})", std::thread::current().id());

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        loop {
            let cmd = match rx_cmd.try_recv() {
                Ok(cmd) => cmd,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("audio command channel closed");
                    break 'run;
                }
            };
            match cmd {
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => match sounds.get(&id) {
                    Some(sound) => {
                        sound.play();
                        playing.insert(id);
                    }
                    None => {
                        let _ = tx_msg.send(AudioMessage::FxPlayFailed { id });
                    }
                },
                AudioCmd::Shutdown => {
                    info!("audio shutdown requested ({} sounds loaded)", sounds.len());
                    break 'run;
                }
            }
        }

        let finished: Vec<String> = playing
            .iter()
            .filter(|id| !sounds.get(*id).is_some_and(|s| s.is_playing()))
            .cloned()
            .collect();
        for id in finished {
            playing.remove(&id);
            let _ = tx_msg.send(AudioMessage::FxFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!("audio thread exiting");
}
