//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and `Messages<AudioMessage>` resources. Call
//! [`shutdown_audio`] during teardown to stop the thread and free the sounds.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::host::SoundPlayer;
use crate::systems::audio::audio_thread;

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// ECS -> audio thread.
    pub tx_cmd: Sender<AudioCmd>,
    /// Audio thread -> ECS.
    pub rx_msg: Receiver<AudioMessage>,
    /// `None` for bridges not backed by a thread.
    pub handle: Option<std::thread::JoinHandle<()>>,
}

impl AudioBridge {
    /// Bridge over caller-owned channel ends, with no thread behind it.
    pub fn detached(tx_cmd: Sender<AudioCmd>, rx_msg: Receiver<AudioMessage>) -> Self {
        Self {
            tx_cmd,
            rx_msg,
            handle: None,
        }
    }

    pub fn load_fx(&self, id: impl Into<String>, path: impl Into<String>) -> Result<(), String> {
        self.send(AudioCmd::LoadFx {
            id: id.into(),
            path: path.into(),
        })
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), String> {
        self.tx_cmd
            .send(cmd)
            .map_err(|e| format!("Audio thread is gone: {}", e))
    }
}

impl SoundPlayer for AudioBridge {
    fn play(&mut self, id: &str) -> Result<(), String> {
        debug!("play fx '{}'", id);
        self.send(AudioCmd::PlayFx { id: id.to_string() })
    }
}

/// Sound player for runs without an audio device.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutedSound;

impl SoundPlayer for MutedSound {
    fn play(&mut self, id: &str) -> Result<(), String> {
        Err(format!("Audio muted, '{}' not played", id))
    }
}

/// Spawn the audio thread and register bridge resources.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));
    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle: Some(handle),
    });
    world.insert_resource(Messages::<AudioMessage>::default());
}

/// Request shutdown of the audio thread and join it.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if let Some(handle) = bridge.handle {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_sends_command() {
        let (tx_cmd, rx_cmd) = unbounded();
        let (_tx_msg, rx_msg) = unbounded();
        let mut bridge = AudioBridge::detached(tx_cmd, rx_msg);
        bridge.play("boom").unwrap();
        assert_eq!(
            rx_cmd.try_recv().unwrap(),
            AudioCmd::PlayFx {
                id: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_play_fails_once_thread_is_gone() {
        let (tx_cmd, rx_cmd) = unbounded();
        let (_tx_msg, rx_msg) = unbounded();
        let mut bridge = AudioBridge::detached(tx_cmd, rx_msg);
        drop(rx_cmd);
        assert!(bridge.play("boom").is_err());
        assert!(MutedSound.play("boom").is_err());
    }

    #[test]
    fn test_shutdown_sends_only_shutdown_and_removes_bridge() {
        let (tx_cmd, rx_cmd) = unbounded();
        let (_tx_msg, rx_msg) = unbounded();
        let mut world = World::new();
        world.insert_resource(AudioBridge::detached(tx_cmd, rx_msg));

        shutdown_audio(&mut world);

        assert!(!world.contains_resource::<AudioBridge>());
        let sent: Vec<AudioCmd> = rx_cmd.try_iter().collect();
        assert_eq!(sent, vec![AudioCmd::Shutdown]);
    }
}
