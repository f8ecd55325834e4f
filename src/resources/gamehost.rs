//! Hosting game resource.
//!
//! [`GameHost`] is the world's implementation of [`SpriteBasedGame`]. It keeps
//! score and lives, serves this frame's input snapshot and records state
//! change requests. Requests are only intentions: `start_game`, `end_game` and
//! `exit_program` mark a [`NextGameStates::Pending`] transition that
//! [`observe_gamestate_change_event`] applies later in the frame.
//!
//! [`observe_gamestate_change_event`]: crate::events::gamestate::observe_gamestate_change_event

use bevy_ecs::prelude::Resource;
use raylib::prelude::KeyboardKey;

use crate::host::SpriteBasedGame;
use crate::resources::input::{KeyboardState, MouseState};

pub const DEFAULT_LIVES: i32 = 3;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Title,
    Playing,
    Quitting,
}

/// Requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

#[derive(Resource, Debug, Clone)]
pub struct GameHost {
    pub score: i32,
    pub lives: i32,
    pub initial_lives: i32,
    pub mouse: MouseState,
    pub keys: KeyboardState,
    state: GameStates,
    next: NextGameStates,
}

impl Default for GameHost {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES)
    }
}

impl GameHost {
    pub fn new(initial_lives: i32) -> Self {
        Self {
            score: 0,
            lives: initial_lives,
            initial_lives,
            mouse: MouseState::default(),
            keys: KeyboardState::default(),
            state: GameStates::Title,
            next: NextGameStates::Unchanged,
        }
    }

    pub fn state(&self) -> GameStates {
        self.state
    }

    pub fn next_state(&self) -> NextGameStates {
        self.next
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameStates::Playing
    }

    pub fn is_quitting(&self) -> bool {
        self.state == GameStates::Quitting
    }

    /// Mark a transition as pending.
    pub fn request(&mut self, state: GameStates) {
        self.next = NextGameStates::Pending(state);
    }

    /// Apply the pending transition, returning `(old, new)` if there was one.
    pub fn apply_pending(&mut self) -> Option<(GameStates, GameStates)> {
        match self.next {
            NextGameStates::Pending(new_state) => {
                let old_state = self.state;
                self.state = new_state;
                self.next = NextGameStates::Unchanged;
                Some((old_state, new_state))
            }
            NextGameStates::Unchanged => None,
        }
    }

    /// Fresh score and lives for a new game.
    pub fn reset_counters(&mut self) {
        self.score = 0;
        self.lives = self.initial_lives;
    }
}

impl SpriteBasedGame for GameHost {
    fn update_lives(&mut self, delta: i32) {
        self.lives += delta;
        if self.lives <= 0 && self.is_playing() {
            self.end_game();
        }
    }

    fn update_score(&mut self, delta: i32) {
        self.score += delta;
    }

    fn score(&self) -> i32 {
        self.score
    }

    fn mouse_state(&self) -> MouseState {
        self.mouse
    }

    fn key_pressed(&self, key: KeyboardKey) -> bool {
        self.keys.is_pressed(key)
    }

    fn key_released(&self, key: KeyboardKey) -> bool {
        self.keys.is_released(key)
    }

    fn key_held(&self, key: KeyboardKey) -> bool {
        self.keys.is_held(key)
    }

    fn start_game(&mut self) {
        self.request(GameStates::Playing);
    }

    fn end_game(&mut self) {
        self.request(GameStates::Title);
    }

    fn exit_program(&mut self) {
        self.request(GameStates::Quitting);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_pending_until_applied() {
        let mut host = GameHost::default();
        host.start_game();
        assert_eq!(host.state(), GameStates::Title);
        assert_eq!(host.next_state(), NextGameStates::Pending(GameStates::Playing));
        assert_eq!(
            host.apply_pending(),
            Some((GameStates::Title, GameStates::Playing))
        );
        assert!(host.is_playing());
        assert_eq!(host.apply_pending(), None);
    }

    #[test]
    fn test_last_request_wins() {
        let mut host = GameHost::default();
        host.start_game();
        host.exit_program();
        host.apply_pending();
        assert!(host.is_quitting());
    }

    #[test]
    fn test_losing_last_life_ends_game() {
        let mut host = GameHost::new(1);
        host.start_game();
        host.apply_pending();
        host.update_score(10);
        assert_eq!(host.score(), 10);
        host.update_lives(-1);
        assert_eq!(host.next_state(), NextGameStates::Pending(GameStates::Title));
        host.reset_counters();
        assert_eq!((host.score, host.lives), (0, 1));
    }

    #[test]
    fn test_input_queries_read_snapshot() {
        let mut host = GameHost::default();
        host.keys.pressed.push(KeyboardKey::KEY_ENTER);
        host.mouse = MouseState::new(3.0, 4.0, true);
        assert!(host.key_pressed(KeyboardKey::KEY_ENTER));
        assert!(!host.key_held(KeyboardKey::KEY_ENTER));
        assert!(host.mouse_state().left_pressed);
    }
}
