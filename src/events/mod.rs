//! Event and message types.
//!
//! - [`audio`] – commands to and replies from the audio thread
//! - [`gamestate`] – state transition event and its observer

pub mod audio;
pub mod gamestate;
