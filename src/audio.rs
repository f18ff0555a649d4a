//! Bounce sound cues
//!
//! The simulation never plays audio itself; it reports bounce events and
//! this module decides which cue each one maps to. Playback backends hang
//! off [`SoundEffect`], so the mapping stays testable without a sound
//! device.

use crate::sim::BounceEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Shape bounced off a viewport edge
    WallBounce,
    /// Two shapes bounced off each other
    ShapeContact,
}

impl SoundEffect {
    /// Cue for a bounce event
    pub fn for_event(event: &BounceEvent) -> Self {
        match event {
            BounceEvent::Wall { .. } => SoundEffect::WallBounce,
            BounceEvent::Contact { .. } => SoundEffect::ShapeContact,
        }
    }
}

/// Audio manager gating cues behind the sound toggle
#[derive(Debug, Clone)]
pub struct AudioManager {
    enabled: bool,
}

impl AudioManager {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Mute or unmute every cue
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Cue for this event, or `None` while muted
    pub fn effect_for(&self, event: &BounceEvent) -> Option<SoundEffect> {
        self.enabled.then(|| SoundEffect::for_event(event))
    }

    /// Dispatch one event to the log backend
    pub fn handle(&self, event: &BounceEvent) {
        if let Some(effect) = self.effect_for(event) {
            log::debug!("sound cue {effect:?} for {event:?}");
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(true)
    }
}
