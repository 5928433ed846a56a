use beep::beep;
use log::warn;

const TONE_PITCH: u16 = 440;

/// Drives the host beeper from the core's sound cue.
///
/// The core only exposes whether a tone should be playing; this tracks the
/// edge so the beeper is poked only on transitions.
pub struct Tone {
    active: bool,
}

impl Tone {
    pub fn new() -> Self {
        Tone { active: false }
    }

    /// Starts or stops the tone to match the machine's cue.
    pub fn set(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        let pitch = if active { TONE_PITCH } else { 0 };
        if let Err(e) = beep(pitch) {
            warn!("unable to drive the beeper: {}", e);
        }
        self.active = active;
    }
}
