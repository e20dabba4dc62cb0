use std::io::Write;

use tictactoe_common::games::tictactoe::SoundCue;

/// Terminal-bell sound cues. Output errors are ignored.
pub struct AudioCues {
    enabled: bool,
}

impl AudioCues {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn play(&mut self, cue: SoundCue) {
        if !self.enabled {
            return;
        }
        let bells: &[u8] = match cue {
            SoundCue::Move => b"\x07",
            SoundCue::Win => b"\x07\x07",
        };
        // stdout carries the log lines.
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(bells).and_then(|_| stderr.flush());
    }
}
