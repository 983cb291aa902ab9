use crate::trail::{Frame, Trail};

/// Playback state over a loaded trail: where the player currently is and
/// whether it is advancing on its own. Shared between the player screen and
/// its commands; commands mutate it, the screen renders it.
pub struct Session {
    trail: Trail,
    cursor: usize,
    playing: bool,
}

impl Session {
    pub fn new(trail: Trail) -> Self {
        Self {
            trail,
            cursor: 0,
            playing: false,
        }
    }

    pub fn current(&self) -> Option<&Frame> {
        self.trail.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.trail.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing && !self.is_empty();
    }

    /// Moves to the given frame, clamped to the trail.
    pub fn seek(&mut self, idx: usize) {
        self.cursor = idx.min(self.trail.len().saturating_sub(1));
    }

    pub fn seek_end(&mut self) {
        self.cursor = self.trail.len().saturating_sub(1);
    }

    /// Advances one frame. Returns false when already on the last frame.
    /// Reaching the last frame stops playback.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            self.playing = false;
            return false;
        }
        self.cursor += 1;
        if self.at_end() {
            self.playing = false;
        }
        true
    }

    /// Steps one frame back. Returns false when already on the first frame.
    pub fn step_back(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.cursor -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn trail(n: usize) -> Trail {
        let text = (0..n)
            .map(|i| format!("frame {i}"))
            .collect::<Vec<_>>()
            .join("\n---\n");
        Trail::parse_text(&text)
    }

    #[test]
    fn test_stepping_stops_at_edges() {
        let mut s = Session::new(trail(3));
        assert!(s.at_start());
        assert!(s.step_forward());
        assert!(s.step_forward());
        assert!(s.at_end());
        assert!(!s.step_forward());
        assert_eq!(s.cursor(), 2);
        assert!(s.step_back());
        assert!(s.step_back());
        assert!(!s.step_back());
        assert!(s.at_start());
    }

    #[test]
    fn test_playback_stops_on_last_frame() {
        let mut s = Session::new(trail(2));
        s.set_playing(true);
        assert!(s.is_playing());
        assert!(s.step_forward());
        assert!(s.at_end());
        assert!(!s.is_playing());
    }

    #[test]
    fn test_empty_trail_never_plays() {
        let mut s = Session::new(Trail::default());
        s.set_playing(true);
        assert!(!s.is_playing());
        assert!(s.at_end());
        assert_eq!(s.current(), None);
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut s = Session::new(trail(3));
        s.seek(99);
        assert_eq!(s.cursor(), 2);
        s.seek(0);
        assert!(s.at_start());
    }
}
