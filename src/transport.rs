//! Transport state machine - tracks which entry is selected, whether playback
//! is active, and whether the user is holding the progress slider. The audio
//! controller mirrors this state into the real audio element.

/// Selection and play state for a fixed-length track list.
///
/// Owns no platform resources; every interactive handler funnels through the
/// methods here so the transition rules live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transport {
    len: usize,
    current: usize,
    playing: bool,
    dragging: bool,
}

impl Transport {
    /// Start at the first track, paused.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            playing: false,
            dragging: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The previous-track affordance is live except on the first track.
    pub fn prev_enabled(&self) -> bool {
        self.current > 0
    }

    /// The next-track affordance is live except on the last track.
    pub fn next_enabled(&self) -> bool {
        self.current + 1 < self.len
    }

    /// Mirror the audio element's actual play state. Visual play state always
    /// follows the element, not what a caller assumed it did.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Step back one track and resume playback. Silently ignored on the
    /// first track; there is no wraparound.
    pub fn prev(&mut self) {
        if !self.prev_enabled() {
            return;
        }
        self.current -= 1;
        self.playing = true;
    }

    /// Step forward one track and resume playback. Silently ignored on the
    /// last track.
    pub fn next(&mut self) {
        if !self.next_enabled() {
            return;
        }
        self.current += 1;
        self.playing = true;
    }

    /// A click on the row that is already active toggles play/pause in
    /// place; a click on any other row switches to it and resumes.
    pub fn track_clicked(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if index == self.current {
            self.toggle();
        } else {
            self.current = index;
            self.playing = true;
        }
    }

    /// The current track played to its end: advance and keep playing, or
    /// stop on the last track.
    pub fn track_ended(&mut self) {
        if self.next_enabled() {
            self.current += 1;
            self.playing = true;
        } else {
            self.playing = false;
        }
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

/// Map a committed slider value (0-100) onto an absolute position within
/// the track. Unknown or unloaded durations seek to the start.
pub fn seek_target(percent: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    (percent.clamp(0.0, 100.0) / 100.0) * duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_track_paused() {
        let t = Transport::new(3);
        assert_eq!(t.current(), 0);
        assert!(!t.is_playing());
        assert!(!t.prev_enabled());
        assert!(t.next_enabled());
    }

    #[test]
    fn single_track_list_has_no_next_target() {
        let t = Transport::new(1);
        assert!(!t.prev_enabled());
        assert!(!t.next_enabled());
    }

    #[test]
    fn enablement_tracks_position() {
        let mut t = Transport::new(3);
        t.next();
        assert!(t.prev_enabled());
        assert!(t.next_enabled());
        t.next();
        assert!(t.prev_enabled());
        assert!(!t.next_enabled());
    }

    #[test]
    fn prev_on_first_track_is_a_no_op() {
        let mut t = Transport::new(3);
        t.prev();
        assert_eq!(t.current(), 0);
        assert!(!t.is_playing());
    }

    #[test]
    fn next_on_last_track_is_a_no_op() {
        let mut t = Transport::new(2);
        t.next();
        assert_eq!(t.current(), 1);
        let before = t;
        t.next();
        assert_eq!(t, before);
    }

    #[test]
    fn switching_tracks_always_resumes() {
        let mut t = Transport::new(3);
        // Paused before the switch; playback still resumes.
        t.next();
        assert!(t.is_playing());
        t.set_playing(false);
        t.prev();
        assert!(t.is_playing());
        assert_eq!(t.current(), 0);
    }

    #[test]
    fn track_end_advances_and_keeps_playing() {
        let mut t = Transport::new(3);
        t.set_playing(true);
        t.track_ended();
        assert_eq!(t.current(), 1);
        assert!(t.is_playing());
    }

    #[test]
    fn track_end_on_last_track_stops() {
        let mut t = Transport::new(2);
        t.next();
        t.track_ended();
        assert_eq!(t.current(), 1);
        assert!(!t.is_playing());
    }

    #[test]
    fn clicking_active_row_toggles_in_place() {
        let mut t = Transport::new(3);
        t.track_clicked(0);
        assert_eq!(t.current(), 0);
        assert!(t.is_playing());
        t.track_clicked(0);
        assert_eq!(t.current(), 0);
        assert!(!t.is_playing());
    }

    #[test]
    fn clicking_another_row_switches_and_resumes() {
        let mut t = Transport::new(3);
        t.track_clicked(2);
        assert_eq!(t.current(), 2);
        assert!(t.is_playing());
    }

    #[test]
    fn clicking_out_of_range_is_ignored() {
        let mut t = Transport::new(2);
        t.track_clicked(5);
        assert_eq!(t.current(), 0);
        assert!(!t.is_playing());
    }

    #[test]
    fn drag_flag_follows_press_and_release() {
        let mut t = Transport::new(1);
        assert!(!t.is_dragging());
        t.begin_drag();
        assert!(t.is_dragging());
        t.end_drag();
        assert!(!t.is_dragging());
    }

    #[test]
    fn seek_target_maps_slider_fraction() {
        assert_eq!(seek_target(50.0, 200.0), 100.0);
        assert_eq!(seek_target(0.0, 200.0), 0.0);
        assert_eq!(seek_target(100.0, 200.0), 200.0);
    }

    #[test]
    fn seek_target_clamps_and_handles_unknown_duration() {
        assert_eq!(seek_target(150.0, 100.0), 100.0);
        assert_eq!(seek_target(-10.0, 100.0), 0.0);
        assert_eq!(seek_target(50.0, 0.0), 0.0);
        assert_eq!(seek_target(50.0, f64::NAN), 0.0);
    }

    #[test]
    fn three_track_scenario_walk() {
        let mut t = Transport::new(3);
        t.next();
        assert_eq!(t.current(), 1);
        assert!(t.is_playing());
        assert!(t.prev_enabled());
        assert!(t.next_enabled());
        t.next();
        assert_eq!(t.current(), 2);
        assert!(!t.next_enabled());
        t.track_ended();
        assert!(!t.is_playing());
        assert_eq!(t.current(), 2);
    }
}
