/// Utility helpers for PlayDeck

/// Format a playback position in seconds for the time labels.
/// Positions up to ten minutes render as `MM:SS`; anything longer switches
/// to `HH:MM:SS`.
pub fn fmt_time(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if total > 600 {
        format!("{hours:02}:{mins:02}:{secs:02}")
    } else {
        format!("{mins:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_positions_use_minutes_and_seconds() {
        assert_eq!(fmt_time(0.0), "00:00");
        assert_eq!(fmt_time(7.0), "00:07");
        assert_eq!(fmt_time(65.0), "01:05");
        assert_eq!(fmt_time(599.0), "09:59");
    }

    #[test]
    fn threshold_sits_at_ten_minutes() {
        assert_eq!(fmt_time(600.0), "10:00");
        assert_eq!(fmt_time(601.0), "00:10:01");
    }

    #[test]
    fn long_positions_include_hours() {
        assert_eq!(fmt_time(3600.0), "01:00:00");
        assert_eq!(fmt_time(3725.0), "01:02:05");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(fmt_time(59.9), "00:59");
    }

    #[test]
    fn non_finite_positions_render_as_zero() {
        assert_eq!(fmt_time(f64::NAN), "00:00");
        assert_eq!(fmt_time(-3.0), "00:00");
    }
}
