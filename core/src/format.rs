//! Duration formatting helpers shared by the display and history layers.

/// Format a duration in seconds as a zero-padded `MM:SS` clock string.
///
/// Minutes are not wrapped at 60, so a full hour renders as `60:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Round a duration in seconds to the nearest whole minute, halves up.
///
/// Used for spoken announcements and history labels, where "25 phút" reads
/// better than "1500 giây".
pub fn rounded_minutes(seconds: u32) -> u32 {
    seconds.saturating_add(30) / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(599), "09:59");
        assert_eq!(format_clock(1500), "25:00");
    }

    #[test]
    fn test_format_clock_does_not_wrap_minutes() {
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(5400), "90:00");
    }

    #[test]
    fn test_rounded_minutes() {
        assert_eq!(rounded_minutes(0), 0);
        assert_eq!(rounded_minutes(29), 0);
        assert_eq!(rounded_minutes(30), 1);
        assert_eq!(rounded_minutes(60), 1);
        assert_eq!(rounded_minutes(90), 2);
        assert_eq!(rounded_minutes(300), 5);
        assert_eq!(rounded_minutes(1500), 25);
        assert_eq!(rounded_minutes(3600), 60);
    }
}
