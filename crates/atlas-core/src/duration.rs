//! Travel-time rendering
//!
//! Durations are elapsed seconds from epoch zero, so days are plain
//! 86400-second blocks; calendar month lengths never enter into it.

/// Render an elapsed-seconds count as `DD:HH:MM`
///
/// Each field is zero-padded to two digits; the day field grows past two
/// digits as needed. Fractional seconds are floored, and negative or
/// non-finite input clamps to `00:00:00`.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;

    format!("{days:02}:{hours:02}:{minutes:02}")
}
