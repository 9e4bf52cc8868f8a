//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a duration in minutes as "HHh MMm", e.g. 125 → "02h 05m".
pub fn minutes_readable(mins: u32) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;
    format!("{:02}h {:02}m", hours, minutes)
}
