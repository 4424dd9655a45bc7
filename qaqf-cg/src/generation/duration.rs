//! Parsing of free-text durations and module-time totals

use crate::models::GeneratedModule;

/// Session count used when a storytelling duration has no usable upper bound
pub const DEFAULT_SESSION_COUNT: u32 = 4;

/// Leading unsigned integer after optional whitespace, e.g. " 8 sessions" → 8
pub fn leading_integer(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

/// First run of digits anywhere in the text
pub fn first_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    leading_integer(&text[start..])
}

/// Weeks sent to the generation endpoint: "8 weeks" → 8, no digits → 0
pub fn duration_weeks(duration: &str) -> u32 {
    first_integer(duration).unwrap_or(0)
}

/// Storytelling sessions from the second `-` token: "1-8 sessions" → 8
pub fn session_count(duration: &str) -> u32 {
    duration
        .split('-')
        .nth(1)
        .and_then(leading_integer)
        .unwrap_or(DEFAULT_SESSION_COUNT)
}

/// Minutes of one module, from the first space-separated token
pub fn module_minutes(module: &GeneratedModule) -> u32 {
    module
        .duration
        .split(' ')
        .next()
        .and_then(leading_integer)
        .unwrap_or(0)
}

/// "Xh Ym", "Xh" on whole hours, "Ym" under an hour
pub fn format_total_duration(total_minutes: u32) -> String {
    if total_minutes >= 60 {
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        if minutes > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    } else {
        format!("{}m", total_minutes)
    }
}

pub fn total_duration(modules: &[GeneratedModule]) -> String {
    let total = modules.iter().map(module_minutes).sum();
    format_total_duration(total)
}
