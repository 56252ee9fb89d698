//! Weekday occurrence counting over a date list.

/// Count lines containing `weekday_name` as a substring.
///
/// This is a case-sensitive substring match per line, not a calendar
/// computation: `"2024-01-01 Monday"` matches `"Monday"`, and so would a
/// line that merely mentions the word. An empty input yields 0.
pub fn count_matching_lines(text: &str, weekday_name: &str) -> usize {
    text.lines()
        .filter(|line| line.contains(weekday_name))
        .count()
}
