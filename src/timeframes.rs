// Timeframe presets
// Two call sites historically diverged on their option sets; they stay
// separate tables rather than one merged canonical list.

/// Dashboard presets: label -> day window, None meaning all time
pub const DASHBOARD_TIMEFRAMES: [(&str, Option<u32>); 5] = [
    ("7d", Some(7)),
    ("30d", Some(30)),
    ("60d", Some(60)),
    ("90d", Some(90)),
    ("all", None),
];

/// Channel-compare presets: label -> day window, no all-time option
pub const COMPARE_TIMEFRAMES: [(&str, u32); 4] = [
    ("60d", 60),
    ("90d", 90),
    ("180d", 180),
    ("360d", 360),
];

/// Look up a dashboard preset.
/// Outer None means unknown label; inner None means all time.
pub fn resolve_dashboard(label: &str) -> Option<Option<u32>> {
    DASHBOARD_TIMEFRAMES
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, days)| *days)
}

/// Look up a compare preset
pub fn resolve_compare(label: &str) -> Option<u32> {
    COMPARE_TIMEFRAMES
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, days)| *days)
}
