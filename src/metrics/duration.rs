// ISO-8601 duration parsing ("PT1M13S" and friends)
// The platform API reports video lengths in this format; only the
// duration forms it actually emits (weeks, days, H/M/S) are supported.

use regex::Regex;
use std::sync::OnceLock;

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^P(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").unwrap()
    })
}

/// Parse an ISO-8601 duration into whole seconds.
/// Returns None for malformed input, including a bare "P"/"PT" with no
/// components at all.
pub fn parse_duration_seconds(duration: &str) -> Option<u64> {
    let caps = duration_re().captures(duration)?;

    let mut any_component = false;
    let mut component = |idx: usize| -> u64 {
        match caps.get(idx) {
            Some(m) => {
                any_component = true;
                m.as_str().parse().unwrap_or(0)
            }
            None => 0,
        }
    };

    let weeks = component(1);
    let days = component(2);
    let hours = component(3);
    let minutes = component(4);
    let seconds = component(5);

    if !any_component {
        return None;
    }

    Some(weeks * 604_800 + days * 86_400 + hours * 3_600 + minutes * 60 + seconds)
}
