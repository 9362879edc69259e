/// Split a dot-separated version string into (major, minor, patch).
/// Missing or non-numeric components are treated as 0; components past the
/// patch position are ignored.
pub(crate) fn split_version(version: &str) -> (u32, u32, u32) {
    let mut parts = version.split('.').map(|p| p.parse::<u32>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}
