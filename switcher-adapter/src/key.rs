use switcher::Entry;

/// Derives the cache key for an entry's screenshot.
///
/// The back stack may contain the same route more than once (the user opened
/// the same screen twice), so the route alone is not a stable identity. The
/// key combines the entry's unique id with the route so each occurrence gets
/// its own slot.
pub fn screenshot_key(id: u64, route_key: &str) -> String {
    format!("{id}_{route_key}")
}

pub(crate) fn entry_key(entry: &Entry) -> String {
    screenshot_key(entry.id, &entry.route_key)
}
