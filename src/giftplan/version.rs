/// Whether `latest` is a newer dotted version than `current`.
///
/// Components compare numerically, a missing component counts as 0, and a
/// leading `v` is ignored. Non-numeric components also count as 0.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    let latest = parts(latest);
    let current = parts(current);
    let len = latest.len().max(current.len());

    for i in 0..len {
        let l = latest.get(i).copied().unwrap_or(0);
        let c = current.get(i).copied().unwrap_or(0);
        if l != c {
            return l > c;
        }
    }
    false
}

fn parts(version: &str) -> Vec<u64> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    version
        .split('.')
        .map(|p| p.parse().unwrap_or(0))
        .collect()
}
