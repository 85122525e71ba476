//! Canonical asset paths.
//!
//! Asset keys are slash-separated strings independent of the host OS, so these
//! helpers work on `str` rather than `std::path`.

/// Clean a request path into its canonical, slash-rooted form.
///
/// - the result always starts with `/`
/// - empty and `.` segments are dropped (so duplicate slashes collapse)
/// - `..` removes the previous segment and never climbs above the root
/// - no trailing slash, except for the root itself
pub fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut out = String::with_capacity(path.len() + 1);
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Last segment of a cleaned path; `/` for the root.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Prepend `prefix` to `path` and clean the result.
///
/// This is plain concatenation, so `join("/js", "/a.js")` is `/js/a.js` and
/// `join("/js", "/../a.js")` is `/a.js`.
pub fn join(prefix: &str, path: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + path.len() + 1);
    joined.push_str(prefix);
    if !path.starts_with('/') {
        joined.push('/');
    }
    joined.push_str(path);
    clean(&joined)
}

/// Strip a canonical mount point from a request path.
///
/// Returns the remainder as a rooted path, or `None` if `path` does not live
/// under `mount_point`. Matching is by whole segments: `/assets` does not
/// match `/assetsfoo`.
pub fn strip_mount(mount_point: &str, path: &str) -> Option<String> {
    let path = clean(path);
    if mount_point == "/" {
        return Some(path);
    }
    let rest = path.strip_prefix(mount_point)?;
    if rest.is_empty() {
        Some("/".to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        None
    }
}
