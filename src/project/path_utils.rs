//! Path canonicalization and decomposition.
//!
//! These are pure string/path operations with no filesystem access — the
//! globre matcher (`project::globre`) is what actually touches disk.

/// Collapse `\` to `/`, squash repeated separators, drop `.` components,
/// and resolve `..` by popping the previous component. Returns `None` when
/// a `..` would pop past the root.
pub fn canonicalize(path: &str) -> Option<String> {
    let normalized = path.replace('\\', "/");
    let is_absolute = normalized.starts_with('/');

    let mut stack: Vec<&str> = Vec::new();
    for part in normalized.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            stack.pop()?;
        } else {
            stack.push(part);
        }
    }

    let joined = stack.join("/");
    Some(if is_absolute { format!("/{joined}") } else { joined })
}

/// Canonicalize then split on `/`, dropping empty components.
pub fn path_components(path: &str) -> Vec<String> {
    canonicalize(path)
        .map(|c| c.split('/').filter(|s| !s.is_empty()).map(String::from).collect())
        .unwrap_or_default()
}

/// The directory portion of `path` (everything before the last `/`), or
/// `""` if `path` has no separator.
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..i],
        None => "",
    }
}

/// Join `dirname(anchor)` with `path`, then canonicalize the result.
pub fn path_relative_to(path: &str, anchor: &str) -> Option<String> {
    let dir = dirname(anchor);
    let joined = if dir.is_empty() { path.to_string() } else { format!("{dir}/{path}") };
    canonicalize(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_double_slash() {
        assert_eq!(canonicalize("a//b/../c").as_deref(), Some("a/c"));
    }

    #[test]
    fn drops_dot_component() {
        assert_eq!(canonicalize("./a").as_deref(), Some("a"));
    }

    #[test]
    fn normalizes_backslashes() {
        assert_eq!(canonicalize("a\\b").as_deref(), Some("a/b"));
    }

    #[test]
    fn excessive_dotdot_fails() {
        assert_eq!(canonicalize("../a"), None);
        assert_eq!(canonicalize("a/../../b"), None);
    }

    #[test]
    fn absolute_path_keeps_leading_slash() {
        assert_eq!(canonicalize("/a/./b/../c").as_deref(), Some("/a/c"));
    }

    #[test]
    fn components_split_on_slash() {
        assert_eq!(path_components("a//b/../c"), vec!["a", "c"]);
    }

    #[test]
    fn relative_to_joins_anchor_dirname() {
        assert_eq!(
            path_relative_to("b.c", "src/a.c").as_deref(),
            Some("src/b.c")
        );
        assert_eq!(path_relative_to("b.c", "a.c").as_deref(), Some("b.c"));
    }

    #[test]
    fn dirname_of_bare_name_is_empty() {
        assert_eq!(dirname("a.c"), "");
        assert_eq!(dirname("src/a.c"), "src");
    }
}
