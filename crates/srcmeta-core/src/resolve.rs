//! # Embedded-Resource Path Resolution
//!
//! Resolves resource references declared inside a source file (the string
//! arguments of `include_str!`/`include_bytes!`) to build-root-relative
//! paths. A reference is interpreted relative to the *directory containing*
//! the referencing file: for `src/blocks/mod.rs` declaring
//! `include_str!("examples/doc.json")`, the resolved path is
//! `src/blocks/examples/doc.json`.
//!
//! Resolution is purely lexical. No filesystem access, no symlink
//! following, no existence checks — malformed inputs clean to *some*
//! deterministic string rather than producing an error.
//!
//! ## Cleaning rule
//!
//! `.` segments and resolvable `..` segments are collapsed. A leading `..`
//! that has nothing left to collapse against is preserved as-is; whether a
//! resolved path escapes the build root is the caller's concern, not this
//! module's.

/// Resolve resource references relative to the file that declares them.
///
/// `src_file` is the build-root-relative path of the referencing source
/// file (e.g. `"src/blocks/mod.rs"`); `references` are the raw reference
/// strings pulled from it. The output is index-aligned with the input:
/// same length, same order, one resolved path per reference. An empty
/// `references` produces an empty `Vec`.
///
/// Pure and total — no error path and no side effects.
pub fn resolve_embedded_paths(src_file: &str, references: &[String]) -> Vec<String> {
    if references.is_empty() {
        return Vec::new();
    }

    let dir = parent_dir(src_file);
    references
        .iter()
        .map(|reference| clean_path(&format!("{dir}/{reference}")))
        .collect()
}

/// Directory portion of a path: `"a/b/c.ext"` yields `"a/b"`, a bare
/// filename yields `"."`.
pub(crate) fn parent_dir(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => clean_path(&path[..=idx]),
        None => ".".to_string(),
    }
}

/// Lexically clean a `/`-separated path.
///
/// Drops empty and `.` segments, collapses `a/..` pairs, and keeps a
/// leading `..` that cannot be collapsed (except on rooted paths, where
/// `..` at the root is dropped). An empty result becomes `"."` (`"/"`
/// when rooted).
pub(crate) fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut kept: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match kept.last() {
                Some(&prev) if prev != ".." => {
                    kept.pop();
                }
                None if rooted => {}
                _ => kept.push(".."),
            },
            other => kept.push(other),
        }
    }

    let body = kept.join("/");
    match (rooted, body.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{body}"),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_references_resolve_to_nothing() {
        assert!(resolve_embedded_paths("src/lib.rs", &[]).is_empty());
        assert!(resolve_embedded_paths("", &[]).is_empty());
    }

    #[test]
    fn resolves_relative_to_containing_directory() {
        let resolved =
            resolve_embedded_paths("src/blocks/mod.rs", &refs(&["examples/doc.json"]));
        assert_eq!(resolved, vec!["src/blocks/examples/doc.json"]);
    }

    #[test]
    fn bare_filename_resolves_from_root() {
        let resolved = resolve_embedded_paths("lib.rs", &refs(&["data/binary.bin"]));
        assert_eq!(resolved, vec!["data/binary.bin"]);
    }

    #[test]
    fn parent_segments_collapse_within_the_tree() {
        let resolved =
            resolve_embedded_paths("src/blocks/mod.rs", &refs(&["../fixtures/a.json"]));
        assert_eq!(resolved, vec!["src/fixtures/a.json"]);
    }

    #[test]
    fn cleaning_preserves_uncollapsible_parent() {
        // Matches Go filepath.Clean: a leading ".." with nothing to collapse
        // against stays. Root containment is the caller's job.
        let resolved = resolve_embedded_paths("top.rs", &refs(&["../sibling/x.json"]));
        assert_eq!(resolved, vec!["../sibling/x.json"]);
    }

    #[test]
    fn output_preserves_input_order() {
        let resolved = resolve_embedded_paths(
            "src/mod.rs",
            &refs(&["b.json", "a.json", "./a.json"]),
        );
        assert_eq!(resolved, vec!["src/b.json", "src/a.json", "src/a.json"]);
    }

    #[test]
    fn dot_segments_are_dropped() {
        let resolved = resolve_embedded_paths("src/mod.rs", &refs(&["./x/./y.json"]));
        assert_eq!(resolved, vec!["src/x/y.json"]);
    }

    #[test]
    fn parent_dir_semantics() {
        assert_eq!(parent_dir("a/b/c.ext"), "a/b");
        assert_eq!(parent_dir("top.ext"), ".");
        assert_eq!(parent_dir(""), ".");
        assert_eq!(parent_dir("/x"), "/");
    }

    #[test]
    fn clean_path_boundary_cases() {
        assert_eq!(clean_path("a/b/../c"), "a/c");
        assert_eq!(clean_path("./x"), "x");
        assert_eq!(clean_path("a/.."), ".");
        assert_eq!(clean_path("../../x"), "../../x");
        assert_eq!(clean_path(""), ".");
        assert_eq!(clean_path("/../x"), "/x");
        assert_eq!(clean_path("a//b"), "a/b");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn path_like() -> impl Strategy<Value = String> {
        "[a-z./]{0,30}"
    }

    proptest! {
        /// The output is always index-aligned with the input.
        #[test]
        fn resolution_preserves_length(
            src in path_like(),
            references in prop::collection::vec(path_like(), 0..8),
        ) {
            let resolved = resolve_embedded_paths(&src, &references);
            prop_assert_eq!(resolved.len(), references.len());
        }

        /// Cleaning is idempotent: a cleaned path cleans to itself.
        #[test]
        fn clean_path_idempotent(path in path_like()) {
            let once = clean_path(&path);
            prop_assert_eq!(clean_path(&once), once);
        }

        /// Cleaned output never contains "." or empty segments.
        #[test]
        fn clean_path_has_no_dot_segments(path in path_like()) {
            let cleaned = clean_path(&path);
            if cleaned != "." && cleaned != "/" {
                for segment in cleaned.trim_start_matches('/').split('/') {
                    prop_assert!(!segment.is_empty());
                    prop_assert_ne!(segment, ".");
                }
            }
        }
    }
}
