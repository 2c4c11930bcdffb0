//! Extension matching for content classification.
//!
//! Configuration names file extensions without the leading dot
//! (`markdown_ext = ["md", "markdown"]`). [`ExtMatcher`] turns such a set into
//! a filename predicate: a name matches when it ends, case-sensitively, in
//! `.` + one of the extensions. An empty set matches nothing, which is how
//! discovery operations short-circuit to an empty result without touching the
//! filesystem.

/// Predicate over filenames built from a set of extensions.
#[derive(Debug, Clone)]
pub struct ExtMatcher {
    suffixes: Vec<String>,
}

impl ExtMatcher {
    /// Build a matcher from extensions without leading dots.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .map(|e| format!(".{}", e.as_ref()))
            .collect();
        ExtMatcher { suffixes }
    }

    /// True when the matcher was built from an empty extension set.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// True when `file_name` ends in `.` + one of the extensions.
    /// Case-sensitive; an empty matcher never matches.
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_single_extension() {
        let m = ExtMatcher::new(["md"]);
        assert!(m.matches("2020-01-01-hi.md"));
        assert!(!m.matches("notes.txt"));
    }

    #[test]
    fn matches_any_of_several() {
        let m = ExtMatcher::new(["md", "markdown", "html"]);
        assert!(m.matches("post.markdown"));
        assert!(m.matches("index.html"));
        assert!(!m.matches("logo.png"));
    }

    #[test]
    fn empty_set_matches_nothing() {
        let m = ExtMatcher::new(Vec::<String>::new());
        assert!(m.is_empty());
        assert!(!m.matches("anything.md"));
        assert!(!m.matches(""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let m = ExtMatcher::new(["md"]);
        assert!(!m.matches("README.MD"));
    }

    #[test]
    fn extension_must_follow_a_dot() {
        let m = ExtMatcher::new(["md"]);
        assert!(!m.matches("commandmd"));
    }

    #[test]
    fn suffix_not_whole_extension_chain() {
        // "tar.gz" as a configured extension matches the full compound suffix
        let m = ExtMatcher::new(["tar.gz"]);
        assert!(m.matches("backup.tar.gz"));
        assert!(!m.matches("backup.gz"));
    }
}
