use glob::{MatchOptions, Pattern};
use std::ffi::OsStr;

/// Shell-style wildcard matched against a bare file or directory name.
///
/// Supports `*`, `?`, `[seq]`, `[!seq]` and ranges. Case sensitivity follows
/// the host: insensitive on Windows, sensitive everywhere else. A leading dot
/// needs no literal match, so `*` also matches `.hidden`. A `[` with no
/// closing `]` is an ordinary character, so every pattern is valid.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Glob(Pattern),
    Literal(String),
}

const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: !cfg!(windows),
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

impl NamePattern {
    pub fn new(pattern: &str) -> Self {
        let translated = to_glob_syntax(pattern);
        let matcher = match Pattern::new(&translated) {
            Ok(compiled) => Matcher::Glob(compiled),
            Err(err) => {
                log::debug!("pattern '{pattern}' matched literally: {err}");
                Matcher::Literal(pattern.to_string())
            }
        };
        Self {
            source: pattern.to_string(),
            matcher,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Glob(pattern) => pattern.matches_with(name, OPTIONS),
            Matcher::Literal(text) if OPTIONS.case_sensitive => text == name,
            Matcher::Literal(text) => text.to_lowercase() == name.to_lowercase(),
        }
    }

    pub fn matches_os(&self, name: &OsStr) -> bool {
        self.matches(&name.to_string_lossy())
    }
}

/// Rewrite a shell wildcard into something `glob::Pattern` accepts with the
/// same meaning for a bare name:
/// runs of `*` become one `*` (`**` is recursive-directory syntax to `glob`),
/// and a `[` that opens no complete class becomes the literal class `[[]`.
fn to_glob_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut prev_star = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '*' if prev_star => {}
            '[' => match class_end(&chars, i + 1) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            _ => out.push(c),
        }
        prev_star = c == '*';
        i += 1;
    }
    out
}

/// Index of the `]` closing a class whose body starts at `start`. A leading
/// `!` and then a leading `]` belong to the body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(pattern: &str, name: &str) -> bool {
        NamePattern::new(pattern).matches(name)
    }

    #[test]
    fn star_matches_any_run() {
        assert!(m("*.tmp", "a.tmp"));
        assert!(m("*.tmp", ".tmp"));
        assert!(m("cache*", "cache"));
        assert!(m("cache*", "cache_old"));
        assert!(!m("*.tmp", "a.tmp.bak"));
        assert!(!m("*.tmp", "b.log"));
    }

    #[test]
    fn star_matches_hidden_names() {
        assert!(m("*", ".DS_Store"));
        assert!(m("*.swp", ".notes.swp"));
    }

    #[test]
    fn question_mark_matches_one_char() {
        assert!(m("file?.txt", "file1.txt"));
        assert!(!m("file?.txt", "file.txt"));
        assert!(!m("file?.txt", "file12.txt"));
    }

    #[test]
    fn bracket_classes() {
        assert!(m("[abc]*.jpg", "a1.jpg"));
        assert!(!m("[abc]*.jpg", "d1.jpg"));
        assert!(m("log[0-9]", "log7"));
        assert!(!m("log[!0-9]", "log7"));
        assert!(m("log[!0-9]", "logx"));
    }

    #[test]
    fn exact_name_without_wildcards() {
        assert!(m("report.txt", "report.txt"));
        assert!(!m("report.txt", "report.txt.old"));
    }

    #[test]
    fn repeated_stars_compile() {
        assert!(m("a**b", "a-and-b"));
        assert!(m("**", "anything"));
    }

    #[test]
    fn unclosed_bracket_is_literal() {
        assert!(m("a[b", "a[b"));
        assert!(!m("a[b", "ab"));
        assert!(m("x[", "x["));
        assert!(m("[abc", "[abc"));
        assert!(m("*[", "log["));
    }

    #[test]
    fn empty_brackets_are_literal() {
        assert!(m("[]", "[]"));
        assert!(m("[!]", "[!]"));
        assert!(!m("[]", "a"));
    }

    #[test]
    fn closing_bracket_first_is_a_member() {
        assert!(m("[]a]", "]"));
        assert!(m("[]a]", "a"));
        assert!(m("[!]a]", "b"));
        assert!(!m("[!]a]", "]"));
    }

    #[test]
    fn open_bracket_inside_class_is_a_member() {
        assert!(m("[x[ab]", "["));
        assert!(m("[x[ab]", "a"));
        assert!(!m("[x[ab]", "[xa"));
        assert!(m("v[1-2].[", "v2.["));
    }

    #[test]
    fn translation_keeps_valid_patterns() {
        assert_eq!(to_glob_syntax("*.tmp"), "*.tmp");
        assert_eq!(to_glob_syntax("a**b"), "a*b");
        assert_eq!(to_glob_syntax("[*]*"), "[*]*");
        assert_eq!(to_glob_syntax("a[b"), "a[[]b");
        assert_eq!(to_glob_syntax("[]"), "[[]]");
    }

    #[cfg(not(windows))]
    #[test]
    fn case_sensitive_on_unix() {
        assert!(!m("*.TMP", "a.tmp"));
    }

    #[cfg(windows)]
    #[test]
    fn case_insensitive_on_windows() {
        assert!(m("*.TMP", "a.tmp"));
    }
}
