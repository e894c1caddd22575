//! Wikilink extraction, resolution and rewriting

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{NoExpand, Regex, RegexBuilder};
use tracing::warn;

use crate::note::Note;

/// Prefix marking an id reference: `[[#20250109140000]]`
pub const ID_PREFIX: char = '#';

fn wikilink_regex() -> Option<&'static Regex> {
    static WIKILINK_RE: OnceLock<Option<Regex>> = OnceLock::new();
    WIKILINK_RE
        .get_or_init(|| match Regex::new(r"\[\[([^\]]+)\]\]") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile wiki link regex");
                None
            }
        })
        .as_ref()
}

/// Raw `[[target]]` contents in order of appearance, duplicates kept
pub fn extract_wikilinks(body: &str) -> Vec<String> {
    let Some(re) = wikilink_regex() else {
        return Vec::new();
    };

    re.captures_iter(body)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// What a wikilink target refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// `#<id>`: exactly the note with that id
    Id(&'a str),
    /// Anything else: every note whose title contains it, ignoring case
    Title(&'a str),
}

impl<'a> LinkTarget<'a> {
    pub fn parse(target: &'a str) -> Self {
        match target.strip_prefix(ID_PREFIX) {
            Some(id) => LinkTarget::Id(id),
            None => LinkTarget::Title(target),
        }
    }

    /// Check whether this target resolves to `note`
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            LinkTarget::Id(id) => note.id() == *id,
            LinkTarget::Title(fragment) => note
                .title
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
        }
    }

    /// All notes in `notes` this target resolves to, in iteration order
    pub fn resolve<'n, I>(&self, notes: I) -> Vec<&'n Note>
    where
        I: IntoIterator<Item = &'n Note>,
    {
        match self {
            LinkTarget::Id(_) => notes.into_iter().find(|n| self.matches(n)).into_iter().collect(),
            LinkTarget::Title(_) => notes.into_iter().filter(|n| self.matches(n)).collect(),
        }
    }
}

/// Check whether any wikilink in `source` resolves to `target`
pub fn links_to(source: &Note, target: &Note) -> bool {
    source
        .wikilinks()
        .iter()
        .any(|link| LinkTarget::parse(link).matches(target))
}

/// Replace every `[[old_title]]` (case-insensitive) in `body` with `[[new_title]]`.
///
/// Returns `None` when nothing changed. `[[#id]]` links are left alone.
pub fn rewrite_wikilinks(body: &str, old_title: &str, new_title: &str) -> Option<String> {
    let pattern = format!(r"\[\[{}\]\]", regex::escape(old_title));
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, old_title, "Failed to compile wikilink rewrite regex");
            return None;
        }
    };

    let replacement = format!("[[{}]]", new_title);
    match re.replace_all(body, NoExpand(&replacement)) {
        Cow::Borrowed(_) => None,
        Cow::Owned(rewritten) if rewritten != body => Some(rewritten),
        Cow::Owned(_) => None,
    }
}

/// First trimmed line of `body` holding a wikilink that resolves to `target`
pub fn link_context(body: &str, target: &Note) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| {
            extract_wikilinks(line)
                .iter()
                .any(|link| LinkTarget::parse(link).matches(target))
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, body: &str) -> Note {
        Note::with_id(id, title, vec![], body)
    }

    #[test]
    fn test_extract_wikilinks() {
        let links = extract_wikilinks(
            "links to [[Another Note]] and [[#20250109140000]] and [[Third Note]].",
        );
        assert_eq!(links, vec!["Another Note", "#20250109140000", "Third Note"]);
    }

    #[test]
    fn test_extract_wikilinks_keeps_duplicates() {
        let links = extract_wikilinks("[[A]] then [[b]] then [[A]]");
        assert_eq!(links, vec!["A", "b", "A"]);
    }

    #[test]
    fn test_extract_wikilinks_ignores_empty_and_unclosed() {
        assert!(extract_wikilinks("[[]] and [[open").is_empty());
        assert!(extract_wikilinks("no links here").is_empty());
    }

    #[test]
    fn test_link_target_parse() {
        assert_eq!(LinkTarget::parse("#123"), LinkTarget::Id("123"));
        assert_eq!(LinkTarget::parse("Some Title"), LinkTarget::Title("Some Title"));
    }

    #[test]
    fn test_resolve_by_title_substring() {
        let notes = vec![
            note("1", "Rust Ownership", ""),
            note("2", "Borrowing in Rust", ""),
            note("3", "Python", ""),
        ];

        let hits = LinkTarget::parse("rust").resolve(&notes);
        let ids: Vec<&str> = hits.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        assert!(LinkTarget::parse("Haskell").resolve(&notes).is_empty());
    }

    #[test]
    fn test_resolve_by_id() {
        let notes = vec![note("1", "One", ""), note("2", "Two", "")];

        let hits = LinkTarget::parse("#2").resolve(&notes);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), "2");

        assert!(LinkTarget::parse("#3").resolve(&notes).is_empty());
        // An id reference never falls back to title matching
        assert!(LinkTarget::parse("#One").resolve(&notes).is_empty());
    }

    #[test]
    fn test_links_to() {
        let target = note("2", "Target Note", "");
        assert!(links_to(&note("1", "A", "see [[target]]"), &target));
        assert!(links_to(&note("1", "A", "see [[#2]]"), &target));
        assert!(!links_to(&note("1", "A", "see [[Other]]"), &target));
    }

    #[test]
    fn test_rewrite_wikilinks() {
        let body = "See [[Old Title]] and [[old title]] but not [[Old Title Extended]] or [[#1]].";
        let rewritten = rewrite_wikilinks(body, "Old Title", "New Title").unwrap();

        assert_eq!(
            rewritten,
            "See [[New Title]] and [[New Title]] but not [[Old Title Extended]] or [[#1]]."
        );
    }

    #[test]
    fn test_rewrite_wikilinks_unchanged() {
        assert!(rewrite_wikilinks("nothing here", "Old", "New").is_none());
        assert!(rewrite_wikilinks("[[Same]]", "Same", "Same").is_none());
    }

    #[test]
    fn test_rewrite_wikilinks_escapes_titles() {
        let body = "[[C++ (lang)]] and [[Cxx (lang)]]";
        let rewritten = rewrite_wikilinks(body, "C++ (lang)", "$1 money").unwrap();
        assert_eq!(rewritten, "[[$1 money]] and [[Cxx (lang)]]");
    }

    #[test]
    fn test_link_context() {
        let target = note("20250109140000", "Target", "");
        let body = "intro line\n   see [[target]] for more   \nlast";
        assert_eq!(
            link_context(body, &target).as_deref(),
            Some("see [[target]] for more")
        );

        let body = "first\nvia id [[#20250109140000]]";
        assert_eq!(
            link_context(body, &target).as_deref(),
            Some("via id [[#20250109140000]]")
        );

        assert!(link_context("mentions Target without brackets", &target).is_none());
    }

    #[test]
    fn test_link_context_partial_title() {
        let target = note("20250109140000", "Target Note", "");
        let body = "intro\nsee [[target]] here";
        assert_eq!(link_context(body, &target).as_deref(), Some("see [[target]] here"));
    }

    #[test]
    fn test_link_context_ignores_title_in_prose() {
        let target = note("20250109140000", "Target Note", "");
        let body = "[[Other]] next to Target Note in prose\nlater [[Target]] for real";
        assert_eq!(
            link_context(body, &target).as_deref(),
            Some("later [[Target]] for real")
        );
    }
}
