//! Turning link text into a vault file.

use std::cmp::Ordering;

use relative_path::RelativePath;

use crate::models::{IndexEntry, NoteIndex, TargetFile};

const SUBPATH: char = '#';
const NOTE_EXT: &str = ".md";

/// Strips the `#subpath` (heading or `^block` reference) from raw link text.
///
/// `"A#Heading"` becomes `"A"`; `"#Heading"` becomes `""`, a link to the
/// note it is written in.
pub fn link_path(raw: &str) -> &str {
    let end = raw.find(SUBPATH).unwrap_or(raw.len());
    raw[..end].trim()
}

/// File names a key may refer to: notes are usually linked without their
/// extension.
fn candidates(key: &str) -> Vec<String> {
    if key.to_ascii_lowercase().ends_with(NOTE_EXT) {
        vec![key.to_string()]
    } else {
        vec![format!("{key}{NOTE_EXT}"), key.to_string()]
    }
}

/// Finds the destination of a link-path key written in `source`.
///
/// First hit wins:
/// 1. the key as a path relative to the source note's folder
/// 2. the key as a path from the vault root
/// 3. any file whose path ends with the key, ignoring case; ties prefer the
///    source note's folder, then the shortest path, then lexical order
pub fn find_destination<'a>(
    index: &'a NoteIndex,
    key: &str,
    source: &RelativePath,
) -> Option<&'a TargetFile> {
    if key.is_empty() {
        return index.get(source).map(|e| &e.file);
    }

    let source_folder = source.parent().unwrap_or(RelativePath::new(""));
    let (key, rooted) = match key.strip_prefix('/') {
        Some(rest) => (rest, true),
        None => (key, false),
    };
    let names = candidates(key);

    if !rooted {
        for name in &names {
            if let Some(e) = index.get(&source_folder.join_normalized(name)) {
                return Some(&e.file);
            }
        }
    }

    for name in &names {
        if let Some(e) = index.get(&RelativePath::new(name).normalize()) {
            return Some(&e.file);
        }
    }

    let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    let matches = |e: &IndexEntry| {
        let path = e.file.relative_path().as_str().to_lowercase();
        lowered
            .iter()
            .any(|n| path == *n || path.ends_with(&format!("/{n}")))
    };

    index
        .entries()
        .filter(|e| matches(*e))
        .min_by(|a, b| rank(a, b, source_folder))
        .map(|e| &e.file)
}

fn rank(a: &IndexEntry, b: &IndexEntry, source_folder: &RelativePath) -> Ordering {
    let away = |e: &IndexEntry| e.file.folder() != source_folder;
    let (pa, pb) = (path_of(a), path_of(b));
    away(a)
        .cmp(&away(b))
        .then(pa.len().cmp(&pb.len()))
        .then(pa.cmp(pb))
}

fn path_of(e: &IndexEntry) -> &str {
    e.file.relative_path().as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteMetadata;
    use rstest::rstest;

    fn index(paths: &[&str]) -> NoteIndex {
        let mut index = NoteIndex::new();
        for p in paths {
            if p.ends_with(".md") {
                index.add_note((*p).into(), NoteMetadata::default());
            } else {
                index.add_file((*p).into());
            }
        }
        index
    }

    fn resolve(index: &NoteIndex, key: &str, source: &str) -> Option<String> {
        find_destination(index, key, RelativePath::new(source))
            .map(|f| f.relative_path().to_string())
    }

    #[rstest]
    #[case("A", "A")]
    #[case("A#Heading", "A")]
    #[case("A#^block-id", "A")]
    #[case(" A # x", "A")]
    #[case("#Heading", "")]
    #[case("folder/A.md", "folder/A.md")]
    fn link_path_strips_subpath(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(link_path(raw), expected);
    }

    #[test]
    fn relative_to_source_folder_wins() {
        let idx = index(&["A.md", "work/A.md"]);
        assert_eq!(resolve(&idx, "A", "work/today.md").as_deref(), Some("work/A.md"));
        assert_eq!(resolve(&idx, "A", "today.md").as_deref(), Some("A.md"));
    }

    #[test]
    fn vault_root_path_before_basename() {
        let idx = index(&["projects/plan.md", "archive/projects/plan.md"]);
        assert_eq!(
            resolve(&idx, "projects/plan", "daily/today.md").as_deref(),
            Some("projects/plan.md")
        );
    }

    #[test]
    fn leading_slash_skips_source_folder() {
        let idx = index(&["A.md", "work/A.md"]);
        assert_eq!(resolve(&idx, "/A", "work/today.md").as_deref(), Some("A.md"));
    }

    #[test]
    fn parent_relative_link() {
        let idx = index(&["shared/B.md"]);
        assert_eq!(
            resolve(&idx, "../shared/B", "work/today.md").as_deref(),
            Some("shared/B.md")
        );
    }

    #[test]
    fn basename_match_prefers_shortest_then_lexical() {
        let idx = index(&["z/deep/Note.md", "b/Note.md", "a/Note.md"]);
        assert_eq!(resolve(&idx, "note", "x.md").as_deref(), Some("a/Note.md"));
    }

    #[test]
    fn basename_match_prefers_source_folder() {
        let idx = index(&["a/Note.md", "long/folder/Note.md", "long/folder/today.md"]);
        assert_eq!(
            resolve(&idx, "NOTE", "long/folder/today.md").as_deref(),
            Some("long/folder/Note.md")
        );
    }

    #[test]
    fn explicit_extension_matches_attachment() {
        let idx = index(&["assets/pic.png"]);
        assert_eq!(resolve(&idx, "pic.png", "n.md").as_deref(), Some("assets/pic.png"));
    }

    #[test]
    fn empty_key_is_the_source_note() {
        let idx = index(&["n.md"]);
        assert_eq!(resolve(&idx, "", "n.md").as_deref(), Some("n.md"));
    }

    #[test]
    fn unknown_key_does_not_resolve() {
        let idx = index(&["A.md"]);
        assert_eq!(resolve(&idx, "Missing", "A.md"), None);
    }
}
