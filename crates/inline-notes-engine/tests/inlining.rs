//! End-to-end inlining scenarios against in-memory and on-disk vaults.

use inline_notes_engine::{
    CursorPos, FsVault, InlineOptions, Inliner, Link, MemoryVault, NoteDocument, Position,
    RecordKey, SkipReason, TextBuffer,
    inlining::LinkOutcome,
};
use pretty_assertions::assert_eq;
use relative_path::{RelativePath, RelativePathBuf};
use rstest::rstest;
use tempfile::TempDir;

/// A buffer that logs every replacement it receives.
struct RecordingBuffer {
    doc: NoteDocument,
    edits: Vec<(usize, usize, String)>,
}

impl RecordingBuffer {
    fn new(text: &str) -> Self {
        Self {
            doc: NoteDocument::from_text("S.md".into(), text),
            edits: Vec::new(),
        }
    }
}

impl TextBuffer for RecordingBuffer {
    fn source_path(&self) -> &RelativePath {
        self.doc.source_path()
    }

    fn text(&self) -> String {
        self.doc.text()
    }

    fn links(&self) -> Vec<Link> {
        self.doc.links()
    }

    fn replace_range(&mut self, text: &str, start: Position, end: Position) {
        self.edits.push((start.offset, end.offset, text.to_string()));
        self.doc.replace_range(text, start, end);
    }
}

fn tag(name: &str, title: &str, path: &str, content: &str) -> String {
    format!("\n<inline-note note='{name}' title='{title}' path='{path}'>\n{content}\n</inline-note>\n")
}

#[test]
fn single_link_under_cursor() {
    let vault = MemoryVault::new().with_note("A.md", "---\ntitle: Alpha\n---\nhello");
    let mut buf = RecordingBuffer::new("x [[A]] y");

    let report = Inliner::new(vault).inline_link_under_cursor(&mut buf, CursorPos::new(0, 4));

    assert_eq!(report.inlined(), 1);
    assert_eq!(
        buf.text(),
        format!("x {} y", tag("A.md", "Alpha", "A", "---\ntitle: Alpha\n---\nhello"))
    );
}

#[test]
fn cursor_outside_links_is_a_noop() {
    let vault = MemoryVault::new().with_note("A.md", "hello");
    let mut buf = RecordingBuffer::new("x [[A]] y");

    let report = Inliner::new(vault).inline_link_under_cursor(&mut buf, CursorPos::new(0, 0));

    assert!(report.is_empty());
    assert!(buf.edits.is_empty());
    assert_eq!(buf.text(), "x [[A]] y");
}

#[test]
fn cursor_on_a_later_line_replaces_only_that_link() {
    let vault = MemoryVault::new().with_note("A.md", "alpha");
    let mut buf = RecordingBuffer::new("one\ntwo\nsee [[A]] ok\nend");

    let report = Inliner::new(vault).inline_link_under_cursor(&mut buf, CursorPos::new(2, 6));

    assert_eq!(report.inlined(), 1);
    assert_eq!(buf.edits.len(), 1);
    assert_eq!((buf.edits[0].0, buf.edits[0].1), (12, 17));
    assert_eq!(
        buf.text(),
        format!("one\ntwo\nsee {} ok\nend", tag("A.md", "undefined", "A", "alpha"))
    );
}

#[rstest]
#[case(CursorPos::new(1, 6))]
#[case(CursorPos::new(3, 6))]
fn cursor_column_on_another_line_is_a_noop(#[case] cursor: CursorPos) {
    let vault = MemoryVault::new().with_note("A.md", "alpha");
    let mut buf = RecordingBuffer::new("one\ntwo\nsee [[A]] ok\nend");

    let report = Inliner::new(vault).inline_link_under_cursor(&mut buf, cursor);

    assert!(report.is_empty());
    assert_eq!(buf.text(), "one\ntwo\nsee [[A]] ok\nend");
}

#[test]
fn table_row_link_with_escaped_pipe_is_inlined() {
    let vault = MemoryVault::new().with_note("A.md", "alpha");
    let mut buf = RecordingBuffer::new("| col |\n| --- |\n| [[A\\|alias]] |\n");

    let report = Inliner::new(vault).inline_all_links(&mut buf);

    assert_eq!(report.inlined(), 1);
    assert_eq!(
        buf.text(),
        format!("| col |\n| --- |\n| {} |\n", tag("A.md", "undefined", "A", "alpha"))
    );
}

#[test]
fn links_in_comments_are_left_alone() {
    let vault = MemoryVault::new()
        .with_note("A.md", "aaa")
        .with_note("B.md", "bbb");
    let mut buf = RecordingBuffer::new("%% [[A]] %%\n<!-- [[B]] -->\n[[B]]");

    let report = Inliner::new(vault).inline_all_links(&mut buf);

    assert_eq!(report.inlined(), 1);
    assert_eq!(buf.edits[0].0, 27);
    assert!(buf.text().starts_with("%% [[A]] %%\n<!-- [[B]] -->\n"));
}

#[test]
fn two_links_applied_right_to_left_without_drift() {
    let vault = MemoryVault::new()
        .with_note("A.md", "aaa")
        .with_note("B.md", "bbb");
    let mut buf = RecordingBuffer::new("[[A]] [[B]]");

    Inliner::new(vault).inline_all_links(&mut buf);

    let starts: Vec<_> = buf.edits.iter().map(|(s, e, _)| (*s, *e)).collect();
    assert_eq!(starts, vec![(6, 11), (0, 5)]);
    assert_eq!(
        buf.text(),
        format!("{} {}", tag("A.md", "undefined", "A", "aaa"), tag("B.md", "undefined", "B", "bbb"))
    );
}

#[test]
fn unresolved_link_left_untouched() {
    let vault = MemoryVault::new().with_note("A.md", "aaa");
    let mut buf = RecordingBuffer::new("[[A]] and [[Missing]]");

    let report = Inliner::new(vault).inline_all_links(&mut buf);

    assert_eq!(report.inlined(), 1);
    assert_eq!(
        report.results[0].outcome,
        LinkOutcome::Skipped(SkipReason::Unresolved)
    );
    assert!(buf.text().ends_with(" and [[Missing]]"));
}

#[test]
fn multiline_note_links_on_several_lines() {
    let vault = MemoryVault::new()
        .with_note("A.md", "one")
        .with_note("B.md", "two");
    let mut doc = NoteDocument::from_text("S.md".into(), "# Title\n\n- [[A]]\n- [[B]] end\n");

    Inliner::new(vault).inline_all_links(&mut doc);

    assert_eq!(
        doc.text(),
        format!(
            "# Title\n\n- {}\n- {} end\n",
            tag("A.md", "undefined", "A", "one"),
            tag("B.md", "undefined", "B", "two")
        )
    );
}

#[test]
fn escape_setting_applies_to_inline_all() {
    let vault = MemoryVault::new().with_note("A.md", "aaa");
    let mut doc = NoteDocument::from_text("S.md".into(), "[[A]]");
    let options = InlineOptions {
        escape_tags: true,
        ..InlineOptions::default()
    };

    Inliner::new(vault)
        .with_options(options)
        .inline_all_links(&mut doc);

    assert_eq!(
        doc.text(),
        "\n\\<inline-note note='A.md' title='undefined' path='A'>\naaa\n\\</inline-note>\n"
    );
}

#[test]
fn inlined_escaped_tags_are_not_links() {
    let vault = MemoryVault::new().with_note("A.md", "plain text");
    let mut doc = NoteDocument::from_text("S.md".into(), "[[A]]");

    Inliner::new(&vault).inline_all_links_recursive(&mut doc, 3);

    assert!(doc.links().is_empty());
}

#[test]
fn chain_longer_than_cap_runs_exactly_cap_passes() {
    let vault = MemoryVault::new()
        .with_note("N1.md", "[[N2]]")
        .with_note("N2.md", "[[N3]]")
        .with_note("N3.md", "[[N4]]")
        .with_note("N4.md", "[[N5]]")
        .with_note("N5.md", "end");
    let mut doc = NoteDocument::from_text("S.md".into(), "[[N1]]");

    let report = Inliner::new(vault).inline_all_links_recursive(&mut doc, 3);

    assert_eq!(report.iterations(), 3);
    assert!(report.halted_by_cap);
    let left: Vec<_> = doc.links().into_iter().map(|l| l.link).collect();
    assert_eq!(left, vec!["N4"]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
fn self_linking_note_terminates_within_cap(#[case] cap: usize) {
    let vault = MemoryVault::new().with_note("S.md", "again [[S]]");
    let mut doc = NoteDocument::from_text("S.md".into(), "[[S]]");

    let report = Inliner::new(vault).inline_all_links_recursive(&mut doc, cap);

    assert!(report.iterations() <= cap);
    assert!(report.iterations() <= 1);
}

#[rstest]
#[case(RecordKey::LinkText, 2)]
#[case(RecordKey::Target, 1)]
fn case_variants_of_one_note(#[case] key: RecordKey, #[case] passes: usize) {
    // [[A]] and [[a]] both resolve to A.md.
    let vault = MemoryVault::new().with_note("A.md", "[[a]]");
    let mut doc = NoteDocument::from_text("x.md".into(), "[[A]]");

    let report = Inliner::new(vault)
        .with_record_key(key)
        .inline_all_links_recursive(&mut doc, 3);

    assert_eq!(report.iterations(), passes);
}

#[test]
fn filesystem_vault_end_to_end() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("daily")).unwrap();
    std::fs::create_dir_all(dir.path().join("topics")).unwrap();
    std::fs::write(
        dir.path().join("topics/Rust.md"),
        "---\ntitle: Rust notes\n---\nOwnership.",
    )
    .unwrap();
    std::fs::write(dir.path().join("daily/today.md"), "Read ![[Rust#Borrowing]].").unwrap();

    let vault = FsVault::open(dir.path()).unwrap();
    let path = RelativePathBuf::from("daily/today.md");
    let text = std::fs::read(path.to_path(dir.path())).unwrap();
    let mut doc = NoteDocument::from_bytes(path, &text).unwrap();

    Inliner::new(&vault).inline_all_links(&mut doc);

    assert_eq!(
        doc.text(),
        format!(
            "Read {}.",
            tag("Rust.md", "Rust notes", "Rust", "---\ntitle: Rust notes\n---\nOwnership.")
        )
    );
}
