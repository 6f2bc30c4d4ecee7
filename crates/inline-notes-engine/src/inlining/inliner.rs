use crate::{editing::TextBuffer, vault::Vault};

use super::{
    locate::{CursorPos, LocateMode, locate},
    planner::Planner,
    recursive::{RecordKey, RecursiveDriver},
    report::{PassReport, RecursiveReport},
    wrap::InlineOptions,
};

/// The three inlining operations, bound to a vault and wrapping options.
///
/// ```rust
/// # use inline_notes_engine::{editing::{NoteDocument, TextBuffer}, inlining::Inliner, vault::MemoryVault};
/// let vault = MemoryVault::new().with_note("A.md", "alpha");
/// let mut doc = NoteDocument::from_text("daily.md".into(), "see [[A]]");
///
/// let report = Inliner::new(vault).inline_all_links(&mut doc);
/// assert_eq!(report.inlined(), 1);
/// assert!(doc.text().contains("<inline-note note='A.md'"));
/// ```
pub struct Inliner<V: Vault> {
    vault: V,
    options: InlineOptions,
    record_key: RecordKey,
}

impl<V: Vault> Inliner<V> {
    pub fn new(vault: V) -> Self {
        Self {
            vault,
            options: InlineOptions::default(),
            record_key: RecordKey::default(),
        }
    }

    pub fn with_options(mut self, options: InlineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_record_key(mut self, record_key: RecordKey) -> Self {
        self.record_key = record_key;
        self
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn options(&self) -> &InlineOptions {
        &self.options
    }

    fn planner(&self) -> Planner<'_, V> {
        Planner::new(&self.vault, self.options.clone())
    }

    /// Inlines the link under `cursor`. A cursor outside every link is a
    /// no-op with an empty report.
    pub fn inline_link_under_cursor<B: TextBuffer>(
        &self,
        doc: &mut B,
        cursor: CursorPos,
    ) -> PassReport {
        let links = locate(doc.links(), LocateMode::Cursor(cursor));
        self.planner().inline(doc, links)
    }

    /// Inlines every link in the note once.
    pub fn inline_all_links<B: TextBuffer>(&self, doc: &mut B) -> PassReport {
        let links = locate(doc.links(), LocateMode::All);
        self.planner().inline(doc, links)
    }

    /// Inlines links, then the links the inlined content brought in, for at
    /// most `max_iterations` passes.
    pub fn inline_all_links_recursive<B: TextBuffer>(
        &self,
        doc: &mut B,
        max_iterations: usize,
    ) -> RecursiveReport {
        RecursiveDriver::new(&self.vault, self.options.clone(), self.record_key)
            .run(doc, max_iterations)
    }
}
