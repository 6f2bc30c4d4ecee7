use std::collections::BTreeSet;

use log::{debug, info};
use relative_path::RelativePath;

use crate::{editing::TextBuffer, parsing::Link, vault::Vault};

use super::{
    planner::Planner,
    report::{PassReport, RecursiveReport},
    wrap::InlineOptions,
};

/// What identifies a link as already handled in a recursive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKey {
    /// The raw link text. `[[A]]` and `[[a]]` count as different links even
    /// when they name the same note; only the iteration cap stops such cycles.
    #[default]
    LinkText,
    /// The resolved target path, falling back to the raw text for links that
    /// do not resolve. Catches cycles through differently written links.
    Target,
}

/// Keys of every link processed so far in one recursive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct InlineRecord {
    keys: BTreeSet<String>,
}

impl InlineRecord {
    fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

#[derive(Debug)]
enum State {
    Scanning,
    Draining(Vec<Link>),
    Done,
}

/// Repeatedly inlines the links of a note, including links brought in by
/// earlier passes, until nothing new is left or `max_iterations` passes ran.
pub struct RecursiveDriver<'a, V: Vault> {
    planner: Planner<'a, V>,
    record_key: RecordKey,
}

impl<'a, V: Vault> RecursiveDriver<'a, V> {
    /// Tags are always escaped during recursive passes so inlined tags stay
    /// inert text.
    pub fn new(vault: &'a V, options: InlineOptions, record_key: RecordKey) -> Self {
        let options = InlineOptions {
            escape_tags: true,
            ..options
        };
        Self {
            planner: Planner::new(vault, options),
            record_key,
        }
    }

    fn key_of(&self, link: &Link, source: &RelativePath) -> String {
        match self.record_key {
            RecordKey::LinkText => link.link.clone(),
            RecordKey::Target => self
                .planner
                .resolve(link, source)
                .map(|t| t.relative_path().to_string())
                .unwrap_or_else(|| link.link.clone()),
        }
    }

    pub fn run<B: TextBuffer>(&self, buf: &mut B, max_iterations: usize) -> RecursiveReport {
        let source = buf.source_path().to_relative_path_buf();
        let mut record = InlineRecord::default();
        let mut report = RecursiveReport::default();
        let mut state = State::Scanning;

        loop {
            state = match state {
                State::Scanning => {
                    let pending: Vec<Link> = buf
                        .links()
                        .into_iter()
                        .filter(|l| !record.contains(&self.key_of(l, &source)))
                        .collect();
                    if pending.is_empty() {
                        State::Done
                    } else if report.iterations() >= max_iterations {
                        report.halted_by_cap = true;
                        State::Done
                    } else {
                        State::Draining(pending)
                    }
                }
                State::Draining(links) => {
                    // Keys are taken before the pass: once edited, the
                    // buffer no longer matches the link spans.
                    let keys: Vec<String> =
                        links.iter().map(|l| self.key_of(l, &source)).collect();
                    let pass: PassReport = self.planner.inline(buf, links);
                    for key in keys {
                        record.insert(key);
                    }
                    debug!(
                        "pass {} done, {} key(s) recorded",
                        report.iterations() + 1,
                        record.len()
                    );
                    report.passes.push(pass);
                    State::Scanning
                }
                State::Done => break,
            };
        }

        info!(
            "{source}: {} pass(es), {} inlined{}",
            report.iterations(),
            report.inlined(),
            if report.halted_by_cap {
                ", stopped by iteration cap"
            } else {
                ""
            }
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{editing::NoteDocument, vault::MemoryVault};

    fn doc(text: &str) -> NoteDocument {
        NoteDocument::from_text("S.md".into(), text)
    }

    #[test]
    fn zero_iterations_does_nothing() {
        let vault = MemoryVault::new().with_note("A.md", "a");
        let driver = RecursiveDriver::new(&vault, InlineOptions::default(), RecordKey::LinkText);
        let mut d = doc("[[A]]");

        let report = driver.run(&mut d, 0);
        assert_eq!(report.iterations(), 0);
        assert!(report.halted_by_cap);
        assert_eq!(d.text(), "[[A]]");
    }

    #[test]
    fn no_links_finishes_without_a_pass() {
        let vault = MemoryVault::new();
        let driver = RecursiveDriver::new(&vault, InlineOptions::default(), RecordKey::LinkText);
        let report = driver.run(&mut doc("plain"), 3);
        assert_eq!(report, RecursiveReport::default());
    }

    #[test]
    fn unresolved_links_are_recorded_and_not_retried() {
        let vault = MemoryVault::new();
        let driver = RecursiveDriver::new(&vault, InlineOptions::default(), RecordKey::LinkText);
        let mut d = doc("[[Nowhere]]");

        let report = driver.run(&mut d, 5);
        assert_eq!(report.iterations(), 1);
        assert!(!report.halted_by_cap);
        assert_eq!(d.text(), "[[Nowhere]]");
    }

    #[test]
    fn tags_escaped_even_when_options_say_otherwise() {
        let vault = MemoryVault::new().with_note("A.md", "a");
        let driver = RecursiveDriver::new(&vault, InlineOptions::default(), RecordKey::LinkText);
        let mut d = doc("[[A]]");

        driver.run(&mut d, 1);
        assert_eq!(
            d.text(),
            "\n\\<inline-note note='A.md' title='undefined' path='A'>\na\n\\</inline-note>\n"
        );
    }

    #[test]
    fn cap_stops_session_with_links_pending() {
        let vault = MemoryVault::new()
            .with_note("A.md", "[[B]]")
            .with_note("B.md", "[[a]]");
        let driver = RecursiveDriver::new(&vault, InlineOptions::default(), RecordKey::LinkText);
        let mut d = doc("[[A]]");

        let report = driver.run(&mut d, 2);
        assert_eq!(report.iterations(), 2);
        assert!(report.halted_by_cap);
        assert!(d.text().contains("[[a]]"));
    }

    #[test]
    fn target_keys_stop_alias_cycles_early() {
        let vault = MemoryVault::new()
            .with_note("A.md", "[[b]]")
            .with_note("B.md", "[[a]]");
        let mut text_doc = doc("[[A]]");
        let mut target_doc = doc("[[A]]");

        let by_text = RecursiveDriver::new(&vault, InlineOptions::default(), RecordKey::LinkText)
            .run(&mut text_doc, 10);
        let by_target = RecursiveDriver::new(&vault, InlineOptions::default(), RecordKey::Target)
            .run(&mut target_doc, 10);

        // Link text sees [[A]], [[b]], [[a]], [[b]] is then known.
        assert_eq!(by_text.iterations(), 3);
        // Targets see A.md, B.md, then [[a]] resolves to the known A.md.
        assert_eq!(by_target.iterations(), 2);
    }
}
