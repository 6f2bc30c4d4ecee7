//! The operations behind each subcommand. Each returns the text to print.

use std::path::Path;

use anyhow::{Context, Result};
use inline_notes_config::{Dedupe, InlineSettings};
use inline_notes_engine::{
    CursorPos, FsVault, InlineOptions, Inliner, NoteDocument, PassReport, RecordKey,
    RecursiveReport, TextBuffer, Vault, io,
};
use log::info;
use relative_path::RelativePath;

/// Where an edited note goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    /// Back to its file in the vault.
    InPlace,
    /// Printed instead; the file is left alone.
    Stdout,
}

pub struct Session {
    vault: FsVault,
    settings: InlineSettings,
    write: Write,
}

impl Session {
    pub fn open(notes_path: &Path, settings: InlineSettings, write: Write) -> Result<Self> {
        let vault = FsVault::open(notes_path)?;
        Ok(Self {
            vault,
            settings,
            write,
        })
    }

    /// Inlines the link at a 1-based line and character column.
    pub fn cursor(&self, note: &str, line: usize, col: usize) -> Result<String> {
        let mut doc = self.load(note)?;
        let cursor = cursor_at(&doc.text(), line, col);
        let report = self
            .inliner(false)
            .inline_link_under_cursor(&mut doc, cursor);
        self.finish(&doc, pass_summary(&doc, &report))
    }

    pub fn all(&self, note: &str, escape_tags: bool) -> Result<String> {
        let mut doc = self.load(note)?;
        let report = self.inliner(escape_tags).inline_all_links(&mut doc);
        self.finish(&doc, pass_summary(&doc, &report))
    }

    pub fn recursive(&self, note: &str, max_iterations: Option<usize>) -> Result<String> {
        let mut doc = self.load(note)?;
        let max_iterations = max_iterations.unwrap_or(self.settings.max_iterations);
        let report = self
            .inliner(false)
            .inline_all_links_recursive(&mut doc, max_iterations);
        self.finish(&doc, recursive_summary(&doc, &report))
    }

    /// One line per link: position, kind, source text and resolution status.
    pub fn links(&self, note: &str) -> Result<String> {
        let doc = self.load(note)?;
        let text = doc.text();
        let mut out = String::new();
        for link in doc.links() {
            let key = self.vault.resolve_link_path(&link.link);
            let status = match self.vault.find_destination(&key, doc.path()) {
                None => "UNRESOLVED".to_string(),
                Some(target) if self.vault.metadata(&target).is_none() => {
                    format!("UNINDEXED {}", target.relative_path())
                }
                Some(target) => format!("OK {}", target.relative_path()),
            };
            let start = link.span.start;
            out.push_str(&format!(
                "{}:{}\t{}\t{}\t{}\n",
                start.line + 1,
                char_col(&text, start.offset, start.col) + 1,
                link.kind,
                link.original,
                status
            ));
        }
        Ok(out)
    }

    fn inliner(&self, escape_tags: bool) -> Inliner<&FsVault> {
        let options = InlineOptions {
            escape_tags: escape_tags || self.settings.escape_tags,
            content_fence: self.settings.content_fence.clone(),
            missing_title: self.settings.missing_title.clone(),
        };
        let record_key = match self.settings.dedupe {
            Dedupe::LinkText => RecordKey::LinkText,
            Dedupe::Target => RecordKey::Target,
        };
        Inliner::new(&self.vault)
            .with_options(options)
            .with_record_key(record_key)
    }

    /// Resolves a note name the way a link from the vault root would be.
    fn load(&self, note: &str) -> Result<NoteDocument> {
        let key = self.vault.resolve_link_path(note);
        let target = self
            .vault
            .find_destination(&key, RelativePath::new(""))
            .with_context(|| {
                format!(
                    "Note '{note}' not found in {}",
                    self.vault.root().display()
                )
            })?;
        let text = self
            .vault
            .read(&target)
            .with_context(|| format!("Failed to read {}", target.relative_path()))?;
        Ok(NoteDocument::from_text(
            target.relative_path().to_relative_path_buf(),
            &text,
        ))
    }

    fn finish(&self, doc: &NoteDocument, summary: String) -> Result<String> {
        match self.write {
            Write::Stdout => Ok(doc.text()),
            Write::InPlace if doc.version() == 0 => Ok(summary),
            Write::InPlace => {
                io::write_file(doc.path(), self.vault.root(), &doc.text())
                    .with_context(|| format!("Failed to write {}", doc.path()))?;
                info!("wrote {}", doc.path());
                Ok(summary)
            }
        }
    }
}

/// Converts a 1-based line and character column into the zero-based line
/// and byte column links are located by. Columns past the end of the line
/// clamp to its end.
pub fn cursor_at(text: &str, line: usize, col: usize) -> CursorPos {
    let line = line.saturating_sub(1);
    let line_text = text.split('\n').nth(line).unwrap_or("");
    let byte_col = line_text
        .char_indices()
        .nth(col.saturating_sub(1))
        .map_or(line_text.len(), |(i, _)| i);
    CursorPos::new(line, byte_col)
}

/// Character column of a byte position, for display.
fn char_col(text: &str, offset: usize, byte_col: usize) -> usize {
    let line_start = offset - byte_col;
    text.get(line_start..offset)
        .map_or(byte_col, |s| s.chars().count())
}

fn pass_summary(doc: &NoteDocument, report: &PassReport) -> String {
    if report.is_empty() {
        return format!("No links to inline in {}\n", doc.path());
    }
    format!(
        "Inlined {} link(s) in {}, skipped {}\n",
        report.inlined(),
        doc.path(),
        report.skipped()
    )
}

fn recursive_summary(doc: &NoteDocument, report: &RecursiveReport) -> String {
    let mut summary = format!(
        "Inlined {} link(s) in {} over {} pass(es), skipped {}",
        report.inlined(),
        doc.path(),
        report.iterations(),
        report.skipped()
    );
    if report.halted_by_cap {
        summary.push_str("; stopped at the iteration cap");
    }
    summary.push('\n');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn vault_with(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        dir
    }

    fn session(dir: &TempDir, write: Write) -> Session {
        Session::open(dir.path(), InlineSettings::default(), write).unwrap()
    }

    #[test]
    fn test_all_writes_note_back() {
        let dir = vault_with(&[("daily.md", "see [[A]]"), ("A.md", "alpha")]);

        let out = session(&dir, Write::InPlace).all("daily", false).unwrap();

        assert_eq!(out, "Inlined 1 link(s) in daily.md, skipped 0\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("daily.md")).unwrap(),
            "see \n<inline-note note='A.md' title='undefined' path='A'>\nalpha\n</inline-note>\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_file_alone() {
        let dir = vault_with(&[("daily.md", "see [[A]]"), ("A.md", "alpha")]);

        let out = session(&dir, Write::Stdout).all("daily.md", true).unwrap();

        assert_eq!(
            out,
            "see \n\\<inline-note note='A.md' title='undefined' path='A'>\nalpha\n\\</inline-note>\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("daily.md")).unwrap(),
            "see [[A]]"
        );
    }

    #[test]
    fn test_nothing_to_inline_does_not_touch_file() {
        let dir = vault_with(&[("daily.md", "no links here")]);

        let out = session(&dir, Write::InPlace).all("daily", false).unwrap();

        assert_eq!(out, "No links to inline in daily.md\n");
    }

    #[test]
    fn test_cursor_uses_character_columns() {
        // "é" is two bytes, so character column 5 is byte column 5 + 1.
        let dir = vault_with(&[("daily.md", "é [[A]] [[B]]"), ("A.md", "a"), ("B.md", "b")]);

        let out = session(&dir, Write::Stdout).cursor("daily", 1, 5).unwrap();

        assert!(out.contains("note='A.md'"));
        assert!(out.contains("[[B]]"));
    }

    #[test]
    fn test_recursive_uses_configured_cap() {
        let dir = vault_with(&[("loop.md", "x [[loop]]")]);
        let settings = InlineSettings {
            max_iterations: 2,
            ..InlineSettings::default()
        };
        let session = Session::open(dir.path(), settings, Write::InPlace).unwrap();

        let out = session.recursive("loop", None).unwrap();

        assert_eq!(
            out,
            "Inlined 1 link(s) in loop.md over 1 pass(es), skipped 0\n"
        );
    }

    #[test]
    fn test_recursive_cap_override() {
        let dir = vault_with(&[("a.md", "[[b]]"), ("b.md", "[[c]]"), ("c.md", "end")]);

        let out = session(&dir, Write::InPlace)
            .recursive("a", Some(1))
            .unwrap();

        assert_eq!(
            out,
            "Inlined 1 link(s) in a.md over 1 pass(es), skipped 0; stopped at the iteration cap\n"
        );
    }

    #[test]
    fn test_links_listing() {
        let dir = vault_with(&[
            ("daily.md", "[[A]] and [[nope]]\n![[pic.png]]"),
            ("A.md", "alpha"),
            ("pic.png", "png"),
        ]);

        let out = session(&dir, Write::Stdout).links("daily").unwrap();

        assert_eq!(
            out,
            "1:1\twiki\t[[A]]\tOK A.md\n\
             1:11\twiki\t[[nope]]\tUNRESOLVED\n\
             2:1\tembed\t![[pic.png]]\tUNINDEXED pic.png\n"
        );
    }

    #[test]
    fn test_missing_note_is_an_error() {
        let dir = vault_with(&[("daily.md", "")]);

        let err = session(&dir, Write::Stdout).all("weekly", false).unwrap_err();

        assert!(err.to_string().contains("Note 'weekly' not found"));
    }

    #[test]
    fn test_cursor_at_clamps_past_line_end() {
        assert_eq!(cursor_at("ab\ncd", 2, 10), CursorPos::new(1, 2));
        assert_eq!(cursor_at("ab\ncd", 1, 1), CursorPos::new(0, 0));
    }
}
