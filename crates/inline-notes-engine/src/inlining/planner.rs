use log::{debug, info, warn};
use relative_path::RelativePath;

use crate::{
    editing::TextBuffer,
    models::TargetFile,
    parsing::{Link, Position},
    vault::Vault,
};

use super::{
    report::{LinkOutcome, LinkResult, PassReport, SkipReason},
    wrap::{InlineOptions, ProvenanceTag, wrap},
};

/// One replacement: the link's span and the wrapped content that takes
/// its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: Position,
    pub end: Position,
    pub replacement: String,
}

/// Resolves links to wrapped content and applies the replacements.
pub struct Planner<'a, V: Vault> {
    vault: &'a V,
    options: InlineOptions,
}

impl<'a, V: Vault> Planner<'a, V> {
    pub fn new(vault: &'a V, options: InlineOptions) -> Self {
        Self { vault, options }
    }

    pub fn options(&self) -> &InlineOptions {
        &self.options
    }

    /// The file a link points at, if any.
    pub fn resolve(&self, link: &Link, source: &RelativePath) -> Option<TargetFile> {
        let key = self.vault.resolve_link_path(&link.link);
        self.vault.find_destination(&key, source)
    }

    /// Works out the replacement for one link, reading the target's current
    /// content.
    pub fn plan_link(
        &self,
        link: &Link,
        source: &RelativePath,
    ) -> Result<(TargetFile, Edit), SkipReason> {
        let key = self.vault.resolve_link_path(&link.link);
        let target = self
            .vault
            .find_destination(&key, source)
            .ok_or(SkipReason::Unresolved)?;
        let metadata = self
            .vault
            .metadata(&target)
            .ok_or(SkipReason::Unindexed)?;
        let content = self.vault.read(&target).map_err(|e| {
            warn!("could not read {}: {e}", target.relative_path());
            SkipReason::Unreadable
        })?;

        let tag = ProvenanceTag {
            name: target.name(),
            title: metadata.title.as_deref(),
            path: &key,
        };
        let edit = Edit {
            start: link.span.start,
            end: link.span.end,
            replacement: wrap(&tag, &content, &self.options),
        };
        Ok((target, edit))
    }

    /// Plans every link without touching a buffer, in application order.
    pub fn plan(
        &self,
        links: Vec<Link>,
        source: &RelativePath,
    ) -> Vec<(Link, Result<Edit, SkipReason>)> {
        sort_for_application(links)
            .into_iter()
            .map(|link| {
                let planned = self.plan_link(&link, source).map(|(_, edit)| edit);
                (link, planned)
            })
            .collect()
    }

    /// Inlines `links` into `buf`.
    ///
    /// Links are processed by descending start offset and each edit is
    /// applied before the next link is looked at, so every remaining span
    /// still points at unchanged text. Skipped links stay as they are.
    pub fn inline<B: TextBuffer>(&self, buf: &mut B, links: Vec<Link>) -> PassReport {
        let source = buf.source_path().to_relative_path_buf();
        let mut report = PassReport::default();

        for link in sort_for_application(links) {
            let outcome = match self.plan_link(&link, &source) {
                Ok((target, edit)) => {
                    buf.replace_range(&edit.replacement, edit.start, edit.end);
                    debug!("inlined {} from {}", link.original, target.relative_path());
                    LinkOutcome::Inlined {
                        target: target.relative_path().to_relative_path_buf(),
                    }
                }
                Err(reason) => {
                    debug!("skipped {} ({reason})", link.original);
                    LinkOutcome::Skipped(reason)
                }
            };
            report.results.push(LinkResult { link, outcome });
        }

        if !report.is_empty() {
            info!(
                "{source}: inlined {} link(s), skipped {}",
                report.inlined(),
                report.skipped()
            );
        }
        report
    }
}

/// Orders links by descending start offset. The sort is stable, so links
/// sharing an offset keep document order.
pub fn sort_for_application(mut links: Vec<Link>) -> Vec<Link> {
    links.sort_by(|a, b| b.span.start.offset.cmp(&a.span.start.offset));
    links
}
