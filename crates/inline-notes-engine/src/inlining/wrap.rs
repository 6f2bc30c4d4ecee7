//! The provenance tags wrapped around inlined content.

/// Element name of the provenance tag.
pub const TAG_NAME: &str = "inline-note";
/// Prefixed to both tags so markdown renderers show them as text.
pub const TAG_ESCAPE: &str = "\\";
/// Rendered in place of a missing title by default.
pub const ABSENT_TITLE: &str = "undefined";

/// How inlined content is wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOptions {
    /// Prefix both tags with a backslash.
    pub escape_tags: bool,
    /// Placed immediately before and after the content (e.g. a code fence).
    pub content_fence: String,
    /// Title text for targets without a frontmatter title.
    pub missing_title: String,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            escape_tags: false,
            content_fence: String::new(),
            missing_title: ABSENT_TITLE.to_string(),
        }
    }
}

/// Where inlined content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvenanceTag<'a> {
    /// Destination file name with extension.
    pub name: &'a str,
    pub title: Option<&'a str>,
    /// The link-path key the link resolved through.
    pub path: &'a str,
}

impl ProvenanceTag<'_> {
    pub fn open(&self, missing_title: &str) -> String {
        format!(
            "<{TAG_NAME} note='{}' title='{}' path='{}'>",
            self.name,
            self.title.unwrap_or(missing_title),
            self.path
        )
    }

    pub fn close() -> String {
        format!("</{TAG_NAME}>")
    }
}

/// Builds the replacement text for a link:
/// `\n{esc}{open}\n{fence}{content}{fence}\n{esc}{close}\n`.
pub fn wrap(tag: &ProvenanceTag<'_>, content: &str, options: &InlineOptions) -> String {
    let esc = if options.escape_tags { TAG_ESCAPE } else { "" };
    let fence = &options.content_fence;
    format!(
        "\n{esc}{}\n{fence}{content}{fence}\n{esc}{}\n",
        tag.open(&options.missing_title),
        ProvenanceTag::close()
    )
}
