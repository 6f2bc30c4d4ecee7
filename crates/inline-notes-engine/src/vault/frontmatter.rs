use serde::Deserialize;
use serde_yaml::Value;
use xi_rope::Rope;

use crate::{
    models::NoteMetadata,
    parsing::{parse_document, rope::slice_to_string},
};

#[derive(Debug, Default, Deserialize)]
struct Fields {
    #[serde(default)]
    title: Option<Value>,
}

/// Reads note metadata from the YAML frontmatter at the top of `text`.
///
/// Notes without frontmatter, or with frontmatter that is not a YAML
/// mapping, still get metadata; it just has no title.
pub fn parse_metadata(text: &str) -> NoteMetadata {
    let rope = Rope::from(text);
    let doc = parse_document(&rope);
    let Some(block) = doc.front_matter() else {
        return NoteMetadata::default();
    };

    let yaml = slice_to_string(&rope, block.content_span);
    if yaml.trim().is_empty() {
        return NoteMetadata::default();
    }
    match serde_yaml::from_str::<Fields>(&yaml) {
        Ok(fields) => NoteMetadata {
            title: fields.title.as_ref().and_then(scalar_text),
        },
        Err(e) => {
            log::debug!("ignoring unreadable frontmatter: {e}");
            NoteMetadata::default()
        }
    }
}

/// Renders a YAML value the way it would print as text. Sequences are
/// comma-joined; mappings have no text form.
fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Sequence(items) => Some(
            items
                .iter()
                .filter_map(scalar_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Tagged(t) => scalar_text(&t.value),
        Value::Null | Value::Mapping(_) => None,
    }
}
