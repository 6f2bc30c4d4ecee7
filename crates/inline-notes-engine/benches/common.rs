// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use inline_notes_engine::MemoryVault;

/// A note with `links` wikilinks spread over paragraphs, a code fence and a
/// blockquote.
#[allow(dead_code)]
pub fn generate_linked_note(links: usize) -> String {
    let mut content = String::from("---\ntitle: Bench\n---\n\n# Daily\n\n");
    for i in 0..links {
        content.push_str(&format!("Paragraph {i} mentions [[Note{}]] in passing.\n\n", i % 50));
        if i % 10 == 0 {
            content.push_str("```rust\nlet not_a_link = \"[[Fake]]\";\n```\n\n");
            content.push_str(&format!("> quoted [[Note{}|alias]]\n\n", (i + 1) % 50));
        }
    }
    content
}

/// A vault of 50 small notes, each linking to the next one.
#[allow(dead_code)]
pub fn generate_vault() -> MemoryVault {
    (0..50).fold(MemoryVault::new(), |vault, i| {
        vault.with_note(
            &format!("notes/Note{i}.md"),
            &format!("---\ntitle: Note {i}\n---\nBody of note {i}, see [[Note{}]].\n", (i + 1) % 50),
        )
    })
}
