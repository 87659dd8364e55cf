//! Content embedding references.
//!
//! The generator never reads asset bytes itself. It asks an [`Embedder`] for a
//! reference that the consumer's toolchain expands into the file contents at
//! compile time.

/// Produces the embedded-content reference for an asset path.
pub trait Embedder {
    /// Return the literal written after the path in a binding.
    fn embed(&self, path: &str) -> String;
}

/// Embeds through the `[%blob "<path>"]` preprocessor extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobEmbedder;

impl Embedder for BlobEmbedder {
    fn embed(&self, path: &str) -> String {
        format!("[%blob {}]", quote(path))
    }
}

/// Quote a string literal, escaping backslashes and double quotes.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
