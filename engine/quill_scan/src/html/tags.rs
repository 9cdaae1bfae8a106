//! Static HTML tag metadata.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

/// Void elements: tags that never take a closing tag, so the editor's
/// close-tag completion must skip them.
pub(super) fn void_tags() -> &'static FxHashSet<&'static str> {
    static VOID: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    VOID.get_or_init(|| {
        [
            "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
            "param", "source", "track", "wbr",
        ]
        .into_iter()
        .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::void_tags;

    #[test]
    fn void_set_membership() {
        assert!(void_tags().contains("br"));
        assert!(void_tags().contains("img"));
        assert!(!void_tags().contains("div"));
        assert!(!void_tags().contains("script"));
    }
}
