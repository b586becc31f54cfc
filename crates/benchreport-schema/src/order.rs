//! # Violation Ordering
//!
//! Total order over instance paths, used to sort validation errors before
//! they are reported. The engine yields violations in whatever order its
//! keyword evaluation happens to visit them; sorting by structural path
//! makes the output deterministic and diffable across runs.

/// One component of a JSON Pointer into the report document.
///
/// The derived ordering is the documented total order: array indices
/// compare numerically, object keys compare lexicographically by byte
/// value, and every index orders before every key. Full paths compare as
/// slices, so a path that is a strict prefix of another orders first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathSegment {
    /// An array index.
    Index(usize),
    /// An object key.
    Key(String),
}

/// Split a JSON Pointer into path segments.
///
/// Unescapes `~1` to `/` and `~0` to `~`, in that order. A component is
/// classified as an [`PathSegment::Index`] only when it is a canonical
/// base-10 integer: non-empty, all ASCII digits, and no leading zero
/// (except `"0"` itself). Everything else is a [`PathSegment::Key`].
///
/// The empty pointer (the document root) yields an empty segment list.
pub fn pointer_segments(pointer: &str) -> Vec<PathSegment> {
    if pointer.is_empty() {
        return Vec::new();
    }

    pointer
        .split('/')
        .skip(1)
        .map(|raw| {
            let component = raw.replace("~1", "/").replace("~0", "~");
            match parse_index(&component) {
                Some(index) => PathSegment::Index(index),
                None => PathSegment::Key(component),
            }
        })
        .collect()
}

/// Parse a pointer component as a canonical array index.
fn parse_index(component: &str) -> Option<usize> {
    if component.is_empty() {
        return None;
    }
    if component.len() > 1 && component.starts_with('0') {
        return None;
    }
    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}
