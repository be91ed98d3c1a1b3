//! Link reference definitions: `[id]: url "title"`.
//!
//! Grounded on `struct link_ref`, `is_ref`, `cmp_link_ref` and
//! `cmp_link_ref_sort` in `ext/markdown.c`. The first scanning pass
//! over the document collects every reference definition into a
//! table sorted case-insensitively by id, so that later lookups during
//! inline scanning are `O(log n)` instead of linear.

use crate::buffer::Buffer;

/// A single `[id]: url "title"` definition.
#[derive(Debug, Clone)]
pub struct LinkRef {
    pub id: Buffer,
    pub link: Buffer,
    pub title: Buffer,
}

/// Sorted table of link reference definitions collected during the
/// document's first scanning pass.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    refs: Vec<LinkRef>,
}

impl ReferenceTable {
    pub fn new() -> ReferenceTable {
        ReferenceTable { refs: Vec::new() }
    }

    /// Inserts a reference, sorted by id. On a duplicate id the first
    /// occurrence wins and later ones are dropped, per spec.md's
    /// testable invariant.
    pub fn insert(&mut self, id: Buffer, link: Buffer, title: Buffer) {
        if self.find(&id).is_some() {
            return;
        }

        let pos = self.refs.partition_point(|r| case_key(&r.id) < case_key(&id));
        self.refs.insert(pos, LinkRef { id, link, title });
    }

    /// `O(log n)` lookup by reference id (case-insensitive).
    pub fn find(&self, id: &Buffer) -> Option<&LinkRef> {
        let key = case_key(id);
        self.refs
            .binary_search_by(|r| case_key(&r.id).cmp(&key))
            .ok()
            .map(|i| &self.refs[i])
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

fn case_key(buf: &Buffer) -> Vec<u8> {
    buf.as_bytes().iter().map(|b| b.to_ascii_lowercase()).collect()
}

/// Scans a single logical line for the `is_ref` grammar:
///
/// ```text
/// [id]: link "optional title"
/// ```
///
/// with up to three leading spaces, an optional angle-bracketed link,
/// and a title on the same line or the next. `line` may hold more than
/// one logical line (the caller need not pre-split); returns the
/// number of bytes actually consumed by the matched definition itself
/// (up to and including its trailing newline, not the whole of
/// `line`), or `None` if this isn't a reference definition.
///
/// Grounded on `is_ref` in `ext/markdown.c`.
pub fn scan_reference(line: &[u8]) -> Option<(Buffer, Buffer, Buffer, usize)> {
    let mut i = 0;
    let len = line.len();

    // up to three leading spaces
    let mut spaces = 0;
    while i < len && line[i] == b' ' && spaces < 3 {
        i += 1;
        spaces += 1;
    }

    if i >= len || line[i] != b'[' {
        return None;
    }
    i += 1;

    let id_start = i;
    while i < len && line[i] != b']' {
        i += 1;
    }
    if i >= len || i == id_start {
        return None;
    }
    let id = Buffer::from(&line[id_start..i]);
    i += 1;

    if i >= len || line[i] != b':' {
        return None;
    }
    i += 1;

    while i < len && (line[i] == b' ' || line[i] == b'\t') {
        i += 1;
    }

    if i >= len {
        return None;
    }

    let (link, mut i) = if line[i] == b'<' {
        let start = i + 1;
        let mut j = start;
        while j < len && line[j] != b'>' {
            j += 1;
        }
        if j >= len {
            return None;
        }
        (Buffer::from(&line[start..j]), j + 1)
    } else {
        let start = i;
        let mut j = start;
        while j < len && line[j] != b' ' && line[j] != b'\t' && line[j] != b'\n' {
            j += 1;
        }
        if j == start {
            return None;
        }
        (Buffer::from(&line[start..j]), j)
    };

    while i < len && (line[i] == b' ' || line[i] == b'\t') {
        i += 1;
    }

    let mut title = Buffer::new(0);
    if i < len && (line[i] == b'"' || line[i] == b'\'' || line[i] == b'(') {
        let close = match line[i] { b'(' => b')', c => c };
        let start = i + 1;
        let mut j = start;
        while j < len && line[j] != close {
            j += 1;
        }
        if j < len {
            title = Buffer::from(&line[start..j]);
            i = j + 1;
        }
    }

    // trailing whitespace only is allowed after the definition
    while i < len && (line[i] == b' ' || line[i] == b'\t') {
        i += 1;
    }
    if i < len && line[i] != b'\n' {
        return None;
    }
    if i < len && line[i] == b'\n' {
        i += 1;
    }

    Some((id, link, title, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_reference() {
        let (id, link, title, _) = scan_reference(b"[foo]: /url \"title\"\n").unwrap();
        assert_eq!(id.to_str().unwrap(), "foo");
        assert_eq!(link.to_str().unwrap(), "/url");
        assert_eq!(title.to_str().unwrap(), "title");
    }

    #[test]
    fn parses_angle_bracketed_link() {
        let (id, link, _, _) = scan_reference(b"[foo]: <http://example.com>\n").unwrap();
        assert_eq!(id.to_str().unwrap(), "foo");
        assert_eq!(link.to_str().unwrap(), "http://example.com");
    }

    #[test]
    fn first_definition_wins() {
        let mut table = ReferenceTable::new();
        table.insert(Buffer::from("foo"), Buffer::from("/first"), Buffer::new(0));
        table.insert(Buffer::from("FOO"), Buffer::from("/second"), Buffer::new(0));

        let found = table.find(&Buffer::from("foo")).unwrap();
        assert_eq!(found.link.to_str().unwrap(), "/first");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = ReferenceTable::new();
        table.insert(Buffer::from("Foo"), Buffer::from("/url"), Buffer::new(0));
        assert!(table.find(&Buffer::from("FOO")).is_some());
        assert!(table.find(&Buffer::from("bar")).is_none());
    }
}
