//! The document driver: normalizes raw input, pre-scans link
//! reference definitions, then hands off to the block scanner.
//!
//! Grounded on `hoedown_document_render`'s preamble in
//! `ext/markdown.c`, which expands tabs, normalizes line endings and
//! walks the whole input once up front to populate the reference
//! table before a single block is parsed.

use crate::buffer::Buffer;
use crate::block::parse_block;
use crate::context::Context;
use crate::extensions::Extension;
use crate::inline::parse_inline;
use crate::reference::scan_reference;
use crate::renderer::Render;

pub struct Document<'a, R: Render + ?Sized> {
    renderer: &'a mut R,
    ctx: Context,
}

impl<'a, R: Render + ?Sized> Document<'a, R> {
    /// Construct a new document with the given renderer, extensions, and
    /// maximum nesting. `max_nesting` bounds the combined block/span
    /// scratch-buffer depth (`Context::nesting`), not the raw recursion
    /// depth of this call stack.
    pub fn new(renderer: &'a mut R, extensions: Extension, max_nesting: usize) -> Document<'a, R> {
        Document {
            renderer,
            ctx: Context::new(extensions, max_nesting),
        }
    }

    /// Render `input` as a full document: block structure plus inline
    /// content within it.
    pub fn render(&mut self, input: &Buffer, output: &mut Buffer) {
        let mut normalized = normalize(input.as_bytes());
        if !normalized.ends_with(b"\n") {
            normalized.push(b'\n');
        }
        scan_references(&mut self.ctx, &normalized);

        self.renderer.before_render(output, false);
        parse_block(&mut self.ctx, self.renderer, output, &normalized);
        self.renderer.after_render(output, false);
    }

    /// Render `input` as a single run of inline content, skipping block
    /// structure entirely.
    pub fn render_inline(&mut self, input: &Buffer, output: &mut Buffer) {
        let normalized = normalize(input.as_bytes());
        scan_references(&mut self.ctx, &normalized);

        self.renderer.before_render(output, true);
        parse_inline(&mut self.ctx, self.renderer, output, &normalized);
        self.renderer.after_render(output, true);
    }
}

/// Expands tabs to 4-column stops and collapses CRLF/CR/LF to a single
/// `\n`, so every later scanner can assume Unix line endings and plain
/// spaces.
fn normalize(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut col = 0usize;
    let mut i = 0;

    while i < data.len() {
        match data[i] {
            b'\r' => {
                out.push(b'\n');
                col = 0;
                i += 1;
                if i < data.len() && data[i] == b'\n' {
                    i += 1;
                }
            }
            b'\n' => {
                out.push(b'\n');
                col = 0;
                i += 1;
            }
            b'\t' => {
                let width = 4 - (col % 4);
                out.extend(std::iter::repeat(b' ').take(width));
                col += width;
                i += 1;
            }
            b => {
                out.push(b);
                col += 1;
                i += 1;
            }
        }
    }

    out
}

fn line_end(data: &[u8]) -> usize {
    match data.iter().position(|&b| b == b'\n') {
        Some(pos) => pos + 1,
        None => data.len(),
    }
}

/// Walks `data` once, looking for `[id]: link "title"`-shaped
/// reference definitions and registering the first definition of each
/// id (case-insensitively) in `ctx.refs`, per spec.md §4.1 step 3.
fn scan_references(ctx: &mut Context, data: &[u8]) {
    let mut pos = 0;
    while pos < data.len() {
        if let Some((id, link, title, consumed)) = scan_reference(&data[pos..]) {
            ctx.refs.insert(id, link, title);
            pos += consumed;
        } else {
            pos += line_end(&data[pos..]).max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_expand_to_four_column_stops() {
        assert_eq!(normalize(b"a\tb"), b"a   b");
        assert_eq!(normalize(b"ab\tc"), b"ab  c");
    }

    #[test]
    fn crlf_and_cr_become_lf() {
        assert_eq!(normalize(b"a\r\nb\rc\n"), b"a\nb\nc\n");
    }

    #[test]
    fn render_ensures_a_trailing_newline_before_block_parsing() {
        use crate::markdown::Markdown;
        use crate::renderer::html::{Flags, Html};

        let doc = Markdown::new("<p>Hi.</p>");
        let output = doc.render_to_buffer(Html::new(Flags::empty(), 0));
        assert_eq!(output.to_str().unwrap(), "<p>Hi.</p>\n");
    }
}
