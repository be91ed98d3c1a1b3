//! The inline scanner: emphasis, code spans, links, autolinks, and all
//! of the other span-level constructs.
//!
//! Grounded on `parse_inline` and the `char_*` trigger family in
//! `ext/markdown.c`. The dispatch loop walks the input a byte at a
//! time but only stops to look closely at bytes the active-character
//! table (`context::build_active_char_table`) marks as potentially
//! starting a construct; everything else is accumulated into a run of
//! plain text and flushed through `Render::normal_text` in one call,
//! exactly like the C source's `memchr`-driven scan.
//!
//! A trigger function returns the number of bytes of `data` (starting
//! at the trigger byte) it consumed. Returning `0` means "this wasn't
//! actually a valid construct here", which sends the byte back through
//! as ordinary text — the same refusal protocol a null renderer
//! callback produces in the C source.

use crate::autolink;
use crate::buffer::Buffer;
use crate::context::Context;
use crate::extensions::Extension;
use crate::renderer::{AutoLink, Render};

/// Parses `data` as a run of inline content, pushing rendered output
/// into `ob` via `renderer`'s callbacks.
pub fn parse_inline<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8]) {
    let mut i = 0;
    let mut text_start = 0;

    while i < data.len() {
        if !ctx.active_char[data[i] as usize] {
            i += 1;
            continue;
        }

        if i > text_start {
            flush_text(renderer, ob, &data[text_start..i]);
        }

        let consumed = dispatch(ctx, renderer, ob, data, i);
        if consumed == 0 {
            flush_text(renderer, ob, &data[i..i + 1]);
            i += 1;
        } else {
            i += consumed;
        }
        text_start = i;
    }

    if text_start < data.len() {
        flush_text(renderer, ob, &data[text_start..]);
    }
}

/// Parses `data` inline into a fresh, owned buffer, bumping the span
/// pool's nesting counter for the duration. Used by link/image/
/// emphasis content which must itself be parsed as inline markdown.
///
/// Returns `None` if `max_nesting` would be exceeded, per spec.md's
/// positive nesting-budget policy: the content is dropped rather than
/// parsed, but the enclosing construct still renders.
fn parse_inline_nested<R: Render>(ctx: &mut Context, renderer: &mut R, data: &[u8]) -> Option<Buffer> {
    if ctx.over_budget() {
        return None;
    }

    let slot = ctx.span_pool.acquire();
    {
        let mut scratch = Buffer::new(data.len());
        parse_inline(ctx, renderer, &mut scratch, data);
        *ctx.span_pool.get(slot) = scratch;
    }
    let result = ctx.span_pool.get(slot).clone();
    ctx.span_pool.release(slot);
    Some(result)
}

/// Parses `data` as a top-level run of inline content, handed off from
/// the block scanner (a paragraph's body, a header's text, a table
/// cell). Unlike `parse_inline_nested`, this is not itself subject to
/// the nesting budget — the block scanner already checked it before
/// descending into the construct that owns `data`.
pub fn render_inline_span<R: Render>(ctx: &mut Context, renderer: &mut R, data: &[u8]) -> Buffer {
    let mut out = Buffer::new(data.len());
    parse_inline(ctx, renderer, &mut out, data);
    out
}

fn flush_text<R: Render>(renderer: &mut R, ob: &mut Buffer, text: &[u8]) {
    if text.is_empty() {
        return;
    }
    let buf = Buffer::from(text);
    renderer.normal_text(ob, Some(&buf));
}

fn dispatch<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    match data[i] {
        b'\\' => char_escape(renderer, ob, data, i),
        b'&' => char_entity(renderer, ob, data, i),
        b'`' => char_code_span(renderer, ob, data, i),
        b'*' | b'_' => char_emphasis(ctx, renderer, ob, data, i),
        b'~' if ctx.extensions.contains(Extension::STRIKETHROUGH) => char_strikethrough(renderer, ob, data, i),
        b'^' if ctx.extensions.contains(Extension::SUPERSCRIPT) => char_superscript(renderer, ob, data, i),
        b'\n' => char_linebreak(renderer, ob, data, i),
        b'<' => char_langle_tag(renderer, ob, data, i),
        b'!' => char_image(ctx, renderer, ob, data, i),
        b'[' => char_link(ctx, renderer, ob, data, i),
        b':' | b'w' | b'@' if ctx.extensions.contains(Extension::AUTOLINK) => char_autolink(renderer, ob, data, i),
        _ => 0,
    }
}

/// `\X` where X is ASCII punctuation becomes a literal X.
///
/// Grounded on `char_escape` in `ext/markdown.c`.
fn char_escape<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    if i + 1 < data.len() && data[i + 1].is_ascii_punctuation() {
        let buf = Buffer::from(&data[i + 1..i + 2]);
        renderer.normal_text(ob, Some(&buf));
        2
    } else {
        0
    }
}

/// `&name;` or `&#123;` HTML/XML entities.
///
/// Grounded on `char_entity` in `ext/markdown.c`.
fn char_entity<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    let mut j = i + 1;

    if j < data.len() && data[j] == b'#' {
        j += 1;
        let digits_start = j;
        while j < data.len() && data[j].is_ascii_digit() {
            j += 1;
        }
        if j == digits_start {
            return 0;
        }
    } else {
        let name_start = j;
        while j < data.len() && data[j].is_ascii_alphanumeric() {
            j += 1;
        }
        if j == name_start {
            return 0;
        }
    }

    if j < data.len() && data[j] == b';' {
        j += 1;
        let buf = Buffer::from(&data[i..j]);
        renderer.entity(ob, Some(&buf));
        j - i
    } else {
        0
    }
}

/// A run of N backticks opens a code span closed by the next run of
/// exactly N backticks; leading/trailing single spaces are trimmed if
/// present on both ends (so `` `` `code` `` `` can itself contain a
/// backtick). Grounded on `char_codespan` in `ext/markdown.c`.
fn char_code_span<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    let n = run_length(data, i, b'`');
    let content_start = i + n;

    match find_run(data, content_start, b'`', n) {
        Some(close_start) => {
            let mut content = &data[content_start..close_start];
            if content.len() >= 2 && content[0] == b' ' && content[content.len() - 1] == b' '
                && content.iter().any(|&b| b != b' ')
            {
                content = &content[1..content.len() - 1];
            }

            let buf = Buffer::from(content);
            if renderer.code_span(ob, Some(&buf)) {
                close_start + n - i
            } else {
                0
            }
        }
        None => 0,
    }
}

/// `*emphasis*`, `**strong**`, `***both***`, and their `_`-delimited
/// equivalents. `no_intra_emphasis` additionally requires `_`
/// emphasis to sit on a word boundary. Grounded on `char_emphasis` /
/// `parse_emph1`/`parse_emph2`/`parse_emph3` in `ext/markdown.c`.
fn char_emphasis<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    let c = data[i];
    let n = run_length(data, i, c).min(3);

    if c == b'_' && ctx.extensions.contains(Extension::NO_INTRA_EMPHASIS)
        && i > 0 && data[i - 1].is_ascii_alphanumeric()
    {
        return 0;
    }

    let content_start = i + n;
    if content_start >= data.len() {
        return 0;
    }

    let close_start = match find_run(data, content_start, c, n) {
        Some(pos) if pos > content_start => pos,
        _ => return 0,
    };

    if c == b'_' && ctx.extensions.contains(Extension::NO_INTRA_EMPHASIS) {
        let after = close_start + n;
        if after < data.len() && data[after].is_ascii_alphanumeric() {
            return 0;
        }
    }

    let raw = &data[content_start..close_start];
    let content = parse_inline_nested(ctx, renderer, raw);
    let content = content.as_ref();

    let accepted = match n {
        3 => renderer.triple_emphasis(ob, content),
        2 => renderer.double_emphasis(ob, content),
        1 if c == b'_' && ctx.extensions.contains(Extension::UNDERLINE) => renderer.underline(ob, content),
        _ => renderer.emphasis(ob, content),
    };

    if accepted {
        close_start + n - i
    } else {
        0
    }
}

/// `~~strikethrough~~`. Grounded on the strikethrough extension in the
/// later hoedown lineage's `char_emphasis` dispatch.
fn char_strikethrough<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    if run_length(data, i, b'~') < 2 {
        return 0;
    }
    let content_start = i + 2;
    match find_run(data, content_start, b'~', 2) {
        Some(close_start) if close_start > content_start => {
            let buf = Buffer::from(&data[content_start..close_start]);
            if renderer.strikethrough(ob, Some(&buf)) {
                close_start + 2 - i
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// `^superscript` or `^(wrapped superscript)`.
fn char_superscript<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    if i + 1 >= data.len() {
        return 0;
    }

    let (content_start, content_end, total_end) = if data[i + 1] == b'(' {
        let start = i + 2;
        let mut j = start;
        while j < data.len() && data[j] != b')' {
            j += 1;
        }
        if j >= data.len() {
            return 0;
        }
        (start, j, j + 1)
    } else {
        let start = i + 1;
        let mut j = start;
        while j < data.len() && !data[j].is_ascii_whitespace() {
            j += 1;
        }
        (start, j, j)
    };

    if content_end == content_start {
        return 0;
    }

    let buf = Buffer::from(&data[content_start..content_end]);
    if renderer.superscript(ob, Some(&buf)) {
        total_end - i
    } else {
        0
    }
}

/// Two or more trailing spaces before a newline become a hard line
/// break; a bare newline stays a newline. Grounded on `char_linebreak`
/// in `ext/markdown.c`.
fn char_linebreak<R: Render>(renderer: &mut R, ob: &mut Buffer, _data: &[u8], _i: usize) -> usize {
    let bytes = ob.as_bytes();
    let mut trailing = 0;
    while trailing < bytes.len() && bytes[bytes.len() - 1 - trailing] == b' ' {
        trailing += 1;
    }

    if trailing < 2 {
        return 0;
    }

    ob.truncate(ob.len() - trailing);
    if renderer.line_break(ob) {
        1
    } else {
        let padding = vec![b' '; trailing];
        ob.pipe(&Buffer::from(padding));
        0
    }
}

/// `<http://example.com>`, `<jane@example.com>`, or a literal raw HTML
/// tag like `<strong>`. Grounded on `char_langle_tag` in
/// `ext/markdown.c`.
fn char_langle_tag<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    let mut j = i + 1;
    while j < data.len() && data[j] != b'>' && data[j] != b'\n' {
        j += 1;
    }
    if j >= data.len() || data[j] != b'>' {
        return 0;
    }

    let inner = &data[i + 1..j];
    let has_space = inner.iter().any(|b| b.is_ascii_whitespace());

    if !has_space && looks_like_scheme(inner) {
        let buf = Buffer::from(inner);
        if renderer.autolink(ob, Some(&buf), AutoLink::Normal) {
            return j + 1 - i;
        }
    }

    if !has_space && inner.contains(&b'@') && !inner.starts_with(b"mailto:") {
        let buf = Buffer::from(inner);
        if renderer.autolink(ob, Some(&buf), AutoLink::Email) {
            return j + 1 - i;
        }
    }

    if !has_space && inner.starts_with(b"mailto:") {
        let buf = Buffer::from(&inner[b"mailto:".len()..]);
        if renderer.autolink(ob, Some(&buf), AutoLink::Email) {
            return j + 1 - i;
        }
    }

    let full = Buffer::from(&data[i..j + 1]);
    if renderer.raw_html(ob, Some(&full)) {
        j + 1 - i
    } else {
        0
    }
}

fn looks_like_scheme(inner: &[u8]) -> bool {
    if let Some(colon) = inner.iter().position(|&b| b == b':') {
        let scheme = &inner[..colon];
        !scheme.is_empty() && scheme.iter().all(|b| b.is_ascii_alphabetic())
    } else {
        false
    }
}

/// `![alt](src "title")`, `![alt][ref]`, `![alt]`.
fn char_image<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    if i + 1 >= data.len() || data[i + 1] != b'[' {
        return 0;
    }
    match link_or_image(ctx, renderer, data, i + 1, true) {
        Some((consumed, link, title, content)) => {
            if renderer.image(ob, Some(&link), non_empty(&title), non_empty(&content)) {
                1 + consumed
            } else {
                0
            }
        }
        None => 0,
    }
}

/// `[text](url "title")`, `[text][ref]`, `[text]`.
fn char_link<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    match link_or_image(ctx, renderer, data, i, false) {
        Some((consumed, link, title, content)) => {
            if renderer.link(ob, non_empty(&content), Some(&link), non_empty(&title)) {
                renderer.link_attributes(ob, Some(&link));
                consumed
            } else {
                0
            }
        }
        None => 0,
    }
}

fn non_empty(buf: &Buffer) -> Option<&Buffer> {
    if buf.is_empty() { None } else { Some(buf) }
}

/// Shared grammar for `[...]...` used by both links and images.
///
/// `data[start]` must be `[`. Per the Open Question resolution in
/// SPEC_FULL.md, a `[` encountered while scanning the label is treated
/// as plain bracket depth (links do not nest); the label content is
/// still parsed as ordinary inline markdown, it just never becomes a
/// second, independent anchor.
fn link_or_image<R: Render>(
    ctx: &mut Context,
    renderer: &mut R,
    data: &[u8],
    start: usize,
    is_image: bool,
) -> Option<(usize, Buffer, Buffer, Buffer)> {
    let label_start = start + 1;
    let mut depth = 1;
    let mut j = label_start;
    while j < data.len() && depth > 0 {
        match data[j] {
            b'[' => depth += 1,
            b']' => depth -= 1,
            b'\\' => j += 1,
            _ => {}
        }
        j += 1;
    }
    if depth != 0 {
        return None;
    }
    let label_end = j - 1;
    let label = &data[label_start..label_end];

    let mut k = j;

    if k < data.len() && data[k] == b'(' {
        k += 1;
        while k < data.len() && data[k].is_ascii_whitespace() {
            k += 1;
        }
        let url_start = k;
        while k < data.len() && !data[k].is_ascii_whitespace() && data[k] != b')' {
            k += 1;
        }
        let url = &data[url_start..k];
        while k < data.len() && data[k].is_ascii_whitespace() {
            k += 1;
        }
        let mut title: &[u8] = &[];
        if k < data.len() && (data[k] == b'"' || data[k] == b'\'') {
            let quote = data[k];
            let title_start = k + 1;
            let mut m = title_start;
            while m < data.len() && data[m] != quote {
                m += 1;
            }
            if m < data.len() {
                title = &data[title_start..m];
                k = m + 1;
            }
        }
        while k < data.len() && data[k].is_ascii_whitespace() {
            k += 1;
        }
        if k >= data.len() || data[k] != b')' {
            return None;
        }
        let content = if is_image {
            Buffer::from(label)
        } else {
            parse_inline_nested(ctx, renderer, label).unwrap_or_else(|| Buffer::new(0))
        };
        return Some((k + 1 - start, Buffer::from(url), Buffer::from(title), content));
    }

    if k < data.len() && data[k] == b'[' {
        let id_start = k + 1;
        let mut m = id_start;
        while m < data.len() && data[m] != b']' {
            m += 1;
        }
        if m >= data.len() {
            return None;
        }
        let id_bytes = if m == id_start { label } else { &data[id_start..m] };
        let id = Buffer::from(id_bytes);
        let reference = ctx.refs.find(&id)?;
        let link = reference.link.clone();
        let title = reference.title.clone();
        let content = if is_image {
            Buffer::from(label)
        } else {
            parse_inline_nested(ctx, renderer, label).unwrap_or_else(|| Buffer::new(0))
        };
        return Some((m + 1 - start, link, title, content));
    }

    // shortcut reference: [label] resolves against the label itself
    let id = Buffer::from(label);
    let reference = ctx.refs.find(&id)?;
    let link = reference.link.clone();
    let title = reference.title.clone();
    let content = if is_image {
        Buffer::from(label)
    } else {
        parse_inline_nested(ctx, renderer, label).unwrap_or_else(|| Buffer::new(0))
    };
    Some((label_end + 1 - start, link, title, content))
}

/// Bare `http://`/`https://`/`ftp://` URLs, `www.`-prefixed hosts, and
/// bare email addresses, recognized after the fact via the rewind
/// protocol in `autolink.rs`. Only reached when the `autolink`
/// extension is enabled.
fn char_autolink<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8], i: usize) -> usize {
    match data[i] {
        b':' => {
            if i + 2 >= data.len() || &data[i + 1..i + 3] != b"//" {
                return 0;
            }
            let prefix_start = autolink::rewind_prefix(ob.as_bytes());
            let scheme = ob.as_bytes()[prefix_start..].to_vec();
            if !matches!(scheme.as_slice(), b"http" | b"https" | b"ftp") {
                return 0;
            }
            let len = match autolink::scan_url_end(&data[i..]) {
                Some(len) => len,
                None => return 0,
            };
            let mut full = Buffer::from(scheme.as_slice());
            full.pipe(&Buffer::from(&data[i..i + len]));
            ob.truncate(prefix_start);
            if renderer.autolink(ob, Some(&full), AutoLink::Normal) {
                len
            } else {
                ob.pipe(&full);
                0
            }
        }
        b'w' => {
            if !data[i..].starts_with(b"www.") {
                return 0;
            }
            let len = match autolink::scan_url_end(&data[i..]) {
                Some(len) => len,
                None => return 0,
            };
            let mut full = Buffer::from("http://".as_bytes());
            full.pipe(&Buffer::from(&data[i..i + len]));
            if renderer.autolink(ob, Some(&full), AutoLink::Normal) {
                len
            } else {
                0
            }
        }
        b'@' => {
            let prefix_start = autolink::rewind_prefix(ob.as_bytes());
            let local = ob.as_bytes()[prefix_start..].to_vec();
            if !autolink::is_mail_autolink(&local) {
                return 0;
            }
            let mut j = i + 1;
            while j < data.len() && (data[j].is_ascii_alphanumeric() || matches!(data[j], b'.' | b'-')) {
                j += 1;
            }
            if j == i + 1 {
                return 0;
            }
            let mut full = Buffer::from(local.as_slice());
            full.pipe(&Buffer::from(b"@" as &[u8]));
            full.pipe(&Buffer::from(&data[i + 1..j]));
            ob.truncate(prefix_start);
            if renderer.autolink(ob, Some(&full), AutoLink::Email) {
                j - i
            } else {
                ob.pipe(&full);
                0
            }
        }
        _ => 0,
    }
}

fn run_length(data: &[u8], start: usize, c: u8) -> usize {
    let mut n = 0;
    while start + n < data.len() && data[start + n] == c {
        n += 1;
    }
    n
}

/// Finds the next run of exactly `n` consecutive `c` bytes at or after
/// `start`, per `find_emph_char`'s closing-delimiter search in
/// `ext/markdown.c`.
fn find_run(data: &[u8], start: usize, c: u8, n: usize) -> Option<usize> {
    let mut j = start;
    while j + n <= data.len() {
        if data[j..j + n].iter().all(|&b| b == c) && (j + n == data.len() || data[j + n] != c) {
            return Some(j);
        }
        j += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::trace::Trace;

    struct Capture(Vec<String>);

    impl Render for Capture {
        fn emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
            self.0.push(format!("em:{}", content.and_then(|c| c.to_str().ok()).unwrap_or("")));
            output.pipe(&Buffer::from("<em>"));
            if let Some(c) = content {
                output.pipe(c);
            }
            output.pipe(&Buffer::from("</em>"));
            true
        }

        fn code_span(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
            output.pipe(&Buffer::from("<code>"));
            if let Some(c) = content {
                output.pipe(c);
            }
            output.pipe(&Buffer::from("</code>"));
            true
        }
    }

    #[test]
    fn plain_text_passes_through() {
        let mut ctx = Context::new(Extension::empty(), 16);
        let mut renderer = Trace;
        let mut ob = Buffer::new(16);
        parse_inline(&mut ctx, &mut renderer, &mut ob, b"just words");
        assert_eq!(ob.to_str().unwrap(), "just words");
    }

    #[test]
    fn emphasis_is_recognized() {
        let mut ctx = Context::new(Extension::empty(), 16);
        let mut renderer = Capture(Vec::new());
        let mut ob = Buffer::new(16);
        parse_inline(&mut ctx, &mut renderer, &mut ob, b"a _b_ c");
        assert_eq!(ob.to_str().unwrap(), "a <em>b</em> c");
    }

    #[test]
    fn code_span_is_recognized() {
        let mut ctx = Context::new(Extension::empty(), 16);
        let mut renderer = Capture(Vec::new());
        let mut ob = Buffer::new(16);
        parse_inline(&mut ctx, &mut renderer, &mut ob, b"`rm -rf`");
        assert_eq!(ob.to_str().unwrap(), "<code>rm -rf</code>");
    }

    #[test]
    fn no_intra_emphasis_blocks_word_internal_underscore() {
        let mut ctx = Context::new(Extension::NO_INTRA_EMPHASIS, 16);
        let mut renderer = Capture(Vec::new());
        let mut ob = Buffer::new(16);
        parse_inline(&mut ctx, &mut renderer, &mut ob, b"foo_bar_baz");
        assert_eq!(ob.to_str().unwrap(), "foo_bar_baz");
    }
}
