//! The block scanner: headers, lists, blockquotes, code blocks, tables
//! and everything else that operates a line at a time.
//!
//! Grounded on `parse_block` and its dispatch family (`parse_atxheader`,
//! `parse_htmlblock`, `parse_hrule`, `parse_blockquote`,
//! `parse_blockcode`, `parse_listitem`/`parse_list`, `parse_paragraph`)
//! in `ext/markdown.c`. Dispatch order follows spec.md §4.3's eleven
//! steps rather than that source's simpler, pre-extension order (see
//! SPEC_FULL.md): ATX header, HTML block, blank line, horizontal rule,
//! fenced code, table, blockquote, indented code, unordered list,
//! ordered list, paragraph.

use crate::buffer::Buffer;
use crate::context::Context;
use crate::extensions::Extension;
use crate::inline::render_inline_span;
use crate::renderer::{list::List, Render, Table};

/// Known HTML block-level tag names that trigger raw HTML-block
/// recognition. Grounded on `block_tags[]` in `ext/markdown.c`, with
/// `figure` added per spec.md §4.3 (a later hoedown addition this
/// snapshot of the grounding source predates).
const KNOWN_BLOCK_TAGS: &[&str] = &[
    "blockquote", "del", "dl", "div", "fieldset", "figure", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "iframe", "ins", "math", "noscript",
    "ol", "p", "pre", "script", "table", "ul",
];

pub fn parse_block<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, mut data: &[u8]) {
    while !data.is_empty() {
        if ctx.over_budget() {
            break;
        }
        let consumed = parse_one_block(ctx, renderer, ob, data).max(1);
        data = &data[consumed..];
    }
}

/// Parses `data` as a nested block-level region (blockquote content,
/// a loose list item's body), bumping the block pool's nesting counter
/// for the duration. Returns `None` (content silently dropped) if
/// `max_nesting` would be exceeded — the container itself still
/// renders, per spec.md's nesting-budget policy.
fn parse_block_nested<R: Render>(ctx: &mut Context, renderer: &mut R, data: &[u8]) -> Option<Buffer> {
    if ctx.over_budget() {
        return None;
    }
    let slot = ctx.block_pool.acquire();
    {
        let mut scratch = Buffer::new(data.len());
        parse_block(ctx, renderer, &mut scratch, data);
        *ctx.block_pool.get(slot) = scratch;
    }
    let result = ctx.block_pool.get(slot).clone();
    ctx.block_pool.release(slot);
    Some(result)
}

fn parse_one_block<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> usize {
    if let Some(n) = try_atx_header(ctx, renderer, ob, data) {
        return n;
    }
    if let Some(n) = try_html_block(ctx, renderer, ob, data) {
        return n;
    }
    if is_blank_line(current_line(data)) {
        return consume_blank_lines(data);
    }
    if let Some(n) = try_hrule(renderer, ob, data) {
        return n;
    }
    if ctx.extensions.contains(Extension::FENCED_CODE) {
        if let Some(n) = try_fenced_code(renderer, ob, data) {
            return n;
        }
    }
    if ctx.extensions.contains(Extension::TABLES) {
        if let Some(n) = try_table(ctx, renderer, ob, data) {
            return n;
        }
    }
    if let Some(n) = try_blockquote(ctx, renderer, ob, data) {
        return n;
    }
    let defer_to_lax_list = ctx.extensions.contains(Extension::LAX_SPACING) && is_list_marker(ctx, data);
    if !ctx.extensions.contains(Extension::DISABLE_INDENTED_CODE) && !defer_to_lax_list {
        if let Some(n) = try_indented_code(renderer, ob, data) {
            return n;
        }
    }
    if let Some(n) = try_list(ctx, renderer, ob, data, false) {
        return n;
    }
    if let Some(n) = try_list(ctx, renderer, ob, data, true) {
        return n;
    }
    try_paragraph(ctx, renderer, ob, data)
}

// -- line utilities --

fn line_end(data: &[u8]) -> usize {
    match data.iter().position(|&b| b == b'\n') {
        Some(pos) => pos + 1,
        None => data.len(),
    }
}

fn current_line(data: &[u8]) -> &[u8] {
    trim_newline(&data[..line_end(data)])
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && (line[end - 1] == b'\n' || line[end - 1] == b'\r') {
        end -= 1;
    }
    &line[..end]
}

fn is_blank_line(line: &[u8]) -> bool {
    line.iter().all(|&b| b == b' ' || b == b'\t')
}

fn trim_ws(bytes: &[u8]) -> &[u8] {
    let mut start = 0;
    let mut end = bytes.len();
    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    &bytes[start..end]
}

fn run_len(data: &[u8], start: usize, c: u8) -> usize {
    let mut n = 0;
    while start + n < data.len() && data[start + n] == c {
        n += 1;
    }
    n
}

fn leading_spaces(line: &[u8], max: usize) -> usize {
    let mut i = 0;
    while i < line.len() && i < max && line[i] == b' ' {
        i += 1;
    }
    i
}

/// Leading-space cap used for blockquote and list-item marker
/// recognition. `Extension::LAX_SPACING` lifts the normal three-space
/// limit so a `>` or list marker indented further still starts that
/// construct instead of falling through to an indented code block.
fn block_indent_cap(ctx: &Context) -> usize {
    if ctx.extensions.contains(Extension::LAX_SPACING) {
        usize::MAX
    } else {
        3
    }
}

fn consume_blank_lines(data: &[u8]) -> usize {
    let mut pos = 0;
    while pos < data.len() {
        let ll = line_end(&data[pos..]);
        if !is_blank_line(trim_newline(&data[pos..pos + ll])) {
            break;
        }
        pos += ll;
    }
    pos.max(1)
}

fn non_empty(buf: &Buffer) -> Option<&Buffer> {
    if buf.is_empty() { None } else { Some(buf) }
}

// -- ATX headers: `# Title` --

fn try_atx_header<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> Option<usize> {
    let line_len = line_end(data);
    let line = trim_newline(&data[..line_len]);

    let indent = leading_spaces(line, 3);
    let hashes_start = indent;
    let level = run_len(line, hashes_start, b'#');
    if level == 0 || level > 6 {
        return None;
    }

    let mut i = hashes_start + level;
    if ctx.extensions.contains(Extension::SPACE_AFTER_HEADERS) {
        if i >= line.len() || !(line[i] == b' ' || line[i] == b'\t') {
            return None;
        }
    }
    while i < line.len() && (line[i] == b' ' || line[i] == b'\t') {
        i += 1;
    }

    let mut end = line.len();
    while end > i && line[end - 1] == b'#' {
        end -= 1;
    }
    while end > i && (line[end - 1] == b' ' || line[end - 1] == b'\t') {
        end -= 1;
    }

    let content_bytes = &line[i..end];
    let content = render_inline_span(ctx, renderer, content_bytes);
    renderer.header(ob, non_empty(&content), level as i32);
    Some(line_len)
}

// -- raw HTML blocks --

fn parse_tag_name(data: &[u8]) -> Option<(String, bool)> {
    if data.first() != Some(&b'<') {
        return None;
    }
    let mut i = 1;
    let is_close = data.get(i) == Some(&b'/');
    if is_close {
        i += 1;
    }
    let start = i;
    while i < data.len() && (data[i].is_ascii_alphanumeric()) {
        i += 1;
    }
    if i == start {
        return None;
    }
    Some((String::from_utf8_lossy(&data[start..i]).to_lowercase(), is_close))
}

fn find_subslice(data: &[u8], needle: &[u8]) -> Option<usize> {
    data.windows(needle.len()).position(|w| w == needle)
}

fn find_subslice_case_insensitive(data: &[u8], needle: &[u8]) -> Option<usize> {
    data.windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

fn consume_to_blank_or_eof(data: &[u8], from: usize) -> usize {
    let mut pos = from;
    // finish the current line first
    if pos < data.len() {
        pos += line_end(&data[pos..]);
    }
    loop {
        if pos >= data.len() {
            return pos;
        }
        let ll = line_end(&data[pos..]);
        if is_blank_line(trim_newline(&data[pos..pos + ll])) {
            return pos + ll;
        }
        pos += ll;
    }
}

fn try_html_block<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> Option<usize> {
    if data.first() != Some(&b'<') {
        return None;
    }

    if data.starts_with(b"<!--") {
        let close = find_subslice(data, b"-->")?;
        let end = consume_to_blank_or_eof(data, close + 3);
        let buf = Buffer::from(&data[..end]);
        renderer.html_block(ob, Some(&buf));
        return Some(end);
    }

    let (tag, _is_close) = parse_tag_name(data)?;
    let known = KNOWN_BLOCK_TAGS.iter().any(|t| t.eq_ignore_ascii_case(&tag));
    if !known && !ctx.extensions.contains(Extension::LAX_HTML_BLOCKS) {
        return None;
    }

    let closing = format!("</{}>", tag);
    let end = find_subslice_case_insensitive(data, closing.as_bytes())
        .map(|pos| pos + closing.len())
        .unwrap_or_else(|| line_end(data));
    let end = consume_to_blank_or_eof(data, end);
    let buf = Buffer::from(&data[..end]);
    renderer.html_block(ob, Some(&buf));
    Some(end)
}

// -- horizontal rules: `---`, `***`, `___` --

fn is_hrule_line(line: &[u8]) -> bool {
    let indent = leading_spaces(line, 3);
    if indent >= line.len() {
        return false;
    }
    let c = line[indent];
    if !matches!(c, b'-' | b'*' | b'_') {
        return false;
    }
    let mut count = 0;
    for &b in &line[indent..] {
        if b == c {
            count += 1;
        } else if b != b' ' {
            return false;
        }
    }
    count >= 3
}

fn try_hrule<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> Option<usize> {
    let line_len = line_end(data);
    let line = trim_newline(&data[..line_len]);
    if !is_hrule_line(line) {
        return None;
    }
    renderer.horizontal_rule(ob);
    Some(line_len)
}

// -- fenced code blocks --

fn fence_prefix(line: &[u8]) -> Option<(u8, usize, usize)> {
    let indent = leading_spaces(line, 3);
    if indent >= line.len() {
        return None;
    }
    let c = line[indent];
    if c != b'`' && c != b'~' {
        return None;
    }
    let len = run_len(line, indent, c);
    if len < 3 {
        return None;
    }
    Some((c, indent, len))
}

fn is_fence_start(line: &[u8]) -> bool {
    fence_prefix(line).is_some()
}

fn try_fenced_code<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> Option<usize> {
    let line_len = line_end(data);
    let line = trim_newline(&data[..line_len]);
    let (fence_char, indent, fence_len) = fence_prefix(line)?;

    let lang_bytes = trim_ws(&line[indent + fence_len..]);
    let lang = if lang_bytes.is_empty() { None } else { Some(Buffer::from(lang_bytes)) };

    let content_start = line_len;
    let mut pos = content_start;
    loop {
        if pos >= data.len() {
            let content = Buffer::from(&data[content_start..]);
            renderer.code_block(ob, Some(&content), lang.as_ref());
            return Some(data.len());
        }
        let ll = line_end(&data[pos..]);
        let cur = trim_newline(&data[pos..pos + ll]);
        let k = leading_spaces(cur, 3);
        if k < cur.len() && cur[k] == fence_char {
            let close_len = run_len(cur, k, fence_char);
            if close_len >= fence_len && cur[k + close_len..].iter().all(|&b| b == b' ') {
                let content = Buffer::from(&data[content_start..pos]);
                renderer.code_block(ob, Some(&content), lang.as_ref());
                return Some(pos + ll);
            }
        }
        pos += ll;
    }
}

// -- indented code blocks --

fn try_indented_code<R: Render>(renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> Option<usize> {
    let starts_indented = data.starts_with(b"    ") || data.first() == Some(&b'\t');
    if !starts_indented {
        return None;
    }

    let mut pos = 0;
    let mut content = Vec::new();
    loop {
        if pos >= data.len() {
            break;
        }
        let ll = line_end(&data[pos..]);
        let line = &data[pos..pos + ll];
        if line.starts_with(b"    ") {
            content.extend_from_slice(&line[4..]);
            pos += ll;
        } else if line.first() == Some(&b'\t') {
            content.extend_from_slice(&line[1..]);
            pos += ll;
        } else if is_blank_line(trim_newline(line)) {
            let next = pos + ll;
            let continues = next < data.len()
                && (data[next..].starts_with(b"    ") || data[next..].first() == Some(&b'\t'));
            if continues {
                content.push(b'\n');
                pos += ll;
            } else {
                break;
            }
        } else {
            break;
        }
    }

    if pos == 0 {
        return None;
    }
    let buf = Buffer::from(content);
    renderer.code_block(ob, Some(&buf), None);
    Some(pos)
}

// -- blockquotes --

fn try_blockquote<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> Option<usize> {
    let cap = block_indent_cap(ctx);
    let line = current_line(data);
    let indent = leading_spaces(line, cap);
    if indent >= line.len() || line[indent] != b'>' {
        return None;
    }

    let mut pos = 0;
    let mut stripped = Vec::new();
    loop {
        if pos >= data.len() {
            break;
        }
        let ll = line_end(&data[pos..]);
        let line = &data[pos..pos + ll];
        let trimmed = trim_newline(line);
        let j = leading_spaces(trimmed, cap);

        if j < trimmed.len() && trimmed[j] == b'>' {
            let mut k = j + 1;
            if k < line.len() && line[k] == b' ' {
                k += 1;
            }
            stripped.extend_from_slice(&line[k..]);
            pos += ll;
        } else if is_blank_line(trimmed) {
            let next = pos + ll;
            let has_more = next < data.len() && {
                let nll = line_end(&data[next..]);
                let nline = trim_newline(&data[next..next + nll]);
                let nj = leading_spaces(nline, cap);
                nj < nline.len() && nline[nj] == b'>'
            };
            if has_more {
                stripped.extend_from_slice(line);
                pos += ll;
            } else {
                break;
            }
        } else {
            break;
        }
    }

    let content = parse_block_nested(ctx, renderer, &stripped);
    renderer.quote_block(ob, content.as_ref());
    Some(pos)
}

// -- tables --

fn split_table_row(line: &[u8]) -> Vec<Vec<u8>> {
    let mut start = 0;
    let mut end = line.len();
    while start < end && line[start] == b' ' {
        start += 1;
    }
    if start < end && line[start] == b'|' {
        start += 1;
    }
    while end > start && line[end - 1] == b' ' {
        end -= 1;
    }
    if end > start && line[end - 1] == b'|' {
        end -= 1;
    }
    let line = &line[start..end];

    let mut cells = Vec::new();
    let mut current = Vec::new();
    let mut i = 0;
    while i < line.len() {
        if line[i] == b'\\' && i + 1 < line.len() {
            current.push(line[i + 1]);
            i += 2;
            continue;
        }
        if line[i] == b'|' {
            cells.push(trim_ws(&current).to_vec());
            current.clear();
            i += 1;
            continue;
        }
        current.push(line[i]);
        i += 1;
    }
    cells.push(trim_ws(&current).to_vec());
    cells
}

fn parse_table_underline(line: &[u8]) -> Option<Vec<Table>> {
    let cells = split_table_row(line);
    if cells.is_empty() {
        return None;
    }
    let mut aligns = Vec::new();
    for cell in &cells {
        let c = trim_ws(cell);
        if c.is_empty() || !c.iter().all(|&b| b == b'-' || b == b':') || !c.contains(&b'-') {
            return None;
        }
        let left = c.first() == Some(&b':');
        let right = c.last() == Some(&b':');
        let align = match (left, right) {
            (true, true) => Table::CENTER,
            (true, false) => Table::LEFT,
            (false, true) => Table::RIGHT,
            (false, false) => Table::empty(),
        };
        aligns.push(align);
    }
    Some(aligns)
}

fn try_table<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> Option<usize> {
    let header_len = line_end(data);
    let header_line = trim_newline(&data[..header_len]);
    if header_line.is_empty() || !header_line.contains(&b'|') || header_len >= data.len() {
        return None;
    }

    let underline_len = line_end(&data[header_len..]);
    let underline_line = trim_newline(&data[header_len..header_len + underline_len]);
    let aligns = parse_table_underline(underline_line)?;
    let header_cells = split_table_row(header_line);
    if header_cells.len() != aligns.len() {
        return None;
    }

    let mut pos = header_len + underline_len;
    let mut rows = Vec::new();
    loop {
        if pos >= data.len() {
            break;
        }
        let ll = line_end(&data[pos..]);
        let line = trim_newline(&data[pos..pos + ll]);
        if is_blank_line(line) || !line.contains(&b'|') {
            break;
        }
        rows.push(split_table_row(line));
        pos += ll;
    }

    let mut header_row_cells = Buffer::new(64);
    for (idx, cell) in header_cells.iter().enumerate() {
        let content = render_inline_span(ctx, renderer, cell);
        let mut cell_buf = Buffer::new(32);
        renderer.table_cell(&mut cell_buf, non_empty(&content), aligns[idx] | Table::HEADER);
        header_row_cells.pipe(&cell_buf);
    }
    let mut header_row = Buffer::new(64);
    renderer.table_row(&mut header_row, Some(&header_row_cells));
    let mut thead = Buffer::new(64);
    renderer.table_header(&mut thead, Some(&header_row));

    let mut body_rows = Buffer::new(128);
    for row in &rows {
        let mut row_cells = Buffer::new(64);
        for (idx, cell) in row.iter().enumerate() {
            let align = aligns.get(idx).copied().unwrap_or_else(Table::empty);
            let content = render_inline_span(ctx, renderer, cell);
            let mut cell_buf = Buffer::new(32);
            renderer.table_cell(&mut cell_buf, non_empty(&content), align);
            row_cells.pipe(&cell_buf);
        }
        let mut r = Buffer::new(64);
        renderer.table_row(&mut r, Some(&row_cells));
        body_rows.pipe(&r);
    }
    let mut tbody = Buffer::new(128);
    renderer.table_body(&mut tbody, Some(&body_rows));

    let mut content = Buffer::new(256);
    content.pipe(&thead);
    content.pipe(&tbody);
    renderer.table(ob, Some(&content));
    Some(pos)
}

// -- lists --

fn detect_item_marker(ctx: &Context, data: &[u8], ordered: bool) -> Option<usize> {
    let line = current_line(data);
    let mut i = leading_spaces(line, block_indent_cap(ctx));

    if ordered {
        let digits_start = i;
        while i < line.len() && line[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits_start || i >= line.len() || !(line[i] == b'.' || line[i] == b')') {
            return None;
        }
        i += 1;
    } else {
        if i >= line.len() || !matches!(line[i], b'-' | b'*' | b'+') {
            return None;
        }
        i += 1;
    }

    if i >= line.len() || !(line[i] == b' ' || line[i] == b'\t') {
        return None;
    }
    i += 1;

    Some(i)
}

fn is_list_marker(ctx: &Context, data: &[u8]) -> bool {
    detect_item_marker(ctx, data, false).is_some() || detect_item_marker(ctx, data, true).is_some()
}

fn collect_list_item(ctx: &Context, data: &[u8], marker_width: usize) -> (Vec<u8>, usize, bool) {
    let first_len = line_end(data);
    let mut content = data[marker_width..first_len].to_vec();
    let mut pos = first_len;
    let mut saw_blank = false;

    loop {
        if pos >= data.len() {
            break;
        }
        let ll = line_end(&data[pos..]);
        let line = &data[pos..pos + ll];
        let trimmed = trim_newline(line);

        if is_blank_line(trimmed) {
            let next = pos + ll;
            if next < data.len() {
                let nll = line_end(&data[next..]);
                let nline = &data[next..next + nll];
                let indented = nline.len() >= marker_width
                    && nline[..marker_width].iter().all(|&b| b == b' ');
                if indented && !is_list_marker(ctx, nline) {
                    content.push(b'\n');
                    pos += ll;
                    saw_blank = true;
                    continue;
                }
            }
            break;
        }

        if line.len() >= marker_width && line[..marker_width].iter().all(|&b| b == b' ') {
            content.extend_from_slice(&line[marker_width..]);
            pos += ll;
        } else if is_list_marker(ctx, line) {
            break;
        } else {
            content.extend_from_slice(line);
            pos += ll;
        }
    }

    (content, pos, saw_blank)
}

fn try_list<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8], ordered: bool) -> Option<usize> {
    detect_item_marker(ctx, data, ordered)?;

    let mut pos = 0;
    let mut items = Vec::new();
    let mut any_blank = false;

    while pos < data.len() {
        let marker_width = match detect_item_marker(ctx, &data[pos..], ordered) {
            Some(w) => w,
            None => break,
        };
        let (item_bytes, consumed, trailing_blank) = collect_list_item(ctx, &data[pos..], marker_width);
        items.push(item_bytes);
        any_blank |= trailing_blank;
        pos += consumed;
    }

    if items.is_empty() {
        return None;
    }

    let mut flags = if ordered { List::ORDERED } else { List::empty() };
    if any_blank {
        flags |= List::BLOCK;
    }

    let mut content = Buffer::new(128);
    for item_bytes in &items {
        let mut item_buf = Buffer::new(64);
        if flags.contains(List::BLOCK) {
            if let Some(rendered) = parse_block_nested(ctx, renderer, item_bytes) {
                item_buf.pipe(&rendered);
            }
        } else {
            let rendered = render_inline_span(ctx, renderer, trim_newline(item_bytes));
            item_buf.pipe(&rendered);
        }
        let mut li = Buffer::new(64);
        renderer.list_item(&mut li, non_empty(&item_buf), flags);
        content.pipe(&li);
    }

    renderer.list(ob, Some(&content), flags);
    Some(pos)
}

// -- paragraphs, with setext header detection --

fn setext_level(line: &[u8]) -> Option<i32> {
    if line.is_empty() {
        return None;
    }
    if line.iter().all(|&b| b == b'=') {
        Some(1)
    } else if line.iter().all(|&b| b == b'-') {
        Some(2)
    } else {
        None
    }
}

fn starts_new_block(ctx: &Context, data: &[u8]) -> bool {
    let line = current_line(data);
    if is_blank_line(line) {
        return true;
    }
    if is_hrule_line(line) {
        return true;
    }
    let indent = leading_spaces(line, 3);
    if indent < line.len() && line[indent] == b'#' {
        return true;
    }
    if indent < line.len() && line[indent] == b'>' {
        return true;
    }
    if data.first() == Some(&b'<') {
        return true;
    }
    if ctx.extensions.contains(Extension::FENCED_CODE) && is_fence_start(line) {
        return true;
    }
    is_list_marker(ctx, data)
}

fn try_paragraph<R: Render>(ctx: &mut Context, renderer: &mut R, ob: &mut Buffer, data: &[u8]) -> usize {
    let mut pos = 0;
    loop {
        if pos >= data.len() {
            break;
        }
        let ll = line_end(&data[pos..]);
        let line = trim_newline(&data[pos..pos + ll]);
        if is_blank_line(line) {
            break;
        }
        if pos > 0 && starts_new_block(ctx, &data[pos..]) {
            break;
        }
        pos += ll;
    }

    if pos == 0 {
        let ll = line_end(data).max(1);
        let content_bytes = trim_newline(&data[..ll.min(data.len())]);
        let content = render_inline_span(ctx, renderer, content_bytes);
        renderer.paragraph(ob, non_empty(&content));
        return ll;
    }

    if pos < data.len() {
        let ull = line_end(&data[pos..]);
        let uline = trim_newline(&data[pos..pos + ull]);
        if let Some(level) = setext_level(uline) {
            let content_bytes = trim_newline(&data[..pos]);
            let content = render_inline_span(ctx, renderer, content_bytes);
            renderer.header(ob, non_empty(&content), level);
            return pos + ull;
        }
    }

    let content_bytes = trim_newline(&data[..pos]);
    let content = render_inline_span(ctx, renderer, content_bytes);
    renderer.paragraph(ob, non_empty(&content));
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::trace::Trace;

    fn render(extensions: Extension, input: &str) -> String {
        let mut ctx = Context::new(extensions, 16);
        let mut renderer = Trace;
        let mut ob = Buffer::new(64);
        parse_block(&mut ctx, &mut renderer, &mut ob, input.as_bytes());
        ob.to_str().unwrap().to_string()
    }

    #[test]
    fn hrule_is_recognized() {
        assert!(render(Extension::empty(), "---\n").contains("HORIZONTAL_RULE"));
    }

    #[test]
    fn atx_header_strips_trailing_hashes() {
        let mut ctx = Context::new(Extension::empty(), 16);
        assert_eq!(try_atx_header(&mut ctx, &mut Trace, &mut Buffer::new(0), b"## Title ##\n").unwrap(), 12);
    }

    #[test]
    fn blank_lines_are_consumed_without_output() {
        let mut ctx = Context::new(Extension::empty(), 16);
        let mut ob = Buffer::new(16);
        parse_block(&mut ctx, &mut Trace, &mut ob, b"\n\n\n");
        assert!(ob.is_empty());
    }
}
