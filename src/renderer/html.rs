//! The HTML (and XHTML) renderer, plus the standalone SmartyPants
//! post-processor.
//!
//! Grounded on `ext/xhtml.c`: the same callback-by-callback shape, the
//! same flag set (generalized per SPEC_FULL.md with `skip_images`,
//! `skip_links`, `safelink`, `toc`, `expand_tabs`, `smartypants`,
//! `prettify` and `github_blockcode`, which that source splits across
//! `hoedown_html_renderer_new`'s sibling flavors), and the same
//! `<h2 id="...">` table-of-contents behavior grounded on
//! `hoedown_html_toc_renderer_new`.

use std::collections::HashMap;
use std::io::Write;

use crate::buffer::Buffer;
use super::{list::List, AutoLink, Render, Table};

/// Flags to control the behavior of the HTML renderer.
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Ignore raw HTML spans and blocks entirely.
        const SKIP_HTML       = 1 << 0;
        /// Ignore raw HTML blocks, and escape (rather than drop) raw
        /// HTML spans.
        const ESCAPE          = 1 << 1;
        /// Insert `<br />` for every newline inside a paragraph.
        const HARD_WRAP       = 1 << 2;
        /// Emit self-closing XHTML tags (`<br />`, `<hr />`, `<img />`)
        /// instead of HTML5 void tags.
        const USE_XHTML       = 1 << 3;
        /// Drop image spans entirely instead of emitting `<img>`.
        const SKIP_IMAGES     = 1 << 4;
        /// Drop link spans entirely instead of emitting `<a>`.
        const SKIP_LINKS      = 1 << 5;
        /// Only linkify autolinks/links whose scheme is `http`,
        /// `https`, `ftp`, `mailto`, or no scheme at all (`www.`-style).
        const SAFELINK        = 1 << 6;
        /// Render only a table of contents built from the document's
        /// headers, instead of the document body.
        const TOC              = 1 << 7;
        /// Expand tabs to spaces inside code blocks, instead of
        /// passing them through literally.
        const EXPAND_TABS      = 1 << 8;
        /// Run SmartyPants over text content as it is emitted.
        const SMARTYPANTS      = 1 << 9;
        /// Collapse runs of blank lines between sibling block elements.
        const PRETTIFY         = 1 << 10;
        /// Emit GitHub's `<pre lang="x">` code block shape instead of
        /// `<pre><code class="lang-x">`.
        const GITHUB_BLOCKCODE = 1 << 11;
    }
}

struct TocEntry {
    level: i32,
    slug: String,
    text: String,
}

enum Mode {
    Document,
    TableOfContents { nesting_level: i32, entries: Vec<TocEntry> },
}

/// HTML renderer.
///
/// This can be used to render markdown documents to HTML, or (via
/// `Html::toc`) to render just a nested table of contents built from
/// a document's headers.
///
///``` rust
///# use hoedown::renderer::html::{Html, Flags};
///# use hoedown::Render;
///let mut html_renderer = Html::new(Flags::empty(), 0);
///let mut output = hoedown::Buffer::new(64);
///
///html_renderer.emphasis(&mut output, Some(&hoedown::Buffer::from("EMPHASIZE")));
///
///assert_eq!(output.to_str().unwrap(), "<em>EMPHASIZE</em>");
///```
pub struct Html {
    flags: Flags,
    mode: Mode,
    slugs: HashMap<String, u32>,
}

impl Html {
    /// Construct a new HTML renderer. `nesting_level` bounds how deep
    /// a header can be and still receive an `id` attribute when
    /// `Flags::TOC` is set; it is otherwise unused.
    pub fn new(flags: Flags, nesting_level: i32) -> Html {
        let _ = nesting_level;
        Html {
            flags,
            mode: Mode::Document,
            slugs: HashMap::new(),
        }
    }

    /// Construct a renderer that emits only a nested `<ul>` table of
    /// contents, one entry per header up to `nesting_level` deep.
    ///
    /// If you want a document rendered with the `new` renderer to link
    /// to the matching entries, render it with the same
    /// `nesting_level` passed here, so that header ids line up.
    pub fn toc(nesting_level: i32) -> Html {
        Html {
            flags: Flags::TOC,
            mode: Mode::TableOfContents { nesting_level, entries: Vec::new() },
            slugs: HashMap::new(),
        }
    }

    fn xhtml(&self) -> bool {
        self.flags.contains(Flags::USE_XHTML)
    }

    fn unique_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let base = if base.is_empty() { "section".to_string() } else { base };
        let count = self.slugs.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 { base.clone() } else { format!("{}-{}", base, count) };
        *count += 1;
        slug
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn strip_tags(s: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn escape_html(ob: &mut Buffer, data: &[u8]) {
    for &b in data {
        match b {
            b'<' => ob.write_all(b"&lt;").unwrap(),
            b'>' => ob.write_all(b"&gt;").unwrap(),
            b'&' => ob.write_all(b"&amp;").unwrap(),
            b'"' => ob.write_all(b"&quot;").unwrap(),
            _ => ob.write_all(&[b]).unwrap(),
        }
    }
}

/// Escaping for `href`/`src` attribute values: the same four entities
/// as body text, since a raw `"` would break out of the attribute.
fn escape_attribute(ob: &mut Buffer, data: &[u8]) {
    escape_html(ob, data)
}

fn is_safe_scheme(url: &str) -> bool {
    let url = url.trim_start();
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("ftp://")
        || lower.starts_with("mailto:")
        || !url.contains(':')
}

impl Render for Html {
    fn before_render(&mut self, _output: &mut Buffer, _inline_render: bool) {
        if let Mode::TableOfContents { entries, .. } = &mut self.mode {
            entries.clear();
        }
    }

    fn after_render(&mut self, output: &mut Buffer, _inline_render: bool) {
        if let Mode::TableOfContents { nesting_level, entries } = &self.mode {
            render_toc(output, entries, *nesting_level);
            return;
        }
        if self.flags.contains(Flags::PRETTIFY) {
            let collapsed = collapse_blank_lines(output.as_bytes());
            output.clear();
            output.write_all(&collapsed).unwrap();
        }
    }

    fn code_block(&mut self, output: &mut Buffer, text: Option<&Buffer>, lang: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        let text = match text {
            Some(t) => t,
            None => return,
        };

        if self.flags.contains(Flags::GITHUB_BLOCKCODE) {
            match lang {
                Some(lang) => {
                    output.write_all(b"<pre lang=\"").unwrap();
                    escape_attribute(output, lang.as_bytes());
                    output.write_all(b"\"><code>").unwrap();
                }
                None => output.write_all(b"<pre><code>").unwrap(),
            }
        } else {
            match lang {
                Some(lang) => {
                    output.write_all(b"<pre><code class=\"lang-").unwrap();
                    escape_attribute(output, lang.as_bytes());
                    output.write_all(b"\">").unwrap();
                }
                None => output.write_all(b"<pre><code>").unwrap(),
            }
        }
        if self.flags.contains(Flags::EXPAND_TABS) {
            escape_html(output, &expand_tabs(text.as_bytes()));
        } else {
            escape_html(output, text.as_bytes());
        }
        output.write_all(b"</code></pre>\n").unwrap();
    }

    fn quote_block(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(b"<blockquote>\n").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</blockquote>\n").unwrap();
    }

    fn header(&mut self, output: &mut Buffer, content: Option<&Buffer>, level: i32) {
        let plain = content
            .and_then(|c| c.to_str().ok())
            .map(strip_tags)
            .unwrap_or_default();
        let slug = self.unique_slug(&plain);

        match &mut self.mode {
            Mode::TableOfContents { nesting_level, entries } => {
                if level <= *nesting_level {
                    entries.push(TocEntry { level, slug, text: plain });
                }
            }
            Mode::Document => {
                if self.flags.contains(Flags::TOC) {
                    write!(output, "<h{} id=\"{}\">", level, slug).unwrap();
                } else {
                    write!(output, "<h{}>", level).unwrap();
                }
                if let Some(content) = content {
                    output.pipe(content);
                }
                write!(output, "</h{}>\n", level).unwrap();
            }
        }
    }

    fn horizontal_rule(&mut self, output: &mut Buffer) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(if self.xhtml() { b"<hr />\n" } else { b"<hr>\n" }).unwrap();
    }

    fn list(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: List) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        let tag = if flags.contains(List::ORDERED) { "ol" } else { "ul" };
        write!(output, "<{}>\n", tag).unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        write!(output, "</{}>\n", tag).unwrap();
    }

    fn list_item(&mut self, output: &mut Buffer, content: Option<&Buffer>, _flags: List) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(b"<li>").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</li>\n").unwrap();
    }

    fn paragraph(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(b"<p>").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</p>\n").unwrap();
    }

    fn table(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(b"<table>\n").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</table>\n").unwrap();
    }

    fn table_header(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(b"<thead>\n").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</thead>\n").unwrap();
    }

    fn table_body(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(b"<tbody>\n").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</tbody>\n").unwrap();
    }

    fn table_row(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        output.write_all(b"<tr>\n").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</tr>\n").unwrap();
    }

    fn table_cell(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: Table) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        let tag = if flags.contains(Table::HEADER) { "th" } else { "td" };
        let align = match flags & Table::CENTER {
            Table::CENTER => Some("center"),
            Table::LEFT => Some("left"),
            Table::RIGHT => Some("right"),
            _ => None,
        };

        match align {
            Some(align) => write!(output, "<{} style=\"text-align: {};\">", tag, align).unwrap(),
            None => write!(output, "<{}>", tag).unwrap(),
        }
        if let Some(content) = content {
            output.pipe(content);
        }
        write!(output, "</{}>\n", tag).unwrap();
    }

    fn html_block(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) || self.flags.contains(Flags::SKIP_HTML) {
            return;
        }
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn autolink(&mut self, output: &mut Buffer, content: Option<&Buffer>, link_type: AutoLink) -> bool {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return true;
        }
        let content = match content {
            Some(c) => c,
            None => return false,
        };
        let text = content.to_str().unwrap_or("");
        if self.flags.contains(Flags::SAFELINK) && link_type == AutoLink::Normal && !is_safe_scheme(text) {
            return false;
        }

        output.write_all(b"<a href=\"").unwrap();
        if link_type == AutoLink::Email {
            output.write_all(b"mailto:").unwrap();
        }
        escape_attribute(output, text.as_bytes());
        output.write_all(b"\">").unwrap();
        escape_html(output, text.as_bytes());
        output.write_all(b"</a>").unwrap();
        true
    }

    fn code_span(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return true;
        }
        output.write_all(b"<code>").unwrap();
        if let Some(content) = content {
            escape_html(output, content.as_bytes());
        }
        output.write_all(b"</code>").unwrap();
        true
    }

    fn double_emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        wrap_tag(output, "strong", content, matches!(self.mode, Mode::TableOfContents { .. }))
    }

    fn emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        wrap_tag(output, "em", content, matches!(self.mode, Mode::TableOfContents { .. }))
    }

    fn underline(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        wrap_tag(output, "u", content, matches!(self.mode, Mode::TableOfContents { .. }))
    }

    fn triple_emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return true;
        }
        output.write_all(b"<strong><em>").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</em></strong>").unwrap();
        true
    }

    fn strikethrough(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        wrap_tag(output, "del", content, matches!(self.mode, Mode::TableOfContents { .. }))
    }

    fn superscript(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        wrap_tag(output, "sup", content, matches!(self.mode, Mode::TableOfContents { .. }))
    }

    fn image(&mut self, output: &mut Buffer, link: Option<&Buffer>, title: Option<&Buffer>, alt: Option<&Buffer>) -> bool {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return true;
        }
        if self.flags.contains(Flags::SKIP_IMAGES) {
            return false;
        }
        let link = match link {
            Some(link) => link,
            None => return false,
        };

        output.write_all(b"<img src=\"").unwrap();
        escape_attribute(output, link.as_bytes());
        output.write_all(b"\"").unwrap();
        if let Some(alt) = alt {
            output.write_all(b" alt=\"").unwrap();
            escape_attribute(output, alt.as_bytes());
            output.write_all(b"\"").unwrap();
        }
        if let Some(title) = title {
            output.write_all(b" title=\"").unwrap();
            escape_attribute(output, title.as_bytes());
            output.write_all(b"\"").unwrap();
        }
        output.write_all(if self.xhtml() { b" />" } else { b">" }).unwrap();
        true
    }

    fn line_break(&mut self, output: &mut Buffer) -> bool {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return true;
        }
        output.write_all(if self.xhtml() { b"<br />\n" } else { b"<br>\n" }).unwrap();
        true
    }

    fn link(&mut self, output: &mut Buffer, content: Option<&Buffer>, link: Option<&Buffer>, title: Option<&Buffer>) -> bool {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return true;
        }
        if self.flags.contains(Flags::SKIP_LINKS) {
            return false;
        }
        let link = match link {
            Some(link) => link,
            None => return false,
        };
        let url = link.to_str().unwrap_or("");
        if self.flags.contains(Flags::SAFELINK) && !is_safe_scheme(url) {
            return false;
        }

        output.write_all(b"<a href=\"").unwrap();
        escape_attribute(output, link.as_bytes());
        output.write_all(b"\"").unwrap();
        if let Some(title) = title {
            output.write_all(b" title=\"").unwrap();
            escape_attribute(output, title.as_bytes());
            output.write_all(b"\"").unwrap();
        }
        output.write_all(b">").unwrap();
        if let Some(content) = content {
            output.pipe(content);
        }
        output.write_all(b"</a>").unwrap();
        true
    }

    fn raw_html(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return true;
        }
        if self.flags.contains(Flags::SKIP_HTML) {
            return true;
        }
        if let Some(content) = content {
            if self.flags.contains(Flags::ESCAPE) {
                escape_html(output, content.as_bytes());
            } else {
                output.pipe(content);
            }
        }
        true
    }

    fn entity(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn normal_text(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        if matches!(self.mode, Mode::TableOfContents { .. }) {
            return;
        }
        let content = match content {
            Some(c) => c,
            None => return,
        };
        if self.flags.contains(Flags::HARD_WRAP) {
            let br: &[u8] = if self.xhtml() { b"<br />\n" } else { b"<br>\n" };
            for line in split_keep_newlines(content.as_bytes()) {
                if line == b"\n" {
                    output.write_all(br).unwrap();
                } else {
                    escape_html(output, line);
                }
            }
        } else {
            escape_html(output, content.as_bytes());
        }
    }
}

/// Splits `data` into runs of non-newline bytes and single `"\n"` pieces,
/// so a caller can treat each bare line break as its own token.
fn split_keep_newlines(data: &[u8]) -> Vec<&[u8]> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, &b) in data.iter().enumerate() {
        if b == b'\n' {
            if i > start {
                pieces.push(&data[start..i]);
            }
            pieces.push(&data[i..i + 1]);
            start = i + 1;
        }
    }
    if start < data.len() {
        pieces.push(&data[start..]);
    }
    pieces
}

/// Expands literal tab characters to spaces on 4-column stops.
fn expand_tabs(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut column = 0usize;
    for &b in data {
        if b == b'\t' {
            let spaces = 4 - (column % 4);
            out.extend(std::iter::repeat(b' ').take(spaces));
            column += spaces;
        } else {
            out.push(b);
            column = if b == b'\n' { 0 } else { column + 1 };
        }
    }
    out
}

/// Collapses runs of 3 or more consecutive newlines down to exactly 2,
/// so blank lines introduced between sibling block elements don't pile up.
fn collapse_blank_lines(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut run = 0usize;
    for &b in data {
        if b == b'\n' {
            run += 1;
            if run <= 2 {
                out.push(b);
            }
        } else {
            run = 0;
            out.push(b);
        }
    }
    out
}

fn wrap_tag(output: &mut Buffer, tag: &str, content: Option<&Buffer>, suppress: bool) -> bool {
    if suppress {
        return true;
    }
    write!(output, "<{}>", tag).unwrap();
    if let Some(content) = content {
        output.pipe(content);
    }
    write!(output, "</{}>", tag).unwrap();
    true
}

fn render_toc(output: &mut Buffer, entries: &[TocEntry], nesting_level: i32) {
    if entries.is_empty() {
        return;
    }

    let mut stack: Vec<i32> = Vec::new();
    output.write_all(b"<ul>\n").unwrap();
    stack.push(entries[0].level.min(nesting_level));

    for (i, entry) in entries.iter().enumerate() {
        let level = entry.level;
        while *stack.last().unwrap() < level {
            output.write_all(b"<ul>\n").unwrap();
            stack.push(level);
        }
        while *stack.last().unwrap() > level && stack.len() > 1 {
            output.write_all(b"</ul>\n</li>\n").unwrap();
            stack.pop();
        }

        write!(output, "<li><a href=\"#{}\">", entry.slug).unwrap();
        escape_html(output, entry.text.as_bytes());
        output.write_all(b"</a>").unwrap();

        let has_child = entries.get(i + 1).map_or(false, |n| n.level > level);
        if !has_child {
            output.write_all(b"</li>\n").unwrap();
        }
    }

    while !stack.is_empty() {
        output.write_all(b"</ul>\n").unwrap();
        stack.pop();
        if !stack.is_empty() {
            output.write_all(b"</li>\n").unwrap();
        }
    }
}

/// Performs SmartyPants processing of `content`, writing curly quotes,
/// en/em dashes and ellipses into `output`.
///
/// This is a standalone post-processing pass over already-rendered
/// text, never invoked by the core parser; callers opt in explicitly
/// (pairing it with `Flags::SMARTYPANTS` when driving the `Html`
/// renderer, or calling it directly on arbitrary text).
pub fn smartypants(content: &Buffer, output: &mut Buffer) {
    let bytes = content.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'-' if bytes[i..].starts_with(b"---") => {
                output.write_all(b"&mdash;").unwrap();
                i += 3;
            }
            b'-' if bytes[i..].starts_with(b"--") => {
                output.write_all(b"&ndash;").unwrap();
                i += 2;
            }
            b'.' if bytes[i..].starts_with(b"...") => {
                output.write_all(b"&hellip;").unwrap();
                i += 3;
            }
            b'"' => {
                let opening = i == 0 || bytes[i - 1].is_ascii_whitespace() || matches!(bytes[i - 1], b'(' | b'[');
                if opening {
                    output.write_all(b"&ldquo;").unwrap();
                } else {
                    output.write_all(b"&rdquo;").unwrap();
                }
                i += 1;
            }
            b'\'' => {
                let opening = i == 0 || bytes[i - 1].is_ascii_whitespace() || matches!(bytes[i - 1], b'(' | b'[');
                if opening {
                    output.write_all(b"&lsquo;").unwrap();
                } else {
                    output.write_all(b"&rsquo;").unwrap();
                }
                i += 1;
            }
            b => {
                output.write_all(&[b]).unwrap();
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toc_closes_parent_li_after_nested_list() {
        let entries = vec![
            TocEntry { level: 1, slug: "first".into(), text: "first".into() },
            TocEntry { level: 2, slug: "sub-section".into(), text: "sub section".into() },
            TocEntry { level: 1, slug: "conclusion".into(), text: "conclusion".into() },
        ];
        let mut out = Buffer::new(64);
        render_toc(&mut out, &entries, 16);
        assert_eq!(
            out.to_str().unwrap(),
            "<ul>\n<li><a href=\"#first\">first</a><ul>\n<li><a href=\"#sub-section\">sub section</a></li>\n</ul>\n</li>\n<li><a href=\"#conclusion\">conclusion</a></li>\n</ul>\n"
        );
    }

    #[test]
    fn escapes_reserved_characters() {
        let mut out = Buffer::new(16);
        escape_html(&mut out, b"<a & b>\"");
        assert_eq!(out.to_str().unwrap(), "&lt;a &amp; b&gt;&quot;");
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn smartypants_curls_quotes() {
        let input = Buffer::from("\"hi\"");
        let mut out = Buffer::new(16);
        smartypants(&input, &mut out);
        assert_eq!(out.to_str().unwrap(), "&ldquo;hi&rdquo;");
    }

    #[test]
    fn hard_wrap_inserts_br_at_newlines() {
        let mut html = Html::new(Flags::HARD_WRAP, 0);
        let mut out = Buffer::new(16);
        html.normal_text(&mut out, Some(&Buffer::from("One.\nTwo.")));
        assert_eq!(out.to_str().unwrap(), "One.<br>\nTwo.");
    }

    #[test]
    fn expand_tabs_in_code_blocks() {
        let mut html = Html::new(Flags::EXPAND_TABS, 0);
        let mut out = Buffer::new(16);
        html.code_block(&mut out, Some(&Buffer::from("a\tb")), None);
        assert_eq!(out.to_str().unwrap(), "<pre><code>a   b</code></pre>\n");
    }

    #[test]
    fn prettify_collapses_blank_line_runs() {
        let mut html = Html::new(Flags::PRETTIFY, 0);
        let mut out = Buffer::from("<p>a</p>\n\n\n\n<p>b</p>\n");
        html.after_render(&mut out, false);
        assert_eq!(out.to_str().unwrap(), "<p>a</p>\n\n<p>b</p>\n");
    }
}
