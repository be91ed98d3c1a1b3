//! Contains the Closures renderer
#![allow(non_camel_case_types)]
use crate::buffer::Buffer;
use super::{list::List, AutoLink, Render, Table};

mod types {
    use crate::buffer::Buffer;
    use super::{list::List, AutoLink, Table};

    pub type code_block<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, Option<&Buffer>) + 'a>;
    pub type quote_block<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;
    pub type header<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, i32) + 'a>;
    pub type horizontal_rule<'a> = Box<dyn FnMut(&mut Buffer) + 'a>;
    pub type list<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, List) + 'a>;
    pub type list_item<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, List) + 'a>;
    pub type paragraph<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;
    pub type table<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;
    pub type table_header<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;
    pub type table_body<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;
    pub type table_row<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;
    pub type table_cell<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, Table) + 'a>;
    pub type html_block<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;

    pub type autolink<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, AutoLink) -> bool + 'a>;
    pub type code_span<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;
    pub type double_emphasis<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;
    pub type emphasis<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;
    pub type underline<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;
    pub type image<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, Option<&Buffer>, Option<&Buffer>) -> bool + 'a>;
    pub type line_break<'a> = Box<dyn FnMut(&mut Buffer) -> bool + 'a>;
    pub type link<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>, Option<&Buffer>, Option<&Buffer>) -> bool + 'a>;
    pub type triple_emphasis<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;
    pub type strikethrough<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;
    pub type superscript<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;
    pub type raw_html<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a>;

    pub type entity<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;
    pub type normal_text<'a> = Box<dyn FnMut(&mut Buffer, Option<&Buffer>) + 'a>;

    pub type before_render<'a> = Box<dyn FnMut(&mut Buffer, bool) + 'a>;
    pub type after_render<'a> = Box<dyn FnMut(&mut Buffer, bool) + 'a>;
}

/// A renderer whose behavior is defined by closures.
///
/// This renderer is meant for quick, one-off renderers. Handlers are
/// passed to this type in the form of closures. Any callback that is
/// never registered falls back to the `Render` trait's default
/// (passthrough for block/low-level slots, refusal for span slots).
///
///``` rust
///# use hoedown::Markdown;
///# use hoedown::renderer::closures::Closures;
///# use hoedown::Buffer;
///let mut closures = Closures::new();
///
///closures.on_emphasis(|output: &mut Buffer, content: Option<&Buffer>| -> bool {
///    output.pipe(&Buffer::from("~~"));
///    if let Some(content) = content {
///        output.pipe(content);
///    }
///    output.pipe(&Buffer::from("~~"));
///    true
///});
///
///let doc = Markdown::new("this _requires_ emphasis");
///let output = doc.render_to_buffer(closures);
///
///assert_eq!(output.to_str().unwrap(), "this ~~requires~~ emphasis");
///```
#[derive(Default)]
pub struct Closures<'a> {
    code_block: Option<types::code_block<'a>>,
    quote_block: Option<types::quote_block<'a>>,
    header: Option<types::header<'a>>,
    horizontal_rule: Option<types::horizontal_rule<'a>>,
    list: Option<types::list<'a>>,
    list_item: Option<types::list_item<'a>>,
    paragraph: Option<types::paragraph<'a>>,
    table: Option<types::table<'a>>,
    table_header: Option<types::table_header<'a>>,
    table_body: Option<types::table_body<'a>>,
    table_row: Option<types::table_row<'a>>,
    table_cell: Option<types::table_cell<'a>>,
    html_block: Option<types::html_block<'a>>,

    autolink: Option<types::autolink<'a>>,
    code_span: Option<types::code_span<'a>>,
    double_emphasis: Option<types::double_emphasis<'a>>,
    emphasis: Option<types::emphasis<'a>>,
    underline: Option<types::underline<'a>>,
    image: Option<types::image<'a>>,
    line_break: Option<types::line_break<'a>>,
    link: Option<types::link<'a>>,
    triple_emphasis: Option<types::triple_emphasis<'a>>,
    strikethrough: Option<types::strikethrough<'a>>,
    superscript: Option<types::superscript<'a>>,
    raw_html: Option<types::raw_html<'a>>,

    entity: Option<types::entity<'a>>,
    normal_text: Option<types::normal_text<'a>>,

    before_render: Option<types::before_render<'a>>,
    after_render: Option<types::after_render<'a>>,
}

impl<'a> Closures<'a> {
    pub fn new() -> Closures<'a> {
        Closures::default()
    }
}

impl<'a> Render for Closures<'a> {
    fn code_block(&mut self, output: &mut Buffer, text: Option<&Buffer>, lang: Option<&Buffer>) {
        match self.code_block {
            Some(ref mut func) => func(output, text, lang),
            None => if let Some(text) = text { output.pipe(text); },
        }
    }

    fn quote_block(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        match self.quote_block {
            Some(ref mut func) => func(output, content),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn header(&mut self, output: &mut Buffer, content: Option<&Buffer>, level: i32) {
        match self.header {
            Some(ref mut func) => func(output, content, level),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn horizontal_rule(&mut self, output: &mut Buffer) {
        if let Some(ref mut func) = self.horizontal_rule {
            func(output);
        }
    }

    fn list(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: List) {
        match self.list {
            Some(ref mut func) => func(output, content, flags),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn list_item(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: List) {
        match self.list_item {
            Some(ref mut func) => func(output, content, flags),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn paragraph(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        match self.paragraph {
            Some(ref mut func) => func(output, content),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn table(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        match self.table {
            Some(ref mut func) => func(output, content),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn table_header(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        match self.table_header {
            Some(ref mut func) => func(output, content),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn table_body(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        match self.table_body {
            Some(ref mut func) => func(output, content),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn table_row(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        match self.table_row {
            Some(ref mut func) => func(output, content),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn table_cell(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: Table) {
        match self.table_cell {
            Some(ref mut func) => func(output, content, flags),
            None => if let Some(content) = content { output.pipe(content); },
        }
    }

    fn html_block(&mut self, output: &mut Buffer, text: Option<&Buffer>) {
        match self.html_block {
            Some(ref mut func) => func(output, text),
            None => if let Some(text) = text { output.pipe(text); },
        }
    }

    fn autolink(&mut self, output: &mut Buffer, link: Option<&Buffer>, ty: AutoLink) -> bool {
        self.autolink.as_mut().map_or(false, |func| func(output, link, ty))
    }

    fn code_span(&mut self, output: &mut Buffer, text: Option<&Buffer>) -> bool {
        self.code_span.as_mut().map_or(false, |func| func(output, text))
    }

    fn double_emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        self.double_emphasis.as_mut().map_or(false, |func| func(output, content))
    }

    fn emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        self.emphasis.as_mut().map_or(false, |func| func(output, content))
    }

    fn underline(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        self.underline.as_mut().map_or(false, |func| func(output, content))
    }

    fn image(&mut self, output: &mut Buffer, link: Option<&Buffer>, title: Option<&Buffer>, alt: Option<&Buffer>) -> bool {
        self.image.as_mut().map_or(false, |func| func(output, link, title, alt))
    }

    fn line_break(&mut self, output: &mut Buffer) -> bool {
        self.line_break.as_mut().map_or(false, |func| func(output))
    }

    fn link(&mut self, output: &mut Buffer, content: Option<&Buffer>, link: Option<&Buffer>, title: Option<&Buffer>) -> bool {
        self.link.as_mut().map_or(false, |func| func(output, content, link, title))
    }

    fn triple_emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        self.triple_emphasis.as_mut().map_or(false, |func| func(output, content))
    }

    fn strikethrough(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        self.strikethrough.as_mut().map_or(false, |func| func(output, content))
    }

    fn superscript(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        self.superscript.as_mut().map_or(false, |func| func(output, content))
    }

    fn raw_html(&mut self, output: &mut Buffer, text: Option<&Buffer>) -> bool {
        self.raw_html.as_mut().map_or(false, |func| func(output, text))
    }

    fn entity(&mut self, output: &mut Buffer, text: Option<&Buffer>) {
        match self.entity {
            Some(ref mut func) => func(output, text),
            None => if let Some(text) = text { output.pipe(text); },
        }
    }

    fn normal_text(&mut self, output: &mut Buffer, text: Option<&Buffer>) {
        match self.normal_text {
            Some(ref mut func) => func(output, text),
            None => if let Some(text) = text { output.pipe(text); },
        }
    }

    fn before_render(&mut self, output: &mut Buffer, inline_render: bool) {
        if let Some(ref mut func) = self.before_render {
            func(output, inline_render);
        }
    }

    fn after_render(&mut self, output: &mut Buffer, inline_render: bool) {
        if let Some(ref mut func) = self.after_render {
            func(output, inline_render);
        }
    }
}

impl<'a> Closures<'a> {
    pub fn on_code_block<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, Option<&Buffer>) + 'a {
        self.code_block = Some(Box::new(closure));
    }

    pub fn on_quote_block<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.quote_block = Some(Box::new(closure));
    }

    pub fn on_header<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, i32) + 'a {
        self.header = Some(Box::new(closure));
    }

    pub fn on_horizontal_rule<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer) + 'a {
        self.horizontal_rule = Some(Box::new(closure));
    }

    pub fn on_list<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, List) + 'a {
        self.list = Some(Box::new(closure));
    }

    pub fn on_list_item<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, List) + 'a {
        self.list_item = Some(Box::new(closure));
    }

    pub fn on_paragraph<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.paragraph = Some(Box::new(closure));
    }

    pub fn on_table<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.table = Some(Box::new(closure));
    }

    pub fn on_table_header<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.table_header = Some(Box::new(closure));
    }

    pub fn on_table_body<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.table_body = Some(Box::new(closure));
    }

    pub fn on_table_row<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.table_row = Some(Box::new(closure));
    }

    pub fn on_table_cell<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, Table) + 'a {
        self.table_cell = Some(Box::new(closure));
    }

    pub fn on_html_block<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.html_block = Some(Box::new(closure));
    }

    pub fn on_autolink<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, AutoLink) -> bool + 'a {
        self.autolink = Some(Box::new(closure));
    }

    pub fn on_code_span<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.code_span = Some(Box::new(closure));
    }

    pub fn on_double_emphasis<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.double_emphasis = Some(Box::new(closure));
    }

    pub fn on_emphasis<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.emphasis = Some(Box::new(closure));
    }

    pub fn on_underline<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.underline = Some(Box::new(closure));
    }

    pub fn on_image<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, Option<&Buffer>, Option<&Buffer>) -> bool + 'a {
        self.image = Some(Box::new(closure));
    }

    pub fn on_line_break<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer) -> bool + 'a {
        self.line_break = Some(Box::new(closure));
    }

    pub fn on_link<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>, Option<&Buffer>, Option<&Buffer>) -> bool + 'a {
        self.link = Some(Box::new(closure));
    }

    pub fn on_triple_emphasis<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.triple_emphasis = Some(Box::new(closure));
    }

    pub fn on_strikethrough<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.strikethrough = Some(Box::new(closure));
    }

    pub fn on_superscript<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.superscript = Some(Box::new(closure));
    }

    pub fn on_raw_html<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) -> bool + 'a {
        self.raw_html = Some(Box::new(closure));
    }

    pub fn on_entity<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.entity = Some(Box::new(closure));
    }

    pub fn on_normal_text<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, Option<&Buffer>) + 'a {
        self.normal_text = Some(Box::new(closure));
    }

    pub fn on_before_render<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, bool) + 'a {
        self.before_render = Some(Box::new(closure));
    }

    pub fn on_after_render<F>(&mut self, closure: F)
    where F: FnMut(&mut Buffer, bool) + 'a {
        self.after_render = Some(Box::new(closure));
    }
}
