//! A renderer that prints which callback was invoked instead of real
//! markup, handy for seeing exactly how a document gets dispatched
//! without committing to an output format.

use crate::buffer::Buffer;
use super::{list::List, AutoLink, Render, Table};

pub struct Trace;

#[allow(unused_variables)]
impl Render for Trace {
    fn code_block(&mut self, output: &mut Buffer, input: Option<&Buffer>, language: Option<&Buffer>) {
        output.pipe(&Buffer::from("[CODE_BLOCK]"));
    }

    fn quote_block(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        output.pipe(&Buffer::from("[QUOTE_BLOCK]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn header(&mut self, output: &mut Buffer, content: Option<&Buffer>, level: i32) {
        output.pipe(&Buffer::from(format!("[HEADER:{}]", level)));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn horizontal_rule(&mut self, output: &mut Buffer) {
        output.pipe(&Buffer::from("[HORIZONTAL_RULE]"));
    }

    fn list(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: List) {
        output.pipe(&Buffer::from("[LIST]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn list_item(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: List) {
        output.pipe(&Buffer::from("[LIST_ITEM]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn paragraph(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        output.pipe(&Buffer::from("[PARAGRAPH]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn table(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        output.pipe(&Buffer::from("[TABLE]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn table_header(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        output.pipe(&Buffer::from("[TABLE_HEADER]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn table_body(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        output.pipe(&Buffer::from("[TABLE_BODY]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn table_row(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        output.pipe(&Buffer::from("[TABLE_ROW]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn table_cell(&mut self, output: &mut Buffer, content: Option<&Buffer>, flags: Table) {
        output.pipe(&Buffer::from("[TABLE_CELL]"));
        if let Some(content) = content {
            output.pipe(content);
        }
    }

    fn html_block(&mut self, output: &mut Buffer, content: Option<&Buffer>) {
        output.pipe(&Buffer::from("[HTML_BLOCK]"));
    }

    fn autolink(&mut self, output: &mut Buffer, content: Option<&Buffer>, link_type: AutoLink) -> bool {
        output.pipe(&Buffer::from("[AUTOLINK]"));
        true
    }

    fn code_span(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[CODE_SPAN]"));
        true
    }

    fn double_emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[DOUBLE_EMPHASIS]"));
        if let Some(content) = content {
            output.pipe(content);
        }
        true
    }

    fn emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[EMPHASIS]"));
        if let Some(content) = content {
            output.pipe(content);
        }
        true
    }

    fn underline(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[UNDERLINE]"));
        if let Some(content) = content {
            output.pipe(content);
        }
        true
    }

    fn image(&mut self, output: &mut Buffer, link: Option<&Buffer>, title: Option<&Buffer>, alt: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[IMAGE]"));
        true
    }

    fn line_break(&mut self, output: &mut Buffer) -> bool {
        output.pipe(&Buffer::from("[LINE_BREAK]"));
        true
    }

    fn link(&mut self, output: &mut Buffer, content: Option<&Buffer>, link: Option<&Buffer>, title: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[LINK]"));
        if let Some(content) = content {
            output.pipe(content);
        }
        true
    }

    fn triple_emphasis(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[TRIPLE_EMPHASIS]"));
        if let Some(content) = content {
            output.pipe(content);
        }
        true
    }

    fn strikethrough(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[STRIKETHROUGH]"));
        if let Some(content) = content {
            output.pipe(content);
        }
        true
    }

    fn superscript(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[SUPERSCRIPT]"));
        if let Some(content) = content {
            output.pipe(content);
        }
        true
    }

    fn raw_html(&mut self, output: &mut Buffer, content: Option<&Buffer>) -> bool {
        output.pipe(&Buffer::from("[RAW_HTML]"));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::Markdown;

    #[test]
    fn traces_a_header() {
        let doc = Markdown::new("# Title\n");
        let out = Trace.render(&doc);
        assert!(out.to_str().unwrap().contains("[HEADER:1]"));
    }
}
