use std::io::{self, Read};

use crate::buffer::Buffer;
use crate::extensions::Extension;
use crate::renderer::Render;

/// A markdown document: its raw contents plus the extension flags and
/// nesting budget that should govern how it gets parsed.
#[derive(Clone)]
pub struct Markdown {
    contents: Buffer,
    extensions: Extension,
    max_nesting: usize,
}

impl Markdown {
    /// Construct a markdown document from anything convertible to a
    /// `Buffer` (`&str`, `&[u8]`, `Vec<u8>`, `Buffer` itself).
    ///
    /// Extensions default to none and `max_nesting` defaults to 16,
    /// matching the original library's defaults. Use the `extensions`
    /// and `max_nesting` builder methods to change them.
    pub fn new<B: Into<Buffer>>(body: B) -> Markdown {
        Markdown {
            contents: body.into(),
            extensions: Extension::empty(),
            max_nesting: 16,
        }
    }

    /// Construct a markdown document by reading its contents from a
    /// `Read` implementor (including another `Buffer`).
    pub fn read_from<R: Read>(reader: R) -> io::Result<Markdown> {
        Ok(Markdown::new(Buffer::read_from(reader)?))
    }

    /// Builder method to specify the extension flags.
    pub fn extensions(mut self, extensions: Extension) -> Markdown {
        self.extensions = extensions;
        self
    }

    /// Alias for `extensions`, kept for call sites that read better as
    /// "with" a set of extensions enabled.
    pub fn with_extensions(self, extensions: Extension) -> Markdown {
        self.extensions(extensions)
    }

    /// Builder method to specify the maximum nesting budget (see
    /// `Context::nesting`).
    pub fn max_nesting(mut self, max_nesting: usize) -> Markdown {
        self.max_nesting = max_nesting;
        self
    }

    pub fn contents(&self) -> &Buffer {
        &self.contents
    }

    pub fn extension_flags(&self) -> Extension {
        self.extensions
    }

    pub fn nesting_budget(&self) -> usize {
        self.max_nesting
    }

    /// Renders this document with `renderer`, returning the output
    /// buffer. Equivalent to `renderer.render(self)`.
    pub fn render_to_buffer<R: Render>(&self, mut renderer: R) -> Buffer {
        renderer.render(self)
    }

    /// Renders this document as inline-only content with `renderer`.
    /// Equivalent to `renderer.render_inline(self)`.
    pub fn render_inline_to_buffer<R: Render>(&self, mut renderer: R) -> Buffer {
        renderer.render_inline(self)
    }
}
