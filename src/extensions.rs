//! Extension flags consumed by the parser engine itself.
//!
//! This is the closed set of eleven extensions the engine understands;
//! it does not include footnotes, highlight, quote-span or math, which
//! the original hoedown lineage supports but which this port's renderer
//! contract (see `renderer::Render`) has no slots for.

bitflags::bitflags! {
    /// Extensions that change how the block and inline scanners parse
    /// the input. Renderer-only behavior (safe links, XHTML output,
    /// SmartyPants, ...) lives in `renderer::html::Flags` instead.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Extension: u32 {
        /// Recognize `| a | b |` pipe-table syntax.
        const TABLES                = 1 << 0;

        /// Recognize fenced code blocks delimited by ``` ``` ``` or `~~~`.
        const FENCED_CODE           = 1 << 1;

        /// Recognize bare URLs and email addresses as links.
        const AUTOLINK              = 1 << 2;

        /// Recognize `~~strikethrough~~` syntax.
        const STRIKETHROUGH         = 1 << 3;

        /// Relax the known-tag requirement for HTML block recognition.
        const LAX_HTML_BLOCKS       = 1 << 4;

        /// Require at least one space after the `#` in an ATX header.
        const SPACE_AFTER_HEADERS   = 1 << 5;

        /// Recognize `^superscript` syntax.
        const SUPERSCRIPT           = 1 << 6;

        /// Don't parse emphasis inside of words, e.g. `foo_bar_baz`
        /// won't emphasize the `bar`.
        const NO_INTRA_EMPHASIS     = 1 << 7;

        /// Ignore 4-space/tab-indented code blocks.
        const DISABLE_INDENTED_CODE = 1 << 8;

        /// Relax whitespace requirements around block constructs
        /// (list items, blockquotes) that are normally strict about
        /// leading space counts.
        const LAX_SPACING           = 1 << 9;

        /// Render single-underscore emphasis as `<u>` instead of `<em>`.
        const UNDERLINE             = 1 << 10;
    }
}

impl Default for Extension {
    fn default() -> Extension {
        Extension::empty()
    }
}
