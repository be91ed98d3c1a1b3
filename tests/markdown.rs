extern crate hoedown;

use hoedown::renderer::html::{Flags, Html};
use hoedown::Markdown;

macro_rules! markdown_test {
    ($name:ident, $source:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let document = Markdown::new($source);
            let output = document.render_to_buffer(Html::new(Flags::empty(), 0));
            assert_eq!(output.to_str().unwrap(), $expected);
        }
    };
}

// Representative documents drawn from spec.md's concrete-scenarios table
// (§8) and from a handful of `ext/markdown.c` worked examples, asserted
// directly with no external fixture corpus or `tidy` normalization.

markdown_test!(atx_header, "# Hello", "<h1>Hello</h1>\n");

markdown_test!(
    emphasis_runs,
    "*x* **y** ***z***",
    "<p><em>x</em> <strong>y</strong> <strong><em>z</em></strong></p>\n"
);

markdown_test!(code_span_with_pipe, "`a | b`", "<p><code>a | b</code></p>\n");

markdown_test!(
    inline_link_with_title,
    "[t](u \"T\")",
    "<p><a href=\"u\" title=\"T\">t</a></p>\n"
);

markdown_test!(
    reference_link_with_title,
    "[t][r]\n\n[r]: u \"T\"\n",
    "<p><a href=\"u\" title=\"T\">t</a></p>\n"
);

markdown_test!(
    indented_code_block,
    "    code\n",
    "<pre><code>code\n</code></pre>\n"
);

markdown_test!(
    blockquote_joins_lines,
    "> q1\n> q2\n",
    "<blockquote>\n<p>q1\nq2</p>\n</blockquote>\n"
);

markdown_test!(empty_input_renders_nothing, "", "");

markdown_test!(single_newline_renders_nothing, "\n", "");

markdown_test!(
    missing_trailing_newline_renders_as_if_present,
    "# Hello",
    "<h1>Hello</h1>\n"
);

markdown_test!(
    unterminated_code_span_falls_back_to_paragraph,
    "`oops\n",
    "<p>`oops</p>\n"
);

markdown_test!(
    setext_level_one,
    "Title\n=====\n",
    "<h1>Title</h1>\n"
);

markdown_test!(
    setext_level_two,
    "Title\n-----\n",
    "<h2>Title</h2>\n"
);

markdown_test!(
    unordered_list,
    "* one\n* two\n",
    "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
);

markdown_test!(
    ordered_list,
    "1. one\n2. two\n",
    "<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n"
);

markdown_test!(
    horizontal_rule,
    "one\n\n* * *\n\ntwo\n",
    "<p>one</p>\n<hr>\n<p>two</p>\n"
);

markdown_test!(
    entity_passes_through,
    "AT&amp;T\n",
    "<p>AT&amp;T</p>\n"
);

#[test]
fn two_successive_renders_of_the_same_document_agree() {
    let source = "# Title\n\nSome *text* with [a link](http://example.com).\n";
    let first = Markdown::new(source).render_to_buffer(Html::new(Flags::empty(), 0));
    let second = Markdown::new(source).render_to_buffer(Html::new(Flags::empty(), 0));
    assert_eq!(first.to_str().unwrap(), second.to_str().unwrap());
}

#[test]
fn deeply_nested_blockquotes_drop_innermost_content_past_max_nesting() {
    let mut source = String::new();
    for _ in 0..20 {
        source.push_str("> ");
    }
    source.push_str("deep\n");

    let document = Markdown::new(source).max_nesting(4);
    let output = document.render_to_buffer(Html::new(Flags::empty(), 0));

    // The outer blockquote frames still render even though the innermost
    // content is dropped once the nesting budget is exhausted.
    assert!(output.to_str().unwrap().starts_with("<blockquote>"));
}
