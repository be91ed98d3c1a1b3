extern crate hoedown;

use hoedown::renderer::html::{Flags, Html};
use hoedown::{Extension, Markdown};

macro_rules! extension_test {
    ($extensions:expr, $source:expr, $expected:expr) => {{
        let document = Markdown::new($source).extensions($extensions);
        let output = document.render_to_buffer(Html::new(Flags::empty(), 0));
        assert_eq!(output.to_str().unwrap(), $expected);
    }};
}

#[test]
fn tables_renders_pipe_table() {
    extension_test!(
        Extension::TABLES,
        "| a | b |\n|---|---|\n| 1 | 2 |\n",
        "<table>\n<thead>\n<tr>\n<th>a</th>\n<th>b</th>\n</tr>\n</thead>\n\
<tbody>\n<tr>\n<td>1</td>\n<td>2</td>\n</tr>\n</tbody>\n</table>\n"
    );
}

#[test]
fn tables_extension_off_leaves_pipes_as_a_paragraph() {
    extension_test!(
        Extension::empty(),
        "| a | b |\n|---|---|\n| 1 | 2 |\n",
        "<p>| a | b |\n|---|---|\n| 1 | 2 |</p>\n"
    );
}

#[test]
fn fenced_code_captures_the_language() {
    extension_test!(
        Extension::FENCED_CODE,
        "```bash\necho hi\n```\n",
        "<pre><code class=\"lang-bash\">echo hi\n</code></pre>\n"
    );
}

#[test]
fn autolink_turns_bare_urls_into_anchors() {
    extension_test!(
        Extension::AUTOLINK,
        "Visit http://example.com for more.\n",
        "<p>Visit <a href=\"http://example.com\">http://example.com</a> for more.</p>\n"
    );
}

#[test]
fn strikethrough_wraps_in_del() {
    extension_test!(
        Extension::STRIKETHROUGH,
        "~~gone~~\n",
        "<p><del>gone</del></p>\n"
    );
}

#[test]
fn space_after_headers_requires_a_space() {
    extension_test!(
        Extension::SPACE_AFTER_HEADERS,
        "#NoSpace\n",
        "<p>#NoSpace</p>\n"
    );
    extension_test!(Extension::empty(), "#NoSpace\n", "<h1>NoSpace</h1>\n");
}

#[test]
fn superscript_wraps_in_sup() {
    extension_test!(
        Extension::SUPERSCRIPT,
        "x^2 is read as x squared\n",
        "<p>x<sup>2</sup> is read as x squared</p>\n"
    );
}

#[test]
fn no_intra_emphasis_leaves_word_internal_underscores_alone() {
    extension_test!(
        Extension::NO_INTRA_EMPHASIS,
        "foo_bar_baz\n",
        "<p>foo_bar_baz</p>\n"
    );
    extension_test!(
        Extension::empty(),
        "foo_bar_baz\n",
        "<p>foo<em>bar</em>baz</p>\n"
    );
}

#[test]
fn disable_indented_code_treats_indentation_as_a_paragraph() {
    extension_test!(
        Extension::DISABLE_INDENTED_CODE,
        "    code\n",
        "<p>    code</p>\n"
    );
    extension_test!(
        Extension::empty(),
        "    code\n",
        "<pre><code>code\n</code></pre>\n"
    );
}

#[test]
fn underline_renders_single_underscore_emphasis_as_u() {
    extension_test!(
        Extension::UNDERLINE,
        "_word_\n",
        "<p><u>word</u></p>\n"
    );
}

#[test]
fn lax_spacing_allows_deeply_indented_blockquotes_and_lists() {
    extension_test!(
        Extension::LAX_SPACING,
        "    > quoted\n",
        "<blockquote>\n<p>quoted</p>\n</blockquote>\n"
    );
    extension_test!(
        Extension::empty(),
        "    > quoted\n",
        "<pre><code>&gt; quoted\n</code></pre>\n"
    );

    extension_test!(
        Extension::LAX_SPACING,
        "    - one\n    - two\n",
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
    );
    extension_test!(
        Extension::empty(),
        "    - one\n    - two\n",
        "<pre><code>- one\n- two\n</code></pre>\n"
    );
}

#[test]
fn lax_html_blocks_accepts_unknown_tags() {
    extension_test!(
        Extension::LAX_HTML_BLOCKS,
        "<custom>\nhi\n</custom>\n",
        "<custom>\nhi\n</custom>\n"
    );
}
