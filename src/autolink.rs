//! Bare URL / `www.` / email autolink recognizers.
//!
//! Grounded on the `char_autolink_*` family and their shared
//! "rewind and commit" protocol in `ext/markdown.c`: by the time the
//! active-character dispatch notices a trigger byte like `:` or `@`,
//! some of the link's prefix (`http`, `jane.doe`) has already been
//! emitted as normal text into the output buffer. The recognizer scans
//! backward over bytes it has *already written*, finds where the
//! candidate link actually starts, retracts that prefix from the
//! output with `Buffer::truncate`, and re-emits it wrapped in an
//! anchor if the whole thing turns out to be a valid link.

fn is_link_end(c: u8) -> bool {
    c.is_ascii_whitespace() || matches!(c, b'<' | b'>')
}

/// Scans forward from `data[0]` for the end of a bare `http://`-style
/// URL or `www.`-prefixed hostname, trimming trailing punctuation that
/// is almost certainly not part of the URL (closing parens unmatched
/// within the candidate, trailing `.`, `,`, `;`, `!`, `?`, `'`, `"`).
///
/// Returns the byte length of the link if one was found.
pub fn scan_url_end(data: &[u8]) -> Option<usize> {
    let mut end = 0;
    while end < data.len() && !is_link_end(data[end]) {
        end += 1;
    }

    while end > 0 {
        let c = data[end - 1];
        if matches!(c, b'.' | b',' | b';' | b'!' | b'?' | b'\'' | b'"' | b':') {
            end -= 1;
            continue;
        }
        if c == b')' {
            let opens = data[..end].iter().filter(|&&b| b == b'(').count();
            let closes = data[..end].iter().filter(|&&b| b == b')').count();
            if closes > opens {
                end -= 1;
                continue;
            }
        }
        break;
    }

    if end == 0 { None } else { Some(end) }
}

/// Scans backward from `ob`'s current end to find where a candidate
/// autolink prefix (scheme, or `www.` host) begins, so it can be
/// retracted. Grounded on the rewind loops in `char_autolink_url` /
/// `char_autolink_www` in `ext/markdown.c`.
pub fn rewind_prefix(emitted: &[u8]) -> usize {
    let mut start = emitted.len();
    while start > 0 {
        let c = emitted[start - 1];
        if c.is_ascii_alphanumeric() || matches!(c, b'.' | b'+' | b'-' | b'_' | b'/') {
            start -= 1;
        } else {
            break;
        }
    }
    start
}

/// Validates that `data` (before the `@`) looks like the local part of
/// an email address, per `is_mail_autolink` in `ext/markdown.c`: only
/// alphanumerics and a small set of punctuation, and it must not be
/// empty.
pub fn is_mail_autolink(local_part: &[u8]) -> bool {
    if local_part.is_empty() {
        return false;
    }

    local_part.iter().all(|&c| {
        c.is_ascii_alphanumeric() || matches!(c, b'.' | b'+' | b'-' | b'_' | b'@')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_simple_url() {
        let data = b"github.com/ and then";
        assert_eq!(scan_url_end(data), Some(11));
    }

    #[test]
    fn trims_trailing_punctuation() {
        let data = b"github.com.";
        assert_eq!(scan_url_end(data), Some(10));
    }

    #[test]
    fn rewinds_scheme_prefix() {
        let emitted = b"Check out https";
        let start = rewind_prefix(emitted);
        assert_eq!(&emitted[start..], b"https");
    }

    #[test]
    fn mail_local_part_rejects_empty() {
        assert!(!is_mail_autolink(b""));
        assert!(is_mail_autolink(b"jane.doe"));
    }
}
