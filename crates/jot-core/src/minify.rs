//! In-place JSON text compaction.
//!
//! A single left-to-right pass over the raw bytes, independent of the tree
//! model: whitespace outside strings is dropped, as are `//` line comments
//! and `/* */` block comments (the tolerated pre-parse dialect). String
//! contents are copied byte-for-byte — embedded whitespace stays, and
//! escaped quotes are not mistaken for terminators.
//!
//! The pass never allocates: bytes are compacted over the same buffer with a
//! read cursor running ahead of a write cursor, and the buffer is truncated
//! to the compacted length. Output length ≤ input length always holds.

/// Compact `buf` in place. Safe on malformed input: an unterminated string
/// or comment is copied/dropped through to the end of the buffer.
pub fn minify(buf: &mut Vec<u8>) {
    let mut read = 0;
    let mut write = 0;

    while read < buf.len() {
        match buf[read] {
            b' ' | b'\t' | b'\r' | b'\n' => read += 1,
            b'/' if buf.get(read + 1) == Some(&b'/') => {
                // Line comment: drop to end of line.
                while read < buf.len() && buf[read] != b'\n' {
                    read += 1;
                }
            }
            b'/' if buf.get(read + 1) == Some(&b'*') => {
                // Block comment: drop through the closing */.
                read += 2;
                while read < buf.len() {
                    if buf[read] == b'*' && buf.get(read + 1) == Some(&b'/') {
                        read += 2;
                        break;
                    }
                    read += 1;
                }
            }
            b'"' => {
                // String: copy verbatim through the closing quote, keeping
                // escape pairs intact so \" does not terminate early.
                buf[write] = buf[read];
                write += 1;
                read += 1;
                while read < buf.len() {
                    let b = buf[read];
                    buf[write] = b;
                    write += 1;
                    read += 1;
                    if b == b'\\' {
                        if read < buf.len() {
                            buf[write] = buf[read];
                            write += 1;
                            read += 1;
                        }
                    } else if b == b'"' {
                        break;
                    }
                }
            }
            b => {
                buf[write] = b;
                write += 1;
                read += 1;
            }
        }
    }

    buf.truncate(write);
}
