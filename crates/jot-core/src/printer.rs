//! Serialization of a document tree back to JSON text.
//!
//! Two destinations share one tree walk behind the small [`Sink`] seam: a
//! growable `String` (amortized doubling, shrunk to the used length before
//! returning) and a caller-supplied fixed byte buffer that fails with
//! [`JotError::Capacity`] the moment output would exceed it, without ever
//! writing past the end.
//!
//! Pretty mode puts each array/object child on its own line, one tab per
//! nesting depth, `": "` after object keys. Unformatted mode emits no
//! inter-token whitespace.
//!
//! Numbers print via `f64`'s `Display`, the shortest decimal form that
//! round-trips for every finite value. NaN and the infinities print as `0`:
//! the wire format has no representation for them and `0` is the documented
//! deterministic fallback.

use crate::error::{JotError, Result};
use crate::node::Node;

/// Byte destination for the printer walk.
trait Sink {
    fn put(&mut self, s: &str) -> Result<()>;
}

impl Sink for String {
    fn put(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }
}

/// Fixed-capacity destination; refuses writes that would pass the end.
struct FixedSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl Sink for FixedSink<'_> {
    fn put(&mut self, s: &str) -> Result<()> {
        let end = self.len + s.len();
        if end > self.buf.len() {
            return Err(JotError::Capacity {
                capacity: self.buf.len(),
            });
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Initial capacity estimate for growable printing, doubled by the `String`
/// as the walk outgrows it.
const PRINT_CAPACITY_HINT: usize = 256;

/// Serialize `node` with pretty formatting into a growable buffer.
pub fn print(node: &Node) -> String {
    print_growable(node, true)
}

/// Serialize `node` compactly (no inter-token whitespace).
pub fn print_unformatted(node: &Node) -> String {
    print_growable(node, false)
}

fn print_growable(node: &Node, pretty: bool) -> String {
    let mut out = String::with_capacity(PRINT_CAPACITY_HINT);
    // Infallible for a String sink.
    let _ = print_node(node, 0, pretty, &mut out);
    out.shrink_to_fit();
    out
}

/// Serialize `node` into a caller-supplied fixed buffer, returning the
/// number of bytes written. Fails with [`JotError::Capacity`] if the output
/// does not fit; buffer contents are unspecified after a failure, and no
/// byte past `buffer.len()` is ever touched.
pub fn print_preallocated(node: &Node, buffer: &mut [u8], pretty: bool) -> Result<usize> {
    let mut sink = FixedSink {
        buf: buffer,
        len: 0,
    };
    print_node(node, 0, pretty, &mut sink)?;
    Ok(sink.len)
}

fn print_node<S: Sink>(node: &Node, depth: usize, pretty: bool, out: &mut S) -> Result<()> {
    match node.resolve() {
        Node::Null => out.put("null"),
        Node::Bool(true) => out.put("true"),
        Node::Bool(false) => out.put("false"),
        Node::Number(n) => print_number(*n, out),
        Node::String(s) => print_string(s, out),
        Node::Raw(s) => out.put(s),
        Node::Array(items) => {
            if items.is_empty() {
                return out.put("[]");
            }
            out.put("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.put(",")?;
                }
                if pretty {
                    out.put("\n")?;
                    put_indent(depth + 1, out)?;
                }
                print_node(item, depth + 1, pretty, out)?;
            }
            if pretty {
                out.put("\n")?;
                put_indent(depth, out)?;
            }
            out.put("]")
        }
        Node::Object(pairs) => {
            if pairs.is_empty() {
                return out.put("{}");
            }
            out.put("{")?;
            for (i, (key, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.put(",")?;
                }
                if pretty {
                    out.put("\n")?;
                    put_indent(depth + 1, out)?;
                }
                print_string(key, out)?;
                out.put(if pretty { ": " } else { ":" })?;
                print_node(value, depth + 1, pretty, out)?;
            }
            if pretty {
                out.put("\n")?;
                put_indent(depth, out)?;
            }
            out.put("}")
        }
        Node::Ref(_) => unreachable!("resolve() never returns Ref"),
    }
}

fn put_indent<S: Sink>(depth: usize, out: &mut S) -> Result<()> {
    for _ in 0..depth {
        out.put("\t")?;
    }
    Ok(())
}

fn print_number<S: Sink>(n: f64, out: &mut S) -> Result<()> {
    if n.is_finite() {
        // `Display` for f64 yields the shortest decimal that parses back to
        // the same value, in plain (non-exponent) notation; integral floats
        // print without a fraction, so 1.0 round-trips as `1`.
        out.put(&n.to_string())
    } else {
        out.put("0")
    }
}

/// Emit a quoted string with the mandatory escapes: quote, backslash, and
/// control characters (`\b \f \n \r \t`, else `\u00XX`). All other UTF-8
/// passes through unescaped.
fn print_string<S: Sink>(s: &str, out: &mut S) -> Result<()> {
    out.put("\"")?;
    let mut plain_start = 0;
    for (i, ch) in s.char_indices() {
        let escape: Option<&str> = match ch {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\u{0008}' => Some("\\b"),
            '\u{000C}' => Some("\\f"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            c if (c as u32) < 0x20 => None, // \u00XX below
            _ => continue,
        };
        if plain_start < i {
            out.put(&s[plain_start..i])?;
        }
        match escape {
            Some(e) => out.put(e)?,
            None => out.put(&format!("\\u{:04x}", ch as u32))?,
        }
        plain_start = i + ch.len_utf8();
    }
    if plain_start < s.len() {
        out.put(&s[plain_start..])?;
    }
    out.put("\"")
}
