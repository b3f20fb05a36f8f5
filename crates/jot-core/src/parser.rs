//! Recursive-descent JSON parser.
//!
//! A single pass over the scanner, no backtracking across completed tokens.
//! Nesting depth is checked against a configurable ceiling so hostile inputs
//! fail with [`JotError::TooDeep`] instead of overflowing the call stack. On
//! any error no partial tree escapes: the caller gets the error and nothing
//! else.

use crate::error::{JotError, Result};
use crate::node::Node;
use crate::scanner::Scanner;

/// Nesting limit applied by [`parse`]; override via [`ParseOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Knobs for [`parse_with_options`].
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Accept non-whitespace content after the top-level value. Parsing
    /// stops at the end of the value and the end offset reports where.
    pub allow_trailing: bool,
    /// Recursion ceiling for nested arrays/objects.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            allow_trailing: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a complete JSON document.
///
/// Strict: anything but whitespace after the top-level value is an error.
///
/// ```
/// use jot_core::parse;
/// let tree = parse(r#"{"a":1,"b":[true,null,"x"]}"#).unwrap();
/// assert_eq!(tree.get("b").unwrap().len(), 3);
/// ```
pub fn parse(text: &str) -> Result<Node> {
    let (node, _) = parse_with_options(text, &ParseOptions::default())?;
    Ok(node)
}

/// Parse with explicit options, returning the tree and the byte offset one
/// past the parsed value (trailing whitespace consumed when trailing content
/// is disallowed).
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<(Node, usize)> {
    let mut scanner = Scanner::new(text);
    scanner.skip_whitespace();
    let node = parse_value(&mut scanner, options, 0)?;
    if options.allow_trailing {
        return Ok((node, scanner.pos()));
    }
    scanner.skip_whitespace();
    match scanner.peek() {
        None => Ok((node, scanner.pos())),
        Some(_) => Err(JotError::TrailingGarbage {
            offset: scanner.pos(),
        }),
    }
}

/// Dispatch on the first byte of a value. The caller has skipped whitespace.
fn parse_value(scanner: &mut Scanner, options: &ParseOptions, depth: usize) -> Result<Node> {
    if depth > options.max_depth {
        return Err(JotError::TooDeep {
            offset: scanner.pos(),
            limit: options.max_depth,
        });
    }
    match scanner.peek() {
        Some(b'{') => parse_object(scanner, options, depth),
        Some(b'[') => parse_array(scanner, options, depth),
        Some(b'"') => Ok(Node::String(scanner.scan_string()?)),
        Some(b'-' | b'0'..=b'9') => Ok(Node::Number(scanner.scan_number()?)),
        Some(b't') => {
            scanner.scan_literal("true")?;
            Ok(Node::Bool(true))
        }
        Some(b'f') => {
            scanner.scan_literal("false")?;
            Ok(Node::Bool(false))
        }
        Some(b'n') => {
            scanner.scan_literal("null")?;
            Ok(Node::Null)
        }
        Some(_) => Err(JotError::parse(scanner.pos(), "unexpected character")),
        None => Err(JotError::parse(scanner.pos(), "unexpected end of input")),
    }
}

fn parse_array(scanner: &mut Scanner, options: &ParseOptions, depth: usize) -> Result<Node> {
    scanner.expect(b'[')?;
    let mut items = Vec::new();
    scanner.skip_whitespace();
    if scanner.peek() == Some(b']') {
        scanner.bump();
        return Ok(Node::Array(items));
    }
    loop {
        items.push(parse_value(scanner, options, depth + 1)?);
        scanner.skip_whitespace();
        let at = scanner.pos();
        match scanner.bump() {
            Some(b',') => scanner.skip_whitespace(),
            Some(b']') => return Ok(Node::Array(items)),
            _ => return Err(JotError::parse(at, "expected ',' or ']'")),
        }
        // A comma must be followed by a value, not a closing bracket.
        if scanner.peek() == Some(b']') {
            return Err(JotError::parse(scanner.pos(), "trailing comma in array"));
        }
    }
}

fn parse_object(scanner: &mut Scanner, options: &ParseOptions, depth: usize) -> Result<Node> {
    scanner.expect(b'{')?;
    let mut pairs = Vec::new();
    scanner.skip_whitespace();
    if scanner.peek() == Some(b'}') {
        scanner.bump();
        return Ok(Node::Object(pairs));
    }
    loop {
        if scanner.peek() != Some(b'"') {
            return Err(JotError::parse(scanner.pos(), "expected object key"));
        }
        let key = scanner.scan_string()?;
        scanner.skip_whitespace();
        scanner.expect(b':')?;
        scanner.skip_whitespace();
        let value = parse_value(scanner, options, depth + 1)?;
        pairs.push((key, value));
        scanner.skip_whitespace();
        let at = scanner.pos();
        match scanner.bump() {
            Some(b',') => scanner.skip_whitespace(),
            Some(b'}') => return Ok(Node::Object(pairs)),
            _ => return Err(JotError::parse(at, "expected ',' or '}'")),
        }
        if scanner.peek() == Some(b'}') {
            return Err(JotError::parse(scanner.pos(), "trailing comma in object"));
        }
    }
}
