//! # jot-core
//!
//! An in-memory, mutable JSON document tree: parse text into a [`Node`]
//! tree, edit it in place (attach, detach, replace, insert, duplicate,
//! compare), and serialize it back out — pretty, compact, or into a
//! caller-supplied fixed buffer. A standalone byte-level [`minify`] pass
//! strips whitespace and comments from raw text without touching the tree
//! model.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::{parse, print_unformatted, Node};
//!
//! let mut tree = parse(r#"{"a":1,"b":[true,null,"x"]}"#).unwrap();
//! assert_eq!(tree.get("b").unwrap().len(), 3);
//!
//! tree.set("c", Node::string("added")).unwrap();
//! let text = print_unformatted(&tree);
//! assert_eq!(text, r#"{"a":1,"b":[true,null,"x"],"c":"added"}"#);
//! ```
//!
//! ## Ownership and references
//!
//! A node owns its payload and its children; attaching moves a node into its
//! container, detaching moves it back out. To alias one subtree from several
//! places, put it in shared storage with [`Node::shared`] and attach
//! non-owning wrappers built by [`Node::reference`]: dropping a wrapper (or
//! a whole container holding wrappers) never frees the aliased payload.
//!
//! ```rust
//! use jot_core::Node;
//!
//! let shared = Node::shared(Node::string("payload"));
//! let mut arr = Node::array();
//! arr.append_ref(&shared);
//! drop(arr); // wrapper gone, payload intact
//! assert_eq!(shared.as_str(), Some("payload"));
//! ```
//!
//! ## Modules
//!
//! - [`node`] — the [`Node`] tree element, accessors, [`compare`]
//! - [`editor`] — in-place mutation operations
//! - [`parser`] — text → tree, with offset-reporting errors
//! - [`printer`] — tree → text, growable or fixed-capacity
//! - [`minify`](minify()) — in-place whitespace/comment stripping
//! - [`convert`] — `serde_json::Value` interop
//! - [`error`] — [`JotError`] and the crate [`Result`]

pub mod convert;
pub mod editor;
pub mod error;
pub mod minify;
pub mod node;
pub mod parser;
pub mod printer;
mod scanner;

pub use error::{JotError, Result};
pub use minify::minify;
pub use node::{compare, Node, NodeKind, SharedNode};
pub use parser::{parse, parse_with_options, ParseOptions, DEFAULT_MAX_DEPTH};
pub use printer::{print, print_preallocated, print_unformatted};
