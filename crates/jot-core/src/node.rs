//! The document tree element.
//!
//! A [`Node`] is a tagged enum mirroring the JSON value kinds, plus two
//! extras: `Raw` (pre-rendered JSON text emitted verbatim by the printer) and
//! `Ref` (a non-owning wrapper over a shared payload).
//!
//! Objects store their children as `Vec<(String, Node)>` to preserve
//! insertion order without depending on `IndexMap`; arrays are plain
//! `Vec<Node>`. A child belongs to exactly one container: attaching moves the
//! node in, detaching moves it back out.
//!
//! Reference wrappers hold an `Rc` clone of the shared payload. Dropping a
//! wrapper (alone or as part of a container teardown) only releases its
//! refcount; the payload survives until its last holder drops. Wrapping a
//! wrapper produces another independent wrapper over the same payload, so
//! teardown order between nested wrappers cannot matter.

use std::rc::Rc;

/// A shared, immutable payload that reference wrappers alias.
pub type SharedNode = Rc<Node>;

/// One element of a JSON document tree.
#[derive(Debug, Clone)]
pub enum Node {
    Null,
    Bool(bool),
    /// All numbers are stored as 64-bit floats; values beyond `f64` precision
    /// lose precision silently at parse time.
    Number(f64),
    String(String),
    /// Pre-rendered JSON text, printed verbatim without validation.
    Raw(String),
    Array(Vec<Node>),
    /// Key-value pairs in insertion order. Duplicate keys are representable;
    /// lookups return the first match.
    Object(Vec<(String, Node)>),
    /// Non-owning wrapper over a shared payload.
    Ref(SharedNode),
}

/// The kind of a node, with reference wrappers resolved to their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Raw,
    Array,
    Object,
}

impl Node {
    // ─── Constructors ───────────────────────────────────────────────────

    /// New null node.
    pub fn null() -> Node {
        Node::Null
    }

    /// New boolean node.
    pub fn bool(value: bool) -> Node {
        Node::Bool(value)
    }

    /// New number node.
    pub fn number(value: f64) -> Node {
        Node::Number(value)
    }

    /// New empty array.
    pub fn array() -> Node {
        Node::Array(Vec::new())
    }

    /// New empty object.
    pub fn object() -> Node {
        Node::Object(Vec::new())
    }

    /// New string node, copying the input.
    pub fn string(s: impl Into<String>) -> Node {
        Node::String(s.into())
    }

    /// New raw node: `text` is emitted by the printer exactly as given.
    pub fn raw(text: impl Into<String>) -> Node {
        Node::Raw(text.into())
    }

    /// Move a node into shared storage so reference wrappers can alias it.
    pub fn shared(node: Node) -> SharedNode {
        Rc::new(node)
    }

    /// New non-owning wrapper over `target`. The wrapper can be attached to
    /// any container and dropped freely; `target` outlives every wrapper.
    pub fn reference(target: &SharedNode) -> Node {
        Node::Ref(Rc::clone(target))
    }

    // ─── Inspection ─────────────────────────────────────────────────────

    /// The node's kind, seen through reference wrappers.
    pub fn kind(&self) -> NodeKind {
        match self.resolve() {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::Raw(_) => NodeKind::Raw,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
            Node::Ref(_) => unreachable!("resolve() never returns Ref"),
        }
    }

    /// True if this node is a non-owning wrapper.
    pub fn is_reference(&self) -> bool {
        matches!(self, Node::Ref(_))
    }

    pub fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }

    pub fn is_bool(&self) -> bool {
        self.kind() == NodeKind::Bool
    }

    pub fn is_number(&self) -> bool {
        self.kind() == NodeKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind() == NodeKind::String
    }

    pub fn is_raw(&self) -> bool {
        self.kind() == NodeKind::Raw
    }

    pub fn is_array(&self) -> bool {
        self.kind() == NodeKind::Array
    }

    pub fn is_object(&self) -> bool {
        self.kind() == NodeKind::Object
    }

    /// Follow reference wrappers to the underlying payload.
    pub fn resolve(&self) -> &Node {
        let mut node = self;
        while let Node::Ref(target) = node {
            node = target.as_ref();
        }
        node
    }

    // ─── Accessors ──────────────────────────────────────────────────────
    //
    // Type mismatches and missing keys/indices return `None`; nothing here
    // panics on a wrong-kind node.

    /// Numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self.resolve() {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String content, if this is a string or raw node.
    pub fn as_str(&self) -> Option<&str> {
        match self.resolve() {
            Node::String(s) | Node::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self.resolve() {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Object lookup by key (case-sensitive, first match wins).
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self.resolve() {
            Node::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Object lookup ignoring ASCII case on the key.
    pub fn get_ignore_case(&self, key: &str) -> Option<&Node> {
        match self.resolve() {
            Node::Object(pairs) => pairs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Array element by index.
    pub fn at(&self, index: usize) -> Option<&Node> {
        match self.resolve() {
            Node::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// True if this is an object containing `key` (case-sensitive).
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of children of an array or object; 0 for scalars.
    pub fn len(&self) -> usize {
        match self.resolve() {
            Node::Array(items) => items.len(),
            Node::Object(pairs) => pairs.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structural equality between two trees.
///
/// - Numbers compare by exact `f64` equality.
/// - Strings and raw text compare byte-for-byte.
/// - Arrays compare pairwise in order.
/// - Objects compare as key sets independent of insertion order; with
///   `case_sensitive_keys = false` keys match ignoring ASCII case.
/// - Reference wrappers compare by the content they alias.
///
/// Kind mismatch is `false`, never an error.
pub fn compare(a: &Node, b: &Node, case_sensitive_keys: bool) -> bool {
    let a = a.resolve();
    let b = b.resolve();
    match (a, b) {
        (Node::Null, Node::Null) => true,
        (Node::Bool(x), Node::Bool(y)) => x == y,
        (Node::Number(x), Node::Number(y)) => x == y,
        (Node::String(x), Node::String(y)) => x == y,
        (Node::Raw(x), Node::Raw(y)) => x == y,
        (Node::Array(xs), Node::Array(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|(x, y)| compare(x, y, case_sensitive_keys))
        }
        (Node::Object(_), Node::Object(_)) => {
            // Key order is irrelevant. Both directions must be checked:
            // duplicate keys make the entry counts equal without the key
            // sets being equal, so a one-way walk would accept
            // {"x":1,"x":1} against {"x":1,"y":1}.
            a.len() == b.len()
                && object_covers(a, b, case_sensitive_keys)
                && object_covers(b, a, case_sensitive_keys)
        }
        _ => false,
    }
}

/// Every key of `a` resolves (first match) to a compare-equal value in `b`.
fn object_covers(a: &Node, b: &Node, case_sensitive_keys: bool) -> bool {
    let Node::Object(pairs) = a else { return false };
    pairs.iter().all(|(key, value)| {
        let other = if case_sensitive_keys {
            b.get(key)
        } else {
            b.get_ignore_case(key)
        };
        match other {
            Some(v) => compare(value, v, case_sensitive_keys),
            None => false,
        }
    })
}
