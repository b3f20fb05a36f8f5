//! Mutating operations over the document tree.
//!
//! Attach operations transfer ownership of the item into the container;
//! detach hands it back. On a kind mismatch (attaching to a scalar, detaching
//! from a non-container) nothing changes: `append`/`insert`/`set`/`replace*`
//! return the item through `Err` so a failed attach never drops the caller's
//! subtree, and the lookup-style operations return `None`/`false`.
//!
//! Every operation completes in one step from the caller's perspective; a
//! tree is never observable mid-mutation.

use crate::node::{Node, SharedNode};

impl Node {
    // ─── Attach ─────────────────────────────────────────────────────────

    /// Append `item` as the last element of an array.
    pub fn append(&mut self, item: Node) -> Result<(), Node> {
        match self {
            Node::Array(items) => {
                items.push(item);
                Ok(())
            }
            _ => Err(item),
        }
    }

    /// Append a `(key, item)` pair to an object. An existing entry with the
    /// same key is left in place; lookups keep returning the first match.
    pub fn set(&mut self, key: impl Into<String>, item: Node) -> Result<(), Node> {
        match self {
            Node::Object(pairs) => {
                pairs.push((key.into(), item));
                Ok(())
            }
            _ => Err(item),
        }
    }

    /// Append a non-owning wrapper over `target` to an array. The wrapper is
    /// owned by the array; the payload is not.
    pub fn append_ref(&mut self, target: &SharedNode) -> bool {
        self.append(Node::reference(target)).is_ok()
    }

    /// Append a keyed non-owning wrapper over `target` to an object.
    pub fn set_ref(&mut self, key: impl Into<String>, target: &SharedNode) -> bool {
        self.set(key, Node::reference(target)).is_ok()
    }

    /// Insert `item` at `index` in an array, shifting later elements. An
    /// out-of-range index clamps to the end (append), never errors.
    pub fn insert(&mut self, index: usize, item: Node) -> Result<(), Node> {
        match self {
            Node::Array(items) => {
                let index = index.min(items.len());
                items.insert(index, item);
                Ok(())
            }
            _ => Err(item),
        }
    }

    // ─── Detach / remove ────────────────────────────────────────────────

    /// Unlink the array element at `index`, returning it with full
    /// ownership. A detached reference wrapper stays a reference wrapper.
    pub fn detach(&mut self, index: usize) -> Option<Node> {
        match self {
            Node::Array(items) if index < items.len() => Some(items.remove(index)),
            _ => None,
        }
    }

    /// Unlink the first object entry whose key matches (case-sensitive),
    /// returning the value.
    pub fn detach_key(&mut self, key: &str) -> Option<Node> {
        match self {
            Node::Object(pairs) => {
                let pos = pairs.iter().position(|(k, _)| k == key)?;
                Some(pairs.remove(pos).1)
            }
            _ => None,
        }
    }

    /// Detach and drop the element at `index`. Dropping a reference wrapper
    /// frees the wrapper only; the aliased payload is untouched.
    pub fn remove(&mut self, index: usize) -> bool {
        self.detach(index).is_some()
    }

    /// Detach and drop the first entry matching `key`.
    pub fn remove_key(&mut self, key: &str) -> bool {
        self.detach_key(key).is_some()
    }

    // ─── Replace ────────────────────────────────────────────────────────

    /// Swap the array element at `index` for `new_item` in place, returning
    /// the old element. `Err(new_item)` if this is not an array or the index
    /// is out of range.
    pub fn replace(&mut self, index: usize, new_item: Node) -> Result<Node, Node> {
        match self {
            Node::Array(items) if index < items.len() => {
                Ok(std::mem::replace(&mut items[index], new_item))
            }
            _ => Err(new_item),
        }
    }

    /// Swap the value of the first entry matching `key`, preserving the key
    /// and the entry's position in insertion order. Returns the old value.
    pub fn replace_key(&mut self, key: &str, new_item: Node) -> Result<Node, Node> {
        match self {
            Node::Object(pairs) => match pairs.iter_mut().find(|(k, _)| k == key) {
                Some((_, slot)) => Ok(std::mem::replace(slot, new_item)),
                None => Err(new_item),
            },
            _ => Err(new_item),
        }
    }

    // ─── Duplicate ──────────────────────────────────────────────────────

    /// Copy this node.
    ///
    /// With `deep = false`, scalars copy their value and containers copy as
    /// empty (children are not cloned). With `deep = true`, the whole
    /// subtree is copied and every reference wrapper is resolved into an
    /// owned copy of its payload: a deep duplicate is fully owning and
    /// independent of the source, whatever the source aliased.
    pub fn duplicate(&self, deep: bool) -> Node {
        match self.resolve() {
            Node::Null => Node::Null,
            Node::Bool(b) => Node::Bool(*b),
            Node::Number(n) => Node::Number(*n),
            Node::String(s) => Node::String(s.clone()),
            Node::Raw(s) => Node::Raw(s.clone()),
            Node::Array(items) => {
                if deep {
                    Node::Array(items.iter().map(|item| item.duplicate(true)).collect())
                } else {
                    Node::array()
                }
            }
            Node::Object(pairs) => {
                if deep {
                    Node::Object(
                        pairs
                            .iter()
                            .map(|(k, v)| (k.clone(), v.duplicate(true)))
                            .collect(),
                    )
                } else {
                    Node::object()
                }
            }
            Node::Ref(_) => unreachable!("resolve() never returns Ref"),
        }
    }
}
