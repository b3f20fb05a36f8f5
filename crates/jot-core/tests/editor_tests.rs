use jot_core::{compare, parse, print_unformatted, Node};
use std::rc::Rc;

// ============================================================================
// Attach
// ============================================================================

#[test]
fn scalar_constructors_build_each_kind() {
    assert!(Node::null().is_null());
    assert_eq!(Node::bool(true).as_bool(), Some(true));
    assert_eq!(Node::number(2.5).as_f64(), Some(2.5));
}

#[test]
fn append_builds_array_in_order() {
    let mut arr = Node::array();
    arr.append(Node::Number(1.0)).unwrap();
    arr.append(Node::string("two")).unwrap();
    arr.append(Node::Bool(true)).unwrap();
    assert_eq!(print_unformatted(&arr), r#"[1,"two",true]"#);
}

#[test]
fn set_builds_object_in_order() {
    let mut obj = Node::object();
    obj.set("a", Node::Number(1.0)).unwrap();
    obj.set("b", Node::Null).unwrap();
    assert_eq!(print_unformatted(&obj), r#"{"a":1,"b":null}"#);
}

#[test]
fn append_to_scalar_hands_the_item_back() {
    let mut scalar = Node::Number(1.0);
    let item = Node::string("orphan");
    let returned = scalar.append(item).unwrap_err();
    // The no-op returns the item intact; the target is unchanged.
    assert_eq!(returned.as_str(), Some("orphan"));
    assert_eq!(scalar.as_f64(), Some(1.0));
}

#[test]
fn set_on_array_hands_the_item_back() {
    let mut arr = Node::array();
    assert!(arr.set("k", Node::Null).is_err());
    assert_eq!(arr.len(), 0);
}

#[test]
fn insert_shifts_siblings() {
    let mut arr = parse("[1,3]").unwrap();
    arr.insert(1, Node::Number(2.0)).unwrap();
    assert_eq!(print_unformatted(&arr), "[1,2,3]");
}

#[test]
fn insert_out_of_range_clamps_to_append() {
    let mut arr = parse("[1]").unwrap();
    arr.insert(99, Node::Number(2.0)).unwrap();
    assert_eq!(print_unformatted(&arr), "[1,2]");
}

#[test]
fn insert_at_zero_prepends() {
    let mut arr = parse("[2]").unwrap();
    arr.insert(0, Node::Number(1.0)).unwrap();
    assert_eq!(print_unformatted(&arr), "[1,2]");
}

// ============================================================================
// Detach / remove
// ============================================================================

#[test]
fn detach_returns_subtree_and_shrinks_container() {
    let mut tree = parse(r#"{"a":1,"b":[true,null,"x"]}"#).unwrap();
    let b = tree.detach_key("b").unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree.get("b").is_none());
    assert!(compare(&b, &parse(r#"[true,null,"x"]"#).unwrap(), true));
}

#[test]
fn detach_then_reattach_preserves_content() {
    let mut source = parse(r#"[[1,2],"keep"]"#).unwrap();
    let inner = source.detach(0).unwrap();
    assert_eq!(source.len(), 1);

    let mut dest = Node::object();
    dest.set("moved", inner).unwrap();
    assert!(compare(
        dest.get("moved").unwrap(),
        &parse("[1,2]").unwrap(),
        true
    ));
}

#[test]
fn detach_missing_is_none() {
    let mut tree = parse(r#"{"a":1}"#).unwrap();
    assert!(tree.detach_key("missing").is_none());
    assert!(tree.detach(0).is_none()); // not an array
    assert_eq!(tree.len(), 1);
}

#[test]
fn detach_out_of_range_is_none() {
    let mut arr = parse("[1]").unwrap();
    assert!(arr.detach(5).is_none());
    assert_eq!(arr.len(), 1);
}

#[test]
fn remove_drops_the_element() {
    let mut arr = parse("[1,2,3]").unwrap();
    assert!(arr.remove(1));
    assert_eq!(print_unformatted(&arr), "[1,3]");
    assert!(!arr.remove(9));
}

#[test]
fn remove_key_drops_first_match() {
    let mut obj = parse(r#"{"k":1,"k":2,"other":3}"#).unwrap();
    assert!(obj.remove_key("k"));
    assert_eq!(obj.get("k").unwrap().as_f64(), Some(2.0));
}

// ============================================================================
// Replace
// ============================================================================

#[test]
fn replace_in_array_keeps_position() {
    let mut arr = parse("[1,2,3]").unwrap();
    let old = arr.replace(1, Node::string("mid")).unwrap();
    assert_eq!(old.as_f64(), Some(2.0));
    assert_eq!(print_unformatted(&arr), r#"[1,"mid",3]"#);
}

#[test]
fn replace_key_preserves_key_and_order() {
    let mut obj = parse(r#"{"a":1,"b":2,"c":3}"#).unwrap();
    let old = obj.replace_key("b", Node::Bool(false)).unwrap();
    assert_eq!(old.as_f64(), Some(2.0));
    assert_eq!(print_unformatted(&obj), r#"{"a":1,"b":false,"c":3}"#);
}

#[test]
fn replace_missing_hands_item_back() {
    let mut obj = parse(r#"{"a":1}"#).unwrap();
    let item = obj.replace_key("nope", Node::Null).unwrap_err();
    assert!(item.is_null());
    assert_eq!(print_unformatted(&obj), r#"{"a":1}"#);

    let mut arr = parse("[1]").unwrap();
    assert!(arr.replace(5, Node::Null).is_err());
}

// ============================================================================
// References
// ============================================================================

#[test]
fn dropping_a_container_of_wrappers_keeps_payload_alive() {
    let shared = Node::shared(parse(r#"{"deep":[1,2]}"#).unwrap());

    let mut arr = Node::array();
    assert!(arr.append_ref(&shared));
    assert!(arr.append_ref(&shared));
    assert_eq!(Rc::strong_count(&shared), 3);

    drop(arr);
    assert_eq!(Rc::strong_count(&shared), 1);
    // The payload is fully intact and still usable.
    assert_eq!(shared.get("deep").unwrap().len(), 2);
}

#[test]
fn wrapper_reads_through_to_the_payload() {
    let shared = Node::shared(Node::string("payload"));
    let wrapper = Node::reference(&shared);
    assert!(wrapper.is_reference());
    assert!(wrapper.is_string());
    assert_eq!(wrapper.as_str(), Some("payload"));
}

#[test]
fn detached_wrapper_stays_a_wrapper() {
    let shared = Node::shared(Node::Number(7.0));
    let mut arr = Node::array();
    arr.append_ref(&shared);

    let detached = arr.detach(0).unwrap();
    assert!(detached.is_reference());
    assert_eq!(detached.as_f64(), Some(7.0));
}

#[test]
fn wrapping_a_wrapper_gives_independent_wrappers() {
    let shared = Node::shared(Node::string("base"));
    let outer = Node::shared(Node::reference(&shared));
    let doubled = Node::reference(&outer);

    // Deleting wrappers in any order leaves the payload untouched.
    drop(doubled);
    drop(outer);
    assert_eq!(Rc::strong_count(&shared), 1);
    assert_eq!(shared.as_str(), Some("base"));
}

#[test]
fn keyed_wrapper_in_object() {
    let shared = Node::shared(parse("[1,2,3]").unwrap());
    let mut obj = Node::object();
    assert!(obj.set_ref("alias", &shared));
    assert_eq!(obj.get("alias").unwrap().len(), 3);

    obj.remove_key("alias");
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn wrappers_print_as_their_target() {
    let shared = Node::shared(parse(r#"{"x":1}"#).unwrap());
    let mut arr = Node::array();
    arr.append_ref(&shared);
    assert_eq!(print_unformatted(&arr), r#"[{"x":1}]"#);
}

// ============================================================================
// Duplicate
// ============================================================================

#[test]
fn deep_duplicate_is_compare_equal() {
    let tree = parse(r#"{"a":[1,{"b":"x"}],"c":null}"#).unwrap();
    let copy = tree.duplicate(true);
    assert!(compare(&copy, &tree, true));
}

#[test]
fn deep_duplicate_is_independent() {
    let source = parse(r#"{"list":[1,2]}"#).unwrap();
    let mut copy = source.duplicate(true);

    copy.replace_key("list", Node::Null).unwrap();
    // Mutating the copy left the source untouched.
    assert_eq!(source.get("list").unwrap().len(), 2);
    assert!(!compare(&source, &copy, true));
}

#[test]
fn shallow_duplicate_copies_scalars_but_not_children() {
    assert_eq!(Node::string("s").duplicate(false).as_str(), Some("s"));
    assert_eq!(Node::Number(2.5).duplicate(false).as_f64(), Some(2.5));

    let arr = parse("[1,2,3]").unwrap();
    let copy = arr.duplicate(false);
    assert!(copy.is_array());
    assert_eq!(copy.len(), 0);

    let obj = parse(r#"{"a":1}"#).unwrap();
    assert_eq!(obj.duplicate(false).len(), 0);
}

#[test]
fn deep_duplicate_resolves_wrappers_into_owned_copies() {
    let shared = Node::shared(Node::string("aliased"));
    let mut tree = Node::array();
    tree.append_ref(&shared);

    let copy = tree.duplicate(true);
    drop(tree);
    assert_eq!(Rc::strong_count(&shared), 1, "copy must not hold the Rc");
    assert!(!copy.at(0).unwrap().is_reference());
    assert_eq!(copy.at(0).unwrap().as_str(), Some("aliased"));
}

// ============================================================================
// Compare
// ============================================================================

#[test]
fn compare_equal_trees() {
    let a = parse(r#"{"x":[1,2],"y":"z"}"#).unwrap();
    let b = parse(r#"{"x":[1,2],"y":"z"}"#).unwrap();
    assert!(compare(&a, &b, true));
}

#[test]
fn compare_ignores_object_key_order() {
    let a = parse(r#"{"a":1,"b":2}"#).unwrap();
    let b = parse(r#"{"b":2,"a":1}"#).unwrap();
    assert!(compare(&a, &b, true));
}

#[test]
fn compare_respects_array_order() {
    let a = parse("[1,2]").unwrap();
    let b = parse("[2,1]").unwrap();
    assert!(!compare(&a, &b, true));
}

#[test]
fn compare_kind_mismatch_is_false() {
    assert!(!compare(&Node::Number(1.0), &Node::string("1"), true));
    assert!(!compare(&Node::Null, &Node::Bool(false), true));
    assert!(!compare(&Node::array(), &Node::object(), true));
}

#[test]
fn compare_length_mismatch_is_false() {
    assert!(!compare(
        &parse("[1,2]").unwrap(),
        &parse("[1,2,3]").unwrap(),
        true
    ));
    assert!(!compare(
        &parse(r#"{"a":1}"#).unwrap(),
        &parse(r#"{"a":1,"b":2}"#).unwrap(),
        true
    ));
}

#[test]
fn compare_duplicate_keys_do_not_hide_missing_keys() {
    // Both objects have two entries and every key of `a` resolves in `b`,
    // but the key sets differ; equality must fail in both directions.
    let a = parse(r#"{"x":1,"x":1}"#).unwrap();
    let b = parse(r#"{"x":1,"y":1}"#).unwrap();
    assert!(!compare(&a, &b, true));
    assert!(!compare(&b, &a, true));
    assert!(compare(&a, &a, true));
}

#[test]
fn compare_key_case_folding() {
    let a = parse(r#"{"Key":1}"#).unwrap();
    let b = parse(r#"{"key":1}"#).unwrap();
    assert!(!compare(&a, &b, true));
    assert!(compare(&a, &b, false));
}

#[test]
fn compare_sees_through_wrappers() {
    let shared = Node::shared(parse("[1,2]").unwrap());
    let wrapper = Node::reference(&shared);
    assert!(compare(&wrapper, &parse("[1,2]").unwrap(), true));
}

// ============================================================================
// Shared-node teardown
// ============================================================================

#[test]
fn delete_array_holding_reference_leaves_shared_node_deletable() {
    let shared = Node::shared(parse(r#"{"payload":true}"#).unwrap());

    let mut arr = Node::array();
    arr.append(Node::Number(1.0)).unwrap();
    arr.append_ref(&shared);
    drop(arr);

    // Shared node is intact and can be dropped independently afterwards.
    assert!(shared.get("payload").unwrap().as_bool() == Some(true));
    drop(shared);
}
