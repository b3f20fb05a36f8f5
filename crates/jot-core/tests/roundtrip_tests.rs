use jot_core::{compare, parse, print, print_unformatted, Node};

/// Assert that parse → print_unformatted → parse yields a compare-equal tree,
/// and cross-check the printed text against serde_json.
fn assert_roundtrip(json: &str) {
    let tree = parse(json).expect("parse failed");
    let printed = print_unformatted(&tree);
    let reparsed = parse(&printed).expect("reparse failed");
    assert!(
        compare(&tree, &reparsed, true),
        "roundtrip failed:\n  input:   {json}\n  printed: {printed}"
    );

    // The printed form must agree with an independent JSON implementation.
    let ours: serde_json::Value = serde_json::from_str(&printed).unwrap();
    let theirs: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(ours, theirs, "serde_json disagrees for {json}");
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn roundtrip_scalars() {
    for json in ["null", "true", "false", "0", "42", "-7", "3.14", "-0.5"] {
        assert_roundtrip(json);
    }
}

#[test]
fn roundtrip_strings() {
    for json in [
        r#""""#,
        r#""plain""#,
        r#""with \"escapes\" and \\ slashes""#,
        r#""tabs\tand\nnewlines""#,
        r#""unicode: é 😀""#,
        "\"你好 café\"",
    ] {
        assert_roundtrip(json);
    }
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn roundtrip_flat_containers() {
    assert_roundtrip("[]");
    assert_roundtrip("{}");
    assert_roundtrip("[1,2,3]");
    assert_roundtrip(r#"{"a":1,"b":2}"#);
}

#[test]
fn roundtrip_nested_document() {
    assert_roundtrip(
        r#"{"users":[{"name":"Ada","tags":["math","cs"],"meta":{"active":true}},{"name":"Lin","tags":[],"meta":{"active":false}}],"count":2,"next":null}"#,
    );
}

#[test]
fn roundtrip_deep_nesting() {
    assert_roundtrip(r#"[[[[[[{"x":[[[1]]]}]]]]]]"#);
}

#[test]
fn unformatted_output_is_byte_exact_for_canonical_input() {
    // Concrete scenario: compact input prints back byte-identical.
    let json = r#"{"a":1,"b":[true,null,"x"]}"#;
    assert_eq!(print_unformatted(&parse(json).unwrap()), json);
}

// ============================================================================
// Built trees (constructor path rather than parser path)
// ============================================================================

#[test]
fn built_tree_roundtrips() {
    let mut obj = Node::object();
    obj.set("name", Node::string("jot")).unwrap();
    let mut nums = Node::array();
    for n in [1.0, 2.5, -3.0] {
        nums.append(Node::Number(n)).unwrap();
    }
    obj.set("nums", nums).unwrap();
    obj.set("flag", Node::Bool(true)).unwrap();

    let reparsed = parse(&print_unformatted(&obj)).unwrap();
    assert!(compare(&obj, &reparsed, true));
}

#[test]
fn pretty_and_compact_are_compare_equal() {
    let tree = parse(r#"{"a":[1,{"b":null}],"c":"s"}"#).unwrap();
    let from_pretty = parse(&print(&tree)).unwrap();
    let from_compact = parse(&print_unformatted(&tree)).unwrap();
    assert!(compare(&from_pretty, &from_compact, true));
}

// ============================================================================
// serde_json interop
// ============================================================================

#[test]
fn from_value_preserves_structure_and_order() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"z":1,"a":[true,"s"],"m":{"n":null}}"#).unwrap();
    let tree = Node::from_value(&value);
    assert_eq!(
        print_unformatted(&tree),
        r#"{"z":1,"a":[true,"s"],"m":{"n":null}}"#
    );
}

#[test]
fn to_value_roundtrips_through_serde_json() {
    let tree = parse(r#"{"a":[1,2],"b":"x"}"#).unwrap();
    let value = tree.to_value().unwrap();
    let back = Node::from_value(&value);
    assert!(compare(&tree, &back, true));
}

#[test]
fn to_value_resolves_wrappers() {
    let shared = Node::shared(parse("[1,2]").unwrap());
    let mut obj = Node::object();
    obj.set_ref("alias", &shared);
    let value = obj.to_value().unwrap();
    assert_eq!(value["alias"], serde_json::json!([1.0, 2.0]));
}

#[test]
fn to_value_parses_raw_content() {
    let node = Node::raw(r#"{"inner":true}"#);
    let value = node.to_value().unwrap();
    assert_eq!(value, serde_json::json!({"inner": true}));
}

#[test]
fn to_value_rejects_malformed_raw() {
    assert!(Node::raw("not json").to_value().is_err());
}
