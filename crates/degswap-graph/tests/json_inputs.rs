use degswap_core::Edge;
use degswap_graph::{edges_from_json, edges_to_json, forbidden_from_json, weights_from_json};

#[test]
fn edges_parse_and_write_back() {
    let list = edges_from_json(r#"{"from": [0, 2, 1], "to": [1, 3, 3]}"#).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.edge(1), Some(Edge::new(2, 3)));

    let json = edges_to_json(&list).unwrap();
    let reparsed = edges_from_json(&json).unwrap();
    assert_eq!(reparsed, list);
}

#[test]
fn malformed_json_maps_to_serde_family() {
    let err = edges_from_json(r#"{"from": [0], "too": [1]}"#).unwrap_err();
    assert_eq!(err.code(), "deserialize-json");
    assert_eq!(err.info().context.get("payload"), Some(&"edges".to_string()));
}

#[test]
fn mismatched_edge_lengths_fail_fast() {
    let err = edges_from_json(r#"{"from": [0, 1], "to": [1]}"#).unwrap_err();
    assert_eq!(err.code(), "length-mismatch");
}

#[test]
fn zeros_and_weights_parse() {
    let zeros = forbidden_from_json(r#"{"from": [2, 2], "to": [1, 1]}"#).unwrap();
    assert_eq!(zeros.len(), 1);
    assert!(zeros.contains(Edge::new(2, 1)));

    let weights = weights_from_json(r#"{"rows": [[0.0, 2.0], [1.0, 0.5]]}"#).unwrap();
    assert_eq!(weights.rows(), 2);
    assert_eq!(weights.cols(), 2);
    assert_eq!(weights.get(Edge::new(1, 1)), Some(0.5));
}
