// tests/parser_tests.rs

use std::path::PathBuf;

use dotgraph::trace::TraceBuffer;
use dotgraph::{
    parse, parse_file, parse_with_sink, AttributeMap, AttributeValue, ErrorType, GraphKind,
    SourceContext,
};

fn dot_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/dot_files")
        .join(name)
}

fn bad_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/bad_files")
        .join(name)
}

fn single(key: &str, value: AttributeValue) -> AttributeMap {
    let mut map = AttributeMap::new();
    map.insert(key.to_string(), value);
    map
}

// ---
// Whole documents
// ---

#[test]
fn test_end_to_end_example() {
    let g = parse("digraph ex { s [h=2] -> a; a -> s; }", false).unwrap();
    assert_eq!(g.kind(), GraphKind::Digraph);
    assert_eq!(g.kind().as_str(), "digraph");
    assert_eq!(g.name(), "ex");
    assert_eq!(g.neighbors("s"), ["a"]);
    assert_eq!(g.neighbors("a"), ["s"]);
    assert_eq!(g.get_vertex_attribute("s", "h").unwrap(), &AttributeValue::Int(2));
}

#[test]
fn test_fan_out_block_targets() {
    let g = parse("digraph g { s -> [k=1] { a b } ; }", false).unwrap();
    assert_eq!(g.neighbors("s"), ["a", "b"]);
    let expected = single("k", AttributeValue::Int(1));
    assert_eq!(g.get_edge_attributes("s", "a").unwrap(), &expected);
    assert_eq!(g.get_edge_attributes("s", "b").unwrap(), &expected);
    assert!(g.get_edge_attributes("a", "s").is_err());
}

#[test]
fn test_undirected_operator_mirrors_edges_and_attributes() {
    let g = parse("graph u { a -- [w=7] b; }", false).unwrap();
    assert_eq!(g.kind(), GraphKind::Graph);
    assert_eq!(g.neighbors("a"), ["b"]);
    assert_eq!(g.neighbors("b"), ["a"]);
    let expected = single("w", AttributeValue::Int(7));
    assert_eq!(g.get_edge_attributes("a", "b").unwrap(), &expected);
    assert_eq!(g.get_edge_attributes("b", "a").unwrap(), &expected);
}

#[test]
fn test_operator_not_graph_kind_drives_mirroring() {
    let g = parse("graph u { a -> [w=1] b; c -- d }", false).unwrap();
    assert_eq!(g.neighbors("a"), ["b"]);
    assert!(g.neighbors("b").is_empty());
    assert!(g.get_edge_attributes("b", "a").is_err());

    let g = parse("digraph d { c -- d }", false).unwrap();
    assert_eq!(g.neighbors("d"), ["c"]);
}

#[test]
fn test_undirected_fan_out_mirrors_every_target() {
    let g = parse("graph u { hub -- [w=2] { x y } }", false).unwrap();
    assert_eq!(g.neighbors("hub"), ["x", "y"]);
    assert_eq!(g.neighbors("x"), ["hub"]);
    assert_eq!(g.neighbors("y"), ["hub"]);
    assert_eq!(g.get_edge_attribute("y", "hub", "w").unwrap(), &AttributeValue::Int(2));
}

#[test]
fn test_duplicate_edges_are_kept() {
    let g = parse("digraph g { a -> b; a -> b; a -> { b c b } }", false).unwrap();
    assert_eq!(g.neighbors("a"), ["b", "b", "b", "c", "b"]);
}

#[test]
fn test_vertex_attributes_merge_across_mentions() {
    let g = parse(
        "digraph g { a [h=1, name=first] -> b [h=5]; b [x=true] -> a [h=9] }",
        false,
    )
    .unwrap();
    let a = g.vertex_attributes("a").unwrap();
    assert_eq!(a["h"], AttributeValue::Int(9));
    assert_eq!(a["name"], AttributeValue::Text("first".into()));
    let b = g.vertex_attributes("b").unwrap();
    assert_eq!(b["h"], AttributeValue::Int(5));
    assert_eq!(b["x"], AttributeValue::Bool(true));
}

#[test]
fn test_block_target_attributes_belong_to_targets() {
    let g = parse("digraph g { s -> [k=1] { a [h=1] b } }", false).unwrap();
    assert_eq!(g.get_vertex_attribute("a", "h").unwrap(), &AttributeValue::Int(1));
    assert!(g.vertex_attributes("b").is_none());
    assert!(g.vertex_attributes("s").is_none());
}

#[test]
fn test_vertices_without_attributes_have_no_entry() {
    let g = parse("digraph g { a [] -> b }", false).unwrap();
    assert!(g.vertex_attributes("a").is_none());
    assert!(g.vertex_attributes("b").is_none());
    assert!(g.get_edge_attributes("a", "b").is_err());
}

#[test]
fn test_empty_target_block_declares_source() {
    let g = parse("digraph g { lonely -> { } }", false).unwrap();
    assert!(g.adjacency().contains_key("lonely"));
    assert!(g.neighbors("lonely").is_empty());
}

#[test]
fn test_statements_without_terminators_or_whitespace() {
    let g = parse("digraph g{a->b b->c;c->{a}}", false).unwrap();
    assert_eq!(g.neighbors("a"), ["b"]);
    assert_eq!(g.neighbors("b"), ["c"]);
    assert_eq!(g.neighbors("c"), ["a"]);
}

#[test]
fn test_comments_anywhere_whitespace_is_legal() {
    let text = "// header\ndigraph /* name follows */ g {\n  a /* src */ -> b; // tail\n}/* end */";
    let g = parse(text, false).unwrap();
    assert_eq!(g.name(), "g");
    assert_eq!(g.neighbors("a"), ["b"]);
}

#[test]
fn test_comment_as_only_separator() {
    let g = parse("digraph g {\na -> b\n// note\nc -> d\n}", false).unwrap();
    assert_eq!(g.neighbors("a"), ["b"]);
    assert_eq!(g.neighbors("c"), ["d"]);

    let g = parse("digraph g { a -> b/* x */c -> d }", false).unwrap();
    assert_eq!(g.neighbors("a"), ["b"]);
    assert_eq!(g.neighbors("c"), ["d"]);

    let g = parse("digraph/**/g{a->{b/**/c}}", false).unwrap();
    assert_eq!(g.name(), "g");
    assert_eq!(g.neighbors("a"), ["b", "c"]);
}

#[test]
fn test_keyword_case_is_normalised() {
    let g = parse("GRAPH Up { a -- b }", false).unwrap();
    assert_eq!(g.kind(), GraphKind::Graph);
    assert_eq!(g.name(), "Up");
}

#[test]
fn test_verbose_does_not_change_result() {
    let text = "digraph ex { s [h=2] -> [k=1] { a b }; a -> s; }";
    assert_eq!(parse(text, false).unwrap(), parse(text, true).unwrap());
}

#[test]
fn test_trace_sink_receives_tokens() {
    let mut trace = TraceBuffer::new();
    parse_with_sink(
        &SourceContext::anonymous("digraph ex { s [h=2] -> a; }"),
        &mut trace,
    )
    .unwrap();
    assert!(trace.contains("TYPE digraph"));
    assert!(trace.contains("NAME ex"));
    assert!(trace.contains("VERTEX NAME s"));
    assert!(trace.contains("\tVALUE 2"));
    assert!(trace.contains("EDGE TYPE ->"));
    assert!(trace.contains("TARGET VERTEX NAME a"));
}

// ---
// Malformed input
// ---

#[test]
fn test_malformed_inputs_are_syntax_errors() {
    let cases = [
        "graph {",
        "digraph g { a -> ; }",
        "tree g { a -> b }",
        "digraph g a -> b }",
        "digraph g { a b }",
        "digraph g { a => b }",
        "digraph g { a -> { b c }",
        "digraph g { a -> b",
        "digraph g { a -> [k=1 b }",
        "digraph g { a_b -> c }",
        "",
    ];
    for text in cases {
        let err = parse(text, false).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Syntax, "input: {:?}", text);
    }
}

#[test]
fn test_syntax_error_names_what_was_expected() {
    let err = parse("graph {", false).unwrap_err();
    assert!(err.message().contains("identifier"), "{}", err.message());
    assert!(err.to_string().starts_with("Syntax error"));
}

// ---
// Files
// ---

#[test]
fn test_parse_fixture_files() {
    for name in [
        "graph1.dot",
        "graph2.dot",
        "cyclic_undirected_graph.dot",
        "mixed_case.dot",
        "fanout.dot",
        "unindented_comments.dot",
    ] {
        let result = parse_file(dot_file(name), false);
        assert!(result.is_ok(), "failed to parse {}: {:?}", name, result.err());
    }
}

#[test]
fn test_parse_rejects_bad_files() {
    for name in ["kanagawa.dot", "missing_target.dot"] {
        let err = parse_file(bad_file(name), false).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Syntax, "{}", name);
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = parse_file(dot_file("does_not_exist.dot"), false).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Io);
}

#[test]
fn test_inspect_undirected_fixture() {
    let g = parse_file(dot_file("cyclic_undirected_graph.dot"), false).unwrap();
    assert_eq!(g.get_edge_attribute("a", "b", "w").unwrap(), &AttributeValue::Int(7));
    assert_eq!(g.get_edge_attribute("b", "a", "w").unwrap(), &AttributeValue::Int(7));
    assert_eq!(g.get_edge_attribute("a", "c", "w").unwrap(), &AttributeValue::Float(1.5));
    assert_eq!(g.neighbors("a"), ["b", "c"]);
}

#[test]
fn test_search_fixture_contents() {
    let g = parse_file(dot_file("graph2.dot"), false).unwrap();
    assert_eq!(g.name(), "example");
    assert_eq!(g.neighbors("s"), ["A", "C"]);
    assert_eq!(g.neighbors("A"), ["t", "s"]);
    assert!(g.neighbors("t").is_empty());
    assert_eq!(g.get_vertex_attribute("s", "name").unwrap(), &AttributeValue::Text("Start".into()));
    assert_eq!(g.get_vertex_attribute("C", "h_cff").unwrap(), &AttributeValue::Float(3.14159));
    assert_eq!(g.get_edge_attribute("C", "t", "k").unwrap(), &AttributeValue::Int(2));
}

#[test]
fn test_mixed_case_fixture() {
    let g = parse_file(dot_file("mixed_case.dot"), false).unwrap();
    assert_eq!(g.kind(), GraphKind::Digraph);
    assert_eq!(g.neighbors("b"), ["c", "d"]);
    assert_eq!(g.get_edge_attribute("d", "a", "label").unwrap(), &AttributeValue::Text("to a".into()));
    assert_eq!(g.get_edge_attribute("d", "a", "on").unwrap(), &AttributeValue::Bool(true));
}

#[test]
fn test_fanout_fixture() {
    let g = parse_file(dot_file("fanout.dot"), false).unwrap();
    assert_eq!(g.neighbors("hub"), ["a", "b", "c"]);
    for target in ["a", "b", "c"] {
        assert_eq!(g.get_edge_attribute("hub", target, "k").unwrap(), &AttributeValue::Int(1));
    }
    assert_eq!(g.get_vertex_attribute("c", "tag").unwrap(), &AttributeValue::Text("leaf".into()));
    assert!(g.neighbors("lonely").is_empty());
    assert!(g.adjacency().contains_key("lonely"));
}

#[test]
fn test_unindented_fixture_with_comments() {
    let g = parse_file(dot_file("unindented_comments.dot"), false).unwrap();
    assert_eq!(g.name(), "plain");
    assert_eq!(g.neighbors("a"), ["b", "d"]);
    assert_eq!(g.neighbors("b"), ["c"]);
    assert_eq!(g.neighbors("c"), ["a"]);
    assert_eq!(g.get_edge_attribute("a", "d", "w").unwrap(), &AttributeValue::Int(1));
}
