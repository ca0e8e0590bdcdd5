use serde_json::json;

use super::handler::{handle, Measures, Request, RequestHandler, TraceItem, Tree, MODULE_NAME};

fn request(tree: Tree) -> Request {
    Request {
        id: String::from("1"),
        language: String::from("en"),
        tree,
        measures: Measures::new(),
        trace: vec![],
    }
}

#[test]
fn test_handle_translates() {
    let (translated, item) = handle("integral of x^y").unwrap();

    assert_eq!(translated, "Integrate(x^y, y)");
    assert_eq!(item.module, MODULE_NAME);
    assert_eq!(item.tree, Tree::sentence("Integrate(x^y, y)"));
}

#[test]
fn test_handle_skips_unchanged() {
    assert!(handle("x").is_none());
    assert!(handle("f(x, y)").is_none());
    // Spacing and case are ignored when comparing.
    assert!(handle("a + b").is_none());
    assert!(handle("F ( X )").is_none());
}

#[test]
fn test_handle_swallows_errors() {
    assert!(handle("*$$!-|").is_none());
    assert!(handle("sum a*b").is_none());
    assert!(handle("(x").is_none());
}

#[test]
fn test_answer_appends_trace() {
    let mut req = request(Tree::sentence("sum i"));
    req.trace.push(TraceItem {
        module: String::from("input"),
        tree: Tree::sentence("sum i"),
        measures: Measures::new(),
    });

    let responses = RequestHandler::new(req).answer();

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].language, "en");
    assert_eq!(responses[0].tree, Tree::sentence("Sum(i, i, 1, Infinity)"));
    assert_eq!(responses[0].trace.len(), 2);
    assert_eq!(responses[0].trace[0].module, "input");
    assert_eq!(responses[0].trace[1].module, MODULE_NAME);
}

#[test]
fn test_answer_ignores_non_sentences() {
    assert!(RequestHandler::new(request(Tree::Other(json!({"type": "resource", "value": "x"}))))
        .answer()
        .is_empty());
}

#[test]
fn test_answer_no_result_for_identity() {
    assert!(RequestHandler::new(request(Tree::sentence("x"))).answer().is_empty());
}

#[test]
fn test_request_from_json() {
    let json = r#"{
        "id": "1",
        "language": "en",
        "tree": {"type": "sentence", "value": "integral of x"},
        "measures": {},
        "trace": [{"module": "input", "tree": {"type": "sentence", "value": "integral of x"}, "measures": {}}]
    }"#;
    let req: Request = serde_json::from_str(json).unwrap();

    assert_eq!(req.tree, Tree::sentence("integral of x"));
    assert_eq!(req.trace.len(), 1);

    let responses = RequestHandler::new(req).answer();
    assert_eq!(responses[0].tree, Tree::sentence("Integrate(x, x)"));
}

#[test]
fn test_unknown_tree_type_is_opaque() {
    let json = r#"{"id": "1", "language": "en", "tree": {"type": "resource", "value": "George Washington"}}"#;
    let req: Request = serde_json::from_str(json).unwrap();

    assert_eq!(
        req.tree,
        Tree::Other(json!({"type": "resource", "value": "George Washington"}))
    );
    assert!(req.trace.is_empty());
    assert!(RequestHandler::new(req).answer().is_empty());
}

#[test]
fn test_response_to_json() {
    let responses = RequestHandler::new(request(Tree::sentence("approximate 4/5"))).answer();
    let json = serde_json::to_value(&responses).unwrap();

    assert_eq!(json[0]["tree"]["type"], "sentence");
    assert_eq!(json[0]["tree"]["value"], "Approx(4/5)");
    assert_eq!(json[0]["trace"][0]["module"], MODULE_NAME);
}

#[test]
fn test_answer_keeps_foreign_trace_entries() {
    let triple = json!({
        "type": "triple",
        "subject": {"type": "resource", "value": "Pythagoras"},
        "predicate": {"type": "resource", "value": "birth date"},
        "object": {"type": "missing"}
    });
    let request = json!({
        "id": "1",
        "language": "en",
        "tree": {"type": "sentence", "value": "sum i"},
        "measures": {"relevance": 0.5},
        "trace": [
            {"module": "input", "tree": {"type": "sentence", "value": "sum i"}, "measures": {}},
            {"module": "triples", "tree": triple.clone(), "measures": {"accuracy": 0.25}}
        ]
    });

    let req: Request = serde_json::from_value(request).unwrap();
    let responses = RequestHandler::new(req).answer();
    let json = serde_json::to_value(&responses).unwrap();

    let trace = json[0]["trace"].as_array().unwrap();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0]["tree"], json!({"type": "sentence", "value": "sum i"}));
    assert_eq!(trace[1]["module"], "triples");
    assert_eq!(trace[1]["tree"], triple);
    assert_eq!(trace[1]["measures"]["accuracy"], 0.25);
    assert_eq!(trace[2]["module"], MODULE_NAME);
    assert_eq!(trace[2]["tree"]["value"], "Sum(i, i, 1, Infinity)");
}
