use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::translate;

/// Name this component signs its trace entries with.
pub const MODULE_NAME: &str = "NaturalMath";

pub type Measures = BTreeMap<String, f64>;

/// A question tree exchanged with the pipeline. Only sentences are
/// translated; every other tree is kept verbatim and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Tree {
    Sentence { value: String },
    Other(Value),
}

impl Tree {
    pub fn sentence(value: impl Into<String>) -> Tree {
        Tree::Sentence {
            value: value.into(),
        }
    }
}

impl From<Value> for Tree {
    fn from(tree: Value) -> Self {
        let sentence = match (tree.get("type"), tree.get("value")) {
            (Some(Value::String(kind)), Some(Value::String(value))) if kind == "sentence" => {
                Some(value.clone())
            }
            _ => None,
        };

        match sentence {
            Some(value) => Tree::Sentence { value },
            None => Tree::Other(tree),
        }
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        match tree {
            Tree::Sentence { value } => json!({"type": "sentence", "value": value}),
            Tree::Other(tree) => tree,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceItem {
    pub module: String,
    pub tree: Tree,
    #[serde(default)]
    pub measures: Measures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub language: String,
    pub tree: Tree,
    #[serde(default)]
    pub measures: Measures,
    #[serde(default)]
    pub trace: Vec<TraceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub language: String,
    pub tree: Tree,
    #[serde(default)]
    pub measures: Measures,
    #[serde(default)]
    pub trace: Vec<TraceItem>,
}

fn normalize(sentence: &str) -> String {
    sentence.replace(' ', "").to_lowercase()
}

/// Translates one sentence for the pipeline.
///
/// Returns `None` when the sentence does not translate, or when the
/// translation only differs from it by spacing or case.
pub fn handle(sentence: &str) -> Option<(String, TraceItem)> {
    let translated = translate(sentence).ok()?;

    if normalize(&translated) == normalize(sentence) {
        return None;
    }

    let item = TraceItem {
        module: String::from(MODULE_NAME),
        tree: Tree::sentence(translated.clone()),
        measures: Measures::new(),
    };

    Some((translated, item))
}

pub struct RequestHandler {
    request: Request,
}

impl RequestHandler {
    pub fn new(request: Request) -> Self {
        RequestHandler { request }
    }

    /// At most one response: the translated sentence, with this module
    /// appended to the request's trace.
    pub fn answer(&self) -> Vec<Response> {
        let Tree::Sentence { value } = &self.request.tree else {
            return vec![];
        };

        let Some((translated, item)) = handle(value) else {
            return vec![];
        };

        let mut trace = self.request.trace.clone();
        trace.push(item);

        vec![Response {
            language: self.request.language.clone(),
            tree: Tree::sentence(translated),
            measures: Measures::new(),
            trace,
        }]
    }
}
