/// Schema inference: walks one example JSON document and assembles a
/// [`SchemaTree`] describing its shape.
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::classify::classify;
use crate::engine::{Inference, InvalidInput, Parser, SkippedField};
use crate::tree::{NodeId, SchemaNode, SchemaTree, ValueKind};

/// Per-field failure during inference. Swallowed by the parser: the field
/// is dropped with a diagnostic and its siblings carry on.
#[derive(Debug, thiserror::Error)]
enum FieldError {
    #[error("nesting exceeds the configured limit of {0} levels")]
    TooDeep(usize),
}

#[derive(Debug, Clone)]
pub struct JsonParserConfig {
    /// Fields nested deeper than this are skipped rather than failing the
    /// whole parse.
    pub max_depth: usize,
}

impl Default for JsonParserConfig {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Infers a [`SchemaTree`] from JSON text. The top-level value must be an
/// object; arrays and bare scalars are rejected, since only objects are
/// modeled as document roots.
#[derive(Debug, Clone, Default)]
pub struct JsonParser {
    config: JsonParserConfig,
}

impl JsonParser {
    pub fn new(config: JsonParserConfig) -> Self {
        Self { config }
    }

    pub fn parse(&self, input: &str) -> Result<Inference, InvalidInput> {
        if input.trim().is_empty() {
            return Err(InvalidInput::Empty);
        }

        let value: Value = serde_json::from_str(input)?;
        let map = match &value {
            Value::Object(map) => map,
            _ => return Err(InvalidInput::NonObjectRoot),
        };

        let mut tree = SchemaTree::new();
        let mut skipped = Vec::new();
        let root = self.parse_object(&mut tree, map, None, "", 0, &mut skipped);
        tree.set_root(root);

        Ok(Inference { tree, skipped })
    }

    /// Build an object node: infer each field in document order, attach the
    /// mapping, then wire every child's parent pointer in a second pass so
    /// children reference the finished node.
    fn parse_object(
        &self,
        tree: &mut SchemaTree,
        map: &Map<String, Value>,
        name: Option<&str>,
        path: &str,
        depth: usize,
        skipped: &mut Vec<SkippedField>,
    ) -> NodeId {
        let mut children: IndexMap<String, NodeId> = IndexMap::with_capacity(map.len());

        for (key, value) in map {
            let field_path = join_path(path, key);
            match self.parse_field(tree, key, value, &field_path, depth + 1, skipped) {
                Ok(id) => {
                    children.insert(key.clone(), id);
                }
                Err(err) => skipped.push(SkippedField {
                    field: field_path,
                    reason: err.to_string(),
                }),
            }
        }

        let node = tree.push(SchemaNode::object(children, false, name.map(str::to_owned)));
        tree.wire_parents(node);
        node
    }

    fn parse_field(
        &self,
        tree: &mut SchemaTree,
        key: &str,
        value: &Value,
        path: &str,
        depth: usize,
        skipped: &mut Vec<SkippedField>,
    ) -> Result<NodeId, FieldError> {
        if depth > self.config.max_depth {
            return Err(FieldError::TooDeep(self.config.max_depth));
        }

        Ok(match value {
            Value::Array(items) => self.parse_array(tree, key, items, path, depth, skipped),
            Value::Object(map) => self.parse_object(tree, map, Some(key), path, depth, skipped),
            scalar => tree.push(SchemaNode::value(
                classify(scalar),
                false,
                Some(key.to_owned()),
            )),
        })
    }

    /// One node stands in for every element of an array: the schema comes
    /// from element 0 alone, and later elements are never inspected, so
    /// heterogeneous arrays degrade to the first element's shape.
    fn parse_array(
        &self,
        tree: &mut SchemaTree,
        key: &str,
        items: &[Value],
        path: &str,
        depth: usize,
        skipped: &mut Vec<SkippedField>,
    ) -> NodeId {
        match items.first() {
            Some(Value::Object(map)) => {
                let id = self.parse_object(tree, map, Some(key), path, depth, skipped);
                tree.node_mut(id).is_array = true;
                id
            }
            Some(first) => tree.push(SchemaNode::value(
                classify(first),
                true,
                Some(key.to_owned()),
            )),
            None => tree.push(SchemaNode::value(
                ValueKind::Any,
                true,
                Some(key.to_owned()),
            )),
        }
    }
}

impl Parser for JsonParser {
    fn parse(&self, input: &str) -> Result<Inference, InvalidInput> {
        JsonParser::parse(self, input)
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}
