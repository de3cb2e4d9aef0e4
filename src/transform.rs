/// Structure-preserving tree transforms.
///
/// Generators may compose, with one generator handing a transformed copy of
/// the tree to another, so filtering is copy-based: the source tree stays
/// valid for reuse and the result is a fully independent arena.
use indexmap::IndexMap;

use crate::tree::{NodeId, SchemaNode, SchemaTree, ValueKind};

/// Produce a new tree where every child for which `prune` answers true is
/// excised from its parent's mapping. Pruned nodes are dropped before their
/// subtrees are considered; the root itself is never pruned; `source` is
/// left untouched.
pub fn filter_tree<F>(source: &SchemaTree, prune: F) -> SchemaTree
where
    F: Fn(&SchemaNode) -> bool,
{
    let mut out = SchemaTree::new();
    let root = copy_filtered(source, source.root(), &mut out, &prune);
    out.set_root(root);
    out
}

fn copy_filtered<F>(source: &SchemaTree, id: NodeId, out: &mut SchemaTree, prune: &F) -> NodeId
where
    F: Fn(&SchemaNode) -> bool,
{
    let node = source.node(id);
    match &node.children {
        None => out.push(SchemaNode::value(node.kind, node.is_array, node.name.clone())),
        Some(children) => {
            let mut kept: IndexMap<String, NodeId> = IndexMap::with_capacity(children.len());
            for (key, child_id) in children {
                if prune(source.node(*child_id)) {
                    continue;
                }
                let copy = copy_filtered(source, *child_id, out, prune);
                kept.insert(key.clone(), copy);
            }
            let copy = out.push(SchemaNode::object(kept, node.is_array, node.name.clone()));
            out.wire_parents(copy);
            copy
        }
    }
}

/// Standard pruning predicate: an object node with no fields, or an array
/// node whose element kind is unknown. Used to avoid emitting vacuous
/// fields in generated scaffolding.
pub fn is_vacuous(node: &SchemaNode) -> bool {
    if node.is_object() && !node.has_children() {
        return true;
    }
    node.is_array && node.kind == ValueKind::Any
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JsonParser;

    fn parse(input: &str) -> SchemaTree {
        JsonParser::default().parse(input).unwrap().tree
    }

    const BLANKS: &str = r#"{"blankObject": {}, "blankArray": [], "kept": "x"}"#;

    #[test]
    fn test_elides_empty_structures() {
        let tree = parse(BLANKS);
        let trimmed = filter_tree(&tree, is_vacuous);

        let root = trimmed.node(trimmed.root());
        let keys: Vec<&String> = root.children.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["kept"]);
    }

    #[test]
    fn test_source_is_untouched() {
        let tree = parse(BLANKS);
        let _ = filter_tree(&tree, is_vacuous);

        let root = tree.node(tree.root());
        assert_eq!(root.children.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let tree = parse(BLANKS);
        let once = filter_tree(&tree, is_vacuous);
        let twice = filter_tree(&once, is_vacuous);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pruned_subtrees_are_not_visited() {
        let tree = parse(r#"{"doomed": {"deep": 1}, "kept": 2}"#);
        // Prune the object by name: its descendant must not survive anywhere.
        let trimmed = filter_tree(&tree, |node| node.name.as_deref() == Some("doomed"));
        assert!(trimmed.child(trimmed.root(), "doomed").is_none());
        assert_eq!(trimmed.len(), 2);
    }

    #[test]
    fn test_copy_parents_point_into_the_copy() {
        let tree = parse(r#"{"outer": {"inner": "x"}}"#);
        let trimmed = filter_tree(&tree, is_vacuous);

        let outer = trimmed.child(trimmed.root(), "outer").unwrap();
        let inner = trimmed.child(outer, "inner").unwrap();
        assert_eq!(trimmed.node(inner).parent, Some(outer));
        assert_eq!(trimmed.dotted_name(inner), "outer.inner");
    }

    #[test]
    fn test_keeps_populated_arrays() {
        let tree = parse(r#"{"strings": ["a"], "objects": [{"n": 1}], "blank": []}"#);
        let trimmed = filter_tree(&tree, is_vacuous);
        let root = trimmed.node(trimmed.root());
        let keys: Vec<&String> = root.children.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["strings", "objects"]);
    }
}
