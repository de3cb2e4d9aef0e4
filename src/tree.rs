/// The inferred schema tree: an arena of nodes describing the shape of one
/// example JSON document. Built once per parse, transformed by copy, and
/// discarded after generation.
use indexmap::IndexMap;

/// Classification tag for a node's value.
/// `Any` denotes unknown or empty (a `null`, or an empty array).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    String,
    Number,
    Boolean,
    Date,
    Any,
}

/// Index of a node within its owning [`SchemaTree`] arena.
///
/// Ids are only minted by the tree that owns the node; an id is meaningless
/// in any other tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// One node of the schema tree.
///
/// A node is exactly one of: a value node (`children` is `None`) or an
/// object node (`children` is a mapping, possibly empty, and `kind` is
/// [`ValueKind::Object`]). `is_array` marks that the value occurred inside
/// a JSON array; for object nodes it means "array of objects", where the
/// node holds the schema of one representative element.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub kind: ValueKind,
    pub is_array: bool,
    /// The originating JSON property key; `None` only for the root.
    pub name: Option<String>,
    /// Field mapping in document order; `None` for value nodes.
    pub children: Option<IndexMap<String, NodeId>>,
    /// Non-owning back-reference, used only for upward path reconstruction.
    pub parent: Option<NodeId>,
}

impl SchemaNode {
    /// A scalar-valued node. `kind` must not be `Object`.
    pub fn value(kind: ValueKind, is_array: bool, name: Option<String>) -> Self {
        debug_assert!(kind != ValueKind::Object, "value nodes never carry the Object kind");
        Self {
            kind,
            is_array,
            name,
            children: None,
            parent: None,
        }
    }

    /// An object node owning the given field mapping.
    pub fn object(children: IndexMap<String, NodeId>, is_array: bool, name: Option<String>) -> Self {
        Self {
            kind: ValueKind::Object,
            is_array,
            name,
            children: Some(children),
            parent: None,
        }
    }

    pub fn is_object(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_value(&self) -> bool {
        self.children.is_none()
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// An arena-backed tree of [`SchemaNode`]s.
///
/// The arena owns every node; parent links are plain indices into the same
/// arena, so cloning the tree yields a fully independent deep copy whose
/// parent links point into the clone.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTree {
    nodes: Vec<SchemaNode>,
    root: NodeId,
}

impl SchemaTree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NodeId(0),
        }
    }

    pub(crate) fn push(&mut self, node: SchemaNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = id;
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SchemaNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Point every child of `id` back at `id`. Called once per object node,
    /// after its full field mapping exists.
    pub(crate) fn wire_parents(&mut self, id: NodeId) {
        let child_ids: Vec<NodeId> = match &self.nodes[id.0 as usize].children {
            Some(children) => children.values().copied().collect(),
            None => return,
        };
        for child in child_ids {
            self.nodes[child.0 as usize].parent = Some(id);
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &SchemaNode {
        &self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a direct child of `id` by field name.
    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.node(id)
            .children
            .as_ref()
            .and_then(|c| c.get(name).copied())
    }

    /// Reconstruct the dotted ancestry path of a node, e.g. `objects.string`.
    /// The unnamed root contributes nothing.
    pub fn dotted_name(&self, id: NodeId) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            let node = self.node(i);
            if let Some(name) = &node.name {
                parts.push(name);
            }
            cur = node.parent;
        }
        parts.reverse();
        parts.join(".")
    }
}
