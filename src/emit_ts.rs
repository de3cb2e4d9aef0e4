/// TypeScript interface emitter: walks a schema tree and declares one
/// interface whose fields mirror the tree.
use crate::engine::{require_object_root, Generator, InvalidInput};
use crate::tree::{NodeId, SchemaTree, ValueKind};
use crate::writer::{prepend_tabs, title_case, CodeWriter, Newline};

#[derive(Debug, Clone)]
pub struct TsInterfaceConfig {
    /// Name of the emitted interface. Default `MyInterface`.
    pub name: String,
    /// Indent unit. Default two spaces.
    pub tab: String,
    /// Newline convention, applied as the final formatting pass.
    pub newline: Newline,
    /// Emit nested objects as named companion interfaces instead of inline
    /// literals. Default off.
    pub break_out_child_objects: bool,
}

impl Default for TsInterfaceConfig {
    fn default() -> Self {
        Self {
            name: "MyInterface".into(),
            tab: "  ".into(),
            newline: Newline::Lf,
            break_out_child_objects: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TsInterfaceGenerator {
    config: TsInterfaceConfig,
}

impl TsInterfaceGenerator {
    pub fn new(config: TsInterfaceConfig) -> Self {
        Self { config }
    }
}

impl Generator for TsInterfaceGenerator {
    fn generate(&self, tree: &SchemaTree, base_indent: usize) -> Result<String, InvalidInput> {
        require_object_root(tree)?;
        Ok(emit(tree, &self.config, base_indent))
    }
}

/// Emit without validating; callers guarantee the root is an object node.
pub fn emit(tree: &SchemaTree, config: &TsInterfaceConfig, base_indent: usize) -> String {
    let mut w = CodeWriter::with_tab(&config.tab);
    let mut companions: Vec<(String, NodeId)> = Vec::new();

    if tree.node(tree.root()).has_children() {
        w.open(&format!("interface {}", config.name));
        emit_fields(tree, tree.root(), &mut w, config, &config.name, &mut companions);
        w.close();
    } else {
        // A fully-pruned tree still declares the interface.
        w.line(&format!("interface {} {{}}", config.name));
    }

    // Broken-out interfaces are appended breadth-first, so companions show
    // up in field order.
    let mut next = 0;
    while next < companions.len() {
        let (name, id) = companions[next].clone();
        next += 1;
        w.blank();
        w.open(&format!("interface {name}"));
        emit_fields(tree, id, &mut w, config, &name, &mut companions);
        w.close();
    }

    let output = w.finish();
    let output = prepend_tabs(output.trim_end(), base_indent, &config.tab);
    config.newline.apply(&output)
}

fn emit_fields(
    tree: &SchemaTree,
    id: NodeId,
    w: &mut CodeWriter,
    config: &TsInterfaceConfig,
    owner: &str,
    companions: &mut Vec<(String, NodeId)>,
) {
    let Some(children) = &tree.node(id).children else {
        return;
    };
    for (key, child_id) in children {
        let child = tree.node(*child_id);
        let array_suffix = if child.is_array { "[]" } else { "" };
        if child.is_value() {
            w.line(&format!("{key}: {}{array_suffix}", ts_type(child.kind)));
        } else if !child.has_children() {
            w.line(&format!("{key}: {{}}{array_suffix}"));
        } else if config.break_out_child_objects {
            let name = format!("{owner}{}", title_case(key).replace(' ', ""));
            w.line(&format!("{key}: {name}{array_suffix}"));
            companions.push((name, *child_id));
        } else {
            w.open(&format!("{key}:"));
            emit_fields(tree, *child_id, w, config, owner, companions);
            w.close_with(array_suffix);
        }
    }
}

fn ts_type(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::String => "string",
        ValueKind::Number => "number",
        ValueKind::Boolean => "boolean",
        ValueKind::Date => "Date",
        ValueKind::Any => "any",
        // Value nodes never carry the Object kind; the node constructors
        // enforce it.
        ValueKind::Object => unreachable!("object kind on a value node"),
    }
}
