/// Empty object literal emitter: declares an object whose fields carry
/// zero values, ready to seed form state or test fixtures.
use crate::engine::{require_object_root, Generator, InvalidInput};
use crate::tree::{NodeId, SchemaTree, ValueKind};
use crate::writer::{prepend_tabs, CodeWriter, Newline};

#[derive(Debug, Clone)]
pub struct EmptyObjectConfig {
    /// Name of the emitted variable. Default `emptyObject`.
    pub name: String,
    /// Indent unit. Default two spaces.
    pub tab: String,
    /// Newline convention, applied as the final formatting pass.
    pub newline: Newline,
    /// Companion interface to annotate the assignment with, when set.
    pub interface_name: Option<String>,
    /// Wrap the literal in a `const <name> = ...` assignment. Default on.
    pub set_variable: bool,
}

impl Default for EmptyObjectConfig {
    fn default() -> Self {
        Self {
            name: "emptyObject".into(),
            tab: "  ".into(),
            newline: Newline::Lf,
            interface_name: None,
            set_variable: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmptyObjectGenerator {
    config: EmptyObjectConfig,
}

impl EmptyObjectGenerator {
    pub fn new(config: EmptyObjectConfig) -> Self {
        Self { config }
    }
}

impl Generator for EmptyObjectGenerator {
    fn generate(&self, tree: &SchemaTree, base_indent: usize) -> Result<String, InvalidInput> {
        require_object_root(tree)?;
        Ok(emit(tree, &self.config, base_indent))
    }
}

/// Emit without validating; callers guarantee the root is an object node.
pub fn emit(tree: &SchemaTree, config: &EmptyObjectConfig, base_indent: usize) -> String {
    let mut w = CodeWriter::with_tab(&config.tab);

    let mut head = String::new();
    if config.set_variable {
        head.push_str("const ");
        head.push_str(&config.name);
        if let Some(interface) = &config.interface_name {
            head.push_str(": ");
            head.push_str(interface);
        }
        head.push_str(" =");
    }
    if tree.node(tree.root()).has_children() {
        w.open(&head);
        emit_fields(tree, tree.root(), &mut w);
        w.close_with(";");
    } else if head.is_empty() {
        w.line("{};");
    } else {
        w.line(&format!("{head} {{}};"));
    }

    let output = w.finish();
    let output = prepend_tabs(output.trim_end(), base_indent, &config.tab);
    config.newline.apply(&output)
}

fn emit_fields(tree: &SchemaTree, id: NodeId, w: &mut CodeWriter) {
    let Some(children) = &tree.node(id).children else {
        return;
    };
    for (key, child_id) in children {
        let child = tree.node(*child_id);
        if child.is_array {
            // Every array renders empty, regardless of element kind.
            w.line(&format!("{key}: [],"));
        } else if child.is_object() {
            if child.has_children() {
                w.open(&format!("{key}:"));
                emit_fields(tree, *child_id, w);
                w.close_with(",");
            } else {
                w.line(&format!("{key}: {{}},"));
            }
        } else {
            w.line(&format!("{key}: {},", zero_value(child.kind)));
        }
    }
}

fn zero_value(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::String => "\"\"",
        ValueKind::Number => "0",
        ValueKind::Boolean => "false",
        ValueKind::Date | ValueKind::Any => "null",
        // Value nodes never carry the Object kind; the node constructors
        // enforce it.
        ValueKind::Object => unreachable!("object kind on a value node"),
    }
}
