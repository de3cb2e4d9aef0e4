/// Per-node form markup. Each function renders one control block at indent
/// zero and places it with `prepend_tabs`, so blocks stay independently
/// testable and composable.
use super::FormConfig;
use crate::tree::{NodeId, SchemaTree, ValueKind};
use crate::writer::{prepend_tabs, title_case};

/// Render the form body for a node. Objects spread into one block per
/// field, separated by a blank line; everything else renders one control.
pub(super) fn emit_node(
    tree: &SchemaTree,
    id: NodeId,
    config: &FormConfig,
    tabs: usize,
) -> String {
    let node = tree.node(id);
    if node.is_value() {
        if node.is_array {
            return scalar_array(tree, id, config, tabs);
        }
        return scalar_field(tree, id, config, tabs);
    }
    if node.is_array {
        return object_array(tree, id, config, tabs);
    }

    let Some(children) = &node.children else {
        return String::new();
    };
    let blocks: Vec<String> = children
        .values()
        .map(|child| emit_node(tree, *child, config, tabs))
        .collect();
    blocks.join("\n\n")
}

/// A labeled input for one scalar field.
fn scalar_field(tree: &SchemaTree, id: NodeId, config: &FormConfig, tabs: usize) -> String {
    let node = tree.node(id);
    let name = tree.dotted_name(id);
    let label = title_case(last_segment(&name));
    let input_type = input_type(node.kind);

    let mut block = format!(
        "<div>\n  <label htmlFor=\"{name}\">{label}</label>\n  <Field name=\"{name}\" type=\"{input_type}\" />"
    );
    if config.error_messages {
        block.push_str(&format!("\n  <ErrorMessage name=\"{name}\" />"));
    }
    block.push_str("\n</div>");

    prepend_tabs(&block, tabs, &config.tab)
}

/// A bare input, used inside array row markup where the label and error
/// wrapper would repeat per element.
fn bare_field(tree: &SchemaTree, id: NodeId) -> String {
    let node = tree.node(id);
    let name = tree.dotted_name(id);
    format!("<Field name=\"{name}\" type=\"{}\" />", input_type(node.kind))
}

/// Editable list of scalar values: map over the existing entries with
/// remove/insert controls, or offer an Add button when the list is empty.
fn scalar_array(tree: &SchemaTree, id: NodeId, config: &FormConfig, tabs: usize) -> String {
    let name = tree.dotted_name(id);
    let title = title_case(last_segment(&name));

    let block = format!(
        "<FieldArray
  name=\"{name}\"
  render={{arrayHelpers => (
    <div>
      <h3>{title}</h3>

      {{values.{name} && values.{name}.length > 0 ? (
        values.{name}.map((model, index) => (
          <div key={{index}}>
            <Field name={{`{name}[${{index}}]`}} />

            <button
              type=\"button\"
              onClick={{() => arrayHelpers.remove(index)}}
            >
              -
            </button>
            <button
              type=\"button\"
              onClick={{() => arrayHelpers.insert(index, '')}}
            >
              +
            </button>
          </div>
        ))
      ) : (
        <button type=\"button\" onClick={{() => arrayHelpers.push('')}}>
          Add
        </button>
      )}}
    </div>
  )}}
/>"
    );

    prepend_tabs(&block, tabs, &config.tab)
}

/// Editable list of object rows: one bare input per scalar field of the
/// representative element, plus remove/insert controls.
fn object_array(tree: &SchemaTree, id: NodeId, config: &FormConfig, tabs: usize) -> String {
    let node = tree.node(id);
    let name = tree.dotted_name(id);
    let title = title_case(last_segment(&name));

    let inner: Vec<String> = node
        .children
        .iter()
        .flat_map(|children| children.values())
        .filter(|child_id| tree.node(**child_id).is_value())
        .map(|child_id| bare_field(tree, *child_id))
        .collect();
    let inner = prepend_tabs(&inner.join("\n"), 6, "  ");

    let block = format!(
        "<FieldArray
  name=\"{name}\"
  render={{arrayHelpers => (
    <div>
      <h3>{title}</h3>

      {{values.{name} && values.{name}.length > 0 ? (
        values.{name}.map((model, index) => (
          <div key={{index}}>
{inner}

            <button
              type=\"button\"
              onClick={{() => arrayHelpers.remove(index)}}
            >
              -
            </button>
            <button
              type=\"button\"
              onClick={{() => arrayHelpers.insert(index, {{}})}}
            >
              +
            </button>
          </div>
        ))
      ) : (
        <button type=\"button\" onClick={{() => arrayHelpers.push({{}})}}>
          Add
        </button>
      )}}
    </div>
  )}}
/>"
    );

    prepend_tabs(&block, tabs, &config.tab)
}

fn input_type(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Boolean => "checkbox",
        _ => "text",
    }
}

fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
