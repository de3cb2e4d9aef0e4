/// Form scaffold emitter: renders a React/Formik function component for the
/// tree. Composes the TypeScript and empty-object emitters on a pruned copy
/// for the value types and initial state, then lays one labeled control per
/// scalar field.
mod fields;

use crate::emit_object::{self, EmptyObjectConfig};
use crate::emit_ts::{self, TsInterfaceConfig};
use crate::engine::{require_object_root, Generator, InvalidInput};
use crate::transform::{filter_tree, is_vacuous};
use crate::tree::SchemaTree;
use crate::writer::{prepend_tabs, title_case, Newline};

#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Name of the emitted component. The companion interface is named
    /// `<name>Values`. Default `MyForm`.
    pub name: String,
    /// Indent unit for the final re-indent pass. Default two spaces.
    pub tab: String,
    /// Newline convention, applied as the final formatting pass.
    pub newline: Newline,
    /// Include inline `<ErrorMessage>` markup under each field. Default on.
    pub error_messages: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: "MyForm".into(),
            tab: "  ".into(),
            newline: Newline::Lf,
            error_messages: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormGenerator {
    config: FormConfig,
}

impl FormGenerator {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }
}

impl Generator for FormGenerator {
    fn generate(&self, tree: &SchemaTree, base_indent: usize) -> Result<String, InvalidInput> {
        require_object_root(tree)?;
        Ok(emit(tree, &self.config, base_indent))
    }
}

/// Emit without validating; callers guarantee the root is an object node.
pub fn emit(tree: &SchemaTree, config: &FormConfig, base_indent: usize) -> String {
    // Vacuous branches would render as empty controls; generate everything
    // from a pruned copy and leave the caller's tree untouched.
    let trimmed = filter_tree(tree, is_vacuous);

    let form_name = &config.name;
    let title = title_case(form_name);
    let interface_name = format!("{form_name}Values");

    let interface = emit_ts::emit(
        &trimmed,
        &TsInterfaceConfig {
            name: interface_name.clone(),
            tab: config.tab.clone(),
            ..Default::default()
        },
        0,
    );

    let initial_values = emit_object::emit(
        &trimmed,
        &EmptyObjectConfig {
            name: "initialValues".into(),
            tab: config.tab.clone(),
            interface_name: Some(interface_name),
            ..Default::default()
        },
        1,
    );

    let form_fields = fields::emit_node(&trimmed, trimmed.root(), config, 6);

    let mut imports = vec![
        "Formik",
        "FormikHelpers",
        "FormikProps",
        "Form",
        "Field",
        "FieldProps",
        "FieldArray",
    ];
    if config.error_messages {
        imports.push("ErrorMessage");
    }
    let imports = imports
        .iter()
        .map(|name| format!("  {name}"))
        .collect::<Vec<_>>()
        .join(",\n");

    let output = format!(
        "import React from 'react';
import {{
{imports}
}} from 'formik';

{interface}

const {form_name}: React.FC<{{}}> = () => {{
{initial_values}

  return (
    <div>
      <h1>{title}</h1>
      <Formik
        initialValues={{initialValues}}
        onSubmit={{(values, actions) => {{
          console.log({{ values, actions }});
          alert(JSON.stringify(values, null, 2));
          actions.setSubmitting(false);
        }}}}
      >
        {{({{ values }}) => (
          <Form>
{form_fields}
          </Form>
        )}}
      </Formik>
    </div>
  );
}};

export default {form_name};"
    );

    let output = prepend_tabs(output.trim_end(), base_indent, &config.tab);
    config.newline.apply(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JsonParser;

    fn parse(input: &str) -> SchemaTree {
        JsonParser::default().parse(input).unwrap().tree
    }

    fn generate(input: &str) -> String {
        FormGenerator::default().generate(&parse(input), 0).unwrap()
    }

    #[test]
    fn test_rejects_empty_root() {
        let target = FormGenerator::default();
        assert!(matches!(
            target.generate(&parse("{}"), 0),
            Err(InvalidInput::NoFields)
        ));
    }

    #[test]
    fn test_component_skeleton() {
        let result = generate(r#"{"name": "hi"}"#);
        assert!(result.starts_with("import React from 'react';"));
        assert!(result.contains("interface MyFormValues {"));
        assert!(result.contains("const initialValues: MyFormValues = {"));
        assert!(result.contains("const MyForm: React.FC<{}> = () => {"));
        assert!(result.contains("initialValues={initialValues}"));
        assert!(result.ends_with("export default MyForm;"));
    }

    #[test]
    fn test_scalar_fields_have_labels_and_types() {
        let result = generate(r#"{"name": "hi", "subscribed": true}"#);
        assert!(result.contains("<label htmlFor=\"name\">Name</label>"));
        assert!(result.contains("<Field name=\"name\" type=\"text\" />"));
        assert!(result.contains("<Field name=\"subscribed\" type=\"checkbox\" />"));
    }

    #[test]
    fn test_nested_fields_use_dotted_names() {
        let result = generate(r#"{"object": {"string": "hi, kid", "number": 42}}"#);
        assert!(result.contains("<Field name=\"object.string\" type=\"text\" />"));
        assert!(result.contains("<Field name=\"object.number\" type=\"text\" />"));
    }

    #[test]
    fn test_scalar_array_renders_field_array() {
        let result = generate(r#"{"strings": ["hi", "buddy"]}"#);
        assert!(result.contains("<FieldArray"));
        assert!(result.contains("name=\"strings\""));
        assert!(result.contains("values.strings.map((model, index)"));
        assert!(result.contains("arrayHelpers.push('')"));
    }

    #[test]
    fn test_object_array_renders_inner_fields() {
        let result = generate(r#"{"objects": [{"string": "a", "number": 1}]}"#);
        assert!(result.contains("name=\"objects\""));
        assert!(result.contains("<Field name=\"objects.string\" type=\"text\" />"));
        assert!(result.contains("arrayHelpers.push({})"));
    }

    #[test]
    fn test_vacuous_branches_are_left_out() {
        let result = generate(r#"{"blankObject": {}, "blankArray": [], "kept": "x"}"#);
        assert!(!result.contains("blankObject"));
        assert!(!result.contains("blankArray"));
        assert!(result.contains("<Field name=\"kept\""));
    }

    #[test]
    fn test_error_messages_flag() {
        let with = generate(r#"{"name": "hi"}"#);
        assert!(with.contains("<ErrorMessage name=\"name\" />"));
        assert!(with.contains("  ErrorMessage\n} from 'formik';"));

        let without = FormGenerator::new(FormConfig {
            error_messages: false,
            ..Default::default()
        })
        .generate(&parse(r#"{"name": "hi"}"#), 0)
        .unwrap();
        assert!(!without.contains("ErrorMessage"));
    }

    #[test]
    fn test_fully_pruned_document_still_renders() {
        let result = generate(r#"{"blankObject": {}}"#);
        assert!(result.contains("interface MyFormValues {}"));
        assert!(!result.contains("blankObject"));
    }
}
