/// The generator contract and the two-stage pipeline driver.
///
/// Any parser implementation may pair with any generator implementation,
/// provided both honor the [`SchemaTree`] contract. The pipeline is
/// stateless and side-effect-free per call; failures are deterministic
/// given the same input.
use serde::Serialize;

use crate::tree::SchemaTree;

/// Validation failure surfaced to the caller. Never retried, never
/// swallowed; no partial output accompanies it.
#[derive(Debug, thiserror::Error)]
pub enum InvalidInput {
    #[error("no input was provided")]
    Empty,
    #[error("the input is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("the JSON input must be an object, not an array or value type")]
    NonObjectRoot,
    #[error("the input tree must be an object node")]
    NonObjectTree,
    #[error("the input must have fields in order to generate output")]
    NoFields,
}

/// A field dropped during inference, with the reason it was dropped.
/// Inference is best-effort: a bad field never fails the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedField {
    /// Dotted path of the field within the document, e.g. `outer.inner`.
    pub field: String,
    pub reason: String,
}

/// The result of schema inference: the tree plus any skipped-field
/// diagnostics accumulated along the way.
#[derive(Debug, Clone)]
pub struct Inference {
    pub tree: SchemaTree,
    pub skipped: Vec<SkippedField>,
}

pub trait Parser {
    fn parse(&self, input: &str) -> Result<Inference, InvalidInput>;
}

pub trait Generator {
    /// Emit source text for `tree`, re-indented as a whole by `base_indent`
    /// levels. Implementations never mutate the tree; a tree may be handed
    /// to several generators in turn.
    fn generate(&self, tree: &SchemaTree, base_indent: usize) -> Result<String, InvalidInput>;
}

/// Guard shared by every generator: the tree must hang off an object node
/// carrying at least one field.
pub fn require_object_root(tree: &SchemaTree) -> Result<(), InvalidInput> {
    let root = tree.node(tree.root());
    if !root.is_object() {
        return Err(InvalidInput::NonObjectTree);
    }
    if !root.has_children() {
        return Err(InvalidInput::NoFields);
    }
    Ok(())
}

/// Composes one parser with one generator into a `text -> text` pipeline.
pub struct Engine<P, G> {
    parser: P,
    generator: G,
}

impl<P: Parser, G: Generator> Engine<P, G> {
    pub fn new(parser: P, generator: G) -> Self {
        Self { parser, generator }
    }

    /// Run the two-stage pipeline: parse `input`, then emit at indent 0.
    pub fn generate(&self, input: &str) -> Result<String, InvalidInput> {
        let inference = self.parser.parse(input)?;
        self.generator.generate(&inference.tree, 0)
    }

    /// Like [`Engine::generate`], but also surfaces the parser's
    /// skipped-field diagnostics.
    pub fn generate_with_diagnostics(
        &self,
        input: &str,
    ) -> Result<(String, Vec<SkippedField>), InvalidInput> {
        let inference = self.parser.parse(input)?;
        let output = self.generator.generate(&inference.tree, 0)?;
        Ok((output, inference.skipped))
    }
}
