//! Infers a structural schema from one example JSON document and emits
//! source-code scaffolding that conforms to it.
//!
//! The pipeline has two stages. A [`JsonParser`] walks the JSON text and
//! builds a [`SchemaTree`] capturing field names, value kinds, array-ness,
//! and nesting, with parent links for upward path reconstruction. A
//! generator then walks the tree and emits deterministic source text: a
//! TypeScript interface ([`emit_ts`]), an empty object literal
//! ([`emit_object`]), or a React/Formik form scaffold ([`emit_form`]).
//! [`Engine`] composes any parser with any generator.
//!
//! Inference is single-sample and best-effort: one document in, one schema
//! out, with per-field problems dropped as diagnostics rather than failing
//! the parse.
//!
//! # Quick start
//!
//! ```
//! use json_scaffold::emit_ts::{TsInterfaceConfig, TsInterfaceGenerator};
//! use json_scaffold::{Engine, JsonParser};
//!
//! let engine = Engine::new(
//!     JsonParser::default(),
//!     TsInterfaceGenerator::new(TsInterfaceConfig {
//!         name: "Sample".into(),
//!         ..Default::default()
//!     }),
//! );
//!
//! let code = engine.generate(r#"{"id": 7, "name": "widget"}"#).unwrap();
//! assert_eq!(code, "interface Sample {\n  id: number\n  name: string\n}");
//! ```

pub mod classify;
pub mod emit_form;
pub mod emit_object;
pub mod emit_ts;
pub mod engine;
pub mod parser;
pub mod transform;
pub mod tree;
pub mod writer;

pub use engine::{Engine, Generator, Inference, InvalidInput, Parser, SkippedField};
pub use parser::{JsonParser, JsonParserConfig};
pub use tree::{NodeId, SchemaNode, SchemaTree, ValueKind};
