//! diam-proto
//!
//! Turns Diameter XML dictionaries into protobuf schemas.
//!
//! - `load_dictionaries` + `generate` + `render_schema` (re-exported)
//! - `generate_from_paths`: the whole pipeline in one call
//! - `schema_to_json`: inspect the generated message trees

use std::path::Path;

pub use diam_proto_compiler::{
    compile_dictionary, generate, render_blocks, render_schema, resolve_interfaces, CompositeField,
    GenerateError, GeneratorConfig, NumberingPolicy, RenderOptions, Schema,
};
pub use diam_proto_dictionary::{Dictionary, DictionaryError};

/// Load every dictionary file or directory in `paths`, in order.
pub fn load_dictionaries<I, P>(paths: I) -> Result<Dictionary, GenerateError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut dict = Dictionary::new();
    dict.load_paths(paths)?;
    Ok(dict)
}

/// Load dictionaries from `paths` and render the schema for `config`.
pub fn generate_from_paths<I, P>(
    paths: I,
    config: &GeneratorConfig,
    options: &RenderOptions,
) -> Result<String, GenerateError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let dict = load_dictionaries(paths)?;
    compile_dictionary(&dict, config, options)
}

/// Pretty-printed JSON view of a generated schema.
pub fn schema_to_json(schema: &Schema) -> Result<String, GenerateError> {
    Ok(serde_json::to_string_pretty(schema)?)
}

pub mod types {
    pub use diam_proto_compiler::types::*;
}

pub mod dictionary {
    pub use diam_proto_dictionary::*;
}

pub mod error {
    pub use diam_proto_compiler::error::GenerateError;
    pub use diam_proto_dictionary::error::DictionaryError;
}
