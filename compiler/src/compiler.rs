use diam_proto_dictionary::Dictionary;
use tracing::{info, warn};

use crate::{
    builder::{FieldTreeBuilder, Node},
    config::{GeneratorConfig, RenderOptions},
    error::GenerateError,
    gen_proto::render_schema,
    naming::message_base_name,
    order::{assign_numbers, sort_definitions},
    registry::TypeRegistry,
    types::Schema,
};

/// Build the ordered, numbered schema for the configured applications.
///
/// Every command of a selected application yields a `<Base>RequestPB` and a
/// `<Base>AnswerPB` message; grouped and enumerated AVPs reached from them
/// become shared nested types.
pub fn generate(dict: &Dictionary, config: &GeneratorConfig) -> Result<Schema, GenerateError> {
    for id in &config.applications {
        if dict.app(*id).is_none() {
            warn!("Application {} is not present in the loaded dictionaries", id);
        }
    }

    let mut registry = TypeRegistry::new();
    let mut definitions = Vec::new();
    let mut priority = 0;
    {
        let mut builder = FieldTreeBuilder::new(dict, &mut registry).annotate_codes(config.annotate_codes);
        for app in dict.apps().iter().filter(|app| config.applications.contains(&app.id)) {
            let vendor_id = app.vendor_id();
            info!("Generating {} commands of application {} ({})", app.commands.len(), app.id, app.name);
            for command in &app.commands {
                let base = message_base_name(&app.name, &command.name);

                let request = Node::new(app.id, vendor_id, &command.request);
                definitions.push(builder.build(&format!("{}RequestPB", base), priority, &request)?);
                priority += 1;

                let answer = Node::new(app.id, vendor_id, &command.answer);
                definitions.push(builder.build(&format!("{}AnswerPB", base), priority, &answer)?);
                priority += 1;
            }
        }
    }

    info!("Generated {} messages and {} nested types", definitions.len(), registry.len());
    definitions.extend(registry.into_definitions());
    sort_definitions(&mut definitions);
    for definition in &mut definitions {
        assign_numbers(definition, config.numbering);
    }
    Ok(Schema { definitions })
}

/// [`generate`] followed by [`render_schema`].
pub fn compile_dictionary(
    dict: &Dictionary,
    config: &GeneratorConfig,
    options: &RenderOptions,
) -> Result<String, GenerateError> {
    let schema = generate(dict, config)?;
    Ok(render_schema(&schema, options))
}
