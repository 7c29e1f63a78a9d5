use crate::{
    config::RenderOptions,
    types::{AttributeField, CompositeField, CompositeKind, EnumMember, Field, Schema},
    utils::quote,
};

const WELL_KNOWN_IMPORTS: [&str; 2] = [
    "google/protobuf/timestamp.proto",
    "google/protobuf/wrappers.proto",
];

/// Renders the whole schema, each definition followed by a blank line.
pub fn render_schema(schema: &Schema, options: &RenderOptions) -> String {
    let mut proto = String::new();
    if options.header {
        proto.push_str(&render_header(options));
    }
    for block in render_blocks(schema) {
        proto.push_str(&block);
        proto.push('\n');
    }
    proto
}

/// One block per definition, in schema order.
pub fn render_blocks(schema: &Schema) -> Vec<String> {
    schema.definitions.iter().map(render_definition).collect()
}

fn render_header(options: &RenderOptions) -> String {
    let mut lines = vec!["syntax = \"proto3\";".to_string(), String::new()];
    if let Some(package) = &options.package {
        lines.push(format!("package {};", package));
        lines.push(String::new());
    }
    for import in WELL_KNOWN_IMPORTS {
        lines.push(format!("import {};", quote(import)));
    }
    lines.push(String::new());
    lines.push(String::new());
    lines.join("\n")
}

/// Enums are wrapped in a message holding a single `Value` field so that
/// their member names stay scoped to the wrapper.
pub fn render_definition(definition: &CompositeField) -> String {
    let mut lines = vec![format!("message {} {{", definition.name)];
    if definition.kind == CompositeKind::Enum {
        lines.push("\tvalue Value = 1;".to_string());
        lines.push("\tenum value {".to_string());
    }
    for field in &definition.fields {
        lines.push(match field {
            Field::Member(member)  => render_member(member),
            Field::Attribute(attr) => render_attribute(attr),
        });
    }
    if definition.kind == CompositeKind::Enum {
        lines.push("\t}".to_string());
    }
    lines.push("}".to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn render_member(member: &EnumMember) -> String {
    format!("\t\t{} = {};", member.name, member.code)
}

fn render_attribute(attr: &AttributeField) -> String {
    let mut line = String::from("\t");
    if attr.repeated {
        line.push_str("repeated ");
    }
    line.push_str(&format!(
        "{} {} = {} [json_name = {}];",
        attr.datatype,
        attr.name,
        attr.number,
        quote(&attr.json_name)
    ));
    if let Some(comment) = &attr.comment {
        line.push_str(" // ");
        line.push_str(comment);
    }
    line
}
