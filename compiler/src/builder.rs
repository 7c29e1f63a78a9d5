use diam_proto_dictionary::{Avp, DataType, Dictionary, Rule};
use tracing::{debug, warn};

use crate::{
    enums::build_enum,
    error::GenerateError,
    naming::{to_field_name, to_type_name},
    registry::TypeRegistry,
    resolver::resolve,
    types::{AttributeField, CompositeField, Field, ProtoType, GROUP_PRIORITY},
    utils::is_identifier,
};

/// The rules being turned into a message, and where to look their AVPs up.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    pub app_id:    u32,
    pub vendor_id: u32,
    pub rules:     &'a [Rule],
}

impl<'a> Node<'a> {
    pub fn new(app_id: u32, vendor_id: u32, rules: &'a [Rule]) -> Self {
        Node { app_id, vendor_id, rules }
    }
}

/// Turns rule lists into message trees. Nested grouped and enum types are
/// registered in the borrowed [`TypeRegistry`] as they are built.
pub struct FieldTreeBuilder<'d, 'r> {
    dict:           &'d Dictionary,
    registry:       &'r mut TypeRegistry,
    annotate_codes: bool,
    /// Grouped types currently being built, outermost first.
    in_progress:    Vec<String>,
}

impl<'d, 'r> FieldTreeBuilder<'d, 'r> {
    pub fn new(dict: &'d Dictionary, registry: &'r mut TypeRegistry) -> Self {
        FieldTreeBuilder { dict, registry, annotate_codes: false, in_progress: Vec::new() }
    }

    pub fn annotate_codes(mut self, annotate: bool) -> Self {
        self.annotate_codes = annotate;
        self
    }

    /// Build message `name` from `node.rules`. Rules whose AVP cannot be
    /// found anywhere are skipped.
    pub fn build(&mut self, name: &str, priority: u32, node: &Node<'_>) -> Result<CompositeField, GenerateError> {
        let dict = self.dict;
        let mut composite = CompositeField::message(name, priority);

        for rule in node.rules {
            let Some(avp) = resolve(dict, node.app_id, node.vendor_id, &rule.avp) else {
                debug!("Skipping rule for unknown AVP [{}] in {}", rule.avp, name);
                continue;
            };

            let field_name = to_field_name(&avp.name);
            if !is_identifier(&field_name) {
                warn!("AVP {} produces an invalid field name {}", avp.name, field_name);
            }
            let datatype = self.datatype_for(avp, rule, node)?;

            composite.fields.push(Field::Attribute(AttributeField {
                name:      field_name,
                json_name: avp.name.clone(),
                avp_code:  avp.code,
                datatype,
                repeated:  rule.max != 1,
                required:  rule.required,
                comment:   self.annotate_codes.then(|| annotation(avp)),
                number:    0,
            }));
        }
        Ok(composite)
    }

    fn datatype_for(&mut self, avp: &Avp, rule: &Rule, node: &Node<'_>) -> Result<ProtoType, GenerateError> {
        let optional = !rule.required;
        let datatype = match &avp.data.datatype {
            DataType::OctetString
            | DataType::UTF8String
            | DataType::DiameterIdentity
            | DataType::Address
            | DataType::DiameterURI
            | DataType::IPFilterRule => ProtoType::String,

            DataType::Enumerated => {
                let type_name = format!("{}Enum", to_type_name(&avp.name));
                let composite = build_enum(&type_name, &avp.data.items)?;
                self.registry.register(composite)?;
                ProtoType::Named(type_name)
            }

            DataType::Grouped => {
                let type_name = to_type_name(&avp.name);
                if self.in_progress.contains(&type_name) {
                    return Err(GenerateError::RecursiveGroup(type_name));
                }
                self.in_progress.push(type_name.clone());
                let nested = Node::new(node.app_id, node.vendor_id, &avp.data.rules);
                let built = self.build(&type_name, GROUP_PRIORITY, &nested);
                self.in_progress.pop();
                self.registry.register(built?)?;
                ProtoType::Named(type_name)
            }

            DataType::Unsigned32 if optional => ProtoType::UInt32Value,
            DataType::Unsigned32             => ProtoType::UInt32,
            DataType::Unsigned64 if optional => ProtoType::UInt64Value,
            DataType::Unsigned64             => ProtoType::UInt64,
            DataType::Integer32 if optional  => ProtoType::Int32Value,
            DataType::Integer32              => ProtoType::Int32,
            DataType::Integer64 if optional  => ProtoType::Int64Value,
            DataType::Integer64              => ProtoType::Int64,

            DataType::Time => ProtoType::Timestamp,

            other => {
                return Err(GenerateError::UnsupportedDataType {
                    avp:      avp.name.clone(),
                    datatype: other.to_string(),
                })
            }
        };
        Ok(datatype)
    }
}

fn annotation(avp: &Avp) -> String {
    if avp.vendor_id == 0 {
        format!("code {}", avp.code)
    } else {
        format!("code {}, vendor {}", avp.code, avp.vendor_id)
    }
}
