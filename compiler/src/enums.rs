use diam_proto_dictionary::EnumItem;

use crate::{
    error::GenerateError,
    naming::kebab_to_camel_case,
    types::{CompositeField, EnumMember, Field},
};

const WORD_SEPARATOR: char = '_';

/// Build the enum wrapper `type_name` from dictionary items.
///
/// Protobuf enums need a zero value. When the first item is not zero a
/// `_..._UNDEFINED` member with code 0 is put in front, named after the
/// leading or trailing word the first and last items share.
pub fn build_enum(type_name: &str, items: &[EnumItem]) -> Result<CompositeField, GenerateError> {
    let (first, last) = match (items.first(), items.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GenerateError::EmptyEnum(type_name.to_string())),
    };

    let mut composite = CompositeField::enumeration(type_name);
    if first.code != 0 {
        composite.fields.push(member(&sentinel_name(type_name, &first.name, &last.name), 0));
    }
    for item in items {
        composite.fields.push(member(&item.name, item.code));
    }
    Ok(composite)
}

fn member(name: &str, code: i32) -> Field {
    Field::Member(EnumMember { name: kebab_to_camel_case(name), code })
}

fn sentinel_name(type_name: &str, first: &str, last: &str) -> String {
    let first: Vec<&str> = first.split(WORD_SEPARATOR).collect();
    let last: Vec<&str> = last.split(WORD_SEPARATOR).collect();

    if first[0] == last[0] {
        format!("_{}_UNDEFINED", first[0])
    } else if first[first.len() - 1] == last[last.len() - 1] {
        format!("_UNDEFINED_{}", first[first.len() - 1])
    } else {
        format!("_{}_UNDEFINED", type_name)
    }
}
