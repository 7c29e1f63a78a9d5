use std::cmp::Ordering;

use crate::{
    config::NumberingPolicy,
    types::{CompositeField, Field},
};

/// Output order: priority ascending, then field count descending, then name.
pub fn compare_definitions(a: &CompositeField, b: &CompositeField) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| b.fields.len().cmp(&a.fields.len()))
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_definitions(definitions: &mut [CompositeField]) {
    definitions.sort_by(compare_definitions);
}

/// Give every attribute field its number.
///
/// `Sequential` numbers fields 1..N in their current order. `AvpCode`
/// first sorts fields by code (stable) and then uses each code as the
/// field number, so numbers follow the protocol rather than the position.
pub fn assign_numbers(definition: &mut CompositeField, policy: NumberingPolicy) {
    match policy {
        NumberingPolicy::Sequential => {
            for (i, field) in definition.fields.iter_mut().enumerate() {
                field.set_number(i as u32 + 1);
            }
        }
        NumberingPolicy::AvpCode => {
            definition.fields.sort_by_key(Field::code);
            for field in definition.fields.iter_mut() {
                if let Field::Attribute(attr) = field {
                    attr.number = attr.avp_code;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttributeField, ProtoType};

    fn attr(code: u32) -> Field {
        Field::Attribute(AttributeField {
            name:      format!("f{}", code),
            json_name: format!("F-{}", code),
            avp_code:  code,
            datatype:  ProtoType::String,
            repeated:  false,
            required:  true,
            comment:   None,
            number:    0,
        })
    }

    fn message(name: &str, priority: u32, codes: &[u32]) -> CompositeField {
        let mut composite = CompositeField::message(name, priority);
        composite.fields = codes.iter().map(|&c| attr(c)).collect();
        composite
    }

    fn numbers(composite: &CompositeField) -> Vec<(u32, u32)> {
        composite
            .fields
            .iter()
            .map(|f| match f {
                Field::Attribute(a) => (a.avp_code, a.number),
                Field::Member(_) => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_sequential_numbering() {
        let mut msg = message("M", 0, &[264, 263, 416]);
        assign_numbers(&mut msg, NumberingPolicy::Sequential);
        assert_eq!(numbers(&msg), vec![(264, 1), (263, 2), (416, 3)]);
    }

    #[test]
    fn test_code_numbering() {
        let mut msg = message("M", 0, &[416, 263, 264]);
        assign_numbers(&mut msg, NumberingPolicy::AvpCode);
        assert_eq!(numbers(&msg), vec![(263, 263), (264, 264), (416, 416)]);
    }

    #[test]
    fn test_sort_ties() {
        let mut defs = vec![
            message("CCAnswerPB", 3, &[1, 2, 3]),
            message("Zeta", 10, &[1]),
            message("CCRequestPB", 3, &[1, 2, 3, 4, 5]),
            message("Bigger", 3, &[1, 2, 3, 4, 5, 6]),
            message("Alpha", 10, &[1]),
            message("First", 0, &[]),
        ];
        sort_definitions(&mut defs);
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Bigger", "CCRequestPB", "CCAnswerPB", "Alpha", "Zeta"]);
    }
}
