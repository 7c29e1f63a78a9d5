use std::str::FromStr;

use xmltree::{Element, XMLNode};

use crate::{
    error::DictionaryError,
    types::{Application, Avp, AvpData, AvpKey, Command, DataType, EnumItem, Rule, Vendor},
};

trait XmlHelper {
    fn required_attribute(&self, attribute: &str) -> Result<&str, DictionaryError>;
    fn optional_attribute(&self, attribute: &str) -> Option<&str>;
    fn number<T: FromStr>(&self, attribute: &str, default: Option<T>) -> Result<T, DictionaryError>;
    fn flag(&self, attribute: &str) -> bool;
    fn child_elements<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a Element> + 'a>;
}

impl XmlHelper for Element {
    fn required_attribute(&self, attribute: &str) -> Result<&str, DictionaryError> {
        self.optional_attribute(attribute)
            .ok_or_else(|| DictionaryError::MissingAttribute {
                element:   self.name.clone(),
                attribute: attribute.to_string(),
            })
    }

    fn optional_attribute(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    fn number<T: FromStr>(&self, attribute: &str, default: Option<T>) -> Result<T, DictionaryError> {
        let text = match (self.optional_attribute(attribute), default) {
            (Some(text), _)       => text,
            (None, Some(default)) => return Ok(default),
            (None, None)          => self.required_attribute(attribute)?,
        };
        text.trim().parse::<T>().map_err(|_| DictionaryError::InvalidNumber {
            element:   self.name.clone(),
            attribute: attribute.to_string(),
            value:     text.to_string(),
        })
    }

    fn flag(&self, attribute: &str) -> bool {
        matches!(
            self.optional_attribute(attribute).map(str::trim),
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1"
        )
    }

    fn child_elements<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a Element> + 'a> {
        Box::new(
            self.children
                .iter()
                .filter_map(XMLNode::as_element)
                .filter(move |e| e.name == name),
        )
    }
}

/// Parse one dictionary document into its applications, in document order.
/// `origin` only labels errors.
pub fn parse_dictionary(text: &str, origin: &str) -> Result<Vec<Application>, DictionaryError> {
    let root = Element::parse(text.as_bytes()).map_err(|source| DictionaryError::Xml {
        origin: origin.to_string(),
        source,
    })?;
    if root.name != "diameter" {
        return Err(DictionaryError::UnexpectedRoot(root.name));
    }
    root.child_elements("application").map(parse_application).collect()
}

fn parse_application(element: &Element) -> Result<Application, DictionaryError> {
    Ok(Application {
        id:       element.number("id", None)?,
        kind:     element.optional_attribute("type").unwrap_or_default().to_string(),
        name:     element.optional_attribute("name").unwrap_or_default().to_string(),
        vendors:  element.child_elements("vendor").map(parse_vendor).collect::<Result<_, _>>()?,
        commands: element.child_elements("command").map(parse_command).collect::<Result<_, _>>()?,
        avps:     element.child_elements("avp").map(parse_avp).collect::<Result<_, _>>()?,
    })
}

fn parse_vendor(element: &Element) -> Result<Vendor, DictionaryError> {
    Ok(Vendor {
        id:   element.number("id", None)?,
        name: element.optional_attribute("name").unwrap_or_default().to_string(),
    })
}

fn parse_command(element: &Element) -> Result<Command, DictionaryError> {
    let rules_of = |section: &str| -> Result<Vec<Rule>, DictionaryError> {
        match element.child_elements(section).next() {
            Some(section) => parse_rules(section),
            None          => Ok(Vec::new()),
        }
    };
    Ok(Command {
        code:    element.number("code", None)?,
        short:   element.optional_attribute("short").unwrap_or_default().to_string(),
        name:    element.required_attribute("name")?.to_string(),
        request: rules_of("request")?,
        answer:  rules_of("answer")?,
    })
}

fn parse_rules(element: &Element) -> Result<Vec<Rule>, DictionaryError> {
    element.child_elements("rule").map(parse_rule).collect()
}

fn parse_rule(element: &Element) -> Result<Rule, DictionaryError> {
    Ok(Rule {
        avp:      AvpKey::parse(element.required_attribute("avp")?),
        required: element.flag("required"),
        min:      element.number("min", Some(0))?,
        max:      element.number("max", Some(0))?,
    })
}

fn parse_avp(element: &Element) -> Result<Avp, DictionaryError> {
    let data = match element.child_elements("data").next() {
        Some(data) => parse_data(data)?,
        None => {
            return Err(DictionaryError::MissingAttribute {
                element:   format!("avp name=\"{}\"", element.optional_attribute("name").unwrap_or_default()),
                attribute: "data".to_string(),
            })
        }
    };
    Ok(Avp {
        name:        element.required_attribute("name")?.to_string(),
        code:        element.number("code", None)?,
        vendor_id:   element.number("vendor-id", Some(0))?,
        must:        element.optional_attribute("must").unwrap_or_default().to_string(),
        may:         element.optional_attribute("may").unwrap_or_default().to_string(),
        must_not:    element.optional_attribute("must-not").unwrap_or_default().to_string(),
        may_encrypt: element.optional_attribute("may-encrypt").unwrap_or_default().to_string(),
        data,
    })
}

fn parse_data(element: &Element) -> Result<AvpData, DictionaryError> {
    Ok(AvpData {
        datatype: DataType::from_name(element.required_attribute("type")?),
        rules:    parse_rules(element)?,
        items:    element.child_elements("item").map(parse_item).collect::<Result<_, _>>()?,
    })
}

fn parse_item(element: &Element) -> Result<EnumItem, DictionaryError> {
    Ok(EnumItem {
        name: element.required_attribute("name")?.to_string(),
        code: element.number("code", None)?,
    })
}
