use std::fmt;

use serde::Serialize;

/// Priority of nested enum types.
pub const ENUM_PRIORITY: u32 = 10;
/// Priority of nested grouped types.
pub const GROUP_PRIORITY: u32 = 50;

#[derive(Debug, PartialEq, Serialize)]
pub struct Schema {
    pub definitions: Vec<CompositeField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompositeKind {
    Message,
    Enum,
}

/// Protobuf type of an attribute field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProtoType {
    String,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Int32Value,
    Int64Value,
    UInt32Value,
    UInt64Value,
    Timestamp,
    /// A generated message or enum wrapper.
    Named(String),
}

impl fmt::Display for ProtoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProtoType::String      => "string",
            ProtoType::Int32       => "int32",
            ProtoType::Int64       => "int64",
            ProtoType::UInt32      => "uint32",
            ProtoType::UInt64      => "uint64",
            ProtoType::Int32Value  => "google.protobuf.Int32Value",
            ProtoType::Int64Value  => "google.protobuf.Int64Value",
            ProtoType::UInt32Value => "google.protobuf.UInt32Value",
            ProtoType::UInt64Value => "google.protobuf.UInt64Value",
            ProtoType::Timestamp   => "google.protobuf.Timestamp",
            ProtoType::Named(name) => name,
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeField {
    pub name:      String,
    /// Dictionary name of the AVP, emitted as `json_name`.
    pub json_name: String,
    pub avp_code:  u32,
    pub datatype:  ProtoType,
    pub repeated:  bool,
    pub required:  bool,
    pub comment:   Option<String>,
    /// Zero until numbering runs.
    pub number:    u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Field {
    Member(EnumMember),
    Attribute(AttributeField),
}

impl Field {
    pub fn code(&self) -> i64 {
        match self {
            Field::Member(member) => i64::from(member.code),
            Field::Attribute(attr) => i64::from(attr.avp_code),
        }
    }

    /// Enum members keep their code; only attribute fields take a number.
    pub fn set_number(&mut self, number: u32) {
        if let Field::Attribute(attr) = self {
            attr.number = number;
        }
    }
}

/// One generated message or enum wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeField {
    pub name:     String,
    pub priority: u32,
    pub kind:     CompositeKind,
    pub fields:   Vec<Field>,
}

impl CompositeField {
    pub fn message(name: impl Into<String>, priority: u32) -> Self {
        CompositeField { name: name.into(), priority, kind: CompositeKind::Message, fields: Vec::new() }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        CompositeField { name: name.into(), priority: ENUM_PRIORITY, kind: CompositeKind::Enum, fields: Vec::new() }
    }

    pub fn same_structure(&self, other: &CompositeField) -> bool {
        self.kind == other.kind && self.fields == other.fields
    }
}
