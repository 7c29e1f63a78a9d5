use std::fmt;

/// Vendor id used for applications that do not declare a vendor.
pub const UNDEFINED_VENDOR_ID: u32 = 0xFFFF_FFFF;

/// How a rule refers to an AVP. Dictionaries normally use names, but a
/// numeric `avp` attribute is read as a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AvpKey {
    Name(String),
    Code(u32),
}

impl AvpKey {
    pub fn parse(text: &str) -> AvpKey {
        match text.trim().parse::<u32>() {
            Ok(code) => AvpKey::Code(code),
            Err(_) => AvpKey::Name(text.trim().to_string()),
        }
    }
}

impl fmt::Display for AvpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvpKey::Name(name) => f.write_str(name),
            AvpKey::Code(code) => write!(f, "{}", code),
        }
    }
}

impl From<&str> for AvpKey {
    fn from(text: &str) -> Self {
        AvpKey::parse(text)
    }
}

impl From<u32> for AvpKey {
    fn from(code: u32) -> Self {
        AvpKey::Code(code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub avp:      AvpKey,
    pub required: bool,
    pub min:      u32,
    /// Zero means unbounded.
    pub max:      u32,
}

/// Wire datatype of an AVP as named by the `type` attribute of `<data>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    OctetString,
    Integer32,
    Integer64,
    Unsigned32,
    Unsigned64,
    Float32,
    Float64,
    Grouped,
    Address,
    Time,
    UTF8String,
    DiameterIdentity,
    DiameterURI,
    Enumerated,
    IPFilterRule,
    QoSFilterRule,
    IPv4,
    IPv6,
    Other(String),
}

impl DataType {
    pub fn from_name(name: &str) -> DataType {
        match name {
            "OctetString"      => DataType::OctetString,
            "Integer32"        => DataType::Integer32,
            "Integer64"        => DataType::Integer64,
            "Unsigned32"       => DataType::Unsigned32,
            "Unsigned64"       => DataType::Unsigned64,
            "Float32"          => DataType::Float32,
            "Float64"          => DataType::Float64,
            "Grouped"          => DataType::Grouped,
            "Address"          => DataType::Address,
            "Time"             => DataType::Time,
            "UTF8String"       => DataType::UTF8String,
            "DiameterIdentity" => DataType::DiameterIdentity,
            "DiameterURI"      => DataType::DiameterURI,
            "Enumerated"       => DataType::Enumerated,
            "IPFilterRule"     => DataType::IPFilterRule,
            "QoSFilterRule"    => DataType::QoSFilterRule,
            "IPv4"             => DataType::IPv4,
            "IPv6"             => DataType::IPv6,
            other              => DataType::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DataType::OctetString      => "OctetString",
            DataType::Integer32        => "Integer32",
            DataType::Integer64        => "Integer64",
            DataType::Unsigned32       => "Unsigned32",
            DataType::Unsigned64       => "Unsigned64",
            DataType::Float32          => "Float32",
            DataType::Float64          => "Float64",
            DataType::Grouped          => "Grouped",
            DataType::Address          => "Address",
            DataType::Time             => "Time",
            DataType::UTF8String       => "UTF8String",
            DataType::DiameterIdentity => "DiameterIdentity",
            DataType::DiameterURI      => "DiameterURI",
            DataType::Enumerated       => "Enumerated",
            DataType::IPFilterRule     => "IPFilterRule",
            DataType::QoSFilterRule    => "QoSFilterRule",
            DataType::IPv4             => "IPv4",
            DataType::IPv6             => "IPv6",
            DataType::Other(name)      => name,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumItem {
    pub name: String,
    pub code: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvpData {
    pub datatype: DataType,
    /// Nested rules, only populated for grouped AVPs.
    pub rules:    Vec<Rule>,
    /// Enumeration values in dictionary order, only populated for enumerated AVPs.
    pub items:    Vec<EnumItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Avp {
    pub name:        String,
    pub code:        u32,
    pub vendor_id:   u32,
    pub must:        String,
    pub may:         String,
    pub must_not:    String,
    pub may_encrypt: String,
    pub data:        AvpData,
}

impl Avp {
    pub fn matches(&self, key: &AvpKey) -> bool {
        match key {
            AvpKey::Name(name) => &self.name == name,
            AvpKey::Code(code) => self.code == *code,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id:   u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub code:    u32,
    pub short:   String,
    pub name:    String,
    pub request: Vec<Rule>,
    pub answer:  Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id:       u32,
    pub kind:     String,
    pub name:     String,
    pub vendors:  Vec<Vendor>,
    pub commands: Vec<Command>,
    pub avps:     Vec<Avp>,
}

impl Application {
    /// Vendor that scopes this application's commands, or
    /// [`UNDEFINED_VENDOR_ID`] when none is declared.
    pub fn vendor_id(&self) -> u32 {
        self.vendors.first().map(|v| v.id).unwrap_or(UNDEFINED_VENDOR_ID)
    }
}
