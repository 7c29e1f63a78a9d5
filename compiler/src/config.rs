use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::error::GenerateError;

/// Well known Diameter interfaces and their application ids.
pub const INTERFACES: [(&str, u32); 5] = [
    ("gy", 4),
    ("sh", 16777217),
    ("rx", 16777236),
    ("gx", 16777238),
    ("sy", 16777303),
];

pub const DEFAULT_INTERFACES: &str = "gx,gy";

/// How field numbers are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingPolicy {
    /// 1..N in dictionary rule order.
    #[default]
    Sequential,
    /// Fields sorted by AVP code and numbered with the code itself.
    AvpCode,
}

impl FromStr for NumberingPolicy {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seq" | "sequential"  => Ok(NumberingPolicy::Sequential),
            "avpcode" | "by-code" => Ok(NumberingPolicy::AvpCode),
            other => Err(GenerateError::Config(format!(
                "unknown number format \"{}\", expected seq or avpcode",
                other
            ))),
        }
    }
}

impl fmt::Display for NumberingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberingPolicy::Sequential => f.write_str("seq"),
            NumberingPolicy::AvpCode    => f.write_str("avpcode"),
        }
    }
}

pub fn interface_app_id(name: &str) -> Option<u32> {
    INTERFACES
        .iter()
        .find(|(intf, _)| intf.eq_ignore_ascii_case(name))
        .map(|&(_, id)| id)
}

/// Turn a comma separated interface list (`gx,gy`) into application ids.
/// Numeric entries are taken as application ids directly.
pub fn resolve_interfaces(list: &str) -> Result<BTreeSet<u32>, GenerateError> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            interface_app_id(entry)
                .or_else(|| entry.parse::<u32>().ok())
                .ok_or_else(|| {
                    let known: Vec<&str> = INTERFACES.iter().map(|(name, _)| *name).collect();
                    GenerateError::Config(format!(
                        "unknown interface \"{}\", expected one of [{}] or an application id",
                        entry,
                        known.join(", ")
                    ))
                })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Applications whose commands become top-level messages.
    pub applications:   BTreeSet<u32>,
    pub numbering:      NumberingPolicy,
    /// Append a `// code N` comment to every attribute field.
    pub annotate_codes: bool,
}

impl GeneratorConfig {
    pub fn new(applications: BTreeSet<u32>) -> Self {
        GeneratorConfig { applications, numbering: NumberingPolicy::default(), annotate_codes: false }
    }

    pub fn with_numbering(mut self, numbering: NumberingPolicy) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn with_annotations(mut self, annotate_codes: bool) -> Self {
        self.annotate_codes = annotate_codes;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let applications = DEFAULT_INTERFACES
            .split(',')
            .filter_map(interface_app_id)
            .collect();
        GeneratorConfig::new(applications)
    }
}

/// Options that only affect the rendered text.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit `syntax`, `package` and the well-known-type imports first.
    pub header:  bool,
    pub package: Option<String>,
}
