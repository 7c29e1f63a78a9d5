use diam_proto_dictionary::{Avp, AvpKey, Dictionary};
use tracing::debug;

type Lookup = for<'d> fn(&'d Dictionary, u32, u32, &AvpKey) -> Option<&'d Avp>;

struct Tier {
    label:  &'static str,
    lookup: Lookup,
}

fn with_vendor<'d>(dict: &'d Dictionary, app_id: u32, vendor_id: u32, key: &AvpKey) -> Option<&'d Avp> {
    dict.find_avp_with_vendor(app_id, key, vendor_id)
}

fn without_vendor<'d>(dict: &'d Dictionary, app_id: u32, _vendor_id: u32, key: &AvpKey) -> Option<&'d Avp> {
    dict.find_avp(app_id, key)
}

fn globally<'d>(dict: &'d Dictionary, _app_id: u32, _vendor_id: u32, key: &AvpKey) -> Option<&'d Avp> {
    dict.scan_avp(key)
}

const TIERS: [Tier; 3] = [
    Tier { label: "with vendor id",    lookup: with_vendor },
    Tier { label: "without vendor id", lookup: without_vendor },
    Tier { label: "globally",          lookup: globally },
];

/// Find the AVP a rule refers to: first in the application under the given
/// vendor, then in the application under any vendor, then in any loaded
/// application.
pub fn resolve<'d>(dict: &'d Dictionary, app_id: u32, vendor_id: u32, key: &AvpKey) -> Option<&'d Avp> {
    for tier in &TIERS {
        match (tier.lookup)(dict, app_id, vendor_id, key) {
            Some(avp) => {
                debug!("+ Found AVP [{}] {} in application {}", key, tier.label, app_id);
                return Some(avp);
            }
            None => debug!("- Failed to find AVP [{}] {} in application {}", key, tier.label, app_id),
        }
    }
    None
}
