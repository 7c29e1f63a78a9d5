//! Diameter dictionary model and XML loader.
//!
//! Dictionaries use the go-diameter XML layout: `<application>` elements
//! holding `<vendor>`, `<command>` and `<avp>` definitions. A [`Dictionary`]
//! accumulates any number of such documents and answers the AVP lookups the
//! generator needs:
//!
//! ```
//! use diam_proto_dictionary::{AvpKey, Dictionary};
//!
//! let mut dict = Dictionary::new();
//! dict.load_str(r#"<diameter><application id="0" name="Base">
//!     <avp name="Session-Id" code="263"><data type="UTF8String"/></avp>
//! </application></diameter>"#).unwrap();
//!
//! let avp = dict.scan_avp(&AvpKey::from("Session-Id")).unwrap();
//! assert_eq!(avp.code, 263);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod dictionary;

pub use dictionary::Dictionary;
pub use error::DictionaryError;
pub use parser::parse_dictionary;
pub use types::*;
