use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in {origin}: {source}")]
    Xml {
        origin: String,
        #[source]
        source: xmltree::ParseError,
    },

    #[error("Expected <diameter> root element but found <{0}>")]
    UnexpectedRoot(String),

    #[error("Missing attribute \"{attribute}\" on <{element}>")]
    MissingAttribute {
        element:   String,
        attribute: String,
    },

    #[error("Invalid number \"{value}\" for attribute \"{attribute}\" on <{element}>")]
    InvalidNumber {
        element:   String,
        attribute: String,
        value:     String,
    },
}
