use diam_proto_dictionary::DictionaryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load dictionaries: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("AVP \"{avp}\" has data type {datatype} which is not supported yet")]
    UnsupportedDataType {
        avp:      String,
        datatype: String,
    },

    #[error("Enum {0} has no values")]
    EmptyEnum(String),

    #[error("Type {0} has deep mismatching fields. Needs manual intervention")]
    TypeConflict(String),

    #[error("Recursive nesting of grouped type {0} is not allowed")]
    RecursiveGroup(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
