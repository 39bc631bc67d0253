use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VCardError {
    #[error("contact needs a name or a company to produce FN")]
    MissingName,
    #[error("vCard payload is {len} bytes, a QR code holds at most {max}")]
    PayloadTooLarge { len: usize, max: usize },
    #[error("unknown vCard version: {0}")]
    UnknownVersion(String),
    #[error("unknown importer profile: {0}")]
    UnknownProfile(String),
}
