//! vCard encoding for business-card QR codes.
//!
//! Contact importers on phones disagree about charset labels, escaping,
//! line folding and which vCard version they read. This crate turns a
//! [`Contact`] into a payload shaped for a chosen importer [`Profile`]:
//!
//! ```
//! use bizcard_vcard::{Contact, Profile, encode};
//!
//! let contact = Contact::new("王小明").with_tel("13800000000");
//! let payload = encode(&contact, &Profile::Android.options()).unwrap();
//! assert!(payload.contains("N;CHARSET=UTF-8:王;小明;;;"));
//! ```

mod contact;
mod encode;
mod error;
mod escape;
mod fold;
mod name;
mod profile;
mod qp;

pub use contact::Contact;
pub use encode::{QR_BYTE_CAPACITY_H, encode, encode_for_qr};
pub use error::VCardError;
pub use escape::{escape_components, escape_text, escape_uri};
pub use fold::{MAX_LINE_OCTETS, fold_line, unfold};
pub use name::{NameSplit, Script, StructuredName, detect_script, split_name};
pub use profile::{CharsetPolicy, EncodeOptions, LineEnding, Profile, Version, VersionChoice};
pub use qp::encode_quoted_printable;
