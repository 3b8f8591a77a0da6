pub mod config;
pub mod error;
pub mod export;
pub mod session;
pub mod vcard;

pub use config::{ConnectionTarget, Credentials, ExportConfig, Scheme, SessionOptions, DEFAULT_TIMEOUT};
pub use error::{ConfigError, ExportError};
pub use export::{export_contacts, write_vcards, ExportSummary};
pub use session::OxSession;
pub use vcard::{make_vcard, FieldRule, VCARD_FIELDS};

// Re-export protocol types for convenience
pub use ox_webdav::{ContactProperties, WebDavError};
