// ox-webdav/src/lib.rs
//! Client side of the Open-Xchange WebDAV interface: PROPFIND transport,
//! request bodies and multi-status parsing.

pub mod client;
pub mod error;
pub mod extract;
pub mod http;
pub mod query;
pub mod types;
pub mod xml;

pub use client::{basic_auth, WebDavClient, MULTI_STATUS};
pub use error::{Result, WebDavError};
pub use extract::{extract_contact_entries, extract_folder_entries};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse};
pub use query::{build_folder_contents_query, build_folder_list_query, CONTACTS_PATH, FOLDERS_PATH};
pub use types::{ContactProperties, FolderEntry, CONTACT_MODULE};
pub use xml::{Document, Element, Node, DAV_NS, OX_NS};

// Re-export reqwest client when feature is enabled
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
