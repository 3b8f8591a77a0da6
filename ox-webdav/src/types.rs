// ox-webdav/src/types.rs
use std::collections::BTreeMap;

/// Module name the server reports for address book folders
pub const CONTACT_MODULE: &str = "contact";

/// One folder entry of a `webdav.folders` listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub module: String,
    pub object_id: String,
}

impl FolderEntry {
    pub fn is_contact_folder(&self) -> bool {
        self.module == CONTACT_MODULE
    }
}

/// Raw contact fields keyed by their Open-Xchange local name (`last_name`, `birthday`, ...)
pub type ContactProperties = BTreeMap<String, String>;
