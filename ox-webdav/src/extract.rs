// ox-webdav/src/extract.rs
//! Pull folder and contact entries out of multi-status response bodies.
//!
//! Every `DAV:prop` element in a response describes one server-side object.

use crate::error::{Result, WebDavError};
use crate::types::{ContactProperties, FolderEntry};
use crate::xml::{Document, Element, DAV_NS, OX_NS};
use tracing::debug;

/// Folder entries of a `webdav.folders` response, in document order.
///
/// A `prop` without a `module` or `object_id` element fails the whole response.
pub fn extract_folder_entries(body: &[u8]) -> Result<Vec<FolderEntry>> {
    let doc = Document::parse(body)?;

    let entries = doc
        .elements_by_name(DAV_NS, "prop")
        .map(folder_entry)
        .collect::<Result<Vec<_>>>()?;

    debug!(count = entries.len(), "parsed folder entries");
    Ok(entries)
}

/// Contact property maps of a `webdav.contacts` response, one per `prop`
pub fn extract_contact_entries(body: &[u8]) -> Result<Vec<ContactProperties>> {
    let doc = Document::parse(body)?;

    let entries: Vec<ContactProperties> = doc
        .elements_by_name(DAV_NS, "prop")
        .map(contact_properties)
        .collect();

    debug!(count = entries.len(), "parsed contact entries");
    Ok(entries)
}

fn folder_entry(prop: &Element) -> Result<FolderEntry> {
    let module = required(prop, "module")?;
    let object_id = required(prop, "object_id")?;

    Ok(FolderEntry {
        module: module.text().to_string(),
        object_id: object_id.text().to_string(),
    })
}

fn required<'a>(prop: &'a Element, element: &'static str) -> Result<&'a Element> {
    prop.find(OX_NS, element)
        .ok_or(WebDavError::MissingElement { element })
}

fn contact_properties(prop: &Element) -> ContactProperties {
    prop.child_elements()
        .filter(|field| field.namespace.as_deref() == Some(OX_NS))
        .map(|field| (field.local_name.clone(), field.text().to_string()))
        .collect()
}
