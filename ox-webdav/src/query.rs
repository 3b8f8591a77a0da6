// ox-webdav/src/query.rs
//! PROPFIND request bodies understood by the Open-Xchange WebDAV servlets.

use quick_xml::escape::escape;

/// Folder listing endpoint, relative to the server base path
pub const FOLDERS_PATH: &str = "/servlet/webdav.folders";

/// Folder contents endpoint, relative to the server base path
pub const CONTACTS_PATH: &str = "/servlet/webdav.contacts";

/// Query for every folder visible to the user
pub fn build_folder_list_query() -> String {
    propfind_body("")
}

/// Query for the contents of one folder
pub fn build_folder_contents_query(folder_id: &str) -> String {
    propfind_body(&format!("<ox:folder_id>{}</ox:folder_id>", escape(folder_id)))
}

// `lastsync` stays at 0 so the server always returns the full folder.
fn propfind_body(extra: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<D:propfind xmlns:D="{dav}">
    <D:prop xmlns:ox="{ox}">
        <ox:objectmode>MODIFIED</ox:objectmode>
        <ox:lastsync>0</ox:lastsync>
        {extra}
    </D:prop>
</D:propfind>"#,
        dav = crate::xml::DAV_NS,
        ox = crate::xml::OX_NS,
        extra = extra,
    )
}
