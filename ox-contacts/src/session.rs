// ox-contacts/src/session.rs
//! Authenticated session against one Open-Xchange server.

use crate::config::ExportConfig;
use crate::error::ExportError;
use ox_webdav::{
    build_folder_contents_query, build_folder_list_query, extract_contact_entries,
    extract_folder_entries, ContactProperties, ReqwestClient, WebDavClient, WebDavError,
    CONTACTS_PATH, FOLDERS_PATH,
};
use tracing::{debug, info};

/// Owns the HTTP client for the whole run.
///
/// [`OxSession::close`] releases it; dropping the session closes it too.
pub struct OxSession {
    client: Option<WebDavClient<ReqwestClient>>,
}

impl OxSession {
    pub fn open(config: &ExportConfig) -> Result<Self, ExportError> {
        let http = ReqwestClient::new(config.options.timeout).map_err(WebDavError::from)?;
        let client = WebDavClient::new(
            http,
            config.target.base_url(),
            config.credentials.authorization(),
        );

        debug!(
            server = %config.target,
            user = %config.credentials.username,
            timeout_secs = config.options.timeout.as_secs(),
            "session opened"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    pub fn is_open(&self) -> bool {
        self.client.is_some()
    }

    /// Release the connection. Calling it again does nothing.
    pub fn close(&mut self) {
        if let Some(client) = self.client.take() {
            debug!(server = client.base_url(), "session closed");
        }
    }

    fn client(&self) -> Result<&WebDavClient<ReqwestClient>, ExportError> {
        self.client.as_ref().ok_or(ExportError::SessionClosed)
    }

    /// Object ids of every folder whose module is `contact`, in server order
    pub async fn list_contact_folders(&self) -> Result<Vec<String>, ExportError> {
        let body = self
            .client()?
            .propfind(FOLDERS_PATH, build_folder_list_query())
            .await?;

        let folders: Vec<String> = extract_folder_entries(&body)?
            .into_iter()
            .filter(|entry| entry.is_contact_folder())
            .map(|entry| entry.object_id)
            .collect();

        info!(count = folders.len(), "found contact folders");
        Ok(folders)
    }

    /// Raw contact fields of every contact in one folder
    pub async fn get_contact_folder_contents(
        &self,
        folder_id: &str,
    ) -> Result<Vec<ContactProperties>, ExportError> {
        let body = self
            .client()?
            .propfind(CONTACTS_PATH, build_folder_contents_query(folder_id))
            .await?;

        let contacts = extract_contact_entries(&body)?;

        info!(folder = folder_id, count = contacts.len(), "fetched contacts");
        Ok(contacts)
    }
}

impl Drop for OxSession {
    fn drop(&mut self) {
        self.close();
    }
}
