// ox-contacts/src/export.rs
use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::session::OxSession;
use crate::vcard::make_vcard;
use std::io::Write;
use tracing::info;

/// What one export run produced
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub folders: usize,
    pub contacts: usize,
}

/// Export every contact the user can see as vCards into `out`.
///
/// Records are written as they are converted, so a failure part way through
/// leaves the records of earlier folders in `out`. The session is closed
/// before returning, whatever the outcome.
pub async fn export_contacts<W>(config: &ExportConfig, out: &mut W) -> Result<ExportSummary, ExportError>
where
    W: Write + ?Sized,
{
    let mut session = OxSession::open(config)?;
    let result = write_vcards(&session, out).await;
    session.close();

    let summary = result?;
    info!(
        folders = summary.folders,
        contacts = summary.contacts,
        "export finished"
    );
    Ok(summary)
}

/// Fetch folder by folder, writing one vCard per contact
pub async fn write_vcards<W>(session: &OxSession, out: &mut W) -> Result<ExportSummary, ExportError>
where
    W: Write + ?Sized,
{
    let mut summary = ExportSummary::default();

    for folder in session.list_contact_folders().await? {
        let contacts = session.get_contact_folder_contents(&folder).await?;

        for contact in &contacts {
            out.write_all(make_vcard(contact).as_bytes())?;
        }

        summary.folders += 1;
        summary.contacts += contacts.len();
    }

    out.flush()?;
    Ok(summary)
}
