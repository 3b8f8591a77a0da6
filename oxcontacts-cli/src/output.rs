// oxcontacts-cli/src/output.rs
use anyhow::{Context, Result};
use ox_contacts::ConfigError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the vCards go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// No argument and `-` both mean standard output
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => OutputTarget::File(path.to_path_buf()),
            _ => OutputTarget::Stdout,
        }
    }

    /// Create (or truncate) the destination.
    ///
    /// Dropping the writer closes a file; standard output is only locked, never closed.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot create output file {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    Usage = 2,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Configuration mistakes are usage errors, everything else a failed run
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<ConfigError>().is_some() {
            ExitStatus::Usage
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Print a styled error message to stderr
pub fn print_error(message: &str) {
    let term = console::Term::stderr();
    let _ = term.write_line(&format!("{} {}", console::style("Error:").red(), message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_output_target_from_arg() {
        assert_eq!(OutputTarget::from_arg(None), OutputTarget::Stdout);
        assert_eq!(OutputTarget::from_arg(Some(Path::new("-"))), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("contacts.vcf"))),
            OutputTarget::File(PathBuf::from("contacts.vcf"))
        );
    }

    #[test]
    fn test_file_output_is_truncated_and_flushed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.vcf");
        std::fs::write(&path, "stale content that must disappear").unwrap();

        let target = OutputTarget::from_arg(Some(&path));
        {
            let mut out = target.open().unwrap();
            out.write_all(b"BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n").unwrap();
        }

        let mut written = String::new();
        File::open(&path).unwrap().read_to_string(&mut written).unwrap();
        assert_eq!(written, "BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n");
    }

    #[test]
    fn test_unwritable_output_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("contacts.vcf");

        let err = OutputTarget::File(path).open().err().unwrap();
        assert!(err.to_string().contains("contacts.vcf"));
        assert_eq!(ExitStatus::for_error(&err), ExitStatus::Failure);
    }

    #[test]
    fn test_exit_status_for_config_error() {
        let err = anyhow::Error::new(ConfigError::MissingUsername);
        assert_eq!(ExitStatus::for_error(&err), ExitStatus::Usage);
        assert_eq!(ExitStatus::Usage.code(), 2);
        assert_eq!(ExitStatus::Success.code(), 0);
    }
}
