// oxcontacts-cli/src/prompt.rs
use anyhow::Result;
use dialoguer::{Input, Password};
use ox_contacts::{ConfigError, Credentials};
use std::io::{self, BufRead, IsTerminal};

/// Take the credentials from the command line, asking for whatever is missing.
///
/// Without a terminal on stdin the missing values are read one per line
/// from stdin instead, username first.
pub fn resolve_credentials(user: Option<String>, password: Option<String>) -> Result<Credentials> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        resolve_with(user, password, None)
    } else {
        resolve_with(user, password, Some(&mut stdin.lock()))
    }
}

fn resolve_with(
    user: Option<String>,
    password: Option<String>,
    mut piped: Option<&mut dyn BufRead>,
) -> Result<Credentials> {
    let username = match (given(user), piped.as_deref_mut()) {
        (Some(user), _) => user,
        (None, Some(reader)) => read_line(reader)?,
        (None, None) => Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };

    if username.trim().is_empty() {
        return Err(ConfigError::MissingUsername.into());
    }

    // Prompt for password without echo
    let password = match (given(password), piped.as_deref_mut()) {
        (Some(password), _) => password,
        (None, Some(reader)) => read_line(reader)?,
        (None, None) => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    Ok(Credentials::new(username, password))
}

/// One line without its line ending; end of input gives an empty string
fn read_line(reader: &mut dyn BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

/// An empty option value counts as not given
fn given(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
