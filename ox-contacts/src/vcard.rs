// ox-contacts/src/vcard.rs
//! Open-Xchange contact fields to vCard 4.0.
//!
//! Each vCard property comes from one [`FieldRule`]. A property is written
//! only if its value still has content once the `;` component separators are
//! removed, so a structured value made only of empty components is dropped.

use chrono::{DateTime, Utc};
use ox_webdav::ContactProperties;
use tracing::warn;

const BEGIN: &str = "BEGIN:VCARD\r\nVERSION:4.0\r\n";
const END: &str = "END:VCARD\r\n";

/// How a vCard property value is obtained from the raw contact fields
#[derive(Clone, Copy)]
pub enum FieldRule {
    /// Copy one field verbatim
    Direct(&'static str),
    /// Build the value from any number of fields; `None` means no value
    Computed(fn(&ContactProperties) -> Option<String>),
}

impl FieldRule {
    pub fn evaluate(&self, props: &ContactProperties) -> Option<String> {
        match self {
            FieldRule::Direct(field) => props.get(*field).cloned(),
            FieldRule::Computed(compute) => compute(props),
        }
    }
}

/// vCard properties in output order
pub const VCARD_FIELDS: &[(&str, FieldRule)] = &[
    ("FN", FieldRule::Direct("displayname")),
    ("N", FieldRule::Computed(structured_name)),
    ("EMAIL;TYPE=\"work\"", FieldRule::Direct("email1")),
    ("ORG", FieldRule::Computed(organization)),
    ("ROLE", FieldRule::Direct("position")),
    ("TEL;TYPE=\"voice,work\"", FieldRule::Direct("phone_business")),
    ("TEL;type=\"fax,work\"", FieldRule::Direct("fax_business")),
    ("TEL;type=\"voice,cell\"", FieldRule::Direct("mobile1")),
    ("TEL;type=\"voice,home\"", FieldRule::Direct("phone_home")),
    ("ADR;type=\"work\"", FieldRule::Computed(business_address)),
    ("X-EVOLUTION-MANAGER", FieldRule::Direct("managers_name")),
    ("BDAY", FieldRule::Computed(birthday)),
    ("REF", FieldRule::Computed(last_modified)),
];

/// Render one contact as a CRLF-terminated vCard record
pub fn make_vcard(props: &ContactProperties) -> String {
    let mut vcard = String::from(BEGIN);

    for (property, rule) in VCARD_FIELDS {
        if let Some(value) = rule.evaluate(props).filter(|v| has_content(v)) {
            vcard.push_str(property);
            vcard.push(':');
            vcard.push_str(&value);
            vcard.push_str("\r\n");
        }
    }

    vcard.push_str(END);
    vcard
}

fn has_content(value: &str) -> bool {
    value.chars().any(|c| c != ';')
}

fn field<'a>(props: &'a ContactProperties, name: &str) -> &'a str {
    props.get(name).map(String::as_str).unwrap_or_default()
}

fn structured_name(props: &ContactProperties) -> Option<String> {
    let parts = ["last_name", "first_name", "second_name", "title", "suffix"]
        .map(|name| field(props, name).trim());
    Some(parts.join(";"))
}

fn organization(props: &ContactProperties) -> Option<String> {
    Some(format!("{};{}", field(props, "company"), field(props, "department")))
}

// post office box and extended address are not kept by the server
fn business_address(props: &ContactProperties) -> Option<String> {
    Some(format!(
        ";;{};{};{};{};{}",
        field(props, "business_street"),
        field(props, "business_city"),
        field(props, "business_state"),
        field(props, "business_postal_code"),
        field(props, "business_country"),
    ))
}

fn birthday(props: &ContactProperties) -> Option<String> {
    timestamp(props, "birthday").map(|t| t.format("%Y%m%d").to_string())
}

fn last_modified(props: &ContactProperties) -> Option<String> {
    timestamp(props, "last_modified").map(|t| t.format("%Y%m%dT%H%M%SZ").to_string())
}

/// Milliseconds since the epoch, UTC. Unreadable values are logged and skipped.
fn timestamp(props: &ContactProperties, name: &str) -> Option<DateTime<Utc>> {
    let raw = props.get(name).filter(|v| !v.is_empty())?;

    let parsed = parse_millis(raw);
    if parsed.is_none() {
        warn!(field = name, value = %raw, "ignoring unreadable timestamp");
    }
    parsed
}

fn parse_millis(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let millis = match raw.parse::<i64>() {
        Ok(millis) => millis,
        Err(_) => {
            let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
            value.floor() as i64
        }
    };
    DateTime::<Utc>::from_timestamp_millis(millis)
}
