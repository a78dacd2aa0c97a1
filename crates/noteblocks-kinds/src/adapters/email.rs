//! Emails.

use chrono::{DateTime, Utc};
use noteblocks_core::{keys, Block, Error, Result};
use serde::{Deserialize, Serialize};

use super::{names, non_empty, set_opt};

const DATE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Fields written by [`add_email_properties`].
#[derive(Debug, Clone, Default)]
pub struct EmailFields {
    pub email_id: Option<String>,
    pub thread_id: Option<String>,
    pub from: Option<String>,
    /// Recipients. Empty lists are not stored.
    pub to: Vec<String>,
    pub subject: Option<String>,
    /// Message body.
    pub text: Option<String>,
    /// Sent date.
    pub date: Option<DateTime<Utc>>,
    pub received_at: Option<DateTime<Utc>>,
    /// Attachment file names. Empty lists are not stored.
    pub attachments: Vec<String>,
    /// Mailbox labels. Empty lists are not stored.
    pub labels: Vec<String>,
}

/// Structured email as produced by the mail importer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailData {
    pub id: String,
    pub thread_id: String,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,
    pub attachments: Vec<String>,
    pub labels: Vec<String>,
}

pub fn add_email_properties(block: &mut Block, fields: EmailFields) -> Result<()> {
    set_opt(block, keys::EMAIL_ID, fields.email_id)?;
    set_opt(block, keys::THREAD_ID, fields.thread_id)?;
    set_opt(block, keys::FROM, fields.from)?;
    set_opt(block, keys::SUBJECT, fields.subject)?;
    set_opt(block, keys::TEXT, fields.text)?;
    set_opt(block, keys::DATE, fields.date)?;
    set_opt(block, keys::RECEIVED_AT, fields.received_at)?;

    for (key, values) in [
        (keys::TO, fields.to),
        (keys::ATTACHMENTS, fields.attachments),
        (keys::LABELS, fields.labels),
    ] {
        if !values.is_empty() {
            block.properties.replace_value(key, values)?;
        }
    }
    Ok(())
}

/// Store a structured email. Empty strings and missing dates are skipped.
pub fn add_email_properties_from_data(block: &mut Block, email: &EmailData) -> Result<()> {
    let present = |s: &String| Some(s.clone()).filter(|s| !s.is_empty());

    add_email_properties(
        block,
        EmailFields {
            email_id: present(&email.id),
            thread_id: present(&email.thread_id),
            from: present(&email.from),
            to: present(&email.to).into_iter().collect(),
            subject: present(&email.subject),
            text: present(&email.body),
            date: email.date,
            received_at: email.received_at,
            attachments: email.attachments.clone(),
            labels: email.labels.clone(),
        },
    )
}

/// Decode an [`EmailData`] payload and store it.
///
/// Fails with `InvalidInput` on an empty payload and `Serialization` on
/// malformed JSON.
pub fn add_email_properties_from_json(block: &mut Block, raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidInput("email payload is empty".to_string()));
    }
    let email: EmailData = serde_json::from_str(raw)?;
    add_email_properties_from_data(block, &email)
}

/// Subject heading, a From/To/Date block, attachments, labels and the body
/// below a rule. Sections are separated by blank lines.
pub fn render_email_properties(block: &Block) -> String {
    let mut parts = Vec::new();

    if let Some(subject) = non_empty(block, keys::SUBJECT) {
        parts.push(format!("## {subject}"));
    }

    let mut header = Vec::new();
    if let Some(from) = non_empty(block, keys::FROM) {
        header.push(format!("**From:** {from}"));
    }
    let to = names(block, keys::TO);
    if !to.is_empty() {
        header.push(format!("**To:** {}", to.join(", ")));
    }
    if let Some(date) = block.properties.get_time(keys::DATE) {
        header.push(format!("**Date:** {}", date.format(DATE_FORMAT)));
    }
    if !header.is_empty() {
        parts.push(header.join("  \n"));
    }

    let attachments = names(block, keys::ATTACHMENTS);
    if !attachments.is_empty() {
        parts.push(format!("**Attachments:** {}", attachments.join(", ")));
    }

    let labels: Vec<String> = names(block, keys::LABELS)
        .iter()
        .map(|label| format!("`{label}`"))
        .collect();
    if !labels.is_empty() {
        parts.push(format!("**Labels:** {}", labels.join(" ")));
    }

    if let Some(text) = non_empty(block, keys::TEXT) {
        parts.push("---".to_string());
        parts.push(text);
    }

    parts.join("\n\n")
}

pub fn email_property_keys() -> &'static [&'static str] {
    &[
        keys::EMAIL_ID,
        keys::THREAD_ID,
        keys::FROM,
        keys::TO,
        keys::SUBJECT,
        keys::TEXT,
        keys::DATE,
        keys::RECEIVED_AT,
        keys::ATTACHMENTS,
        keys::LABELS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use noteblocks_core::BlockKind;

    fn invoice() -> Block {
        let mut block = Block::with_kind(BlockKind::Email);
        add_email_properties(
            &mut block,
            EmailFields {
                email_id: Some("msg-1".to_string()),
                thread_id: Some("thread-9".to_string()),
                from: Some("billing@example.com".to_string()),
                to: vec!["ana@example.com".to_string(), "bo@example.com".to_string()],
                subject: Some("Invoice #42".to_string()),
                text: Some("Please find the invoice attached.".to_string()),
                date: Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap()),
                attachments: vec!["invoice-42.pdf".to_string()],
                labels: vec!["finance".to_string(), "inbox".to_string()],
                ..Default::default()
            },
        )
        .unwrap();
        block
    }

    #[test]
    fn test_full_render() {
        assert_eq!(
            render_email_properties(&invoice()),
            "## Invoice #42\n\n\
             **From:** billing@example.com  \n\
             **To:** ana@example.com, bo@example.com  \n\
             **Date:** Mar 5, 2024 2:07 PM\n\n\
             **Attachments:** invoice-42.pdf\n\n\
             **Labels:** `finance` `inbox`\n\n\
             ---\n\n\
             Please find the invoice attached."
        );
    }

    #[test]
    fn test_render_skips_empty_header_block() {
        let mut block = Block::with_kind(BlockKind::Email);
        add_email_properties(
            &mut block,
            EmailFields {
                subject: Some("Hello".to_string()),
                text: Some("Body".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(render_email_properties(&block), "## Hello\n\n---\n\nBody");
    }

    #[test]
    fn test_empty_lists_not_stored() {
        let mut block = Block::with_kind(BlockKind::Email);
        add_email_properties(&mut block, EmailFields::default()).unwrap();
        assert!(block.properties.is_empty());
        assert_eq!(render_email_properties(&block), "");
    }

    #[test]
    fn test_from_json() {
        let mut block = Block::with_kind(BlockKind::Email);
        add_email_properties_from_json(
            &mut block,
            r#"{
                "id": "msg-2",
                "from": "ops@example.com",
                "to": "team@example.com",
                "subject": "Deploy done",
                "body": "",
                "received_at": "2024-03-05T14:08:00Z",
                "labels": ["ops"]
            }"#,
        )
        .unwrap();

        let props = &block.properties;
        assert_eq!(props.get_string(keys::EMAIL_ID).as_deref(), Some("msg-2"));
        assert_eq!(props.get_string_array(keys::TO).unwrap(), vec!["team@example.com"]);
        assert!(!props.has(keys::TEXT));
        assert!(!props.has(keys::DATE));
        assert_eq!(
            props.get_time(keys::RECEIVED_AT),
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 8, 0).unwrap())
        );
        assert_eq!(props.get_string_array(keys::LABELS).unwrap(), vec!["ops"]);
    }

    #[test]
    fn test_from_json_rejects_empty_and_malformed() {
        let mut block = Block::with_kind(BlockKind::Email);
        assert!(matches!(
            add_email_properties_from_json(&mut block, "").unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            add_email_properties_from_json(&mut block, "[1, 2").unwrap_err(),
            Error::Serialization(_)
        ));
    }

    #[test]
    fn test_property_keys() {
        assert_eq!(email_property_keys().len(), 10);
    }
}
