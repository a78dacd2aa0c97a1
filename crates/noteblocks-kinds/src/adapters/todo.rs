//! Checklist items with an optional due date and reminder.

use chrono::{DateTime, Duration, Utc};
use noteblocks_core::defaults::DISPLAY_DATE_TIME_LAYOUT;
use noteblocks_core::properties::format_duration;
use noteblocks_core::{keys, Block, Result};

use super::{non_empty, set_opt};

/// Fields written by [`add_to_do_properties`].
#[derive(Debug, Clone, Default)]
pub struct ToDoFields {
    pub title: Option<String>,
    /// Stored as `false` when not given.
    pub done: Option<bool>,
    pub target: Option<DateTime<Utc>>,
    /// How long before `target` to remind. Stored as whole seconds.
    pub reminder_offset: Option<Duration>,
}

pub fn add_to_do_properties(block: &mut Block, fields: ToDoFields) -> Result<()> {
    set_opt(block, keys::TITLE, fields.title)?;
    block
        .properties
        .replace_value(keys::CHECKED, fields.done.unwrap_or(false))?;
    set_opt(block, keys::TARGET_DATETIME, fields.target)?;
    set_opt(block, keys::REMINDER_OFFSET, fields.reminder_offset)
}

/// `- [x] title (Due: …, Reminder: … before at …)`.
///
/// Items without a title render as nothing. The checkbox is omitted when no
/// checked state is stored.
pub fn render_to_do_properties(block: &Block) -> String {
    let Some(title) = non_empty(block, keys::TITLE) else {
        return String::new();
    };

    let mut out = match block.properties.get_bool(keys::CHECKED) {
        Some(true) => format!("- [x] {title}"),
        Some(false) => format!("- [ ] {title}"),
        None => format!("- {title}"),
    };

    let offset = block
        .properties
        .get_int(keys::REMINDER_OFFSET)
        .filter(|secs| *secs != 0)
        .map(Duration::seconds);

    match (block.properties.get_time(keys::TARGET_DATETIME), offset) {
        (Some(due), offset) => {
            out.push_str(&format!(" (Due: {}", due.format(DISPLAY_DATE_TIME_LAYOUT)));
            if let Some(offset) = offset {
                out.push_str(&format!(
                    ", Reminder: {} before at {}",
                    format_duration(&offset),
                    (due - offset).format(DISPLAY_DATE_TIME_LAYOUT)
                ));
            }
            out.push(')');
        }
        (None, Some(offset)) => {
            out.push_str(&format!(" (Reminder: {} before)", format_duration(&offset)));
        }
        (None, None) => {}
    }
    out
}

pub fn to_do_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::CHECKED,
        keys::TARGET_DATETIME,
        keys::REMINDER_OFFSET,
    ]
}
