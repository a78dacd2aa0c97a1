//! Contact cards.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use noteblocks_core::defaults::DISPLAY_LONG_DATE_LAYOUT;
use noteblocks_core::{keys, Block, Result};

use super::{non_empty, set_opt};

/// Fields written by [`add_person_properties`].
#[derive(Debug, Clone, Default)]
pub struct PersonFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birthday: Option<DateTime<Utc>>,
    pub relation_type: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

pub fn add_person_properties(block: &mut Block, fields: PersonFields) -> Result<()> {
    set_opt(block, keys::FIRST_NAME, fields.first_name)?;
    set_opt(block, keys::LAST_NAME, fields.last_name)?;
    set_opt(block, keys::BIRTHDAY, fields.birthday)?;
    set_opt(block, keys::RELATION_TYPE, fields.relation_type)?;
    set_opt(block, keys::ADDRESS, fields.address)?;
    set_opt(block, keys::PHONE_NUMBER, fields.phone_number)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::DESCRIPTION, fields.description)
}

/// Name heading followed by relation, birthday with age, contact details
/// and notes. Age is computed against today's date.
pub fn render_person_properties(block: &Block) -> String {
    render_person_on(block, Utc::now().date_naive())
}

fn render_person_on(block: &Block, today: NaiveDate) -> String {
    let first = block.properties.get_string(keys::FIRST_NAME);
    let last = block.properties.get_string(keys::LAST_NAME);
    let full_name = match (first, last) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(name), None) | (None, Some(name)) => name,
        (None, None) => "Unnamed Person".to_string(),
    };

    let mut out = format!("# {full_name}\n");

    if let Some(relation) = non_empty(block, keys::RELATION_TYPE) {
        out.push_str(&format!("**Relation:** {relation}\n"));
    }

    if let Some(birthday) = block.properties.get_time(keys::BIRTHDAY) {
        let birthday = birthday.date_naive();
        out.push_str(&format!(
            "**Birthday:** {} (Age: {})\n",
            birthday.format(DISPLAY_LONG_DATE_LAYOUT),
            age_on(birthday, today)
        ));
    }

    let mut contact = Vec::new();
    if let Some(phone) = non_empty(block, keys::PHONE_NUMBER) {
        contact.push(format!("**Phone:** {phone}"));
    }
    if let Some(address) = non_empty(block, keys::ADDRESS) {
        contact.push(format!("**Address:** {address}"));
    }
    if !contact.is_empty() {
        out.push_str("## Contact Information\n");
        out.push_str(&contact.join("\n"));
        out.push('\n');
    }

    if let Some(notes) = non_empty(block, keys::DESCRIPTION) {
        out.push_str("## Notes\n");
        out.push_str(&notes);
        out.push('\n');
    }

    out
}

/// Whole years elapsed, one less when today's day-of-year precedes the
/// birthday's.
fn age_on(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birthday.year();
    if today.ordinal() < birthday.ordinal() {
        years -= 1;
    }
    years
}

pub fn person_property_keys() -> &'static [&'static str] {
    &[
        keys::FIRST_NAME,
        keys::LAST_NAME,
        keys::BIRTHDAY,
        keys::RELATION_TYPE,
        keys::ADDRESS,
        keys::PHONE_NUMBER,
        keys::IMAGE_URL,
        keys::DESCRIPTION,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use noteblocks_core::BlockKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        assert_eq!(age_on(date(1990, 6, 15), date(2023, 6, 14)), 32);
        assert_eq!(age_on(date(1990, 6, 15), date(2023, 6, 20)), 33);
    }

    #[test]
    fn test_full_card() {
        let mut block = Block::with_kind(BlockKind::Person);
        add_person_properties(
            &mut block,
            PersonFields {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                birthday: Some(Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap()),
                relation_type: Some("Friend".to_string()),
                address: Some("12 St James's Square".to_string()),
                phone_number: Some("555-0100".to_string()),
                image_url: None,
                description: Some("Met at the workshop.".to_string()),
            },
        )
        .unwrap();

        assert_eq!(
            render_person_on(&block, date(2024, 1, 1)),
            "# Ada Lovelace\n\
             **Relation:** Friend\n\
             **Birthday:** December 10, 1990 (Age: 33)\n\
             ## Contact Information\n\
             **Phone:** 555-0100\n\
             **Address:** 12 St James's Square\n\
             ## Notes\n\
             Met at the workshop.\n"
        );
    }

    #[test]
    fn test_unnamed_person() {
        let block = Block::with_kind(BlockKind::Person);
        assert_eq!(render_person_properties(&block), "# Unnamed Person\n");
    }

    #[test]
    fn test_single_name() {
        let mut block = Block::with_kind(BlockKind::Person);
        add_person_properties(
            &mut block,
            PersonFields {
                last_name: Some("Hopper".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(render_person_properties(&block), "# Hopper\n");
    }
}
