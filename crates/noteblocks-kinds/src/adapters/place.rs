//! Places: venues, landmarks, addresses.

use chrono::{DateTime, Utc};
use noteblocks_core::defaults::DISPLAY_LONG_DATE_LAYOUT;
use noteblocks_core::properties::parse_time;
use noteblocks_core::{keys, Block, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{non_empty, set_list, set_opt};

/// Fields written by [`add_place_properties`].
#[derive(Debug, Clone, Default)]
pub struct PlaceFields {
    /// Stored under `title`.
    pub name: Option<String>,
    pub place_type: Option<String>,
    /// `[latitude, longitude]`.
    pub coordinates: Option<Vec<f64>>,
    pub map_url: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub rating: Option<f64>,
    pub visited_date: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    /// Replaces every stored review when given.
    pub reviews: Option<Vec<String>>,
}

/// Place payload as produced by the enrichment pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceData {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub place_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coordinates: Vec<f64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub map_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    pub rating: f64,
    /// RFC 3339.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub visited_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<String>,
}

/// Write the place fields. Coordinates must be exactly two values.
///
/// Coordinates are checked before anything is written, so an
/// `InvalidInput` failure leaves the block untouched.
pub fn add_place_properties(block: &mut Block, fields: PlaceFields) -> Result<()> {
    let coordinates = match fields.coordinates {
        Some(values) => match values.as_slice() {
            [lat, lng] => Some([*lat, *lng]),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "coordinates must be [latitude, longitude], got {} values",
                    values.len()
                )))
            }
        },
        None => None,
    };

    set_opt(block, keys::TITLE, fields.name)?;
    set_opt(block, keys::PLACE_TYPE, fields.place_type)?;
    set_opt(block, keys::COORDINATES, coordinates)?;
    set_opt(block, keys::MAP_URL, fields.map_url)?;
    set_opt(block, keys::ADDRESS, fields.address)?;
    set_opt(block, keys::PHONE_NUMBER, fields.phone_number)?;
    set_opt(block, keys::RATING, fields.rating)?;
    set_opt(block, keys::VISITED_DATE, fields.visited_date)?;
    set_opt(block, keys::URL, fields.url)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::DESCRIPTION, fields.description)?;
    if let Some(reviews) = fields.reviews {
        set_list(block, keys::PLACE_REVIEWS, &reviews)?;
    }
    Ok(())
}

/// Decode a [`PlaceData`] payload and store it.
///
/// Empty strings, a zero rating and an empty review list count as absent.
/// An unparsable `visited_date` is dropped. Fails with `Serialization` on
/// malformed JSON and `InvalidInput` without a name or with coordinates
/// that are not a pair.
pub fn add_place_properties_from_json(block: &mut Block, raw: &str) -> Result<()> {
    let data: PlaceData = serde_json::from_str(raw)?;
    if data.name.is_empty() {
        return Err(Error::InvalidInput("place data must include a name".to_string()));
    }

    let visited_date = if data.visited_date.is_empty() {
        None
    } else {
        let parsed = parse_time(&data.visited_date);
        if parsed.is_none() {
            debug!(
                subsystem = "kinds",
                component = "place",
                block_id = %block.id,
                property_key = keys::VISITED_DATE,
                "Unparsable visited date, skipping"
            );
        }
        parsed
    };

    let present = |s: String| Some(s).filter(|s| !s.is_empty());
    add_place_properties(
        block,
        PlaceFields {
            name: Some(data.name),
            place_type: present(data.place_type),
            coordinates: Some(data.coordinates).filter(|c| !c.is_empty()),
            map_url: present(data.map_url),
            address: present(data.address),
            phone_number: present(data.phone_number),
            rating: Some(data.rating).filter(|r| *r > 0.0),
            visited_date,
            url: present(data.url),
            image_url: present(data.image_url),
            description: present(data.description),
            reviews: Some(data.reviews).filter(|r| !r.is_empty()),
        },
    )
}

pub fn render_place_properties(block: &Block) -> String {
    let name = non_empty(block, keys::TITLE).unwrap_or_else(|| "Unnamed Place".to_string());
    let mut out = format!("# {name}\n");

    if let Some(place_type) = non_empty(block, keys::PLACE_TYPE) {
        out.push_str(&format!("*{place_type}*\n"));
    }
    if let Some(url) = non_empty(block, keys::URL) {
        out.push_str(&format!("[Website]({url})\n"));
    }
    if let Some(rating) = block.properties.get_float(keys::RATING) {
        let stars = "⭐".repeat(rating.max(0.0) as usize);
        out.push_str(&format!("**Rating:** {stars} ({rating:.1}/5)\n"));
    }

    let coordinates = block
        .properties
        .get_float_pair(keys::COORDINATES)
        .map(|[lat, lng]| format!("{lat:.6}, {lng:.6}"));
    let map_url = non_empty(block, keys::MAP_URL);

    let mut location = Vec::new();
    if let Some(address) = non_empty(block, keys::ADDRESS) {
        location.push(format!("**Address:** {address}"));
    }
    match (coordinates, map_url) {
        (Some(coords), Some(map)) => location.push(format!("**Coordinates:** [{coords}]({map})")),
        (Some(coords), None) => location.push(format!("**Coordinates:** {coords}")),
        (None, Some(map)) => location.push(format!("**Map:** [Open in Google Maps]({map})")),
        (None, None) => {}
    }
    if let Some(phone) = non_empty(block, keys::PHONE_NUMBER) {
        location.push(format!("**Phone:** {phone}"));
    }
    if !location.is_empty() {
        out.push_str("\n## Location & Contact Information\n");
        out.push_str(&location.join("\n"));
        out.push('\n');
    }

    if let Some(visited) = block.properties.get_time(keys::VISITED_DATE) {
        out.push_str(&format!(
            "\n**Last Visited:** {}\n",
            visited.format(DISPLAY_LONG_DATE_LAYOUT)
        ));
    }

    if let Some(description) = non_empty(block, keys::DESCRIPTION) {
        out.push_str("\n## Description\n");
        out.push_str(&description);
        out.push('\n');
    }

    let reviews = block
        .properties
        .get_string_array(keys::PLACE_REVIEWS)
        .unwrap_or_default();
    if !reviews.is_empty() {
        out.push_str("\n## Reviews\n");
        for review in reviews {
            out.push_str(&format!("- \"{review}\"\n"));
        }
    }

    out
}

/// Google Maps search URL for a coordinate pair.
pub fn google_maps_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={latitude:.6},{longitude:.6}")
}

pub fn place_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::PLACE_TYPE,
        keys::COORDINATES,
        keys::MAP_URL,
        keys::ADDRESS,
        keys::PHONE_NUMBER,
        keys::RATING,
        keys::VISITED_DATE,
        keys::URL,
        keys::IMAGE_URL,
        keys::DESCRIPTION,
        keys::PLACE_REVIEWS,
    ]
}
