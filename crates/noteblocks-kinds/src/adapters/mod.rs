//! Per-kind property adapters.
//!
//! Each kind exposes the same three entry points:
//!
//! - `add_*_properties` writes the kind's fields into a block's property
//!   store, coercing every value to the key's registered type
//! - `render_*_properties` turns the stored properties back into markdown
//! - `*_property_keys` lists the keys the kind reads and writes
//!
//! Kinds fed by scrapers also take an `add_*_properties_from_page` entry
//! point over [`PageData`](crate::page::PageData), and kinds fed by the
//! import pipelines take a structured payload or its JSON.
//!
//! Renderers never fail. Missing or mistyped properties are left out of the
//! output instead.

pub mod book;
pub mod email;
pub mod instagram;
pub mod line;
pub mod link;
pub mod media;
pub mod movie;
pub mod person;
pub mod place;
pub mod series;
pub mod text;
pub mod todo;
pub mod tweet;
pub mod youtube;

pub use book::{add_book_properties, book_property_keys, render_book_properties, BookFields};
pub use email::{
    add_email_properties, add_email_properties_from_data, add_email_properties_from_json,
    email_property_keys, render_email_properties, EmailData, EmailFields,
};
pub use instagram::{
    add_instagram_properties, add_instagram_properties_from_page, instagram_property_keys,
    render_instagram_properties, InstagramFields,
};
pub use line::{add_line_properties, line_property_keys, render_line_properties};
pub use link::{
    add_link_properties, add_link_properties_from_json, add_link_properties_from_page,
    link_property_keys, render_link_properties, LinkData, LinkFields,
};
pub use media::{
    add_audio_properties, add_file_properties, add_image_properties, add_video_properties,
    audio_property_keys, file_property_keys, image_property_keys, render_audio_properties,
    render_file_properties, render_image_properties, render_video_properties,
    video_property_keys, MediaFields,
};
pub use movie::{
    add_movie_properties, add_movie_properties_from_page, movie_property_keys,
    render_movie_properties, MovieFields,
};
pub use person::{
    add_person_properties, person_property_keys, render_person_properties, PersonFields,
};
pub use place::{
    add_place_properties, add_place_properties_from_json, google_maps_url, place_property_keys,
    render_place_properties, PlaceData, PlaceFields,
};
pub use series::{
    add_series_properties, add_series_properties_from_page, render_series_properties,
    series_property_keys, SeriesFields,
};
pub use text::{
    add_bullet_list_item_properties, add_heading_properties, add_numbered_list_item_properties,
    add_page_properties, add_paragraph_properties, render_bullet_list_item_properties,
    render_heading_properties, render_numbered_list_item_properties, render_page_properties,
    render_paragraph_properties, text_property_keys,
};
pub use todo::{add_to_do_properties, render_to_do_properties, to_do_property_keys, ToDoFields};
pub use tweet::{
    add_tweet_properties, add_tweet_properties_from_data, add_tweet_properties_from_json,
    add_tweet_properties_from_page, render_tweet_properties, tweet_property_keys, TweetData,
    TweetFields, TweetLink, TweetMedia,
};
pub use youtube::{
    add_youtube_properties, add_youtube_properties_from_page, render_youtube_properties,
    youtube_property_keys, YouTubeFields,
};

use noteblocks_core::{Block, Result};

/// Non-empty string stored under `key`.
pub(crate) fn non_empty(block: &Block, key: &str) -> Option<String> {
    block.properties.get_string(key).filter(|s| !s.is_empty())
}

/// Replace `key` with `value` when one is given.
pub(crate) fn set_opt<V>(block: &mut Block, key: &str, value: Option<V>) -> Result<()>
where
    V: Into<noteblocks_core::PropertyValue>,
{
    match value {
        Some(v) => block.properties.replace_value(key, v),
        None => Ok(()),
    }
}

/// Non-empty entries of a list slot, nested arrays flattened.
pub(crate) fn names(block: &Block, key: &str) -> Vec<String> {
    block
        .properties
        .get_string_array(key)
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect()
}

/// Replace `key` with `values`, one slot entry per item.
pub(crate) fn set_list(block: &mut Block, key: &str, values: &[String]) -> Result<()> {
    block.properties.delete(key);
    for value in values {
        block.properties.append_value(key, value)?;
    }
    Ok(())
}
