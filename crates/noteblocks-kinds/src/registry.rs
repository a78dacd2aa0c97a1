//! Kind → adapter dispatch.

use noteblocks_core::{Block, BlockKind, PropertyRenderer, Result};
use tracing::trace;

use crate::adapters::*;

/// Renders one block's own properties.
pub type RenderFn = fn(&Block) -> String;

/// Property renderer registered for `kind`, if any.
///
/// Database and fragment blocks have no adapter.
pub fn renderer_for(kind: BlockKind) -> Option<RenderFn> {
    use BlockKind::*;

    let render: RenderFn = match kind {
        Paragraph => render_paragraph_properties,
        Page => render_page_properties,
        Heading1 | Heading2 | Heading3 | Heading4 | Heading5 | Heading6 => {
            render_heading_properties
        }
        BulletListItem => render_bullet_list_item_properties,
        NumberedListItem => render_numbered_list_item_properties,
        Line => render_line_properties,
        Link => render_link_properties,
        ToDo => render_to_do_properties,
        Image => render_image_properties,
        Audio => render_audio_properties,
        Video => render_video_properties,
        File => render_file_properties,
        Person => render_person_properties,
        Place => render_place_properties,
        Movie => render_movie_properties,
        Book => render_book_properties,
        Instagram => render_instagram_properties,
        Series => render_series_properties,
        YouTube => render_youtube_properties,
        Tweet => render_tweet_properties,
        Email => render_email_properties,
        Fragment | Database => return None,
    };
    Some(render)
}

/// Keys read and written by the adapter for `kind`. Empty without an adapter.
pub fn property_keys_for(kind: BlockKind) -> &'static [&'static str] {
    use BlockKind::*;

    match kind {
        Paragraph | Page | Heading1 | Heading2 | Heading3 | Heading4 | Heading5 | Heading6
        | BulletListItem | NumberedListItem => text_property_keys(),
        Line => line_property_keys(),
        Link => link_property_keys(),
        ToDo => to_do_property_keys(),
        Image => image_property_keys(),
        Audio => audio_property_keys(),
        Video => video_property_keys(),
        File => file_property_keys(),
        Person => person_property_keys(),
        Place => place_property_keys(),
        Movie => movie_property_keys(),
        Book => book_property_keys(),
        Instagram => instagram_property_keys(),
        Series => series_property_keys(),
        YouTube => youtube_property_keys(),
        Tweet => tweet_property_keys(),
        Email => email_property_keys(),
        Fragment | Database => &[],
    }
}

/// [`PropertyRenderer`] backed by the per-kind adapters.
///
/// Kinds without an adapter render as the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindRenderer;

impl KindRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyRenderer for KindRenderer {
    fn render_properties(&self, block: &Block) -> Result<String> {
        match renderer_for(block.kind) {
            Some(render) => Ok(render(block)),
            None => {
                trace!(
                    subsystem = "kinds",
                    component = "registry",
                    block_id = %block.id,
                    block_kind = %block.kind,
                    "No adapter for kind, rendering empty"
                );
                Ok(String::new())
            }
        }
    }
}
