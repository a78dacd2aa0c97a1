//! Uploaded media: images, audio, video and generic files.
//!
//! All four share the same fields. Only video shows the file name in its
//! rendering.

use noteblocks_core::{keys, Block, Result};

use super::{non_empty, set_opt};

/// Fields written by the media adapters.
#[derive(Debug, Clone, Default)]
pub struct MediaFields {
    /// Size in bytes.
    pub size: Option<i64>,
    pub transcription: Option<String>,
    pub public_url: Option<String>,
    pub filename: Option<String>,
    pub extension: Option<String>,
    pub enriched: bool,
}

struct MediaLayout {
    heading: &'static str,
    link_label: &'static str,
    show_filename: bool,
}

const IMAGE: MediaLayout = MediaLayout {
    heading: "## Image",
    link_label: "🖼️ Image",
    show_filename: false,
};

const AUDIO: MediaLayout = MediaLayout {
    heading: "## Audio",
    link_label: "🔊 Audio File",
    show_filename: false,
};

const VIDEO: MediaLayout = MediaLayout {
    heading: "## Video",
    link_label: "🎥 Video File",
    show_filename: true,
};

const FILE: MediaLayout = MediaLayout {
    heading: "## File",
    link_label: "📄 File",
    show_filename: false,
};

fn add_media(block: &mut Block, fields: MediaFields, with_filename: bool) -> Result<()> {
    set_opt(block, keys::SIZE, fields.size)?;
    set_opt(block, keys::TRANSCRIPTION, fields.transcription)?;
    set_opt(block, keys::PUBLIC_URL, fields.public_url)?;
    if with_filename {
        set_opt(block, keys::FILENAME, fields.filename)?;
        set_opt(block, keys::EXTENSION, fields.extension)?;
    }
    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

fn render_media(block: &Block, layout: &MediaLayout) -> String {
    let mut parts = vec![layout.heading.to_string()];

    if layout.show_filename {
        if let Some(filename) = non_empty(block, keys::FILENAME) {
            let name = match non_empty(block, keys::EXTENSION) {
                Some(ext) => format!("{filename}.{ext}"),
                None => filename,
            };
            parts.push(format!("**File:** {name}"));
        }
    }
    if let Some(url) = non_empty(block, keys::PUBLIC_URL) {
        parts.push(format!("[{}]({url})", layout.link_label));
    }
    if let Some(size) = block.properties.get_int(keys::SIZE).filter(|s| *s > 0) {
        parts.push(format!("**Size:** {size} bytes"));
    }
    if let Some(transcription) = non_empty(block, keys::TRANSCRIPTION) {
        parts.push(format!("**Transcription:** {transcription}"));
    }

    parts.join("\n")
}

pub fn add_image_properties(block: &mut Block, fields: MediaFields) -> Result<()> {
    add_media(block, fields, false)
}

pub fn render_image_properties(block: &Block) -> String {
    render_media(block, &IMAGE)
}

pub fn image_property_keys() -> &'static [&'static str] {
    &[keys::SIZE, keys::TRANSCRIPTION, keys::PUBLIC_URL, keys::ENRICHED]
}

pub fn add_audio_properties(block: &mut Block, fields: MediaFields) -> Result<()> {
    add_media(block, fields, false)
}

pub fn render_audio_properties(block: &Block) -> String {
    render_media(block, &AUDIO)
}

pub fn audio_property_keys() -> &'static [&'static str] {
    &[keys::SIZE, keys::TRANSCRIPTION, keys::PUBLIC_URL, keys::ENRICHED]
}

pub fn add_video_properties(block: &mut Block, fields: MediaFields) -> Result<()> {
    add_media(block, fields, true)
}

pub fn render_video_properties(block: &Block) -> String {
    render_media(block, &VIDEO)
}

pub fn video_property_keys() -> &'static [&'static str] {
    &[
        keys::SIZE,
        keys::TRANSCRIPTION,
        keys::PUBLIC_URL,
        keys::FILENAME,
        keys::EXTENSION,
        keys::ENRICHED,
    ]
}

pub fn add_file_properties(block: &mut Block, fields: MediaFields) -> Result<()> {
    add_media(block, fields, false)
}

pub fn render_file_properties(block: &Block) -> String {
    render_media(block, &FILE)
}

pub fn file_property_keys() -> &'static [&'static str] {
    &[keys::SIZE, keys::TRANSCRIPTION, keys::PUBLIC_URL, keys::ENRICHED]
}
