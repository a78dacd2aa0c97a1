//! Property key names.
//!
//! Every key listed here is registered with an expected [`PropertyType`] in
//! [`super::coerce`]. Keys outside this list are stored untyped.
//!
//! [`PropertyType`]: super::PropertyType

// ─── Common ────────────────────────────────────────────────────────────────

pub const TITLE: &str = "title";
pub const TEXT: &str = "text";
pub const DESCRIPTION: &str = "description";
pub const TARGET_DATETIME: &str = "target_datetime";
pub const REMINDER_OFFSET: &str = "reminder_offset";
pub const CHECKED: &str = "checked";
pub const ENRICHED: &str = "enriched";

// ─── URL / link ────────────────────────────────────────────────────────────

pub const URL: &str = "url";
pub const IMAGE_URL: &str = "url_image";

// ─── Movie / TV series ─────────────────────────────────────────────────────

pub const IMDB_ID: &str = "imdb_id";
pub const TMDB_ID: &str = "tmdb_id";
pub const RELEASE_YEAR: &str = "release_year";
pub const FIRST_AIR_YEAR: &str = "first_air_year";
pub const LAST_AIR_YEAR: &str = "last_air_year";
pub const RATING: &str = "rating";
pub const RUNTIME: &str = "runtime";
pub const GENRES: &str = "genres";
pub const DIRECTORS: &str = "directors";
pub const CREATORS: &str = "creators";
pub const CAST: &str = "cast";
pub const TAGLINE: &str = "tagline";
pub const BUDGET: &str = "budget";
pub const REVENUE: &str = "revenue";
pub const STATUS: &str = "status";
pub const IN_PRODUCTION: &str = "in_production";
pub const NUMBER_OF_SEASONS: &str = "number_of_seasons";
pub const NUMBER_OF_EPISODES: &str = "number_of_episodes";
pub const NETWORKS: &str = "networks";
pub const TYPE: &str = "type";

// ─── YouTube ───────────────────────────────────────────────────────────────

pub const VIDEO_ID: &str = "video_id";
pub const CHANNEL_ID: &str = "channel_id";
pub const CHANNEL_TITLE: &str = "channel_title";
pub const PUBLISHED_AT: &str = "published_at";
pub const VIEW_COUNT: &str = "view_count";
pub const LIKE_COUNT: &str = "like_count";
pub const COMMENT_COUNT: &str = "comment_count";
pub const DURATION: &str = "duration";
pub const DEFINITION: &str = "definition";
pub const HAS_CAPTIONS: &str = "has_captions";
pub const TAGS: &str = "tags";

// ─── Tweet ─────────────────────────────────────────────────────────────────

pub const TWEET_ID: &str = "tweet_id";
pub const USERNAME: &str = "username";
pub const AUTHOR_NAME: &str = "author_name";
pub const RETWEET_COUNT: &str = "retweet_count";
pub const AUTHOR_ID: &str = "author_id";
pub const MEDIA_URLS: &str = "media_urls";
pub const MEDIA_INFO: &str = "media_info";
pub const EXTERNAL_URLS: &str = "external_urls";
pub const QUOTE_COUNT: &str = "quote_count";
pub const CONVERSATION_ID: &str = "conversation_id";
pub const LANGUAGE: &str = "language";
pub const SOURCE: &str = "source";
pub const HAS_MEDIA: &str = "has_media";
pub const MEDIA_COUNT: &str = "media_count";
pub const IS_RETWEET: &str = "is_retweet";
pub const IS_REPLY: &str = "is_reply";
pub const IS_QUOTE: &str = "is_quote";

// ─── Email ─────────────────────────────────────────────────────────────────

pub const EMAIL_ID: &str = "email_id";
pub const THREAD_ID: &str = "thread_id";
pub const FROM: &str = "from";
pub const TO: &str = "to";
pub const SUBJECT: &str = "subject";
pub const DATE: &str = "date";
pub const RECEIVED_AT: &str = "received_at";
pub const ATTACHMENTS: &str = "attachments";
pub const LABELS: &str = "labels";

// ─── Book ──────────────────────────────────────────────────────────────────

pub const ISBN: &str = "isbn";
pub const PUBLISHER: &str = "publisher";
pub const PAGE_COUNT: &str = "page_count";
pub const PRICE: &str = "price";
pub const AUTHOR_BIO: &str = "author_bio";
pub const TABLE_OF_CONTENTS: &str = "table_of_contents";
pub const REVIEWS: &str = "reviews";

// ─── Person ────────────────────────────────────────────────────────────────

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const BIRTHDAY: &str = "birthday";
pub const RELATION_TYPE: &str = "relation_type";
pub const ADDRESS: &str = "address";
pub const PHONE_NUMBER: &str = "phone_number";

// ─── Place ─────────────────────────────────────────────────────────────────

pub const PLACE_TYPE: &str = "place_type";
pub const COORDINATES: &str = "coordinates";
pub const MAP_URL: &str = "map_url";
pub const VISITED_DATE: &str = "visited_date";
pub const PLACE_REVIEWS: &str = "place_reviews";

// ─── Media (image, video, audio, file) ─────────────────────────────────────

pub const SIZE: &str = "size";
pub const TRANSCRIPTION: &str = "transcription";
pub const PUBLIC_URL: &str = "public_url";
pub const FILENAME: &str = "filename";
pub const EXTENSION: &str = "extension";
