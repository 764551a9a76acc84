//! Scraper adapter module. Implements CommentSource.
//!
//! Provides an HTTP scraping-service client, a local JSON file source and a
//! mock source for testing.

pub mod http_scraper;
pub mod json_file;
pub mod mock_source;
pub mod payload;

pub use http_scraper::HttpScraperSource;
pub use json_file::JsonFileSource;
pub use mock_source::MockCommentSource;
pub use payload::comments_from_payload;
