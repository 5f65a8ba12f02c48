pub mod clean;
pub mod crawl;
pub mod extract;
pub mod fetch;
