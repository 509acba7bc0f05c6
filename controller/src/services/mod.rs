//! Service implementations backing the controller traits

pub mod http_api;

pub use http_api::HttpStoryService;
