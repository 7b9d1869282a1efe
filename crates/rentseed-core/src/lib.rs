pub mod config;
pub mod logging;

pub mod document;
pub mod fabricate;
pub mod http;
pub mod photos;
pub mod rewrite;
pub mod source;
