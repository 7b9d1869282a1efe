//! CLI command handlers. One job per file.

mod completions;
mod fabricate;
mod photos;
mod rewrite;

pub use completions::run_completions;
pub use fabricate::run_fabricate;
pub use photos::run_photos;
pub use rewrite::run_rewrite;
