//! Description rewriter.
//!
//! Sends one completion request per fabricated listing and replaces its
//! provisional description with the answer. A failed request leaves the
//! listing untouched; the batch always runs to the end.

mod client;
mod prompt;

pub use client::{completions_endpoint, CompletionApi, ForgeClient, RewriteError};
pub use prompt::{build_messages, build_prompt, ChatMessage};

use crate::fabricate::FictionalProperty;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

#[derive(Debug)]
pub enum RewriteEvent<'a> {
    Rewritten {
        index: usize,
        total: usize,
        name: &'a str,
    },
    /// The provisional description was kept because the request failed.
    Kept {
        index: usize,
        total: usize,
        name: &'a str,
        error: &'a RewriteError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub rewritten: usize,
    pub kept: usize,
}

/// Rewrites `description_rewritten` in place for every listing, sequentially.
pub fn rewrite_descriptions<F>(
    props: &mut [FictionalProperty],
    api: &dyn CompletionApi,
    temperature: f64,
    mut on_event: F,
) -> RewriteReport
where
    F: FnMut(&RewriteEvent<'_>),
{
    let total = props.len();
    let mut report = RewriteReport::default();

    for (index, prop) in props.iter_mut().enumerate().map(|(i, p)| (i + 1, p)) {
        let messages = build_messages(prop);
        match api.complete(&messages, temperature) {
            Ok(text) => {
                prop.description_rewritten = text;
                report.rewritten += 1;
                on_event(&RewriteEvent::Rewritten {
                    index,
                    total,
                    name: &prop.fictional_name,
                });
            }
            Err(error) => {
                report.kept += 1;
                tracing::warn!(
                    "listing {} ({}): keeping provisional description: {}",
                    prop.id,
                    prop.fictional_name,
                    error
                );
                on_event(&RewriteEvent::Kept {
                    index,
                    total,
                    name: &prop.fictional_name,
                    error: &error,
                });
            }
        }
    }

    tracing::info!(
        "rewrote {}/{} descriptions ({} kept)",
        report.rewritten,
        total,
        report.kept
    );
    report
}
