//! Filter fan-out: one decoded image in, thirteen encoded results out.

use filter_kit::{Effect, FilterOptions, PixelBuffer};
use rayon::prelude::*;
use serde_json::Value;

use crate::error::PipelineError;
use crate::services::ResultEncoder;

/// Insertion-ordered mapping from result name to encoded data URL.
///
/// serde_json is built with `preserve_order`, so serialization keeps the
/// presentation order: `original` first, then the twelve filters.
pub type ResultSet = serde_json::Map<String, Value>;

/// Runs the full filter battery against one shared source buffer.
pub struct FilterRunner {
    encoder: ResultEncoder,
}

impl FilterRunner {
    pub fn new(encoder: ResultEncoder) -> Self {
        Self { encoder }
    }

    /// Compute every filter output as a raw buffer, in presentation order.
    ///
    /// Filters are mutually independent pure functions over the shared
    /// source, so they fan out across the rayon pool; the collected vector
    /// restores presentation order regardless of completion order.
    pub fn render_all(
        &self,
        source: &PixelBuffer,
        options: &FilterOptions,
    ) -> Vec<(&'static str, PixelBuffer)> {
        Effect::ALL
            .par_iter()
            .map(|effect| (effect.name(), effect.apply(source, options)))
            .collect()
    }

    /// Run the battery and encode everything, original included.
    ///
    /// Fails atomically: if any encode fails, no partial result set is
    /// returned.
    pub fn run_all(
        &self,
        source: &PixelBuffer,
        options: &FilterOptions,
    ) -> Result<ResultSet, PipelineError> {
        let original = self.encoder.encode_data_url(source)?;

        let encoded: Vec<(&'static str, Result<String, PipelineError>)> = Effect::ALL
            .par_iter()
            .map(|effect| {
                let rendered = effect.apply(source, options);
                (effect.name(), self.encoder.encode_data_url(&rendered))
            })
            .collect();

        let mut results = ResultSet::new();
        results.insert("original".to_string(), Value::String(original));
        for (name, url) in encoded {
            results.insert(name.to_string(), Value::String(url?));
        }

        tracing::debug!(
            width = source.width(),
            height = source.height(),
            results = results.len(),
            "Filter battery complete"
        );
        Ok(results)
    }
}
