//! `presentations.batchUpdate` request bodies.

use crate::request::SlidesRequest;
use serde::{Deserialize, Serialize};
use slidemark_core::{EditOperation, Error, MarkupProcessor, Result};

/// Body of a `presentations.batchUpdate` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<SlidesRequest>,
}

impl BatchUpdateRequest {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from one container's edit operations, in order.
    pub fn from_operations(ops: &[EditOperation]) -> Result<Self> {
        let mut batch = Self::new();
        batch.extend(ops)?;
        Ok(batch)
    }

    /// Append another container's operations after the existing requests.
    pub fn extend(&mut self, ops: &[EditOperation]) -> Result<()> {
        let requests = ops
            .iter()
            .map(SlidesRequest::from_operation)
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Built {} Slides requests", requests.len());
        self.requests.extend(requests);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SerializationError(e.to_string()))
    }
}

/// Parse `raw` markup and build the requests that write it into `object_id`.
pub fn render_markup(raw: &str, object_id: &str) -> Result<BatchUpdateRequest> {
    render_markup_with(&MarkupProcessor::new(), raw, object_id)
}

/// Like [`render_markup`], using a configured processor.
pub fn render_markup_with(
    processor: &MarkupProcessor,
    raw: &str,
    object_id: &str,
) -> Result<BatchUpdateRequest> {
    BatchUpdateRequest::from_operations(&processor.render(raw, object_id))
}
