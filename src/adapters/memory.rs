use crate::core::PageSurface;
use crate::utils::error::{Result, ScaffoldError};
use std::collections::BTreeMap;

/// Page surface backed by a map of element id to content.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    elements: BTreeMap<String, String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.insert_element(id);
        self
    }

    pub fn insert_element(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }
}

impl PageSurface for MemorySurface {
    fn set_content(&mut self, id: &str, html: &str) -> Result<()> {
        let slot = self
            .elements
            .get_mut(id)
            .ok_or_else(|| ScaffoldError::ContainerNotFound { id: id.to_string() })?;
        *slot = html.to_string();
        Ok(())
    }
}
