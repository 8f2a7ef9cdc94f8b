use crate::core::PageSurface;
use crate::utils::error::{Result, ScaffoldError};
use regex::Regex;
use std::fs;
use std::path::Path;

/// An HTML document held as text, edited in place by element id.
///
/// Only the subset of HTML needed to find one container is understood: the
/// first start tag carrying `id="..."` and its matching end tag, found by
/// counting nested tags of the same name. Comments and scripts containing
/// that tag name will confuse the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn parse(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let html = fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded {} bytes from {}", html.len(), path.as_ref().display());
        Ok(Self::parse(html))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, &self.html)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Byte range of the inner content of the element with `id`.
    ///
    /// Tag and attribute names match in any case; the id value is exact.
    fn inner_range(&self, id: &str) -> Result<(usize, usize)> {
        let id_pattern = regex::escape(id);
        let open = Regex::new(&format!(
            r#"(?is)<([a-z][a-z0-9-]*)(?:\s[^>]*?)?\sid\s*=\s*(?-i:"{id_pattern}"|'{id_pattern}')[^>]*>"#
        ))
        .map_err(|e| ScaffoldError::MalformedDocument {
            message: format!("cannot build matcher for #{}: {}", id, e),
        })?;

        let captures = open
            .captures(&self.html)
            .ok_or_else(|| ScaffoldError::ContainerNotFound { id: id.to_string() })?;
        let (Some(whole), Some(tag)) = (captures.get(0), captures.get(1)) else {
            return Err(ScaffoldError::ContainerNotFound { id: id.to_string() });
        };

        if whole.as_str().ends_with("/>") {
            return Err(ScaffoldError::MalformedDocument {
                message: format!("container #{} is self-closing", id),
            });
        }

        let tag_name = regex::escape(tag.as_str());
        let tags = Regex::new(&format!(r"(?i)<(/?){tag_name}(?:[\s/][^>]*)?>")).map_err(|e| {
            ScaffoldError::MalformedDocument {
                message: format!("cannot build matcher for <{}>: {}", tag.as_str(), e),
            }
        })?;

        let start = whole.end();
        let mut depth = 1usize;
        for found in tags.captures_iter(&self.html[start..]) {
            let (Some(m), closing) = (found.get(0), found.get(1).is_some_and(|c| c.as_str() == "/"))
            else {
                continue;
            };
            if closing {
                depth -= 1;
                if depth == 0 {
                    return Ok((start, start + m.start()));
                }
            } else if !m.as_str().ends_with("/>") {
                depth += 1;
            }
        }

        Err(ScaffoldError::MalformedDocument {
            message: format!("container #{} has no closing </{}>", id, tag.as_str()),
        })
    }
}

impl PageSurface for HtmlDocument {
    fn set_content(&mut self, id: &str, html: &str) -> Result<()> {
        let (start, end) = self.inner_range(id)?;
        self.html.replace_range(start..end, html);
        Ok(())
    }
}
