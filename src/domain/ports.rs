use crate::utils::error::Result;

/// A page region store the shell can write markup into.
pub trait PageSurface {
    /// Replaces the content of the element with the given id.
    ///
    /// Returns `ScaffoldError::ContainerNotFound` when no such element exists.
    fn set_content(&mut self, id: &str, html: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn container_id(&self) -> &str;
    fn api_url(&self) -> &str;
}
