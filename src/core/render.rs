use crate::adapters::HtmlDocument;
use crate::config::ShellConfig;
use crate::core::app::App;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::PathBuf;

/// One run of the shell against an HTML document on disk.
#[derive(Debug, Clone, Default)]
pub struct RenderJob {
    pub document: PathBuf,
    pub output: Option<PathBuf>,
    /// Overrides `container_id` from the config file.
    pub container: Option<String>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Saved(PathBuf),
    Inline(String),
}

impl RenderJob {
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }

    /// Settings after applying the container override, validated.
    pub fn shell_config(&self) -> Result<ShellConfig> {
        let mut config = match &self.config {
            Some(path) => ShellConfig::from_file(path)?,
            None => ShellConfig::default(),
        };
        if let Some(id) = &self.container {
            config.container_id = id.clone();
        }
        config.validate()?;
        Ok(config)
    }

    /// Renders the document, saving it to `output` or returning the markup.
    ///
    /// Nothing is read or written before the settings validate.
    pub fn run(&self) -> Result<Rendered> {
        let config = self.shell_config()?;
        tracing::debug!("API base URL: {}", config.api_url);

        let page = HtmlDocument::load(&self.document)?;
        let mut app = App::from_config(page, &config);
        app.init()?;

        let page = app.into_surface();
        match &self.output {
            Some(path) => {
                page.save(path)?;
                tracing::info!("📁 Rendered page saved to: {}", path.display());
                Ok(Rendered::Saved(path.clone()))
            }
            None => Ok(Rendered::Inline(page.into_string())),
        }
    }
}
