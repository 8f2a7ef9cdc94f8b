use crate::core::{AppState, ConfigProvider, Item, PageSurface};
use crate::domain::model::{DEFAULT_CONTAINER_ID, WELCOME_MARKUP};
use crate::utils::error::Result;

/// Application shell: logs its startup and renders the welcome heading.
pub struct App<S: PageSurface> {
    surface: S,
    container_id: String,
    items: Vec<Item>,
    state: AppState,
}

impl<S: PageSurface> App<S> {
    pub fn new(surface: S) -> Self {
        Self::with_container(surface, DEFAULT_CONTAINER_ID)
    }

    pub fn with_container(surface: S, container_id: impl Into<String>) -> Self {
        Self {
            surface,
            container_id: container_id.into(),
            items: Vec::new(),
            state: AppState::Constructed,
        }
    }

    pub fn from_config<C: ConfigProvider>(surface: S, config: &C) -> Self {
        Self::with_container(surface, config.container_id())
    }

    /// Logs the startup message, then renders.
    ///
    /// The log line is emitted before rendering, so it is present even when
    /// the container is missing and this returns an error.
    pub fn init(&mut self) -> Result<()> {
        // TODO: load initial items once there is an endpoint to read them from.
        tracing::info!("App initialized");
        self.state = AppState::Initialized;
        self.render()
    }

    pub fn render(&mut self) -> Result<()> {
        tracing::debug!("Rendering into #{}", self.container_id);
        self.surface.set_content(&self.container_id, WELCOME_MARKUP)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
