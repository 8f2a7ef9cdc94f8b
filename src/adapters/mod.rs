// Adapters layer: concrete page surfaces the shell can render into.

pub mod document;
pub mod memory;

pub use document::HtmlDocument;
pub use memory::MemorySurface;
