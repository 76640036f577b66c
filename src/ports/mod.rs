mod console_styler;
mod layout_store;
mod source_store;

pub use console_styler::{ConsoleStyler, PlainStyler};
pub use layout_store::LayoutStore;
pub use source_store::SourceStore;
