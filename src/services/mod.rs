mod layout_filesystem;
mod source_fileshare;
mod styler_term;

pub use layout_filesystem::FilesystemLayoutStore;
pub use source_fileshare::FileshareSourceStore;
pub use styler_term::{detect_styler, TermStyler};
