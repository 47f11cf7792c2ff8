pub mod display;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod migrate;
pub mod save;

pub use display::DisplayState;
pub use errors::{ExportError, LoadError};
pub use load::{load_viewer_state, read_viewer_file};
pub use metadata::FileMetadata;
pub use save::{save_viewer_state, write_viewer_file, FORMAT_VERSION};
