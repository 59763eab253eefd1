pub mod archive;
pub mod deadline;
pub mod jwt;
pub mod naming;
pub mod parameter_error_handler;

pub use archive::{ARCHIVE_CONTENT_TYPE, ArchiveBuilder};
pub use deadline::{is_within_window, validate_window};
pub use naming::derive_name;
pub use parameter_error_handler::{json_error_handler, query_error_handler};
