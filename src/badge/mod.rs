pub mod fallback;
pub mod marker;
pub mod types;
pub mod write;

pub use fallback::{load_existing_message, resolve};
pub use marker::write_run_marker;
pub use types::{BadgeDocument, Provenance};
pub use write::write_badge;
