pub mod loader;
pub mod viewport;

pub use loader::{MediaLoadState, MediaLoader, MediaStatus};
pub use viewport::{preload, IntersectionWatcher, RootMargin, ViewportWatcher};
