/// Media loading module
///
/// This module handles:
/// - Indexing the on-disk assets folder (assets.rs)
/// - Decoding images into renderer handles off the UI thread (loader.rs)
/// - Generating and caching grid thumbnails (thumbnail.rs)
///
/// Every asset moves through a placeholder -> ready/failed progression;
/// a missing or broken file renders a deterministic fallback card, never
/// an error dialog.

pub mod assets;
pub mod loader;
pub mod thumbnail;

pub use loader::{ImageState, LoadError};
