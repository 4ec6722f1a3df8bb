/// State management module
///
/// This module handles all application state, including:
/// - Wraparound index navigation (navigation.rs)
/// - Modal viewer state and the page scroll lock (viewer.rs)
/// - Contact form fields and validation (contact.rs)
/// - Persisted window geometry (window.rs)

pub mod contact;
pub mod navigation;
pub mod viewer;
pub mod window;
