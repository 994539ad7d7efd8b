//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of components so they can be unit tested without a
//! browser.

pub mod chart_geometry;
pub mod markdown;
