//! Procedural generator for the MRRBar application icon.
//!
//! Renders the icon (a dark rounded card with four growing green bars and a
//! small upward tick) at the conventional macOS sizes and packs the result
//! into `AppIcon.icns` via `iconutil`. See [`iconset::make_icns`].

pub mod geometry;
pub mod icon;
pub mod iconset;
pub mod logger;
