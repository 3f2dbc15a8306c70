//! Queries over the rendered page source.
//!
//! The WebDriver fetcher hands these helpers the page source after
//! rendering; they answer the DOM questions the pipeline asks (title,
//! body text, anchors, script sources). Raw order and duplicates are
//! preserved here; dedup and sorting happen downstream.

pub mod html;
