//! Search source adapter implementations.
//!
//! Each module provides a struct implementing [`crate::source::SourceAdapter`]
//! that queries a specific provider — HTML scraping for the general web
//! engines, JSON APIs for Brave and Semantic Scholar.

pub mod bing;
pub mod brave;
pub mod duckduckgo;
pub mod scholar;

pub use bing::BingAdapter;
pub use brave::BraveAdapter;
pub use duckduckgo::DuckDuckGoAdapter;
pub use scholar::ScholarAdapter;
