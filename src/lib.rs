//! Generates one static HTML page per conference edition from the CCF
//! deadline feed, plus a shared stylesheet.
//!
//! The run is a straight line: [`core::pipeline::ConferencePipeline`] fetches
//! and parses the YAML feed, normalizes each record, renders every edition
//! through the page template and writes the result via a [`core::Storage`].

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::LocalStorage;
pub use crate::config::SiteConfig;
pub use crate::core::{etl::GenerationEngine, pipeline::ConferencePipeline};
pub use crate::utils::error::{PagesError, Result};
