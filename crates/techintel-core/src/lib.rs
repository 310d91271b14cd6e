//! Core techintel library (formatter, seeded series, charts, engine, providers, config).

pub mod charts;
pub mod config;
pub mod credentials;
pub mod intel;
pub mod markdown;
pub mod prompts;
pub mod providers;
pub mod series;
