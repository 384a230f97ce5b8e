//! Backend access for species uploads

pub mod client;
pub mod sink;

pub use client::RestClient;
pub use sink::{PreviewSink, SpeciesSink};
