pub mod config;
pub mod derivation;
pub mod format;
pub mod locale;
pub mod models;
pub mod pipeline;
pub mod preload;
pub mod sections;

pub use pipeline::{PipelineStats, WalletSectionsPipeline};
