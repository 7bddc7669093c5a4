pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod site;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, LocalStorage};

pub use adapters::ReqwestTransport;
pub use config::{toml_config::SiteConfig, BackendConfig};
pub use core::{contact::ContactSubmissionFlow, page::PagePublisher};
pub use domain::error::ContactError;
pub use domain::model::{
    ContactField, FlowView, FormState, SubmissionResult, SubmitEvent, SubmitOutcome,
};
pub use utils::error::{Result, SiteError};
