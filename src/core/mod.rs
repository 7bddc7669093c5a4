pub mod contact;
pub mod page;

pub use crate::domain::model::{FlowView, FormState, SubmissionResult, SubmitEvent, SubmitOutcome};
pub use crate::domain::ports::{ContactTransport, Storage};
pub use crate::utils::error::Result;
