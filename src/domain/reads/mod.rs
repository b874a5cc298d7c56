pub mod error;
pub mod model;
pub mod service;

pub use error::ReadsServiceError;
pub use model::TrackedRead;
pub use service::{PublishTargets, ReadsService, ReadsServiceApi, RefreshOutcome};
