pub mod constants;
pub mod types;

pub use constants::{ParamKeys, DEFAULT_MEDIUM};
pub use types::{AnnotationRequest, CampaignParams, KeywordCounter, ParamScheme};
