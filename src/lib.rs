//! Adds campaign tracking parameters (`utm_campaign`, `utm_medium`, ...) to
//! every URL found in a piece of text, leaving the rest of the text alone.
//!
//! ```
//! use url_campaignify::{Annotator, CampaignParams};
//!
//! let annotator = Annotator::new();
//! let text = annotator.annotate("Visit http://test.de today", &CampaignParams::new("spring"));
//! assert_eq!(text, "Visit http://test.de?utm_campaign=spring&utm_medium=email today");
//! ```

pub mod annotator;
pub mod common;
pub mod domain_filter;
pub mod matcher;
pub mod query;
pub mod settings;

pub use annotator::Annotator;
pub use common::{AnnotationRequest, CampaignParams, KeywordCounter, ParamKeys, ParamScheme};
pub use domain_filter::DomainFilter;
pub use matcher::{find_urls, UrlMatch};
pub use query::{format_keyword, merge_campaign, QueryParams};
pub use settings::AnnotatorSettings;
