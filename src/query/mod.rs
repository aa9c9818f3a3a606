mod keyword;
mod merge;
mod params;

pub use keyword::format_keyword;
pub use merge::merge_campaign;
pub use params::QueryParams;
