mod analysis;

pub mod country;
pub mod region_mapper;

pub use analysis::{AnalysisResponse, Deal, DealQuality};
