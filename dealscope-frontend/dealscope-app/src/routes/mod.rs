pub mod analysis_view;
pub mod not_found;
