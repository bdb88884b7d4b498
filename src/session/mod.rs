pub mod quiz;
pub mod stats_view;
