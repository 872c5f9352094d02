pub mod analysis;
pub mod datasets;
pub mod fetch;
pub mod icons;
pub mod loader;
pub mod output;
pub mod report;
