pub mod heatmap;
pub mod surface;
