//! Heatmap synthesis module
//!
//! This module turns the discrete suspect mask into a smooth thermal-style
//! visualization by diffusing it with a Gaussian blur and grading the result
//! through a jet colormap.

mod colormap;
mod synth;

pub use colormap::jet;
pub use synth::synthesize_heatmap;
