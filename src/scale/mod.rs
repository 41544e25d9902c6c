//! Scales mapping data values to pixels or colour bands.
//!
//! - `BandScale`: discrete ordered categories (years, months) to evenly divided pixel bands
//! - `LinearScale`: continuous domain to a pixel interval (legend)
//! - `ThresholdScale`: continuous domain to ordered colour bands via sorted cut points

pub mod band;
pub mod linear;
pub mod threshold;

pub use band::BandScale;
pub use linear::LinearScale;
pub use threshold::{ThresholdScale, even_thresholds};
