pub mod swatch_png;

pub use swatch_png::render_swatches;
