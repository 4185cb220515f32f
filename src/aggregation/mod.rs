pub mod rollup;
pub mod segments;

pub use rollup::{aggregate, lookup};
pub use segments::build_light_segments;
