//! Report aggregation and rendering
//!
//! Takes the findings from a validation run, groups them by severity, and
//! renders them as console text. Purely presentational; the verdict logic
//! lives on [`Report`] itself.

mod aggregate;
mod render;

pub use aggregate::aggregate;
pub use render::render;
