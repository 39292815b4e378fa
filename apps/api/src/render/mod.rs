// Document rendering: pure substitution into a fixed skeleton plus
// repeated-section expansion. No I/O and no clock reads in this module.

pub mod page;
pub mod sections;

pub use page::render;
