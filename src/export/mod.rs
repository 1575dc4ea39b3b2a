//! Deck list rendering and file export

pub mod render;
pub mod writer;

pub use render::render;
pub use writer::export_all;
