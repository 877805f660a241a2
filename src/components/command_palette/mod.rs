mod component;
mod palette;

pub use component::CommandPalette;
