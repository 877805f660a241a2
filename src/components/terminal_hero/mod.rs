mod boot;
mod component;

pub use component::TerminalHero;
