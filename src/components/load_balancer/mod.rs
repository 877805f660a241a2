mod component;
mod render;
mod select;
mod state;
mod types;

pub use component::LoadBalancerViz;
