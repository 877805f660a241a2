pub mod command_palette;
pub mod footer;
pub mod load_balancer;
pub mod nav_bar;
pub mod runtime_history;
pub mod service_mesh;
pub mod tech_stack;
pub mod terminal_hero;
