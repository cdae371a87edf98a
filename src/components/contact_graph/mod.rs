mod builder;
mod canvas;
mod component;
mod config;
mod controller;
mod draw_list;
mod highlight;
mod hit;
mod render;
pub mod scale;
mod simulation;
mod state;
mod types;
mod viewport;

pub use component::ContactGraphCanvas;
pub use types::Contact;
