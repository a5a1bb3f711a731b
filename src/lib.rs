pub mod cli;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod texture;
pub mod window;
