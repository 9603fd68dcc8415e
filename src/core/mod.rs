pub mod canvas;
pub mod engine;
pub mod game;
pub mod input;
pub mod raster;
pub mod surface;
pub mod terminal;
