pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logger;
pub mod snake;
pub mod term;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);
