//! Grid snake whose moves come from the keyboard or from an A* autopilot
//! that re-plans a route to the food on every tick.

pub mod autopilot;
pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod pathfinding;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
