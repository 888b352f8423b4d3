//! Virtual Plant - a tamagotchi-style houseplant for the terminal

pub mod actions;
pub mod core;
pub mod entity;
pub mod render;
pub mod simulation;
pub mod ui;
