//! Entities in the simulation. There is exactly one: the plant.

pub mod plant;

pub use plant::{PlantState, Stage, Stat};
