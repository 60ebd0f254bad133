pub mod locations;
pub mod world;
