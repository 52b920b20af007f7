pub mod ecs;
pub mod spawn;
pub mod world;
