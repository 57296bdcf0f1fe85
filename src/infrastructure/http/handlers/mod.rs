//! HTTP Handlers

mod hero;
mod hero_power;
mod index;
mod power;

pub use hero::*;
pub use hero_power::*;
pub use index::*;
pub use power::*;
