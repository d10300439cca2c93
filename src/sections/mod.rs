// src/sections/mod.rs
mod balances;
mod collectibles;
mod composer;
mod investments;
mod models;

pub use balances::*;
pub use collectibles::*;
pub use composer::*;
pub use investments::*;
pub use models::*;
