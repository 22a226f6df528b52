mod cooldown;
mod evaluate;
mod kind;

pub use cooldown::*;
pub use evaluate::*;
pub use kind::*;
