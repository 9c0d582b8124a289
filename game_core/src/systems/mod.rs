pub mod animation;
pub mod collision;
pub mod input;
pub mod movement;
pub mod round;

pub use animation::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use round::*;
