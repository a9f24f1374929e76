pub mod constants;
pub mod error;
pub mod shared_wheel_game;

pub use error::WheelError;
