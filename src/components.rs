pub mod handle;
pub mod player;
pub mod traits;
