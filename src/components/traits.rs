pub mod attachable;
pub mod component;
