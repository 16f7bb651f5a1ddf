pub mod button;
pub mod container;
pub mod flex;
pub mod label;
pub mod text;
