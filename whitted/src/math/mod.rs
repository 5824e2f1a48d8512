pub mod rotation;
pub mod vec;
