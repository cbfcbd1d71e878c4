pub mod amount;
pub mod color;
