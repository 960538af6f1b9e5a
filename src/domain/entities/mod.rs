pub mod collection;
pub mod memory;
pub mod point;
pub mod tool;
