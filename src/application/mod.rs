pub mod context;
pub mod registry;
pub mod tools;
