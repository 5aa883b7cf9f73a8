pub mod category;
pub mod station;
