pub mod index;
pub mod utilities;
