pub mod bs;
pub mod curve;
