pub mod role;
pub mod shift;
pub mod staff;
