pub mod role;
pub mod shift;
pub mod staff;
pub mod week;
