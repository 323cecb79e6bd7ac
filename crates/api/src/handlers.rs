pub mod roles;
pub mod shifts;
pub mod staff;
pub mod week;
