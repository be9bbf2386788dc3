pub mod points;
pub mod reference;
