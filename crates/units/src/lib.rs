pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod length_test;

pub use length::Length;
pub use mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};
pub use time::Time;
pub use velocity::Velocity;
