pub mod detection;
pub mod sensor;
