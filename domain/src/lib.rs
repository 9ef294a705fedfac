pub mod dashboard;
pub mod ports;
