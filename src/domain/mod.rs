pub mod model;
pub mod months;
pub mod ports;
