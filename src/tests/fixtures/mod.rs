pub mod gateway;
pub mod information;
