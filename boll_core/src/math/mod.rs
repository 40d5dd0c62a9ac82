pub mod boll;
pub mod offset;
pub mod sma;
pub mod std_dev;
