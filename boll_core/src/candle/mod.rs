pub mod candle;
pub mod sample_data;
