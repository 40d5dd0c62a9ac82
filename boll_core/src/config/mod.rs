pub mod boll_config;
pub mod config_with_check;
