pub mod config;
pub mod http;
pub mod raindrop;
pub mod storage;
