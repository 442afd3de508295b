// article-generation-service/src/lib.rs

pub mod composer;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod image;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod seed;
pub mod storage;
