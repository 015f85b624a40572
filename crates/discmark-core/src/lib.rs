pub mod config;
pub mod logging;

pub mod batch;
pub mod bookmarks;
pub mod catalog;
pub mod export;
pub mod retry;
pub mod url_model;
