pub mod analytics;
pub mod commands;
pub mod config;
pub mod export;
pub mod http;
pub mod releases;
pub mod runtime;
pub mod site;
pub mod web;
