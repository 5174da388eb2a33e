pub mod app;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod editor;
pub mod hooks;
pub mod persistence;
pub mod shared;
