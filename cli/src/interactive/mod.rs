//! Interactive mode implementation

pub mod app;
pub mod integration;
pub mod pages;
