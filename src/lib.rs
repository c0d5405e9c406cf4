// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod platform;

pub mod api;
pub mod charts;
pub mod csv;
pub mod file;
pub mod graph;
pub mod notice;
pub mod raster;
pub mod report;
pub mod session;
pub mod task;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
