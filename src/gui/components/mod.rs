// src/gui/components/mod.rs
pub mod charts;
pub mod data_table;
pub mod export_bar;
pub mod graph_view;
pub mod notices;
pub mod platform_picker;
pub mod raster;
pub mod sidebar;
