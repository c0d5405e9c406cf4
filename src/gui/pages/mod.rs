// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod analysis;
pub mod extraction;
pub mod home;
pub mod results;
pub mod visualization;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;

    /// Navigation label
    fn title(&self) -> &'static str;

    /// Draw the page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
