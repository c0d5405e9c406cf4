// src/config/state.rs

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Navigation panel open/closed
    pub sidebar_open: bool,

    /// Active page index into router::PAGES
    pub current_page_index: usize,

    /// Export folder text field; applied on export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 800,
            sidebar_open: true,
            current_page_index: 0,
            out_dir_text: s!(super::consts::DEFAULT_OUT_DIR),
            out_dir_dirty: false,
        }
    }
}
