pub mod original_panel;
pub mod processed_panel;

pub use original_panel::original_panel;
pub use processed_panel::processed_panel;

pub(crate) const PANEL_HEIGHT: f32 = 300.0;
