use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "MediaClean";

pub const SUBMIT_IDLE_LABEL: &str = "Process Media";
pub const SUBMIT_FLASH_LABEL: &str = "Completed!";

// Idle purple and success green, carried over from the original page styling.
pub const SUBMIT_IDLE_COLOR: Color32 = Color32::from_rgb(0x6c, 0x5c, 0xe7);
pub const SUBMIT_FLASH_COLOR: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45);

pub const ACTIVE_STROKE_COLOR: Color32 = SUBMIT_IDLE_COLOR;
pub const INACTIVE_STROKE_COLOR: Color32 = Color32::from_gray(60);
pub const DRAG_OVER_FILL: Color32 = Color32::from_rgb(0x2a, 0x26, 0x40);
