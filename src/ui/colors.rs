//! Static colour palette: accents and client-status badges.

use crate::types::ClientStatus;
use eframe::egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);
pub const DROP_HIGHLIGHT: Color32 = Color32::from_rgb(239, 246, 255);

/// `(fill, text)` colours for a client-status badge.
pub const fn status_badge(status: ClientStatus) -> (Color32, Color32) {
    match status {
        ClientStatus::Done => (Color32::from_rgb(220, 252, 231), Color32::from_rgb(22, 101, 52)),
        ClientStatus::Reset => (Color32::from_rgb(243, 244, 246), Color32::from_rgb(31, 41, 55)),
        ClientStatus::InProgress => {
            (Color32::from_rgb(219, 234, 254), Color32::from_rgb(30, 64, 175))
        }
    }
}
