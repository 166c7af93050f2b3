//! UI layer: App orchestrator, view traits, colour palette, screens, and windows.

pub mod app;
pub mod colors;
pub mod screens;
pub mod widgets;
pub mod window;
pub mod windows;
