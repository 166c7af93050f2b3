//! Registered floating windows, each implementing `AppWindow`.

pub mod download_view;
