//! Full-screen views, one per session screen, each implementing `ScreenView`.

pub mod client_select;
pub mod demo;
pub mod login;
pub mod splash;
