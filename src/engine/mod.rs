//! Engine sub-modules: session screens, upload selection, scripted pipeline, and
//! the generated-document checklist.

pub mod checklist;
pub mod pipeline;
pub mod session;
pub mod upload;
