//! Platform-agnostic building blocks: persistence, theming, navigation,
//! form and alert state, timers and formatting.

pub mod alerts;
pub mod config;
pub mod format;
pub mod forms;
pub mod nav;
pub mod platform;
pub mod redraw;
pub mod storage;
pub mod tasks;
pub mod theme;
pub mod timing;
