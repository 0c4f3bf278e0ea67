//! Warframe task tracker library - task stores, reordering, backups and the TUI

pub mod cli;
pub mod profile;
pub mod storage;
pub mod task;
pub mod tui;
