// 構造的な意味合いや一貫性を保つために以下のclippy警告は無効化
#![warn(rust_2018_idioms)]
#![allow(clippy::collapsible_else_if)]

pub mod app;
pub mod hand;
pub mod model;
pub mod util;
