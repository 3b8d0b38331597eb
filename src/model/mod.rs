// 点数計算のデータモデル
mod config;
mod define;
mod score;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::{config::*, define::*, score::*};
