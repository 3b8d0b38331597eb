// 翻数, 符数からの点数計算と役の定義を行うモジュール
mod aotenjou;
mod point;
mod yaku;

pub use self::{
    aotenjou::{aotenjou_filter_yaku, Aotenjou},
    point::{create_score_calculator, ScoreCalculator, StandardScores},
    yaku::{calc_han, Yaku, YakuDefine},
};
