use super::*;

// 満貫以上の点数の呼称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    Mangan,
    Haneman,
    Baiman,
    Sanbaiman,
    Yakuman(usize), // 役満倍率 (数え役満を含む)
}

// 役満倍率の接頭辞 (1: なし, 2: 二倍, ...)
fn multiple_prefix(n: usize) -> String {
    const NUMS: [&str; 11] = ["", "", "二", "三", "四", "五", "六", "七", "八", "九", "十"];
    match n {
        0 | 1 => "".to_string(),
        2..=10 => format!("{}倍", NUMS[n]),
        _ => format!("{}倍", n),
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mangan => write!(f, "満貫"),
            Self::Haneman => write!(f, "跳満"),
            Self::Baiman => write!(f, "倍満"),
            Self::Sanbaiman => write!(f, "三倍満"),
            Self::Yakuman(n) => write!(f, "{}役満", multiple_prefix(*n)),
        }
    }
}

// 点数計算の結果
// ツモ和了: main = 親の支払い(親の和了の場合は子全員の支払い), additional = 子の支払い
// ロン和了: main = 放銃者の支払い, additional = 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub main: Point,
    pub additional: Point,
    pub main_bonus: Point,         // mainに対する本場の加算
    pub additional_bonus: Point,   // additionalに対する本場の加算
    pub kyoutaku_bonus: Point,     // 供託リーチ棒
    pub total: Point,              // 和了者の収入合計
    pub level: Option<ScoreLevel>, // 満貫, 跳満, ...
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "main: {}, additional: {}, total: {}",
            self.main, self.additional, self.total
        )?;
        if let Some(level) = &self.level {
            write!(f, ", {}", level)?;
        }
        Ok(())
    }
}

#[test]
fn test_score_level_title() {
    assert_eq!(ScoreLevel::Mangan.to_string(), "満貫");
    assert_eq!(ScoreLevel::Sanbaiman.to_string(), "三倍満");
    assert_eq!(ScoreLevel::Yakuman(1).to_string(), "役満");
    assert_eq!(ScoreLevel::Yakuman(2).to_string(), "二倍役満");
    assert_eq!(ScoreLevel::Yakuman(6).to_string(), "六倍役満");
    assert_eq!(ScoreLevel::Yakuman(12).to_string(), "12倍役満");
    assert_eq!(ScoreLevel::Yakuman(10).to_string(), "十倍役満");
}

#[test]
fn test_score_result_display() {
    let res = ScoreResult {
        main: 4000,
        additional: 2000,
        total: 8000,
        level: Some(ScoreLevel::Mangan),
        ..Default::default()
    };
    assert_eq!(res.to_string(), "main: 4000, additional: 2000, total: 8000, 満貫");

    let res = ScoreResult {
        main: 1000,
        total: 1000,
        ..Default::default()
    };
    assert_eq!(res.to_string(), "main: 1000, additional: 0, total: 1000");
}
