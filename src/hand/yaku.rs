use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::*;

// 役の識別子
// YAKU_LISTの並び順と一致させること (Yaku as usize で定義を参照する)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Yaku {
    Menzentsumo,
    Riichi,
    DaburuRiichi,
    Ippatsu,
    Chankan,
    RinshanKaihou,
    HaiteiRaoyue,
    HouteiRaoyui,
    Pinfu,
    Tanyao,
    Iipeikou,
    Haku,
    Hatsu,
    Chun,
    Jikaze,
    Bakaze,
    SanshokuDoujun,
    SanshokuDoukou,
    Ittsu,
    Chanta,
    Junchan,
    Honroutou,
    Toitoi,
    Sanankou,
    Sankantsu,
    Shousangen,
    Chiitoitsu,
    Ryanpeikou,
    Honitsu,
    Chinitsu,
    NagashiMangan,
    Dora,
    UraDora,
    AkaDora,
    // 役満
    KokushiMusou,
    Suuankou,
    Daisangen,
    Shousuushii,
    Tsuuiisou,
    Ryuuiisou,
    Chinroutou,
    Suukantsu,
    ChuurenPoutou,
    Tenhou,
    Chiihou,
    Renhou,
    Daisharin,
    // ダブル役満
    KokushiMusouJuusanmen,
    SuuankouTanki,
    Daisuushii,
    JunseiChuurenPoutou,
}

pub struct YakuDefine {
    pub yaku: Yaku,
    pub name: &'static str,
    pub han_closed: Han, // 鳴きなしの翻
    pub han_open: Han,   // 鳴きありの翻(食い下がり), 0は門前限定
    pub yakuman: usize,  // 役満倍率 (0: 通常役, 1: 役満, 2: ダブル役満)
}

impl YakuDefine {
    pub fn han(&self, is_open: bool, opts: &Options) -> Han {
        let han = if is_open {
            self.han_open
        } else {
            self.han_closed
        };
        if self.yakuman == 2 && !opts.has_double_yakuman {
            han / 2
        } else {
            han
        }
    }
}

impl fmt::Debug for YakuDefine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.name, self.han_closed, self.han_open, self.yakuman
        )
    }
}

macro_rules! yaku {
    ($y: ident, $n: expr, $c: expr, $o: expr) => {
        YakuDefine {
            yaku: Yaku::$y,
            name: $n,
            han_closed: $c,
            han_open: $o,
            yakuman: 0,
        }
    };
}

macro_rules! yakuman {
    ($y: ident, $n: expr, $m: expr, $open: expr) => {
        YakuDefine {
            yaku: Yaku::$y,
            name: $n,
            han_closed: 13 * $m,
            han_open: if $open { 13 * $m } else { 0 },
            yakuman: $m,
        }
    };
}

static YAKU_LIST: &[YakuDefine] = &[
    yaku!(Menzentsumo, "門前清自摸和", 1, 0),
    yaku!(Riichi, "立直", 1, 0),
    yaku!(DaburuRiichi, "両立直", 2, 0),
    yaku!(Ippatsu, "一発", 1, 0),
    yaku!(Chankan, "槍槓", 1, 1),
    yaku!(RinshanKaihou, "嶺上開花", 1, 1),
    yaku!(HaiteiRaoyue, "海底摸月", 1, 1),
    yaku!(HouteiRaoyui, "河底撈魚", 1, 1),
    yaku!(Pinfu, "平和", 1, 0),
    yaku!(Tanyao, "断么九", 1, 1),
    yaku!(Iipeikou, "一盃口", 1, 0),
    yaku!(Haku, "白", 1, 1),
    yaku!(Hatsu, "發", 1, 1),
    yaku!(Chun, "中", 1, 1),
    yaku!(Jikaze, "自風", 1, 1),
    yaku!(Bakaze, "場風", 1, 1),
    yaku!(SanshokuDoujun, "三色同順", 2, 1),
    yaku!(SanshokuDoukou, "三色同刻", 2, 2),
    yaku!(Ittsu, "一気通貫", 2, 1),
    yaku!(Chanta, "混全帯么九", 2, 1),
    yaku!(Junchan, "純全帯么九", 3, 2),
    yaku!(Honroutou, "混老頭", 2, 2),
    yaku!(Toitoi, "対々和", 2, 2),
    yaku!(Sanankou, "三暗刻", 2, 2),
    yaku!(Sankantsu, "三槓子", 2, 2),
    yaku!(Shousangen, "小三元", 2, 2),
    yaku!(Chiitoitsu, "七対子", 2, 0),
    yaku!(Ryanpeikou, "二盃口", 3, 0),
    yaku!(Honitsu, "混一色", 3, 2),
    yaku!(Chinitsu, "清一色", 6, 5),
    yaku!(NagashiMangan, "流し満貫", 5, 5),
    yaku!(Dora, "ドラ", 1, 1),
    yaku!(UraDora, "裏ドラ", 1, 1),
    yaku!(AkaDora, "赤ドラ", 1, 1),
    // 役満
    yakuman!(KokushiMusou, "国士無双", 1, false),
    yakuman!(Suuankou, "四暗刻", 1, false),
    yakuman!(Daisangen, "大三元", 1, true),
    yakuman!(Shousuushii, "小四喜", 1, true),
    yakuman!(Tsuuiisou, "字一色", 1, true),
    yakuman!(Ryuuiisou, "緑一色", 1, true),
    yakuman!(Chinroutou, "清老頭", 1, true),
    yakuman!(Suukantsu, "四槓子", 1, true),
    yakuman!(ChuurenPoutou, "九蓮宝燈", 1, false),
    yakuman!(Tenhou, "天和", 1, false),
    yakuman!(Chiihou, "地和", 1, false),
    yakuman!(Renhou, "人和", 1, false),
    yakuman!(Daisharin, "大車輪", 1, false),
    // ダブル役満 (has_double_yakuman=falseの場合は役満扱い)
    yakuman!(KokushiMusouJuusanmen, "国士無双十三面待ち", 2, false),
    yakuman!(SuuankouTanki, "四暗刻単騎", 2, false),
    yakuman!(Daisuushii, "大四喜", 2, true),
    yakuman!(JunseiChuurenPoutou, "純正九蓮宝燈", 2, false),
];

impl Yaku {
    #[inline]
    pub fn define(&self) -> &'static YakuDefine {
        &YAKU_LIST[*self as usize]
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.define().name
    }

    #[inline]
    pub fn is_yakuman(&self) -> bool {
        self.define().yakuman != 0
    }

    pub fn from_name(name: &str) -> Option<Self> {
        YAKU_LIST.iter().find(|d| d.name == name).map(|d| d.yaku)
    }

    pub fn iter() -> impl Iterator<Item = Yaku> {
        YAKU_LIST.iter().map(|d| d.yaku)
    }
}

impl fmt::Display for Yaku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// 役名(日本語)または識別子(大文字小文字は区別しない)から変換
impl std::str::FromStr for Yaku {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(y) = Self::from_name(s) {
            return Ok(y);
        }
        Self::iter()
            .find(|y| format!("{:?}", y).eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown yaku: {}", s))
    }
}

// 役一覧から(翻数, 役満かどうか)を返却
// 通常ルールでは役満が含まれている場合は役満のみを数える
// 青天井では役満も通常役として他の役と合算する
pub fn calc_han(hand_yaku: &[Yaku], is_open: bool, opts: &Options) -> (Han, bool) {
    let han_of = |y: &Yaku| y.define().han(is_open, opts);
    if !opts.has_aotenjou && hand_yaku.iter().any(|y| y.is_yakuman()) {
        let han = hand_yaku
            .iter()
            .filter(|y| y.is_yakuman())
            .map(han_of)
            .sum();
        (han, true)
    } else {
        (hand_yaku.iter().map(han_of).sum(), false)
    }
}

#[test]
fn test_yaku_list_order() {
    for (i, d) in YAKU_LIST.iter().enumerate() {
        assert_eq!(d.yaku as usize, i, "{:?}", d);
    }
    assert_eq!(Yaku::JunseiChuurenPoutou.define().name, "純正九蓮宝燈");
}

#[test]
fn test_yaku_from_str() {
    assert_eq!("大三元".parse::<Yaku>(), Ok(Yaku::Daisangen));
    assert_eq!("toitoi".parse::<Yaku>(), Ok(Yaku::Toitoi));
    assert_eq!("SuuankouTanki".parse::<Yaku>(), Ok(Yaku::SuuankouTanki));
    assert!("三倍満".parse::<Yaku>().is_err());
    assert_eq!(Yaku::Chun.to_string(), "中");
}

#[test]
fn test_calc_han_normal() {
    let opts = Options::default();
    let yakus = vec![Yaku::Riichi, Yaku::Pinfu, Yaku::Tanyao, Yaku::Dora, Yaku::Dora];
    assert_eq!(calc_han(&yakus, false, &opts), (5, false));

    // 食い下がり
    let yakus = vec![Yaku::Honitsu, Yaku::Ittsu, Yaku::Haku];
    assert_eq!(calc_han(&yakus, false, &opts), (6, false));
    assert_eq!(calc_han(&yakus, true, &opts), (4, false));
}

#[test]
fn test_calc_han_yakuman() {
    let opts = Options::default();
    let yakus = vec![Yaku::Daisangen, Yaku::Toitoi, Yaku::Chun, Yaku::Dora];
    assert_eq!(calc_han(&yakus, true, &opts), (13, true));

    let yakus = vec![Yaku::SuuankouTanki, Yaku::Tsuuiisou];
    assert_eq!(calc_han(&yakus, false, &opts), (39, true));

    let opts = Options {
        has_double_yakuman: false,
        ..Default::default()
    };
    assert_eq!(calc_han(&yakus, false, &opts), (26, true));
}

#[test]
fn test_calc_han_aotenjou() {
    let opts = Options {
        has_aotenjou: true,
        ..Default::default()
    };
    let yakus = vec![Yaku::Daisangen, Yaku::Toitoi, Yaku::Dora];
    assert_eq!(calc_han(&yakus, true, &opts), (16, false));
}
