use super::aotenjou::Aotenjou;
use super::yaku::Yaku;
use crate::model::*;

// 点数計算 trait
pub trait ScoreCalculator: Send + Sync {
    // 翻数と符数から支払い点数を計算
    // is_yakuman: 役満の役による和了 (数え役満の制限を受けない)
    fn calculate_scores(
        &self,
        han: Han,
        fu: Fu,
        config: &RulesetConfig,
        is_yakuman: bool,
    ) -> ScoreResult;

    // 翻数計算の前に役一覧から重複して数えるべきでない役を削除
    fn filter_yaku(&self, _hand_yaku: &mut Vec<Yaku>) {}

    fn name(&self) -> &'static str;
}

pub fn create_score_calculator(opts: &Options) -> Box<dyn ScoreCalculator> {
    if opts.has_aotenjou {
        Box::new(Aotenjou)
    } else {
        Box::new(StandardScores)
    }
}

// 100点単位に切り上げ
#[inline]
pub(super) fn ceil100(n: Point) -> Point {
    n.saturating_add(99) / 100 * 100
}

// 基本点 = 符 * 2^(翻 + 2)
pub(super) fn calc_base_point(han: Han, fu: Fu) -> Point {
    let fu = fu as Point;
    match han.checked_add(2) {
        Some(e) if e < Point::BITS as usize => fu.saturating_mul(1 << e),
        _ => {
            if fu == 0 {
                0
            } else {
                Point::MAX
            }
        }
    }
}

// 基本点の1倍, 2倍, 4倍, 6倍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Rounded {
    pub x1: Point,
    pub x2: Point,
    pub x4: Point,
    pub x6: Point,
}

impl Rounded {
    // 基本点から計算 (それぞれ100点単位に切り上げ)
    pub(super) fn from_base(base: Point) -> Self {
        Self {
            x1: ceil100(base),
            x2: ceil100(base.saturating_mul(2)),
            x4: ceil100(base.saturating_mul(4)),
            x6: ceil100(base.saturating_mul(6)),
        }
    }

    // 満貫以上の基本点から計算 (切り上げ不要)
    fn from_limit(rounded: Point) -> Self {
        let x2 = rounded.saturating_mul(2);
        Self {
            x1: rounded,
            x2,
            x4: x2.saturating_mul(2),
            x6: x2.saturating_mul(3),
        }
    }
}

// 支払いの内訳を作成
pub(super) fn split_payment(
    rounded: &Rounded,
    config: &RulesetConfig,
    level: Option<ScoreLevel>,
) -> ScoreResult {
    let honba = config.honba as Point;
    let kyoutaku_bonus = (config.kyoutaku as Point).saturating_mul(KYOUTAKU);

    if config.is_tsumo {
        let bonus = honba.saturating_mul(HONBA_TSUMO);
        let main = rounded.x2;
        let (additional, total) = if config.is_dealer {
            // 子全員が同じ点数を支払う
            let total = main.saturating_add(bonus).saturating_mul(3);
            (rounded.x2, total)
        } else {
            let total = main
                .saturating_add(bonus)
                .saturating_add(rounded.x1.saturating_add(bonus).saturating_mul(2));
            (rounded.x1, total)
        };
        ScoreResult {
            main,
            additional,
            main_bonus: bonus,
            additional_bonus: bonus,
            kyoutaku_bonus,
            total: total.saturating_add(kyoutaku_bonus),
            level,
        }
    } else {
        let main = if config.is_dealer {
            rounded.x6
        } else {
            rounded.x4
        };
        let main_bonus = honba.saturating_mul(HONBA_RON);
        ScoreResult {
            main,
            additional: 0,
            main_bonus,
            additional_bonus: 0,
            kyoutaku_bonus,
            total: main.saturating_add(main_bonus).saturating_add(kyoutaku_bonus),
            level,
        }
    }
}

// 5翻以上の基本点
fn calc_limit_point(han: Han, limit_to_sextuple_yakuman: bool) -> Point {
    match han {
        HAN_SEXTUPLE_YAKUMAN.. => {
            if limit_to_sextuple_yakuman {
                SEXTUPLE_YAKUMAN
            } else {
                // 13翻に満たない端数は切り捨て
                let extra = ((han - HAN_SEXTUPLE_YAKUMAN) / HAN_YAKUMAN) as Point;
                SEXTUPLE_YAKUMAN.saturating_add(extra.saturating_mul(YAKUMAN))
            }
        }
        65..=77 => 40000,   // 五倍役満
        52..=64 => 32000,   // 四倍役満
        39..=51 => 24000,   // 三倍役満
        26..=38 => 16000,   // 二倍役満
        13..=25 => YAKUMAN, // 役満
        11..=12 => SANBAIMAN,
        8..=10 => BAIMAN,
        6..=7 => HANEMAN,
        _ => MANGAN,
    }
}

fn get_score_level(rounded: Point) -> ScoreLevel {
    match rounded {
        MANGAN => ScoreLevel::Mangan,
        HANEMAN => ScoreLevel::Haneman,
        BAIMAN => ScoreLevel::Baiman,
        SANBAIMAN => ScoreLevel::Sanbaiman,
        _ => ScoreLevel::Yakuman((rounded / YAKUMAN) as usize),
    }
}

// 通常ルールの点数計算 (満貫, 跳満, ..., 役満の上限あり)
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScores;

impl ScoreCalculator for StandardScores {
    fn calculate_scores(
        &self,
        han: Han,
        fu: Fu,
        config: &RulesetConfig,
        is_yakuman: bool,
    ) -> ScoreResult {
        let opts = &config.options;

        // 数え役満
        let mut han = han;
        if han >= HAN_YAKUMAN && !is_yakuman {
            match opts.kazoe_limit {
                KazoeLimit::Limited => han = HAN_YAKUMAN,
                KazoeLimit::Sanbaiman => han = HAN_SANBAIMAN,
                KazoeLimit::Nolimit => {}
            }
        }

        if han >= HAN_MANGAN {
            let base = calc_limit_point(han, opts.limit_to_sextuple_yakuman);
            return split_payment(
                &Rounded::from_limit(base),
                config,
                Some(get_score_level(base)),
            );
        }

        let rounded = Rounded::from_base(calc_base_point(han, fu));
        let is_kiriage = opts.kiriage && ((han == 4 && fu == 30) || (han == 3 && fu == 60));
        if rounded.x1 > MANGAN || is_kiriage {
            split_payment(
                &Rounded::from_limit(MANGAN),
                config,
                Some(ScoreLevel::Mangan),
            )
        } else {
            split_payment(&rounded, config, None)
        }
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
fn config(is_tsumo: bool, is_dealer: bool) -> RulesetConfig {
    RulesetConfig::new(is_tsumo, is_dealer, Options::default())
}

#[cfg(test)]
fn calc(han: Han, fu: Fu, conf: &RulesetConfig) -> ScoreResult {
    StandardScores.calculate_scores(han, fu, conf, false)
}

#[test]
fn test_ceil100() {
    assert_eq!(ceil100(0), 0);
    assert_eq!(ceil100(1), 100);
    assert_eq!(ceil100(100), 100);
    assert_eq!(ceil100(1920), 2000);
    assert_eq!(ceil100(11520), 11600);
    assert!(ceil100(Point::MAX) <= Point::MAX);
}

#[test]
fn test_calc_base_point() {
    assert_eq!(calc_base_point(1, 30), 240);
    assert_eq!(calc_base_point(4, 30), 1920);
    assert_eq!(calc_base_point(20, 30), 30 << 22);
    assert_eq!(calc_base_point(61, 2), Point::MAX);
    assert_eq!(calc_base_point(200, 30), Point::MAX);
    assert_eq!(calc_base_point(Han::MAX, 30), Point::MAX);
}

#[test]
fn test_low_han_scores() {
    // 子のロン
    let conf = config(false, false);
    assert_eq!(calc(1, 30, &conf).main, 1000);
    assert_eq!(calc(1, 40, &conf).main, 1300);
    assert_eq!(calc(2, 25, &conf).main, 1600);
    assert_eq!(calc(3, 30, &conf).main, 3900);
    assert_eq!(calc(4, 30, &conf).main, 7700);
    assert_eq!(calc(3, 70, &conf).main, 8000);

    // 親のロン
    let conf = config(false, true);
    assert_eq!(calc(1, 30, &conf).main, 1500);
    assert_eq!(calc(2, 30, &conf).main, 2900);
    assert_eq!(calc(4, 40, &conf).main, 12000);

    // 子のツモ
    let res = calc(1, 30, &config(true, false));
    assert_eq!((res.main, res.additional), (500, 300));
    let res = calc(2, 20, &config(true, false));
    assert_eq!((res.main, res.additional), (700, 400));

    // 親のツモ
    let res = calc(3, 30, &config(true, true));
    assert_eq!((res.main, res.additional), (2000, 2000));
    assert_eq!(res.total, 6000);
}

#[test]
fn test_kiriage() {
    let conf = config(false, true);
    let res = calc(4, 30, &conf);
    assert_eq!(res.main, 11600);
    assert_eq!(res.level, None);

    let mut conf = config(false, true);
    conf.options.kiriage = true;
    let res = calc(4, 30, &conf);
    assert_eq!(res.main, 12000);
    assert_eq!(res.level, Some(ScoreLevel::Mangan));
    assert_eq!(calc(3, 60, &conf).main, 12000);
    assert_eq!(calc(3, 50, &conf).main, 9600);

    conf.is_dealer = false;
    assert_eq!(calc(4, 30, &conf).main, 8000);
    assert_eq!(calc(3, 60, &conf).main, 8000);
}

#[test]
fn test_mangan_tsumo_non_dealer() {
    let conf = config(true, false);
    for fu in [20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110] {
        let res = calc(5, fu, &conf);
        assert_eq!((res.main, res.additional), (4000, 2000));
        assert_eq!(res.total, 8000);
    }
}

#[test]
fn test_limit_tiers() {
    // (翻数, 基本点)
    let tiers = [
        (5, 2000),
        (6, 3000),
        (7, 3000),
        (8, 4000),
        (10, 4000),
        (11, 6000),
        (12, 6000),
        (13, 8000),
        (25, 8000),
        (26, 16000),
        (38, 16000),
        (39, 24000),
        (51, 24000),
        (52, 32000),
        (64, 32000),
        (65, 40000),
        (77, 40000),
        (78, 48000),
        (200, 48000),
    ];
    let conf = config(false, false);
    for (han, base) in tiers {
        let res = StandardScores.calculate_scores(han, 30, &conf, true);
        assert_eq!(res.main, base * 4, "han: {}", han);
    }
}

#[test]
fn test_beyond_sextuple_yakuman() {
    let mut conf = config(false, false);
    conf.options.limit_to_sextuple_yakuman = false;
    let base = |han| StandardScores.calculate_scores(han, 30, &conf, true).main / 4;
    assert_eq!(base(78), 48000);
    assert_eq!(base(90), 48000);
    assert_eq!(base(91), 56000);
    assert_eq!(base(103), 56000);
    assert_eq!(base(104), 64000);
    assert_eq!(
        StandardScores.calculate_scores(104, 30, &conf, true).level,
        Some(ScoreLevel::Yakuman(8))
    );
}

#[test]
fn test_kazoe_limit() {
    // 役満止まり
    let conf = config(false, false);
    assert_eq!(
        StandardScores.calculate_scores(13, 30, &conf, false),
        StandardScores.calculate_scores(13, 30, &conf, true)
    );
    assert_eq!(calc(26, 30, &conf).main, 32000);
    assert_eq!(calc(26, 30, &conf).level, Some(ScoreLevel::Yakuman(1)));
    assert_eq!(
        StandardScores.calculate_scores(26, 30, &conf, true).main,
        64000
    );

    // 三倍満止まり
    let mut conf = config(false, false);
    conf.options.kazoe_limit = KazoeLimit::Sanbaiman;
    assert_eq!(calc(14, 30, &conf), calc(12, 30, &conf));
    assert_eq!(calc(14, 30, &conf).main, 24000);
    assert_eq!(calc(14, 30, &conf).level, Some(ScoreLevel::Sanbaiman));
    assert_eq!(
        StandardScores.calculate_scores(14, 30, &conf, true).main,
        32000
    );

    // 制限なし
    let mut conf = config(false, false);
    conf.options.kazoe_limit = KazoeLimit::Nolimit;
    assert_eq!(calc(26, 30, &conf).main, 64000);
    assert_eq!(calc(39, 30, &conf).level, Some(ScoreLevel::Yakuman(3)));
}

#[test]
fn test_score_level() {
    let conf = config(false, false);
    assert_eq!(calc(2, 30, &conf).level, None);
    assert_eq!(calc(4, 40, &conf).level, Some(ScoreLevel::Mangan));
    assert_eq!(calc(5, 30, &conf).level, Some(ScoreLevel::Mangan));
    assert_eq!(calc(7, 30, &conf).level, Some(ScoreLevel::Haneman));
    assert_eq!(calc(9, 30, &conf).level, Some(ScoreLevel::Baiman));
    assert_eq!(calc(11, 30, &conf).level, Some(ScoreLevel::Sanbaiman));
    assert_eq!(calc(13, 30, &conf).level, Some(ScoreLevel::Yakuman(1)));
}

#[test]
fn test_bonus_and_total() {
    let mut conf = config(true, false);
    conf.honba = 1;
    conf.kyoutaku = 1;
    let res = calc(1, 30, &conf);
    assert_eq!((res.main, res.additional), (500, 300));
    assert_eq!((res.main_bonus, res.additional_bonus), (100, 100));
    assert_eq!(res.kyoutaku_bonus, 1000);
    assert_eq!(res.total, 600 + 400 * 2 + 1000);

    let mut conf = config(false, true);
    conf.honba = 2;
    let res = calc(2, 30, &conf);
    assert_eq!(res.main, 2900);
    assert_eq!((res.main_bonus, res.additional_bonus), (600, 0));
    assert_eq!(res.total, 3500);

    let mut conf = config(true, true);
    conf.honba = 3;
    let res = calc(4, 30, &conf);
    assert_eq!((res.main, res.additional), (3900, 3900));
    assert_eq!(res.total, (3900 + 300) * 3);
}

#[test]
fn test_low_han_monotone() {
    let fu_list = [20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110];
    let conf = config(true, false);
    for han in 1..=4 {
        let mut prev = 0;
        for fu in fu_list {
            let r = calc(han, fu, &conf).additional;
            assert!(prev <= r, "han: {}, fu: {}", han, fu);
            prev = r;
        }
    }
    for fu in fu_list {
        let mut prev = 0;
        for han in 1..=4 {
            let r = calc(han, fu, &conf).additional;
            assert!(prev <= r, "han: {}, fu: {}", han, fu);
            prev = r;
        }
    }
}

#[test]
fn test_ron_has_no_additional() {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let mut conf = config(false, rng.gen_bool(0.5));
        conf.options.kiriage = rng.gen_bool(0.5);
        conf.options.kazoe_limit = match rng.gen_range(0..3) {
            0 => KazoeLimit::Limited,
            1 => KazoeLimit::Sanbaiman,
            _ => KazoeLimit::Nolimit,
        };
        let han = rng.gen_range(0..120);
        let fu = rng.gen_range(2..12) * 10;
        let res = StandardScores.calculate_scores(han, fu, &conf, rng.gen_bool(0.5));
        assert_eq!(res.additional, 0);
        assert_eq!(res.additional_bonus, 0);
        assert_eq!(res.total, res.main);
    }
}

#[test]
fn test_create_score_calculator() {
    let mut opts = Options::default();
    assert_eq!(create_score_calculator(&opts).name(), "standard");
    opts.has_aotenjou = true;
    assert_eq!(create_score_calculator(&opts).name(), "aotenjou");
}
