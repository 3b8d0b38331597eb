use super::point::*;
use super::yaku::Yaku;
use crate::model::*;

use Yaku::*;

// 青天井ルール
// 満貫以上の上限がなく, 基本点 = 符 * 2^(翻 + 2) のまま点数が上がり続ける
#[derive(Debug, Clone, Copy, Default)]
pub struct Aotenjou;

impl ScoreCalculator for Aotenjou {
    fn calculate_scores(
        &self,
        han: Han,
        fu: Fu,
        config: &RulesetConfig,
        _is_yakuman: bool,
    ) -> ScoreResult {
        let rounded = Rounded::from_base(calc_base_point(han, fu));
        split_payment(&rounded, config, None)
    }

    fn filter_yaku(&self, hand_yaku: &mut Vec<Yaku>) {
        aotenjou_filter_yaku(hand_yaku);
    }

    fn name(&self) -> &'static str {
        "aotenjou"
    }
}

// 役満の構成要素となる下位の役 (いずれかの役が成立している場合は右側の役を削除)
// 青天井では役満も通常役と合算されるため, 上位の役に包含される役を重複して数えない
static AOTENJOU_SUBSUMPTION: &[(&[Yaku], &[Yaku])] = &[
    (&[Daisangen], &[Chun, Hatsu, Haku, Shousangen]),
    (&[Tsuuiisou], &[Toitoi, Honroutou]),
    (&[Shousuushii], &[]),
    (&[Daisuushii], &[Toitoi]),
    // 三暗刻は最初から付かない
    // 四暗刻で対々和が付かない場合もある (暗槓を含む場合など)
    (&[Suuankou, SuuankouTanki], &[Toitoi]),
    (&[Chinroutou], &[Toitoi, Honroutou]),
    // 三槓子は最初から付かない
    (&[Suukantsu], &[Toitoi]),
    (&[ChuurenPoutou, JunseiChuurenPoutou], &[Chinitsu]),
    (
        &[Daisharin],
        &[Chinitsu, Pinfu, Tanyao, Ryanpeikou, Chiitoitsu],
    ),
    (&[Ryuuiisou], &[Honitsu]),
];

// 存在しない場合は何もしない
fn remove_yaku(hand_yaku: &mut Vec<Yaku>, yaku: Yaku) {
    if let Some(i) = hand_yaku.iter().position(|&y| y == yaku) {
        hand_yaku.remove(i);
    }
}

pub fn aotenjou_filter_yaku(hand_yaku: &mut Vec<Yaku>) {
    for (triggers, removals) in AOTENJOU_SUBSUMPTION {
        if triggers.iter().any(|y| hand_yaku.contains(y)) {
            for &y in removals.iter() {
                remove_yaku(hand_yaku, y);
            }
        }
    }
}

#[cfg(test)]
fn ron(is_dealer: bool) -> RulesetConfig {
    RulesetConfig::new(false, is_dealer, Options::default())
}

#[test]
fn test_aotenjou_scores() {
    // 5翻以上でも満貫にならない
    let res = Aotenjou.calculate_scores(5, 30, &ron(false), false);
    assert_eq!(res.main, 15400); // 30 * 2^7 * 4 = 15360
    assert_eq!(res.level, None);

    // 4翻30符は切り上げ満貫にならない
    let mut conf = ron(true);
    conf.options.kiriage = true;
    assert_eq!(Aotenjou.calculate_scores(4, 30, &conf, false).main, 11600);

    // 低翻数は通常ルールと同じ
    let conf = RulesetConfig::new(true, false, Options::default());
    let res = Aotenjou.calculate_scores(1, 30, &conf, false);
    assert_eq!((res.main, res.additional), (500, 300));
}

#[test]
fn test_aotenjou_never_caps() {
    let conf = ron(false);
    let res = Aotenjou.calculate_scores(20, 30, &conf, false);
    assert_eq!(res.main, 503_316_500); // 30 * 2^22 * 4 = 503316480
    assert_ne!(res, StandardScores.calculate_scores(20, 30, &conf, false));

    // 役満フラグは無視
    assert_eq!(res, Aotenjou.calculate_scores(20, 30, &conf, true));

    let mut prev = 0;
    for han in 1..=40 {
        let main = Aotenjou.calculate_scores(han, 40, &conf, false).main;
        assert!(prev < main);
        prev = main;
    }
}

#[test]
fn test_aotenjou_saturate() {
    let mut conf = RulesetConfig::new(true, false, Options::default());
    conf.honba = 5;
    let res = Aotenjou.calculate_scores(300, 40, &conf, false);
    assert!(res.main >= res.additional);
    assert_eq!(res.total, Point::MAX);
}

#[test]
fn test_filter_daisangen() {
    let mut yakus = vec![Daisangen, Chun, Haku, Hatsu, Shousangen, Toitoi, Dora];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Daisangen, Toitoi, Dora]);
}

#[test]
fn test_filter_removal_is_tolerant() {
    // 削除対象の役が存在しなくてもよい
    let mut yakus = vec![Daisharin, Chinitsu, Tanyao];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Daisharin]);

    let mut yakus = vec![Daisharin, Chiitoitsu, Pinfu, Ryanpeikou];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Daisharin]);

    let mut yakus = vec![Tsuuiisou, Chiitoitsu];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Tsuuiisou, Chiitoitsu]);

    let mut yakus = vec![Ryuuiisou, Toitoi];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Ryuuiisou, Toitoi]);
}

#[test]
fn test_filter_variants() {
    let mut yakus = vec![SuuankouTanki, Toitoi, Tsuuiisou, Honroutou];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![SuuankouTanki, Tsuuiisou]);

    let mut yakus = vec![Chinitsu, JunseiChuurenPoutou];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![JunseiChuurenPoutou]);

    let mut yakus = vec![Shousuushii, Honitsu, Toitoi];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Shousuushii, Honitsu, Toitoi]);

    let mut yakus = vec![Daisuushii, Toitoi, Honitsu];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Daisuushii, Honitsu]);
}

// 四暗刻, 四槓子に対々和が付くかどうかは手牌次第
// どちらの場合も対々和を(あれば)削除する挙動のまま
#[test]
fn test_filter_toitoi_with_concealed_triplets_or_kans() {
    let mut yakus = vec![Suuankou, Toitoi];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Suuankou]);

    let mut yakus = vec![Suuankou];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Suuankou]);

    let mut yakus = vec![Suukantsu, Suuankou, Toitoi];
    aotenjou_filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Suukantsu, Suuankou]);
}

#[test]
fn test_filter_idempotent() {
    use rand::seq::SliceRandom;
    use rand::Rng;

    let all: Vec<Yaku> = Yaku::iter().collect();
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let n = rng.gen_range(0..12);
        let mut yakus: Vec<Yaku> = all.choose_multiple(&mut rng, n).cloned().collect();
        aotenjou_filter_yaku(&mut yakus);
        let once = yakus.clone();
        aotenjou_filter_yaku(&mut yakus);
        assert_eq!(once, yakus);
    }
}

#[test]
fn test_filter_yaku_trait() {
    let mut yakus = vec![Chinroutou, Toitoi, Honroutou];
    StandardScores.filter_yaku(&mut yakus);
    assert_eq!(yakus.len(), 3);
    Aotenjou.filter_yaku(&mut yakus);
    assert_eq!(yakus, vec![Chinroutou]);
}
