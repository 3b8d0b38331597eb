use super::*;
use crate::util::misc::Res;

// 13翻以上の数え役満の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KazoeLimit {
    #[default]
    Limited, // 役満止まり (26翻以上も役満)
    Sanbaiman, // 三倍満止まり
    Nolimit,   // 制限なし (13翻ごとに役満倍率が上がる)
}

impl fmt::Display for KazoeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Limited => "limited",
            Self::Sanbaiman => "sanbaiman",
            Self::Nolimit => "nolimit",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for KazoeLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "limited" | "yakuman" => Self::Limited,
            "sanbaiman" => Self::Sanbaiman,
            "nolimit" => Self::Nolimit,
            _ => return Err(format!("invalid kazoe limit: {}", s)),
        })
    }
}

// 卓ルール
// JSONでは省略したキーはデフォルト値になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub kazoe_limit: KazoeLimit,
    pub kiriage: bool,                   // 切り上げ満貫 (4翻30符, 3翻60符を満貫)
    pub limit_to_sextuple_yakuman: bool, // 役満の倍率を六倍までに制限
    pub has_double_yakuman: bool,        // 四暗刻単騎, 国士無双十三面待ちなどをダブル役満とする
    pub has_aotenjou: bool,              // 青天井
}

impl Default for Options {
    fn default() -> Self {
        Self {
            kazoe_limit: KazoeLimit::Limited,
            kiriage: false,
            limit_to_sextuple_yakuman: true,
            has_double_yakuman: true,
            has_aotenjou: false,
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Res<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(file_path: &str) -> Res<Self> {
        let json = std::fs::read_to_string(file_path)?;
        Self::from_json(&json).map_err(|e| format!("{}: {}", file_path, e).into())
    }
}

// 和了時の状況
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    pub is_tsumo: bool,   // ツモ和了
    pub is_dealer: bool,  // 親の和了
    pub honba: usize,     // 本場
    pub kyoutaku: usize,  // 供託リーチ棒の本数
    pub options: Options, // 卓ルール
}

impl RulesetConfig {
    pub fn new(is_tsumo: bool, is_dealer: bool, options: Options) -> Self {
        Self {
            is_tsumo,
            is_dealer,
            honba: 0,
            kyoutaku: 0,
            options,
        }
    }
}

#[test]
fn test_options_default_from_json() {
    let opts = Options::from_json("{}").unwrap();
    assert_eq!(opts, Options::default());
    assert_eq!(opts.kazoe_limit, KazoeLimit::Limited);
    assert!(opts.limit_to_sextuple_yakuman);
    assert!(opts.has_double_yakuman);
    assert!(!opts.kiriage);
    assert!(!opts.has_aotenjou);
}

#[test]
fn test_options_partial_json() {
    let opts = Options::from_json(r#"{"kazoe_limit": "sanbaiman", "kiriage": true}"#).unwrap();
    assert_eq!(opts.kazoe_limit, KazoeLimit::Sanbaiman);
    assert!(opts.kiriage);
    assert!(opts.limit_to_sextuple_yakuman);

    assert!(Options::from_json(r#"{"kazoe": "nolimit"}"#).is_err());
    assert!(Options::from_json(r#"{"kazoe_limit": "triple"}"#).is_err());
}

#[test]
fn test_ruleset_config_json() {
    let conf: RulesetConfig =
        serde_json::from_str(r#"{"is_tsumo": true, "honba": 2, "options": {"has_aotenjou": true}}"#)
            .unwrap();
    assert!(conf.is_tsumo);
    assert!(!conf.is_dealer);
    assert_eq!(conf.honba, 2);
    assert_eq!(conf.kyoutaku, 0);
    assert!(conf.options.has_aotenjou);
    assert_eq!(conf.options.kazoe_limit, KazoeLimit::Limited);
}

#[test]
fn test_kazoe_limit_from_str() {
    assert_eq!("yakuman".parse::<KazoeLimit>(), Ok(KazoeLimit::Limited));
    assert_eq!("nolimit".parse::<KazoeLimit>(), Ok(KazoeLimit::Nolimit));
    assert!("x".parse::<KazoeLimit>().is_err());
    assert_eq!(KazoeLimit::Sanbaiman.to_string(), "sanbaiman");
}

#[test]
fn test_options_load() {
    let opts = Options::load("rules/kazoe_sanbaiman.json").unwrap();
    assert_eq!(opts.kazoe_limit, KazoeLimit::Sanbaiman);
    assert!(opts.kiriage);
    assert!(!opts.has_double_yakuman);
    assert!(!opts.has_aotenjou);

    let opts = Options::load("rules/aotenjou.json").unwrap();
    assert!(opts.has_aotenjou);
    assert!(Options::load("rules/not_found.json").is_err());
}
