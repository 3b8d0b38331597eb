// 型エイリアス
pub type Han = usize; // 翻数
pub type Fu = usize; // 符数
pub type Point = u64; // 支払い点数

// 基本点 (満貫以上は翻数のみで決まる)
pub const MANGAN: Point = 2000; // 満貫
pub const HANEMAN: Point = 3000; // 跳満
pub const BAIMAN: Point = 4000; // 倍満
pub const SANBAIMAN: Point = 6000; // 三倍満
pub const YAKUMAN: Point = 8000; // 役満 (以降は役満倍率 x 8000)
pub const SEXTUPLE_YAKUMAN: Point = 48000; // 六倍役満

// 翻数の区切り
pub const HAN_MANGAN: Han = 5;
pub const HAN_SANBAIMAN: Han = 12;
pub const HAN_YAKUMAN: Han = 13; // 役満1倍あたりの翻数
pub const HAN_SEXTUPLE_YAKUMAN: Han = 78;

// 本場, 供託
pub const HONBA_TSUMO: Point = 100; // ツモ和了時の1人あたりの本場加算
pub const HONBA_RON: Point = 300; // ロン和了時の本場加算
pub const KYOUTAKU: Point = 1000; // 供託リーチ棒1本
