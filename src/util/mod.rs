// ログ出力やコマンドライン処理などの汎用モジュール
pub mod log;
pub mod misc;
