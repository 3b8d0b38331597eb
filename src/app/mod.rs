// mainから直接呼び出すアプリケーションの動作モード(C, T)のモジュール

mod calculator;
mod table;

pub use calculator::CalculatorApp;
pub use table::TableApp;

use crate::info;
use crate::model::Options;
use crate::util::misc::Res;

// -r で指定されたルールファイル(JSON)を読み込み
fn load_options(file_path: &str) -> Res<Options> {
    let opts = Options::load(file_path)?;
    info!("rules loaded: {} {:?}", file_path, opts);
    Ok(opts)
}
