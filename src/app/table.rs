use super::load_options;
use crate::error;
use crate::hand::{create_score_calculator, ScoreCalculator};
use crate::model::*;
use crate::util::misc::*;

const FU_LIST: [Fu; 11] = [20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110];

// 卓ルールに従った点数計算表を出力
#[derive(Debug)]
pub struct TableApp {
    args: Vec<String>,
    options: Options,
}

impl TableApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            options: Options::default(),
        }
    }

    pub fn run(&mut self) {
        if let Err(e) = self.parse_args() {
            error!("{}", e);
            return;
        }

        let calculator = create_score_calculator(&self.options);
        print!("{}", format_table(calculator.as_ref(), &self.options, false));
        println!();
        print!("{}", format_table(calculator.as_ref(), &self.options, true));
    }

    fn parse_args(&mut self) -> Res {
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-a" => self.options.has_aotenjou = true,
                "-k" => self.options.kiriage = true,
                "-r" => {
                    let rules: String = next_value(&mut it, s)?;
                    self.options = load_options(&rules)?;
                }
                _ => Err(format!("unknown option: {}", s))?,
            }
        }
        Ok(())
    }
}

// 1~4翻は符数ごと, 5翻以上は翻数のみで出力
// 子: ロン(ツモ・子の支払い/ツモ・親の支払い), 親: ロン(ツモ・子の支払い)
fn format_table(calculator: &dyn ScoreCalculator, options: &Options, is_dealer: bool) -> String {
    let ron = RulesetConfig::new(false, is_dealer, *options);
    let tsumo = RulesetConfig::new(true, is_dealer, *options);
    let payment = |han: Han, fu: Fu| {
        let r = calculator.calculate_scores(han, fu, &ron, false);
        let t = calculator.calculate_scores(han, fu, &tsumo, false);
        let s = if is_dealer {
            format!("{:5}({:5})", r.main, t.main)
        } else {
            format!("{:5}({:4}/{:5})", r.main, t.additional, t.main)
        };
        (s, r.level)
    };

    let mut buf = format!(
        "点数計算表 ({}) [{}] ============================================\n",
        if is_dealer { "親" } else { "子" },
        calculator.name(),
    );
    for fu in FU_LIST {
        buf += &format!("[{:3}符] ", fu);
        for han in 1..=4 {
            buf += &format!("{}飜:{} ", han, payment(han, fu).0);
        }
        buf += "\n";
    }
    for han in 5..=13 {
        let (s, level) = payment(han, 30);
        let title = level.map(|l| l.to_string()).unwrap_or_default();
        buf += &format!("{:2}飜:{} {}\n", han, s, title);
    }
    buf
}

#[test]
fn test_format_table() {
    let opts = Options::default();
    let calculator = create_score_calculator(&opts);

    let table = format_table(calculator.as_ref(), &opts, false);
    assert!(table.starts_with("点数計算表 (子) [standard]"));
    assert!(table.contains("1飜: 1000( 300/  500)"));
    assert!(table.contains(" 5飜: 8000(2000/ 4000) 満貫"));
    assert!(table.contains("13飜:32000(8000/16000) 役満"));

    let table = format_table(calculator.as_ref(), &opts, true);
    assert!(table.contains("4飜:12000( 4000)"));
    assert!(table.contains("11飜:36000(12000) 三倍満"));
}

#[test]
fn test_format_table_aotenjou() {
    let opts = Options {
        has_aotenjou: true,
        ..Default::default()
    };
    let calculator = create_score_calculator(&opts);
    let table = format_table(calculator.as_ref(), &opts, false);
    assert!(table.starts_with("点数計算表 (子) [aotenjou]"));
    assert!(table.contains(" 5飜:15400(3900/ 7700) \n"));
}
