use std::fs::File;
use std::io::{self, BufRead};

use super::load_options;
use crate::hand::{calc_han, create_score_calculator, ScoreCalculator, Yaku};
use crate::model::*;
use crate::util::misc::*;
use crate::{debug, error, warn};

#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
    options: Options,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
            options: Options::default(),
        }
    }

    pub fn run(&mut self) {
        if let Err(e) = self.run_with_args() {
            error!("{}", e);
        }
    }

    fn run_with_args(&mut self) -> Res {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-f" => file_path = next_value(&mut it, s)?,
                "-r" => {
                    let rules: String = next_value(&mut it, s)?;
                    self.options = load_options(&rules)?;
                }
                _ => {
                    if s.starts_with('-') {
                        Err(format!("unknown option: {}", s))?;
                    }
                    if !exp.is_empty() {
                        Err("multiple expression is not allowed")?;
                    }
                    exp = s.clone();
                }
            }
        }

        if (file_path.is_empty() && exp.is_empty()) || (!file_path.is_empty() && !exp.is_empty()) {
            print_usage();
            return Ok(());
        }

        if !exp.is_empty() {
            self.process_expression(&exp)?;
        } else {
            self.run_from_file(&file_path)?;
        }
        Ok(())
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res {
        let mut calculator = Calculator::new(self.detail, self.options);
        calculator.parse(exp)?;
        calculator.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

// 式1行分の計算
// 式: 翻数,符数 / 和了条件 / 検証用の支払い点数
//   例: 4,30/ron,dealer,kiriage/12000,0
//       大三元+中+白+發+小三元,40/tsumo,aotenjou
#[derive(Debug)]
struct Calculator {
    detail: bool,
    // calculate_scores params
    han: Han,
    fu: Fu,
    is_yakuman: bool,
    yakus: Vec<Yaku>, // 役一覧で指定した場合はここから翻数を計算
    is_open: bool,
    config: RulesetConfig,
    // score verify
    verify: Option<(Point, Point)>, // (main, additional)
}

impl Calculator {
    fn new(detail: bool, options: Options) -> Self {
        Self {
            detail,
            han: 0,
            fu: 0,
            is_yakuman: false,
            yakus: vec![],
            is_open: false,
            config: RulesetConfig::new(false, false, options),
            verify: None,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        let len = exps.len();
        if len > 0 {
            self.parse_score(exps[0])?;
        }
        if len > 1 {
            self.parse_conditions(exps[1])?;
        }
        if len > 2 {
            self.parse_score_verify(exps[2])?;
        }
        if len > 3 {
            Err(format!("too many sections: {}", input))?;
        }

        if self.detail {
            debug!("{:?}", self);
        }

        Ok(())
    }

    fn run(&self) -> Verify {
        let calculator = create_score_calculator(&self.config.options);
        let (han, is_yakuman) = if self.yakus.is_empty() {
            (self.han, self.is_yakuman)
        } else {
            let mut yakus = self.yakus.clone();
            calculator.filter_yaku(&mut yakus);
            println!("yakus: {}", vec_to_string(&yakus));
            let (han, is_yakuman) = calc_han(&yakus, self.is_open, &self.config.options);
            (han, is_yakuman || self.is_yakuman)
        };

        let res = calculator.calculate_scores(han, self.fu, &self.config, is_yakuman);
        if self.detail {
            match serde_json::to_string(&res) {
                Ok(json) => debug!("{}: {}", calculator.name(), json),
                Err(e) => warn!("{}", e),
            }
        }
        println!("han: {}, fu: {}, {}", han, self.fu, res);

        let verify = match self.verify {
            Some(v) => {
                if v == (res.main, res.additional) {
                    Verify::Ok
                } else {
                    Verify::Error
                }
            }
            None => Verify::Skip,
        };
        println!("verify: {:?}", verify);
        verify
    }

    fn parse_score(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        if exps.len() != 2 {
            Err(format!("invalid score info: {}", input))?;
        }
        self.fu = exps[1].parse::<Fu>()?;
        if let Ok(han) = exps[0].parse::<Han>() {
            self.han = han;
        } else {
            for y in exps[0].split('+') {
                self.yakus.push(y.parse::<Yaku>()?);
            }
        }
        Ok(())
    }

    fn parse_conditions(&mut self, input: &str) -> Res {
        let conf = &mut self.config;
        for c in input.split(',') {
            match c {
                "tsumo" => conf.is_tsumo = true,
                "ron" => conf.is_tsumo = false,
                "dealer" => conf.is_dealer = true,
                "open" => self.is_open = true,
                "yakuman" => self.is_yakuman = true,
                "kiriage" => conf.options.kiriage = true,
                "aotenjou" => conf.options.has_aotenjou = true,
                "nosextuple" => conf.options.limit_to_sextuple_yakuman = false,
                "nodouble" => conf.options.has_double_yakuman = false,
                "" => {}
                _ => match c.split_once('=') {
                    Some(("kazoe", v)) => conf.options.kazoe_limit = v.parse::<KazoeLimit>()?,
                    Some(("honba", v)) => conf.honba = v.parse::<usize>()?,
                    Some(("kyoutaku", v)) => conf.kyoutaku = v.parse::<usize>()?,
                    _ => Err(format!("invalid condition: {}", c))?,
                },
            }
        }
        Ok(())
    }

    fn parse_score_verify(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        if exps.len() != 2 {
            Err(format!("invalid score verify info: {}", input))?;
        }
        let main = exps[0].parse::<Point>()?;
        let additional = exps[1].parse::<Point>()?;
        self.verify = Some((main, additional));
        Ok(())
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run C EXPRESSION [-d] [-r RULES]
    $ cargo run C -f FILE [-d] [-r RULES]
Expression
    HAN,FU[/CONDITIONS][/MAIN,ADDITIONAL]
    YAKU+YAKU+...,FU[/CONDITIONS][/MAIN,ADDITIONAL]
Conditions
    tsumo, ron, dealer, open, yakuman, kiriage, aotenjou, nosextuple, nodouble,
    kazoe=limited|sanbaiman|nolimit, honba=N, kyoutaku=N
Options
    -d: print debug info
    -f: read expresisons from file instead of a commandline expression
    -r: read table rules from a json file
"
    );
}

#[test]
fn test_calculator() {
    let file = File::open("tests/score_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    let mut n_verified = 0;
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false, Options::default());
            calculator.parse(&e).unwrap();
            let verify = calculator.run();
            assert_eq!(Verify::Ok, verify, "{}", exp);
            n_verified += 1;
        }
    }
    assert!(n_verified > 0);
}

#[test]
fn test_calculator_parse() {
    let mut calculator = Calculator::new(false, Options::default());
    calculator
        .parse("四暗刻単騎+清老頭,40/tsumo,dealer,honba=2,kazoe=nolimit/0,0")
        .unwrap();
    assert_eq!(calculator.yakus, vec![Yaku::SuuankouTanki, Yaku::Chinroutou]);
    assert_eq!(calculator.fu, 40);
    assert!(calculator.config.is_tsumo);
    assert!(calculator.config.is_dealer);
    assert_eq!(calculator.config.honba, 2);
    assert_eq!(calculator.config.options.kazoe_limit, KazoeLimit::Nolimit);
    assert_eq!(calculator.verify, Some((0, 0)));
    assert_eq!(calculator.run(), Verify::Error);

    let mut calculator = Calculator::new(false, Options::default());
    calculator.parse("3,40 # comment").unwrap();
    assert_eq!((calculator.han, calculator.fu), (3, 40));
    assert_eq!(calculator.run(), Verify::Skip);
}

#[test]
fn test_calculator_parse_error() {
    let inputs = [
        "4",
        "4,30,1",
        "x,30",
        "4,30/foo",
        "4,30/kazoe=triple",
        "4,30/ron/12000",
        "4,30/ron/12000,0/1",
    ];
    for input in inputs {
        let mut calculator = Calculator::new(false, Options::default());
        assert!(calculator.parse(input).is_err(), "{}", input);
    }
}
