use std::fmt;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

// コマンドライン引数のオプション値を取得して型変換
pub fn next_value<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> Res<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it.next().ok_or_else(|| format!("{}: value missing", opt))?;
    let v = n
        .parse()
        .map_err(|e| format!("{}: {} '{}'", opt, e, n))?;
    Ok(v)
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

#[test]
fn test_next_value() {
    let args: Vec<String> = vec!["-r".into(), "12".into(), "-x".into(), "abc".into()];
    let mut it = args.iter();
    it.next();
    assert_eq!(next_value::<usize>(&mut it, "-r").unwrap(), 12);
    it.next();
    assert!(next_value::<usize>(&mut it, "-x").is_err());
    assert!(next_value::<usize>(&mut it, "-y").is_err());
}

#[test]
fn test_vec_to_string() {
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
    assert_eq!(vec_to_string::<i32>(&[]), "[]");
}
