use std::io::{self, BufRead, Write};

use serde::Serialize;

use moji_engine::Transform;

#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("unknown transform `{0}` (see `mojitool list`)")]
    UnknownTransform(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One transformed line, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct ApplyRecord<'a> {
    pub transform: &'static str,
    pub input: &'a str,
    pub output: String,
}

pub fn resolve(name: &str) -> Result<Transform, ApplyError> {
    Transform::from_name(name).ok_or_else(|| ApplyError::UnknownTransform(name.to_string()))
}

/// Apply `transform` to each input and write one result per line.
pub fn write_applied<'a, W: Write>(
    out: &mut W,
    transform: Transform,
    inputs: impl IntoIterator<Item = &'a str>,
    json: bool,
) -> Result<usize, ApplyError> {
    let mut count = 0;
    for input in inputs {
        let output = transform.apply(input);
        if json {
            let record = ApplyRecord {
                transform: transform.name(),
                input,
                output,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{output}")?;
        }
        count += 1;
    }
    Ok(count)
}

pub fn apply(name: &str, texts: &[String], json: bool) {
    let transform = die!(resolve(name), "Error: {}");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if texts.is_empty() {
        let lines: Vec<String> = die!(
            io::stdin().lock().lines().collect::<Result<_, _>>(),
            "Error reading stdin: {}"
        );
        die!(
            write_applied(&mut out, transform, lines.iter().map(String::as_str), json),
            "Error: {}"
        );
    } else {
        die!(
            write_applied(&mut out, transform, texts.iter().map(String::as_str), json),
            "Error: {}"
        );
    }
}

pub fn list() {
    for t in Transform::ALL {
        println!("{}", t.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, inputs: &[&str], json: bool) -> String {
        let mut buf = Vec::new();
        let t = resolve(name).unwrap();
        let n = write_applied(&mut buf, t, inputs.iter().copied(), json).unwrap();
        assert_eq!(n, inputs.len());
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(run("hira_to_kata", &["かな", "abc"], false), "カナ\nabc\n");
        assert_eq!(run("decimal", &["1234567"], false), "1,234,567\n");
    }

    #[test]
    fn test_json_output() {
        let out = run("circled", &["A1"], true);
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["transform"], "circled");
        assert_eq!(value["input"], "A1");
        assert_eq!(value["output"], "Ⓐ①");
    }

    #[test]
    fn test_unknown_transform() {
        let err = resolve("bubble").unwrap_err();
        assert!(matches!(err, ApplyError::UnknownTransform(ref n) if n == "bubble"));
        assert!(err.to_string().contains("bubble"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run("swap_kana", &[], false), "");
    }
}
