//! bosonnlp-cli: 在命令行调用 BosonNLP 接口
//!
//! Usage:
//!   bosonnlp-cli sentiment <text>...              Sentiment scores
//!   bosonnlp-cli cluster <file>                   Cluster the lines of a file
//!   bosonnlp-cli time <expression> [--base <epoch>]
//!
//! Reads the API token from `BOSON_API_TOKEN`; `--config <file>` loads a YAML
//! client configuration. Set `RUST_LOG=bosonnlp=debug` to trace requests.

use anyhow::{anyhow, bail, Context, Result};
use bosonnlp::{BosonNlp, ClientConfig, ContentInput};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"bosonnlp-cli: BosonNLP 命令行工具

USAGE:
    bosonnlp-cli [--config <file>] <COMMAND> [ARGS]

COMMANDS:
    sentiment <text>...                 Negative/positive scores per text
    classify <text>...                  News category id per text
    tag <text>...                       Segmentation and POS tags
    ner [--sensitivity <1-4>] <text>... Named entities
    depparser <text>...                 Dependency parse
    keywords [--top-k <n>] <text>       Weighted keywords
    suggest [--top-k <n>] <term>        Related terms
    summary <title> <content-file>      Extractive summary
    time <expression> [--base <epoch>]  Normalize a time expression
    cluster <file>                      Cluster the lines (or JSON array) of a file
    comments <file>                     Opinion groups over the lines of a file
    version                             Show version information
    help                                Show this help message

ENVIRONMENT:
    BOSON_API_TOKEN                     API token (required)
    BOSON_PROXY_URL                     HTTP proxy for all requests
    RUST_LOG                            Log filter, e.g. bosonnlp=debug"#
    );
}

fn run(args: &[String]) -> Result<()> {
    let (config_path, args) = take_flag(args, "--config");
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "version" | "--version" | "-V" => {
            println!("bosonnlp-cli {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let nlp = connect(config_path.as_deref())?;
    match command.as_str() {
        "sentiment" => print_json(&nlp.sentiment(texts(rest)?)?),
        "classify" => print_json(&nlp.classify(texts(rest)?)?),
        "tag" => print_json(&nlp.tag(texts(rest)?)?),
        "depparser" => print_json(&nlp.depparser(texts(rest)?)?),
        "ner" => {
            let (sensitivity, rest) = take_flag(rest, "--sensitivity");
            let sensitivity = parse_or(sensitivity, 3u8, "--sensitivity")?;
            print_json(&nlp.ner(texts(&rest)?, sensitivity)?)
        }
        "keywords" => {
            let (top_k, rest) = take_flag(rest, "--top-k");
            let top_k = parse_or(top_k, 10usize, "--top-k")?;
            print_json(&nlp.extract_keywords(single(&rest)?, top_k)?)
        }
        "suggest" => {
            let (top_k, rest) = take_flag(rest, "--top-k");
            let top_k = parse_or(top_k, 10usize, "--top-k")?;
            print_json(&nlp.suggest(single(&rest)?, top_k)?)
        }
        "summary" => {
            let [title, file] = rest else {
                bail!("usage: summary <title> <content-file>");
            };
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("reading {}", file))?;
            print_json(&nlp.summary(title, content.trim())?)
        }
        "time" => {
            let (base, rest) = take_flag(rest, "--base");
            let expression = single(&rest)?;
            let result = match base {
                Some(base) => {
                    let epoch: i64 = base
                        .parse()
                        .with_context(|| format!("--base expects epoch seconds, got {}", base))?;
                    nlp.convert_time_with_base(expression, epoch)?
                }
                None => nlp.convert_time(expression)?,
            };
            print_json(&result)
        }
        "cluster" => print_json(&nlp.cluster(read_contents(single(rest)?)?)?),
        "comments" => print_json(&nlp.comments(read_contents(single(rest)?)?)?),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn connect(config_path: Option<&str>) -> Result<BosonNlp> {
    let config = match config_path {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("loading config {}", path))?,
        None => ClientConfig::default(),
    };
    let token = std::env::var("BOSON_API_TOKEN")
        .map_err(|_| anyhow!("BOSON_API_TOKEN is not set"))?;
    Ok(BosonNlp::builder().config(config).api_token(token).build()?)
}

/// Remove `flag <value>` from `args`, returning the value and the remainder.
fn take_flag(args: &[String], flag: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            value = iter.next().cloned();
        } else {
            rest.push(arg.clone());
        }
    }
    (value, rest)
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T, flag: &str) -> Result<T> {
    match value {
        Some(v) => v
            .parse()
            .map_err(|_| anyhow!("invalid value for {}: {}", flag, v)),
        None => Ok(default),
    }
}

fn texts(args: &[String]) -> Result<Vec<String>> {
    if args.is_empty() {
        bail!("at least one text is required");
    }
    Ok(args.to_vec())
}

fn single(args: &[String]) -> Result<&str> {
    match args {
        [one] => Ok(one),
        _ => bail!("expected exactly one argument, got {}", args.len()),
    }
}

/// A JSON array of content inputs, or one text per non-empty line.
fn read_contents(path: impl AsRef<Path>) -> Result<Vec<ContentInput>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(&raw)
            .with_context(|| format!("parsing {} as JSON contents", path.display()));
    }
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ContentInput::from)
        .collect())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
