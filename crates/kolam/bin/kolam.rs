//! Kolam command-line front door.
//!
//! Validates parameters and runs the three-stage pipeline:
//! lattice → rulebook → renderer.

use std::path::PathBuf;
use std::process::ExitCode;

use kolam::{generate_to_file, list_rule_names, Style};

const USAGE: &str = "\
Usage: kolam [OPTIONS]

Options:
  --rows <N>      Grid rows, at least 1 (default: 9)
  --cols <N>      Grid columns, at least 1 (default: 9)
  --spacing <S>   Dot spacing in lattice units (default: 1.0)
  --rule <NAME>   Generation rule (default: sikku_like)
  --out <FILE>    Output PNG file (default: kolam.png)
  --style <FILE>  TOML style file
  --no-dots       Skip the dot markers
  --list-rules    Print registered rule names and exit
  -h, --help      Print this help message";

struct Options {
    rows: u32,
    cols: u32,
    spacing: f32,
    rule: String,
    out: PathBuf,
    style: Option<PathBuf>,
    show_dots: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 9,
            spacing: 1.0,
            rule: "sikku_like".to_string(),
            out: PathBuf::from("kolam.png"),
            style: None,
            show_dots: true,
        }
    }
}

enum Action {
    Generate(Options),
    ListRules,
    Help,
}

fn parse_args(args: &[String]) -> Result<Action, String> {
    let mut opts = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "--list-rules" => return Ok(Action::ListRules),
            "--no-dots" => opts.show_dots = false,
            "--rows" => {
                let v = value("--rows")?;
                opts.rows = v.parse().map_err(|_| format!("invalid --rows '{v}'"))?;
            }
            "--cols" => {
                let v = value("--cols")?;
                opts.cols = v.parse().map_err(|_| format!("invalid --cols '{v}'"))?;
            }
            "--spacing" => {
                let v = value("--spacing")?;
                opts.spacing = v.parse().map_err(|_| format!("invalid --spacing '{v}'"))?;
            }
            "--rule" => opts.rule = value("--rule")?,
            "--out" => opts.out = PathBuf::from(value("--out")?),
            "--style" => opts.style = Some(PathBuf::from(value("--style")?)),
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    // The front door owns the range check; the core only rejects zeroes.
    if opts.rows == 0 || opts.cols == 0 || opts.rows > 50 || opts.cols > 50 {
        return Err("rows and cols must be between 1 and 50".to_string());
    }
    if !list_rule_names().contains(&opts.rule.as_str()) {
        return Err(format!(
            "unknown rule '{}'; valid rules: {}",
            opts.rule,
            list_rule_names().join(", ")
        ));
    }

    Ok(Action::Generate(opts))
}

fn run(opts: &Options) -> Result<(), String> {
    let style = match &opts.style {
        Some(path) => Style::from_file(path).map_err(|e| e.to_string())?,
        None => Style::default(),
    };
    generate_to_file(
        opts.rows,
        opts.cols,
        opts.spacing,
        &opts.rule,
        &opts.out,
        opts.show_dots,
        &style,
    )
    .map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::ListRules) => {
            for name in list_rule_names() {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Ok(Action::Generate(opts)) => match run(&opts) {
            Ok(()) => {
                println!("{}", opts.out.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}
