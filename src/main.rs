use anyhow::{Context, Result};
use jsonprobe::{parse_with, Outline, ParserOptions, Value};
use std::fs;
use std::io::{stdin, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[macro_use]
extern crate clap;
use clap::{App, ArgMatches};

fn main() {
    let yaml = load_yaml!("main.yml");
    let matches = App::from_yaml(yaml).get_matches();
    init_tracing(matches.occurrences_of("verbose"));
    if let Err(e) = run(&matches) {
        debug!(error = ?e, "exiting with failure");
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let text = match matches.value_of_os("json_file") {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.to_string_lossy()))?,
        None => {
            let mut buf = String::new();
            stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let options = options(matches)?;
    debug!(?options, len = text.len(), "parsing input");
    let root = parse_with(&text, &options)?;
    let selected = select(&root, matches.value_of("path"))?;
    if matches.is_present("kind") {
        println!("{}", selected.kind());
    } else {
        println!("{}", Outline::new().render(selected));
    }
    Ok(())
}

fn options(matches: &ArgMatches) -> Result<ParserOptions> {
    let mut options = ParserOptions::new().reject_trailing(matches.is_present("strict"));
    if let Some(depth) = matches.value_of("max_depth") {
        let depth = depth
            .parse()
            .with_context(|| format!("invalid --max-depth `{}`", depth))?;
        options = options.with_max_depth(depth);
    }
    Ok(options)
}

fn select<'a>(root: &'a Value, path: Option<&str>) -> Result<&'a Value> {
    match path {
        Some(path) => root
            .select(path)
            .with_context(|| format!("cannot select `{}`", path)),
        None => Ok(root),
    }
}

// RUST_LOG wins over -v
fn init_tracing(verbosity: u64) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
