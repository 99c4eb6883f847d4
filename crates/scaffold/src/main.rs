//! Command-line entry point for the class-skeleton generator.
//!
//! Reads a class model (local file or URL, format chosen by extension),
//! renders it through the selected language backend and writes one
//! source file per top-level class into the output directory.

use anyhow::{Context, bail};
use clap::{ArgGroup, Parser};
use scaffold_classgen::{InputFormat, generator_for_language, language_names, parse};
use std::path::PathBuf;

mod source;

#[derive(Parser)]
#[command(
    name = "scaffold",
    version,
    about = "Generate multi-language class skeletons from a class model"
)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "url"])))]
struct Cli {
    /// Target language (go, java, cpp, python, ruby, js_es6, csharp)
    #[arg(short, long)]
    lang: String,

    /// Input model file (xml, json, yml or yaml)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// URL to fetch the input model from
    #[arg(short, long)]
    url: Option<String>,

    /// Indent with four spaces instead of tabs
    #[arg(short, long)]
    spaces: bool,

    /// Directory to write the generated files into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(generator) = generator_for_language(&cli.lang) else {
        bail!(
            "no such generator: {} (available: {})",
            cli.lang,
            language_names().join(", ")
        );
    };

    let (input_name, content) = match (&cli.file, &cli.url) {
        (Some(path), None) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (path.clone(), content)
        }
        (None, Some(url)) => (PathBuf::from(url.as_str()), source::fetch(url)?),
        // clap's input group guarantees exactly one of the two.
        _ => unreachable!(),
    };

    let format = InputFormat::from_path(&input_name)?;
    tracing::debug!(?format, "parsing class model");
    let mut package = parse(format, &content)?;
    package.use_spaces = cli.spaces;

    let files = generator.generate(&package);
    for (name, code) in &files {
        let path = cli
            .out_dir
            .join(format!("{}.{}", name, generator.extension()));
        std::fs::write(&path, code)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote class skeleton");
    }

    println!("Generated successfully.");
    Ok(())
}
