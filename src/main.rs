use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use tenor_maker::{MakeError, OpenScad, PartCatalog, RenderRequest};

#[derive(Parser)]
#[command(name = "tenor-maker", author, version = env!("CARGO_PKG_VERSION"), about = "Renders STL part meshes from a parametric OpenSCAD instrument model", long_about = None)]
struct Cli {
    /// Path of the OpenSCAD model file
    #[arg(long)]
    model: PathBuf,

    /// Prefix for the names of the output files (defaults to the model's
    /// base filename without extension)
    #[arg(long)]
    prefix: Option<String>,

    /// Name of the part to create; omit to render every part
    #[arg(long)]
    part: Option<String>,

    /// Renderer executable to invoke
    #[arg(long, default_value = tenor_maker::scad::DEFAULT_PROGRAM)]
    openscad: String,
}

fn run(cli: Cli) -> Result<()> {
    let renderer = OpenScad::locate(&cli.openscad)?;
    let catalog = PartCatalog::tenor();

    let mut request = RenderRequest::new(cli.model);
    if let Some(prefix) = cli.prefix {
        request = request.with_prefix(prefix);
    }
    if let Some(part) = cli.part {
        request = request.with_part(part);
    }

    request.execute(&catalog, &renderer)?;
    Ok(())
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{} {err:#}", "error:".red().bold());
        // Pass the renderer's own exit code through when it has one.
        let code = err
            .downcast_ref::<MakeError>()
            .and_then(|e| match e {
                MakeError::RenderFailed { code, .. } => *code,
                _ => None,
            })
            .unwrap_or(1);
        std::process::exit(code);
    }
}
