//! envsweep CLI binary entry point.
//! Thin dispatch over the core scanner; all scanning logic lives in
//! `envsweep-core`.

mod cli;
mod config;
mod output;
mod template;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands};
use envsweep_core::{init_tracing, scan_tree};

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Commands::Scan {
            path,
            format,
            min_severity,
            fail_on,
            ignore_dir,
        } => {
            let effective = config::resolve(path, &ignore_dir, min_severity)?;
            let report = scan_tree(effective.options)?;
            output::print_report(
                &report,
                format.as_deref().unwrap_or("text"),
                effective.min_severity,
            );
            if let Some(level) = fail_on {
                if report.max_severity().map_or(false, |max| max >= level) {
                    return Ok(1);
                }
            }
            Ok(0)
        }
        Commands::Template {
            path,
            out,
            force,
            min_severity,
        } => {
            let effective = config::resolve(path, &[], min_severity)?;
            let root = effective.options.root.clone();
            let report = scan_tree(effective.options)?;
            let out_path = out.unwrap_or_else(|| root.join(".env.example"));
            template::write_template(&report, &out_path, force, effective.min_severity)?;
            println!("wrote {}", out_path.display());
            Ok(0)
        }
        Commands::Ignore { names } => {
            let root = PathBuf::from(".");
            let mut config = config::load(&root)?.unwrap_or_default();
            if names.is_empty() {
                for name in &config.scan.ignore_names {
                    println!("{name}");
                }
                return Ok(0);
            }
            for name in names {
                if !config.scan.ignore_names.contains(&name) {
                    config.scan.ignore_names.push(name);
                }
            }
            config.scan.ignore_names.sort();
            config::save(&root, &config)?;
            Ok(0)
        }
    }
}
