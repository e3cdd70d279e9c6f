use clap::Parser;
use commitrc::cli::format;
use commitrc::cli::{Cli, Commands, OutputFormat};
use commitrc::load::{self, ConfigFileError};
use commitrc::ConfigRecord;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            root,
            config,
            format: output_format,
        } => {
            let (path, record) = match resolve(&root, config.as_deref()) {
                Ok(loaded) => loaded,
                Err(e) => {
                    eprintln!("\x1b[31merror\x1b[0m: {}", e);
                    process::exit(2);
                }
            };

            match output_format {
                OutputFormat::Pretty => format::print_pretty(&path, &record),
                OutputFormat::Json => format::print_json(&path, &record),
            }
        }

        Commands::Check { root, config } => match resolve(&root, config.as_deref()) {
            Ok((path, record)) => {
                println!(
                    "\x1b[32m✓\x1b[0m {} is well-formed ({} rules, extends {})",
                    path.display(),
                    record.rules.len(),
                    record.extends.len()
                );
            }
            Err(e @ (ConfigFileError::NotFound(_) | ConfigFileError::Read(_))) => {
                eprintln!("\x1b[31merror\x1b[0m: {}", e);
                process::exit(2);
            }
            Err(e) => {
                eprintln!("\x1b[31merror\x1b[0m: {}", e);
                process::exit(1);
            }
        },

        Commands::Init { root, force } => match load::write_default(&root, force) {
            Ok(path) => println!("\x1b[32m✓\x1b[0m wrote {}", path.display()),
            Err(e) => {
                eprintln!("\x1b[31merror\x1b[0m: {}", e);
                process::exit(2);
            }
        },
    }
}

/// Load from an explicit path when given, otherwise discover at the root.
fn resolve(
    root: &Path,
    config: Option<&Path>,
) -> Result<(PathBuf, ConfigRecord), ConfigFileError> {
    match config {
        Some(path) => Ok((path.to_path_buf(), load::load_file(path)?)),
        None => load::load(root),
    }
}
