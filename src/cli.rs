//! Minimal CLI: service description → (markdown | types)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::info;

use api_docgen::{DocOptions, ServiceSpec, Template};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// render API reference docs from a service description (JSON)
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// more logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render every route through a template
    Markdown(MarkdownOut),
    /// print the resolved struct closure of one declared type
    Types(TypesOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// service description JSON, or '-' for stdin
    #[arg(long, short, default_value = "-")]
    api: String,
}

#[derive(clap::Parser, Debug)]
struct MarkdownOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// template file (bundled markdown template if omitted)
    #[arg(long, short)]
    template: Option<PathBuf>,

    /// info string for the fenced type blocks
    #[arg(long, default_value = "golang")]
    lang: String,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct TypesOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// declared type to start from
    #[arg(long)]
    root: String,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<ServiceSpec> {
        let source = if self.api == "-" {
            std::io::read_to_string(std::io::stdin()).context("failed to read service description from stdin")?
        } else {
            std::fs::read_to_string(&self.api)
                .with_context(|| format!("failed to read service description ({})", self.api))?
        };
        let spec = api_docgen::path_de::load_service(&source)
            .with_context(|| format!("failed to parse service description ({})", self.api))?;
        info!("loaded {} type(s) and {} route(s) from {}", spec.types.len(), spec.routes.len(), self.api);
        Ok(spec)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .format_timestamp(None)
            .init();
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Markdown(target) => {
                let template = match target.template.as_ref() {
                    Some(path) => {
                        let source = std::fs::read_to_string(path)
                            .with_context(|| format!("failed to read template ({})", path.display()))?;
                        Template::parse(source)
                            .with_context(|| format!("failed to parse template ({})", path.display()))?
                    }
                    None => Template::markdown()?,
                };
                let spec = target.input_settings.load()?;
                let opts = DocOptions { fence_language: target.lang.clone() };
                let doc = api_docgen::assemble(&spec, &template, &opts)?;
                emit(target.out.as_deref(), &doc)
            }
            Command::Types(target) => {
                let spec = target.input_settings.load()?;
                let src = api_docgen::describe_type(&spec, &target.root)?;
                emit(target.out.as_deref(), &src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn emit(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, text).with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
