use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::filter::{self, DocumentCriteria, PageCriteria};
use crate::loader::DataSource;
use crate::output::{self, OutputFormat};
use crate::runner::{Options, Runner};

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<12}: {}", label, value);
}

fn format_opt_value<'a>(v: Option<&'a str>, default: &'a str) -> &'a str {
    match v {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

fn render_custom_help() -> String {
    let cmd = CliArgs::command();
    let mut out = String::new();

    out.push_str(cmd.get_name());
    if let Some(version) = cmd.get_version() {
        out.push(' ');
        out.push_str(version);
    }
    out.push('\n');

    if let Some(long_about) = cmd.get_long_about().or_else(|| cmd.get_about()) {
        out.push_str(&long_about.to_string());
        out.push('\n');
    }

    out.push_str("\nUsage: ");
    out.push_str(cmd.get_name());
    out.push_str(" [OPTIONS]\n\n");

    let mut sections: Vec<(String, Vec<&clap::Arg>)> = Vec::new();
    let mut section_idx: HashMap<String, usize> = HashMap::new();
    for arg in cmd.get_arguments() {
        if arg.is_hide_set() {
            continue;
        }
        let heading = arg.get_help_heading().unwrap_or("Options").to_string();
        let idx = match section_idx.get(&heading).copied() {
            Some(i) => i,
            None => {
                sections.push((heading.clone(), Vec::new()));
                section_idx.insert(heading, sections.len() - 1);
                sections.len() - 1
            }
        };
        sections[idx].1.push(arg);
    }

    for (heading, args) in sections {
        out.push_str(&heading);
        out.push_str(":\n");
        for arg in args {
            let mut parts: Vec<String> = Vec::new();
            if let Some(short) = arg.get_short() {
                parts.push(format!("-{short}"));
            }
            if let Some(aliases) = arg.get_visible_aliases() {
                for alias in aliases {
                    parts.push(format!("--{alias}"));
                }
            }
            if let Some(long) = arg.get_long() {
                parts.push(format!("--{long}"));
            }
            let mut flags = parts.join(", ");
            if arg.get_action().takes_values() {
                let value_name = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.as_str())
                    .unwrap_or("VALUE");
                flags.push_str(&format!(" <{value_name}>"));
            }
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            out.push_str(&format!("  {flags:<42} {help}\n"));
        }
        out.push('\n');
    }

    out
}

#[derive(Clone, Debug)]
struct RunConfig {
    pages: DataSource,
    documents: DataSource,
    page_criteria: PageCriteria,
    document_criteria: DocumentCriteria,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
    force_color: bool,
    timeout: Option<u64>,
    verbose: u8,
}

impl RunConfig {
    /// Colors only go to a terminal, unless `--color` forces them.
    fn colored_report(&self) -> bool {
        self.force_color || (!self.no_color && self.output.is_none())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let force_color = args.color;
    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let pages_raw =
        non_blank(args.pages.or(cfg.pages)).unwrap_or_else(|| "./pages.json".to_string());
    let documents_raw = non_blank(args.documents.or(cfg.documents))
        .unwrap_or_else(|| "./documents.json".to_string());

    if let Some(min) = cfg.min_accessibility {
        if min > 100 {
            return Err(format!(
                "invalid min_accessibility {min} in config, expected 0-100"
            ));
        }
    }
    // an explicit empty CLI value clears whatever the config selected
    let min_accessibility = match args.min_accessibility.as_deref() {
        Some(raw) => filter::parse_min_accessibility(raw)
            .map_err(|e| format!("invalid --min-accessibility '{raw}': {e}"))?,
        None => cfg.min_accessibility,
    };
    let teams = match args.teams.as_deref() {
        Some(raw) => {
            filter::parse_teams(raw).map_err(|e| format!("invalid --teams '{raw}': {e}"))?
        }
        None => cfg.teams,
    };

    let page_criteria = PageCriteria {
        search: args.search.or(cfg.search),
        status: args.status.or(cfg.status),
        min_accessibility,
    };
    let document_criteria = DocumentCriteria {
        library: args.library.or(cfg.library),
        sensitivity: args.sensitivity.or(cfg.sensitivity),
        teams,
    };

    let output_path =
        non_blank(args.output.or(cfg.output)).map(|p| config::expand_tilde_string(&p));
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}', expected text, json or html"))?,
        None => output_path
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    let timeout = args.timeout.or(cfg.timeout);
    if timeout == Some(0) {
        return Err("invalid timeout, expected positive integer".to_string());
    }

    Ok(RunConfig {
        pages: DataSource::parse(&pages_raw),
        documents: DataSource::parse(&documents_raw),
        page_criteria,
        document_criteria,
        output: output_path,
        output_format,
        no_color,
        force_color,
        timeout,
        verbose: args.verbose,
    })
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("contentdash=debug"),
        _ => EnvFilter::new("contentdash=trace"),
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn format_label(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
        OutputFormat::Html => "html",
    }
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if let Some(path) = run.output.as_deref() {
        println!(
            "{}",
            "----------------------------------------------------------"
                .bold()
                .white()
        );
        format_kv_line("Pages", &run.pages.describe());
        format_kv_line("Documents", &run.documents.describe());
        format_kv_line(
            "Page filter",
            format_opt_value(
                output::describe_page_criteria(&run.page_criteria).as_deref(),
                "none",
            ),
        );
        format_kv_line(
            "Doc filter",
            format_opt_value(
                output::describe_document_criteria(&run.document_criteria).as_deref(),
                "none",
            ),
        );
        format_kv_line("Output", path);
        format_kv_line("Format", format_label(run.output_format));
        println!(
            "{}",
            "----------------------------------------------------------"
                .bold()
                .white()
        );
    }

    let runner = Runner::new(Options {
        pages: run.pages.clone(),
        documents: run.documents.clone(),
        page_criteria: run.page_criteria.clone(),
        document_criteria: run.document_criteria.clone(),
        timeout_seconds: run.timeout,
    })
    .map_err(|e| e.to_string())?;

    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {elapsed} {msg}")
            .map_err(|e| format!("invalid progress template: {e}"))?,
    );
    pb.set_message("loading pages and documents");

    let result = runner.run().await;
    pb.finish_and_clear();

    let report = output::build_report(&result.dashboard);
    let rendered = output::render(&report, run.output_format, run.colored_report());

    match run.output.as_deref() {
        Some(outfile_path) => {
            let mut outfile = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(outfile_path)
                .await
                .map_err(|e| format!("failed to open output file: {e}"))?;
            outfile
                .write_all(&rendered)
                .await
                .map_err(|e| format!("failed to write output file: {e}"))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(&rendered)
                .and_then(|_| handle.flush())
                .map_err(|e| format!("failed to write report: {e}"))?;
        }
    }

    if let Some(failure) = result.dashboard.failure() {
        return Err(format!("dashboard data unavailable: {failure}"));
    }

    if let Some(path) = run.output.as_deref() {
        println!();
        println!(
            ":: Completed :: rendered in {}ms :: saved to {} ::",
            result.elapsed.as_millis(),
            path.cyan()
        );
    }

    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", render_custom_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        let path = config::default_config_path()
            .ok_or_else(|| "could not determine home directory".to_string())?;
        config::ensure_default_config_file(&path)?;
        println!(":: Config    : {}", path.display());
        return Ok(());
    }

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path)?,
        None => ConfigFile::default(),
    };

    let run = build_run_config(args, cfg)?;

    init_tracing(run.verbose);
    if run.force_color {
        colored::control::set_override(true);
    } else if run.no_color {
        colored::control::set_override(false);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))
}
