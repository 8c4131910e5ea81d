//! # pelican-quickstart
//!
//! Asks a few questions and generates the skeleton of a new Pelican site.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` print and exit 0).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Ask the questions and generate the files.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                               |
//! |------|---------------------------------------|
//! |  0   | Success (even if some files failed)   |
//! |  1   | Internal / system error               |
//! |  2   | User / input error, abandoned prompts |
//! |  3   | Resource not found                    |
//! |  4   | Configuration error                   |

use std::{
    ffi::OsString,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, info, instrument};

use quickstart_adapters::{ChronoTzDatabase, LocalFilesystem, SystemLocale, TeraRenderer};
use quickstart_core::{
    VERSION,
    application::{PromptIo, QuickstartOutcome, QuickstartRequest, QuickstartService},
    domain::{
        PathArg,
        defaults::{LANG_LENGTH, is_valid_lang},
    },
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
    prompt::StdinPrompt,
};

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

/// Name of the file, inside the virtualenv, that remembers the project.
const PROJECT_MARKER: &str = ".project";

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version land here too and go to stdout.
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && io::stderr().is_terminal();

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, color),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    debug!(format = ?output.format(), "Output configured");
    let color = color && output.supports_color();

    // ── 5. Run + 6. Error handling ────────────────────────────────────────
    match run(cli, config, &output) {
        Ok(()) => {
            info!("pelican-quickstart completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Ask every question, generate the files and report the outcome.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    validate_lang(cli.lang.as_deref())?;

    print_banner(output)?;

    let working_dir =
        std::env::current_dir().with_cli_context(|| "reading the current directory")?;
    let defaults = config.defaults.apply(SystemLocale::new().defaults());
    debug!(lang = %defaults.lang, timezone = %defaults.timezone, "Defaults resolved");

    let mut request = QuickstartRequest::new(defaults, PathArg::from_cli(cli.path), &working_dir);
    request.title = cli.title;
    request.author = cli.author;
    request.lang = cli.lang;
    request.project_marker = Some(project_marker(
        std::env::var_os("VIRTUAL_ENV"),
        &working_dir,
    ));
    request.home_dir = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf());
    request.max_attempts = config.prompt.max_attempts;

    let renderer = match &config.templates.local_path {
        Some(dir) => TeraRenderer::with_overrides(dir),
        None => TeraRenderer::new(),
    }
    .with_cli_context(|| "loading templates")?;

    let service = QuickstartService::new(
        Box::new(renderer),
        Box::new(LocalFilesystem::new()),
        Box::new(ChronoTzDatabase::new()),
    );

    let mut terminal = terminal_prompt();
    let outcome = service.run(request, terminal.as_mut())?;

    report(&outcome, output)
}

fn print_banner(output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Bem-vindo ao pelican-quickstart v{VERSION}."))?;
    output.print("")?;
    output.print("Este script vai te ajudar a criar um novo site baseado no Pelican.")?;
    output.print("")?;
    output.print(
        "Por favor responda às perguntas a seguir para que possamos gerar os \
         arquivos necessários para o Pelican.",
    )?;
    output.print("")?;
    Ok(())
}

fn report(outcome: &QuickstartOutcome, output: &OutputManager) -> CliResult<()> {
    for dir in &outcome.report.directories {
        output.info(&format!("Diretório criado: {}", dir.display()))?;
    }
    for file in &outcome.report.files {
        output.info(&format!("Arquivo gerado: {}", file.display()))?;
    }
    for failure in &outcome.report.failures {
        output.warning(&format!("Erro: {}: {}", failure.target.display(), failure.error))?;
    }

    output.success(&format!(
        "Pronto. Seu novo projeto está disponível em {}",
        outcome.settings.basedir.display()
    ))?;
    Ok(())
}

/// Dialoguer prompts on a terminal, plain line reads otherwise.
fn terminal_prompt() -> Box<dyn PromptIo> {
    #[cfg(feature = "interactive")]
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Box::new(prompt::DialoguerPrompt::new());
    }

    Box::new(StdinPrompt::stdio())
}

/// `<venv>/.project` inside an active virtualenv, else `./.project`.
fn project_marker(virtual_env: Option<OsString>, working_dir: &Path) -> PathBuf {
    virtual_env
        .filter(|venv| !venv.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| working_dir.to_path_buf())
        .join(PROJECT_MARKER)
}

/// `--lang` seeds a question that only accepts two characters.
fn validate_lang(lang: Option<&str>) -> CliResult<()> {
    match lang {
        Some(l) if !is_valid_lang(l) => Err(CliError::InvalidInput {
            message: format!("--lang must have exactly {LANG_LENGTH} characters, got '{l}'"),
            source: None,
        }),
        _ => Ok(()),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr, so the message appears even when stdout is redirected.
    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
