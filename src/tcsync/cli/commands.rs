use super::print::print_messages;
use super::setup::{Cli, Mode};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use tcsync::api::SyncApi;
use tcsync::config::SyncConfig;
use tcsync::error::Result;
use tcsync::model::Status;
use tcsync::store::fs::FileStore;

/// Overrides the project root (defaults to the current directory).
const ROOT_ENV: &str = "TCSYNC_ROOT";

struct AppContext {
    api: SyncApi<FileStore>,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(mode) = cli.mode() else {
        let _ = Cli::command().print_help();
        println!();
        std::process::exit(1);
    };

    let mut ctx = init_context(&cli)?;

    match mode {
        Mode::Interactive => handle_interactive(&mut ctx),
        Mode::Single { test_case, status } => handle_single(&mut ctx, &test_case, status),
        Mode::Json(path) => handle_json(&mut ctx, &path),
        Mode::FromResults => handle_from_results(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = std::env::var_os(ROOT_ENV)
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = SyncConfig::load(&root)?;
    if let Some(checklist) = &cli.checklist {
        config = config.with_checklist(checklist);
    }
    if let Some(results) = &cli.results {
        config = config.with_results(results);
    }

    Ok(AppContext {
        api: SyncApi::new(FileStore::new(), config.resolve(&root)),
        verbose: cli.verbose,
    })
}

fn handle_single(ctx: &mut AppContext, test_case: &str, status: Status) -> Result<()> {
    let result = ctx.api.update_case(test_case, status)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_json(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let result = ctx.api.update_from_json(path)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_from_results(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.update_from_results()?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_interactive(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let result = ctx.api.interactive(&mut input, &mut output)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}
