//! quill - notes with tags, filtered by title and tag

pub mod cli;
pub mod domain;
pub mod logging;
pub mod store;
pub mod workflow;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_list, handle_new, handle_show, handle_tag, handle_tags, open_store},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Command::Completions(args) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let level = logging::level_for_verbosity(cli.verbose, config.log_level.as_deref());
    logging::init_logging(level).context("failed to initialize logging")?;

    let data_dir = config.data_dir(cli.dir.as_ref());
    let backend = config.backend(cli.backend);
    let mut store = open_store(&data_dir, backend)?;
    debug!(
        "event=command_start backend={} dir={}",
        store.backend_name(),
        data_dir.display()
    );

    match &cli.command {
        Command::List(args) => handle_list(args, store.as_ref()),
        Command::New(args) => handle_new(args, store.as_mut()),
        Command::Show(args) => handle_show(args, store.as_ref()),
        Command::Tags(args) => handle_tags(args, store.as_ref()),
        Command::Tag(args) => handle_tag(args, store.as_mut()),
        Command::Completions(_) => Ok(()),
    }
}
