#[macro_use]
extern crate tracing;

use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trellis::cli::Cli;
use trellis::commands::{self, CommandContext, CommandError};
use trellis::tree::snapshot::TreeSnapshot;
use trellis::tree::{Arrange, ArrangeTarget, SplitArranger, Tree};
use trellis_config::Config;

fn main() -> anyhow::Result<ExitCode> {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| "trellis=debug".to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(err) => bail!("{err:?}"),
        },
        None => Config::default(),
    };

    let text = fs::read_to_string(&cli.tree)
        .with_context(|| format!("error reading {:?}", cli.tree))?;
    let snapshot: TreeSnapshot =
        serde_json::from_str(&text).with_context(|| format!("error parsing {:?}", cli.tree))?;
    let mut tree = Tree::from_snapshot(&snapshot).context("error loading the tree")?;

    if let Some(name) = &cli.focus {
        let Some(id) = tree.find_by_name(name) else {
            bail!("no container named {name:?}");
        };
        tree.set_focused(Some(id));
    }

    let mut arranger = SplitArranger;
    if cli.arrange_first {
        let workspaces: Vec<_> = tree.workspaces().map(|(id, _)| id).collect();
        for ws in workspaces {
            arranger.arrange(&mut tree, ArrangeTarget::Workspace(ws));
        }
    }

    let line = cli.command.join(" ");
    let mut ctx = CommandContext {
        tree: &mut tree,
        arranger: &mut arranger,
        config: &config,
    };
    let result = commands::execute(&mut ctx, &line);

    let code = match &result {
        Ok(()) => {
            info!("{line:?} succeeded");
            ExitCode::SUCCESS
        }
        Err(err @ CommandError::Invalid(_)) => {
            warn!("{line:?} is invalid: {err}");
            ExitCode::from(2)
        }
        Err(err @ CommandError::Failure(_)) => {
            warn!("{line:?} failed: {err}");
            ExitCode::FAILURE
        }
    };

    let json = serde_json::to_string_pretty(&tree.snapshot()).context("error serializing")?;
    println!("{json}");

    Ok(code)
}
