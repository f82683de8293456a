//! Command dispatch: one handler per subcommand

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{compare, Comparison, DomainError, FlatNode, LabelValue, TreeNode};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::render::{render_tree, to_json};

/// Load layered settings and apply command line overrides.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.strict {
        settings.strict = true;
    }
    if let Some(format) = cli.format {
        settings.output.format = format;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build { input }) => cmd_build(container, input),
        Some(Commands::Flatten { input }) => cmd_flatten(container, input),
        Some(Commands::Roundtrip { input }) => cmd_roundtrip(container, input),
        Some(Commands::Compare { a, b, multiset }) => cmd_compare(container, a, b, *multiset),
        Some(Commands::Validate { input }) => cmd_validate(container, input),
        Some(Commands::Intersect { a, b }) => cmd_intersect(container, a, b),
        Some(Commands::Demo) => cmd_demo(container),
        Some(Commands::Config) => cmd_config(container),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see `treeflat --help`".to_string(),
        )),
    }
}

#[instrument(skip(container))]
fn cmd_build(container: &ServiceContainer, input: &Path) -> CliResult<()> {
    let nodes: Vec<FlatNode<LabelValue>> = container.conversion.load_flat(input)?;
    let tree = container.conversion.build(&nodes)?;
    if tree.is_none() && !nodes.is_empty() {
        output::warning(&"no root entry, nothing to build");
    }
    output::info(&render_tree(tree.as_ref(), &container.settings.output)?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_flatten(container: &ServiceContainer, input: &Path) -> CliResult<()> {
    let tree: Option<TreeNode<LabelValue>> = container.conversion.load_tree(input)?;
    let flat = container.conversion.flatten(tree.as_ref());
    output::info(&to_json(&flat, &container.settings.output)?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_roundtrip(container: &ServiceContainer, input: &Path) -> CliResult<()> {
    let nodes: Vec<FlatNode<LabelValue>> = container.conversion.load_flat(input)?;
    print_round_trip(container, &nodes)
}

fn print_round_trip(container: &ServiceContainer, nodes: &[FlatNode<LabelValue>]) -> CliResult<()> {
    let result = container.conversion.round_trip(nodes)?;
    let out = &container.settings.output;

    output::header(&"--- Tree ---");
    output::info(&render_tree(result.tree.as_ref(), out)?);
    output::header(&"--- Flattened ---");
    output::info(&to_json(&result.flattened, out)?);
    output::header(&"--- Same as input ---");
    output::verdict(result.equal);

    if result.equal {
        Ok(())
    } else {
        Err(CliError::NotEqual)
    }
}

#[instrument(skip(container))]
fn cmd_compare(container: &ServiceContainer, a: &Path, b: &Path, multiset: bool) -> CliResult<()> {
    let left: Vec<FlatNode<LabelValue>> = container.conversion.load_flat(a)?;
    let right: Vec<FlatNode<LabelValue>> = container.conversion.load_flat(b)?;

    let mode = if multiset {
        Comparison::Multiset
    } else {
        container.settings.comparison
    };
    let equal = compare(mode, &left, &right);
    output::verdict(equal);

    if equal {
        Ok(())
    } else {
        Err(CliError::NotEqual)
    }
}

#[instrument(skip(container))]
fn cmd_validate(container: &ServiceContainer, input: &Path) -> CliResult<()> {
    let nodes: Vec<FlatNode<LabelValue>> = container.conversion.load_flat(input)?;
    let found = container.conversion.check(&nodes);

    if found.is_empty() {
        output::success(&format!("{}: {} entries, well-formed", input.display(), nodes.len()));
        return Ok(());
    }

    output::header(&format!("{}: {} problem(s)", input.display(), found.len()));
    for malformation in &found {
        output::failure(malformation);
    }
    Err(DomainError::MalformedInput(found).into())
}

#[instrument(skip(container))]
fn cmd_intersect(container: &ServiceContainer, a: &Path, b: &Path) -> CliResult<()> {
    let left: Vec<LabelValue> = container.conversion.load_json(a)?;
    let right: Vec<LabelValue> = container.conversion.load_json(b)?;
    let shared = container.conversion.intersect(&left, &right);
    output::info(&to_json(&shared, &container.settings.output)?);
    Ok(())
}

/// The nine node organisation chart used as a worked example.
pub fn demo_nodes() -> Vec<FlatNode<LabelValue>> {
    [
        (1, None),
        (2, Some(1)),
        (3, Some(2)),
        (4, Some(2)),
        (5, Some(1)),
        (6, Some(1)),
        (7, Some(6)),
        (8, Some(6)),
        (9, Some(8)),
    ]
    .into_iter()
    .map(|(label, parent): (i64, Option<i64>)| {
        FlatNode::new(LabelValue::Int(label), parent.map(LabelValue::Int))
    })
    .collect()
}

#[instrument(skip(container))]
fn cmd_demo(container: &ServiceContainer) -> CliResult<()> {
    print_round_trip(container, &demo_nodes())
}

fn cmd_config(container: &ServiceContainer) -> CliResult<()> {
    output::info(&container.settings.to_toml()?);
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
