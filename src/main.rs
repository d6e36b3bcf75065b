use clap::{Parser, Subcommand};
use navindex::core::config::{self, CliOverrides};
use navindex::core::state::{self, NavIndex, NavStore};
use navindex::core::{MenuNode, source};
use serde::Serialize;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navindex", about = "Flattened navigation index for a menu tree")]
struct Args {
    /// Menu tree JSON file
    #[arg(short, long)]
    tree: Option<PathBuf>,

    /// Navigation events (JSON array) to replay after the build
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace, off
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every id in the index
    List,
    /// Print one entry as JSON
    Show { id: String },
    /// Print the ancestor chain of an entry, root first
    Breadcrumbs { id: String },
    /// Print the page and section root shown for an id
    Nav { id: String },
}

/// An index entry as printed: the node plus the id of its parent.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryView<'a> {
    #[serde(flatten)]
    node: &'a MenuNode,
    parent_id: Option<&'a str>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().map_err(io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            tree_file: args.tree.as_deref(),
            events_file: args.events.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );

    // Initialize file logger - stdout is reserved for command output
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("navindex starting with tree {}", resolved.tree_file.display());

    let index = source::build_initial_state(&resolved.tree_file).map_err(io::Error::other)?;
    let mut store = NavStore::new(index);

    if let Some(events_file) = &resolved.events_file {
        let events = source::load_events(events_file).map_err(io::Error::other)?;
        store.dispatch_all(&events);
        log::info!("Replayed {} navigation events", events.len());
    }

    run(&args.command, store.index())
}

fn run(command: &Command, index: &NavIndex) -> io::Result<()> {
    match command {
        Command::List => {
            let mut ids: Vec<&str> = index.keys().map(String::as_str).collect();
            ids.sort_unstable();
            for id in ids {
                println!("{id}");
            }
        }
        Command::Show { id } => match index.get(id) {
            Some(node) => print_json(&EntryView {
                node,
                parent_id: node.parent_id(),
            })?,
            None => eprintln!("No navigation entry '{id}'"),
        },
        Command::Breadcrumbs { id } => {
            let trail = state::breadcrumbs(index, id);
            if trail.is_empty() {
                eprintln!("No navigation entry '{id}'");
                return Ok(());
            }
            let labels: Vec<&str> = trail.iter().rev().map(|node| node.text.as_str()).collect();
            println!("{}", labels.join(" > "));
        }
        Command::Nav { id } => print_json(&state::nav_model(index, id))?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    println!("{json}");
    Ok(())
}
