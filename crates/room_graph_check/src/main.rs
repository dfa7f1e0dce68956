// SPDX-License-Identifier: MIT OR Apache-2.0
//! Room graph checker.
//!
//! Loads a room graph document, rehydrates it against a room type registry
//! and graph settings, and reports whether it is a valid dungeon layout.
//!
//! ```text
//! room_graph_check <graph.ron> [--registry <types.ron>] [--settings <settings.ron>]
//! ```
//!
//! Without `--registry` the stock dungeon catalog is used; without
//! `--settings` the default settings are used.

use room_node_graph::{
    GraphError, GraphSettings, RegistryError, RoomGraph, RoomGraphDocument, RoomTypeRegistry,
    SettingsError,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const USAGE: &str =
    "usage: room_graph_check <graph.ron> [--registry <types.ron>] [--settings <settings.ron>]";

/// Parsed command line
#[derive(Debug, PartialEq)]
struct Args {
    graph: PathBuf,
    registry: Option<PathBuf>,
    settings: Option<PathBuf>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CheckError> {
        let mut graph = None;
        let mut registry = None;
        let mut settings = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--registry" {
                registry = Some(PathBuf::from(args.next().ok_or(CheckError::Usage)?));
            } else if arg == "--settings" {
                settings = Some(PathBuf::from(args.next().ok_or(CheckError::Usage)?));
            } else if arg.starts_with("--") || graph.is_some() {
                return Err(CheckError::Usage);
            } else {
                graph = Some(PathBuf::from(arg));
            }
        }

        Ok(Self {
            graph: graph.ok_or(CheckError::Usage)?,
            registry,
            settings,
        })
    }
}

/// Failure of a check run
#[derive(Debug, thiserror::Error)]
enum CheckError {
    #[error("invalid arguments; {}", USAGE)]
    Usage,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to load graph document: {0}")]
    Document(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn run(args: Args) -> Result<RoomGraph, CheckError> {
    let registry = match &args.registry {
        Some(path) => RoomTypeRegistry::load(path)?,
        None => RoomTypeRegistry::dungeon_defaults(),
    };
    let settings = match &args.settings {
        Some(path) => GraphSettings::load(path)?,
        None => GraphSettings::default(),
    };
    tracing::debug!(
        "Using {} room types, max {} corridor children",
        registry.len(),
        settings.max_child_corridors
    );

    let document = RoomGraphDocument::load(&args.graph)?;
    let graph = RoomGraph::from_document(document, Arc::new(registry), settings)?;
    Ok(graph)
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("room_graph_check=debug".parse().unwrap())
        .add_directive("room_node_graph=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = Args::parse(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(graph) => {
            tracing::info!(
                "{:?}: {} rooms, {} connections, entrance {}",
                graph.name,
                graph.node_count(),
                graph.edge_count(),
                if graph.entrance_id().is_some() { "placed" } else { "missing" },
            );
        }
        Err(CheckError::Usage) => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Room graph check failed: {e}");
            std::process::exit(1);
        }
    }
}
