//! Walks a small edge-list graph through a traversal chain.
//!
//! Named traversals move between node sets; unregistered calls such as
//! `count` land on the cursor object the chain ends up holding.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use serde::Deserialize;

use trekker::{check_arity, Chain, OperationSet, Registry, Value};

#[derive(Parser, Debug)]
#[command(
    name = "walk_demo",
    about = "Chain named traversals over a small edge-list graph"
)]
struct Args {
    /// JSON edge-list file; a built-in sample is used when omitted.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Node to start the walk from.
    #[arg(long, default_value = "alice")]
    from: String,

    /// Edge label to follow.
    #[arg(long, default_value = "follows")]
    label: String,
}

/// Edge list as stored on disk: `{"edges": [["alice", "follows", "bob"]]}`.
#[derive(Debug, Deserialize)]
struct GraphConfig {
    edges: Vec<(String, String, String)>,
}

#[derive(Debug)]
struct Graph {
    outgoing: BTreeMap<String, Vec<(String, String)>>,
}

impl Graph {
    fn from_config(config: GraphConfig) -> Self {
        let mut outgoing: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
        for (source, label, target) in config.edges {
            outgoing.entry(source).or_default().push((label, target));
        }
        Self { outgoing }
    }

    fn sample() -> Self {
        let edge = |s: &str, l: &str, t: &str| (s.to_string(), l.to_string(), t.to_string());
        Self::from_config(GraphConfig {
            edges: vec![
                edge("alice", "follows", "bob"),
                edge("alice", "follows", "dave"),
                edge("bob", "follows", "carol"),
                edge("dave", "follows", "carol"),
                edge("carol", "follows", "erin"),
            ],
        })
    }

    fn neighbors(&self, node: &str, label: &str) -> Vec<String> {
        match self.outgoing.get(node) {
            Some(edges) => edges
                .iter()
                .filter(|(edge_label, _)| edge_label == label)
                .map(|(_, target)| target.clone())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Terminal cursor over the nodes a walk reached. Exposes read-only native
/// operations so unregistered calls can land on it.
#[derive(Debug)]
struct NodeCursor {
    nodes: Vec<String>,
}

impl OperationSet for NodeCursor {
    fn responds_to(&self, name: &str) -> bool {
        matches!(name, "count" | "names" | "first")
    }

    fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        check_arity(name, args, 0)?;
        match name {
            "count" => Ok(Value::Int(self.nodes.len() as i64)),
            "names" => Ok(Value::List(
                self.nodes.iter().map(|n| Value::from(n.as_str())).collect(),
            )),
            "first" => Ok(self
                .nodes
                .first()
                .map(|n| Value::from(n.as_str()))
                .unwrap_or(Value::Empty)),
            other => bail!("unexpected operation `{}`", other),
        }
    }
}

fn node_names(state: &Value) -> Result<Vec<String>> {
    match state {
        Value::Text(node) => Ok(vec![node.clone()]),
        Value::List(items) => items
            .iter()
            .map(|item| {
                item.as_text()
                    .map(str::to_string)
                    .context("node list holds a non-text value")
            })
            .collect(),
        other => bail!("expected a node list, got {} state", other.kind()),
    }
}

fn build_registry(graph: Arc<Graph>) -> Registry {
    let mut registry = Registry::new();

    registry.register("start", |_state, args| {
        check_arity("start", args, 1)?;
        let node = args[0].as_text().context("`start` takes a node name")?;
        Ok(Value::List(vec![Value::from(node)]))
    });

    registry.register("out", move |state, args| {
        check_arity("out", args, 1)?;
        let label = args[0].as_text().context("`out` takes an edge label")?;
        let mut next = Vec::new();
        for node in node_names(&state)? {
            next.extend(graph.neighbors(&node, label));
        }
        Ok(Value::List(next.into_iter().map(Value::from).collect()))
    });

    registry.register("unique", |state, args| {
        check_arity("unique", args, 0)?;
        let mut nodes = node_names(&state)?;
        nodes.sort_unstable();
        nodes.dedup();
        Ok(Value::List(nodes.into_iter().map(Value::from).collect()))
    });

    registry.register("as_cursor", |state, args| {
        check_arity("as_cursor", args, 0)?;
        let nodes = node_names(&state)?;
        Ok(Value::object(NodeCursor { nodes }))
    });

    registry
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = Arc::new(match &args.graph {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Graph::from_config(serde_json::from_str(&raw)?)
        }
        None => Graph::sample(),
    });

    let registry = build_registry(graph);
    info!("{} traversals registered", registry.len());

    let label = Value::from(args.label.as_str());
    let mut chain = Chain::new(&registry);
    chain
        .invoke("start", &[Value::from(args.from.as_str())])?
        .invoke("out", &[label.clone()])?
        .invoke("out", &[label])?
        .invoke("unique", &[])?;
    let reached = node_names(chain.result())?;
    println!(
        "two `{}` hops out from {}: {}",
        args.label,
        args.from,
        reached.join(", ")
    );

    // `count` is not registered; it reaches the cursor by delegation.
    chain.invoke("as_cursor", &[])?.invoke("count", &[])?;
    match chain.result().as_int() {
        Some(count) => println!("nodes reached: {}", count),
        None => bail!("`count` did not return an int"),
    }

    Ok(())
}
