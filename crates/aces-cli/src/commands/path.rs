//! Conversion path query command

use aces_gen::edge_transform_style;
use aces_graph::build_conversion_graph;
use anyhow::Result;

use crate::PathArgs;

pub fn run(args: PathArgs, verbose: bool) -> Result<()> {
    let transforms = super::load_ctl_transforms(&args.transforms)?;
    let graph = build_conversion_graph(&transforms)?;

    if verbose {
        println!(
            "Graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
    }

    let Some(edges) = graph.conversion_path(&args.source, &args.target)? else {
        println!("No conversion path from {} to {}", args.source, args.target);
        return Ok(());
    };
    if edges.is_empty() {
        println!("{} and {} are the same node", args.source, args.target);
        return Ok(());
    }

    let mut ids = vec![edges[0].0];
    ids.extend(edges.iter().map(|(_, target)| *target));
    println!("{}", ids.join(" --> "));
    for (source, target) in &edges {
        println!("  {}", edge_transform_style(source, target));
    }

    Ok(())
}
