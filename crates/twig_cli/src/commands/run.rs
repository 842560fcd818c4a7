//! Run command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, info};
use twig_ast::SyntaxNode;
use twig_core::NodeTraverser;
use twig_core::passes::NodeCollector;

use super::pass::Pass;
use super::read_forest;
use crate::config::{PassSpec, PipelineConfig};

pub fn run_passes(
    config_path: Option<&Path>,
    input: &Path,
    pass_args: &[String],
    max_depth: Option<usize>,
    output: Option<&Path>,
    trace: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => PipelineConfig::from_file(path).into_diagnostic()?,
        None => find_config()?,
    };

    // Command-line flags take precedence over the config file.
    if !pass_args.is_empty() {
        config.passes = pass_args
            .iter()
            .map(|arg| arg.parse::<PassSpec>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .into_diagnostic()?;
    }
    if let Some(depth) = max_depth {
        config.traverser.max_depth = Some(depth);
        config.traverser.validate().into_diagnostic()?;
    }

    let forest = read_forest(input)?;
    debug!("Loaded {} top-level slot(s) from {}", forest.len(), input.display());

    let mut passes: Vec<Pass> = config.passes.iter().map(Pass::from_spec).collect();
    let mut collector = NodeCollector::new();

    let mut traverser: NodeTraverser<'_, SyntaxNode> =
        NodeTraverser::with_config(config.traverser.clone());
    if trace {
        traverser.add_visitor(&mut collector);
    }
    for pass in passes.iter_mut() {
        traverser.add_visitor(pass.visitor_mut());
    }

    let result = traverser
        .traverse(forest)
        .into_diagnostic()
        .wrap_err_with(|| format!("Traversal of {} failed", input.display()))?;
    drop(traverser);

    for event in collector.events() {
        info!("{}", event);
    }
    for (spec, pass) in config.passes.iter().zip(&passes) {
        debug!("Pass {}", spec);
        pass.report();
    }

    let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn find_config() -> Result<PipelineConfig> {
    if let Some(path) = PipelineConfig::discover(".") {
        info!("Using config: {}", path.display());
        return PipelineConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(PipelineConfig::default())
}

