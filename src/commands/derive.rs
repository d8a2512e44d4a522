use anyhow::{Context, Result};
use tracing::{debug, warn};

use ctrlname::manifest::Manifest;
use ctrlname::{ControllerName, DerivedNames};

use crate::cli::DeriveArgs;

pub(crate) fn cmd_derive(args: DeriveArgs) -> Result<()> {
    let names: Vec<ControllerName> = match &args.manifest {
        Some(path) => {
            let manifest = Manifest::load(path)?;
            debug!(
                path = %path.display(),
                controllers = manifest.controllers.len(),
                "loaded manifest"
            );
            manifest.into_names()
        }
        None => vec![ControllerName::new(args.fragments.iter().cloned())],
    };

    let mut derived = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if args.strict {
            let checked = name.validate();
            match &args.manifest {
                Some(path) => checked
                    .with_context(|| format!("Controller #{} in {}", i + 1, path.display()))?,
                None => checked?,
            }
        } else if name.is_degenerate() {
            warn!(fragments = ?name.fragments(), "controller name is empty after normalization");
        }
        derived.push(name.derive());
    }

    if args.json {
        let text =
            serde_json::to_string_pretty(&derived).context("Failed to serialize derived names")?;
        println!("{text}");
    } else {
        print_plain(&derived);
    }
    Ok(())
}

fn print_plain(derived: &[DerivedNames]) {
    for (i, names) in derived.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("metrics: {}", names.metrics_name);
        println!("logger: {}", names.logger_name);
    }
}
