use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::debug;

use ctrlname::{is_conforming, Convention};

use crate::cli::CheckArgs;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    name: &'a str,
    convention: Convention,
    conforming: bool,
}

pub(crate) fn cmd_check(args: CheckArgs) -> Result<()> {
    let convention = args.convention;
    debug!(name = %args.name, pattern = convention.pattern(), "checking name");
    let conforming = is_conforming(&args.name, convention);

    if args.json {
        let report = CheckReport {
            name: &args.name,
            convention,
            conforming,
        };
        let text =
            serde_json::to_string_pretty(&report).context("Failed to serialize check report")?;
        println!("{text}");
    }
    if !conforming {
        bail!("{:?} is not valid {convention}", args.name);
    }
    if !args.json {
        println!("ok");
    }
    Ok(())
}
