mod cli;
mod commands;
mod logging;

fn main() -> anyhow::Result<()> {
    crate::cli::run()
}
