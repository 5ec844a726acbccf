use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

#[derive(Debug, Parser)]
struct Xtask {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format, lint, and test the crate with and without default features.
    Ci,
    /// Run the benchmarks.
    Bench {
        /// Only run benchmarks matching this filter.
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let xtask = Xtask::parse();
    let sh = Shell::new()?;
    sh.change_dir(env!("CARGO_MANIFEST_DIR"));
    sh.change_dir("..");

    match xtask.cmd {
        Command::Ci => ci(&sh),
        Command::Bench { filter } => bench(&sh, filter),
    }
}

fn ci(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all --check").run()?;
    cmd!(sh, "cargo clippy --all-targets --all-features -- -D warnings").run()?;
    cmd!(sh, "cargo build --no-default-features").run()?;
    cmd!(sh, "cargo test --no-default-features --lib").run()?;
    cmd!(sh, "cargo test --all-features").run()?;
    Ok(())
}

fn bench(sh: &Shell, filter: Option<String>) -> Result<()> {
    let filter = filter.unwrap_or_default();
    cmd!(sh, "cargo bench --bench benchmarks -- {filter}").run()?;
    Ok(())
}
