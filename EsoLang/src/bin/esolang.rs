//! esolang command-line binary

fn main() -> anyhow::Result<()> {
    esolang::cli::run_cli()
}
