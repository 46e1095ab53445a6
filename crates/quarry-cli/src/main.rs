use clap::Parser;
use quarry_cli::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    quarry_cli::init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    quarry_cli::run(&cli, &mut out)
}
