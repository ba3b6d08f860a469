use clap::Parser;
use wave_bomb::models::args::Args;
use wave_bomb::{logging, run, show_result, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;
    let config = Config::from(args);
    let result = run(&config).await?;
    show_result(&result);
    Ok(())
}
