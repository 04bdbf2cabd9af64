use std::io;

use clap::Parser;
use image_fetcher::session::{self, BANNER, CLOSING};
use image_fetcher::{logger, Cli, ImageFetcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    let config = cli.fetcher_config();
    tracing::debug!("fetcher config: {:?}", config);

    println!("{}", BANNER);

    let urls = if cli.urls.is_empty() {
        session::prompt_urls(io::stdin().lock(), io::stdout())?
    } else {
        cli.urls.iter().flat_map(|urls| session::parse_urls(urls)).collect()
    };

    let fetcher = ImageFetcher::new(&config);

    session::fetch_all(&fetcher, &urls);

    println!("{}", CLOSING);

    Ok(())
}
