// src/main.rs
use nsf_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    cli::run()
}
