// src/bin/cli.rs
use social_dash::{cli, log};

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run()
}
