use clap::Parser;
use cli::Cli;
use color_eyre::Result;

use crate::{app::App, config::Config, trail::Trail};

mod action;
mod app;
mod cli;
mod command;
mod components;
mod config;
mod errors;
mod logging;
mod session;
mod trail;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    crate::errors::init()?;
    crate::logging::init()?;

    let args = Cli::parse();
    let config = Config::new(args.config)?;
    let trail = match &args.path {
        Some(path) => Trail::load(path)?,
        None => Trail::demo(),
    };

    let mut app = App::new(config, trail, args.tick_rate, args.frame_rate)?;
    app.run().await
}
