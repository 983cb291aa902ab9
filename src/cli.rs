use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(version = version(), about)]
pub struct Cli {
    /// Trail file to play. Opens a built-in demo trail when omitted.
    pub path: Option<PathBuf>,

    /// Tick rate, i.e. number of ticks per second. Playback advances one
    /// frame per tick.
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub frame_rate: f64,

    /// Specifies the *directory* of the config to load. This directory is
    /// expected to contain files like "config.json5".
    #[arg(short, long)]
    pub config: Option<String>,
}

const VERSION_MESSAGE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_DESCRIBE"),
    " (",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

pub fn version() -> String {
    let config_dir_path = Config::get_config_dir().display().to_string();
    let data_dir_path = Config::get_data_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
