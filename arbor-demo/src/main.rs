mod app;
mod paths;
mod sample;
mod settings;

use std::fs::{self, File};
use std::io;

use arbor::{ConfigError, TreeError};
use arbor_term::Terminal;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use app::App;
use settings::Settings;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

async fn run() -> Result<(), DemoError> {
    let config_path = paths::config_file();
    let settings = Settings::load_or_default(config_path.as_deref())?;
    let mut app = App::new(&settings)?;

    let mut terminal = Terminal::new()?;
    info!("Demo started");
    app.run(&mut terminal).await
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
