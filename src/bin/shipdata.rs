use anyhow::Result;
use clap::Parser;
use log::{error, info};
use shipdata::repl::{self, BufReadSource, EditorSource};
use shipdata::{Session, loader};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shipdata",
    version,
    about = "Query a ship dataset interactively, plot ship speeds and map ship positions"
)]
struct Cli {
    /// Dataset file (.json with {"data": [...], "totalCount": N}, or .csv)
    #[arg(long, env = "SHIPDATA_FILE", default_value = "ships_data.json")]
    data: PathBuf,
    /// Directory for speed_histogram.png and ships_map.html (default: current directory)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = match loader::load_dataset(&cli.data) {
        Ok(ds) => ds,
        Err(e) => {
            error!("startup aborted: {e}");
            println!("Error loading data: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Loaded {} ship records (totalCount: {})",
        dataset.len(),
        dataset.total_count()
    );

    let session = Session::new(dataset).with_out_dir(cli.out_dir);
    let mut out = io::stdout();
    if io::stdin().is_terminal() {
        let mut source = EditorSource::new()?;
        repl::run(&session, &mut source, &mut out)?;
    } else {
        info!("stdin is not a terminal; reading commands line by line");
        let mut source = BufReadSource::new(io::stdin().lock());
        repl::run(&session, &mut source, &mut out)?;
    }
    Ok(())
}
