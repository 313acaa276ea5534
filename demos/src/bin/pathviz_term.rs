//! Terminal visualizer using crossterm.
//!
//! Run: cargo run --bin pathviz-term [config.json]
//!
//! Logging is off by default because it would tear the alternate screen;
//! set `RUST_LOG` and redirect stderr to enable it.

use pathviz_app::Visualizer;
use pathviz_crossterm::CrosstermDriver;
use pathviz_demos::{config_from_args, init_logging};

fn main() {
    init_logging("off");

    let result = config_from_args().and_then(|config| {
        let visualizer = Visualizer::new(config)?;
        CrosstermDriver::new().run(visualizer)
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
