//! Windowed visualizer using winit + softbuffer.
//!
//! Run: cargo run --bin pathviz [config.json]

use pathviz_app::Visualizer;
use pathviz_demos::{config_from_args, init_logging};
use pathviz_winit::{WinitConfig, WinitDriver};

fn main() {
    init_logging("info");

    let result = config_from_args().and_then(|config| {
        let visualizer = Visualizer::new(config)?;
        WinitDriver::new(WinitConfig::default()).run(visualizer)
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
