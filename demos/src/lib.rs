//! Start-up helpers shared by the pathviz binaries.

use std::error::Error;
use std::fs;
use std::path::Path;

use pathviz_app::VisualizerConfig;
use tracing_subscriber::EnvFilter;

/// Install a stderr log subscriber. `RUST_LOG` overrides `default_filter`.
///
/// `log` records from the pathviz crates reach the subscriber through its
/// `log` bridge.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read a JSON [`VisualizerConfig`]. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<VisualizerConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Config from the first command-line argument, or the defaults.
pub fn config_from_args() -> Result<VisualizerConfig, Box<dyn Error>> {
    match std::env::args_os().nth(1) {
        Some(path) => {
            let config = load_config(Path::new(&path))?;
            log::info!("loaded config from {}", Path::new(&path).display());
            Ok(config)
        }
        None => Ok(VisualizerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_file() {
        let path = std::env::temp_dir().join(format!("pathviz-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "grid_size": 20, "astar_delay_ms": 0 }"#).unwrap();
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.grid_size, 20);
        assert_eq!(config.astar_delay_ms, 0);
        assert_eq!(config.canvas_width, VisualizerConfig::default().canvas_width);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/pathviz.json")).is_err());
    }
}
