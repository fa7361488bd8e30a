use std::sync::Once;

use crate::error::BuildStep;

/// Filter used when neither the config nor `RUST_LOG` sets one.
/// wgpu and naga are chatty at info.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "warn",
/// "figures_engine=debug,wgpu_core=warn") and takes precedence over `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Configured filter, else `RUST_LOG`, else the default. Blank values count as unset.
fn resolve_filter(configured: Option<String>, env: Option<String>) -> String {
    let usable = |f: &String| !f.trim().is_empty();
    configured
        .filter(usable)
        .or_else(|| env.filter(usable))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.filter, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        // try_init: a test harness may already own the global logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized with \"{filter}\"");
        }
    });
}

/// Logs a shader build diagnostic under the step it belongs to.
pub fn log_build_failure(step: BuildStep, label: &str, diagnostic: &str) {
    match step {
        BuildStep::ShaderCompile => {
            log::error!("shader compilation unsuccessful [{label}]\n{diagnostic}");
        }
        BuildStep::ProgramLink => {
            log::error!("shader link unsuccessful [{label}]\n{diagnostic}");
        }
    }
}
