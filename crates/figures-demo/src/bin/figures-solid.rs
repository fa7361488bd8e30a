use figures_demo::DemoConfig;
use figures_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = figures_demo::run(DemoConfig::solid_pair()) {
        eprintln!("figures: {e:#}");
        std::process::exit(1);
    }
}
