//! Interactive shape demos on top of `figures-engine`.
//!
//! Each binary picks a [`DemoConfig`] and hands it to [`run`].

pub mod app;
pub mod input_map;
pub mod interaction;
pub mod scene;
pub mod shaders;
pub mod shapes;

pub use app::{DemoApp, LoopState};
pub use scene::DemoConfig;

use figures_engine::device::GpuInit;
use figures_engine::window::Runtime;

/// Opens the demo window and blocks until it closes.
///
/// Returns the fatal error that ended the loop, if any.
pub fn run(config: DemoConfig) -> anyhow::Result<()> {
    log::info!("starting '{}' with {} object(s)", config.title, config.object_count());

    // Vertex colors go to the screen as authored.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(config.runtime_config(), gpu_init, DemoApp::new(config))
}
