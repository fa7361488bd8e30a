//! Demo variants: what is drawn, where, and how input drives it.

use figures_engine::mesh::Mesh;
use figures_engine::paint::Color;
use figures_engine::render::ShaderSources;
use figures_engine::window::RuntimeConfig;
use glam::Vec2;
use winit::dpi::LogicalSize;

use crate::input_map::{InputMapper, ObjectKeys, Steps};
use crate::interaction::ScaleLimits;
use crate::{shaders, shapes};

/// Near-black, slightly red background shared by every variant.
pub const CLEAR_COLOR: Color = Color::rgb(0.05, 0.008, 0.004);

/// Initial window size in logical px.
pub const WINDOW_SIZE: (f64, f64) = (640.0, 480.0);

/// Full description of one demo program.
///
/// `meshes`, `bases` and `input.bindings` are indexed by object.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: &'static str,
    pub shaders: ShaderSources,
    pub meshes: Vec<Mesh>,
    /// Fixed NDC offset of each object.
    pub bases: Vec<Vec2>,
    /// Extra uniform scale applied to every mesh.
    pub mesh_scale: f32,
    pub clear: Color,
    pub input: InputMapper,
}

impl DemoConfig {
    /// Colored decagon and house, two key sets, drag and clamped scroll.
    pub fn colored_pair() -> Self {
        Self {
            title: "figures",
            shaders: shaders::COLORED,
            meshes: vec![shapes::decagon_colored(), shapes::house_colored()],
            bases: vec![Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0)],
            mesh_scale: 1.0,
            clear: CLEAR_COLOR,
            input: InputMapper {
                bindings: vec![ObjectKeys::ARROWS, ObjectKeys::WASD],
                steps: Steps::default(),
                drag: true,
                scroll: true,
                scale_limits: Some(ScaleLimits::DEFAULT),
            },
        }
    }

    /// Solid decagon and house at half size. Both objects rotate and scale
    /// together on `R`, `,` and `.`; no scroll.
    pub fn solid_pair() -> Self {
        Self {
            title: "figures (solid)",
            shaders: shaders::SOLID,
            meshes: vec![shapes::decagon(), shapes::house()],
            bases: vec![Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0)],
            mesh_scale: 0.5,
            clear: CLEAR_COLOR,
            input: InputMapper {
                bindings: vec![
                    ObjectKeys::ARROWS,
                    ObjectKeys::WASD.sharing_transform_keys(ObjectKeys::ARROWS),
                ],
                steps: Steps::default(),
                drag: true,
                scroll: false,
                scale_limits: None,
            },
        }
    }

    /// A centered letter "N" moved with the arrow keys.
    pub fn single() -> Self {
        Self {
            title: "figures (single)",
            shaders: shaders::SOLID,
            meshes: vec![shapes::letter_n()],
            bases: vec![Vec2::ZERO],
            mesh_scale: 1.0,
            clear: CLEAR_COLOR,
            input: InputMapper {
                bindings: vec![ObjectKeys::ARROWS.translate_only()],
                steps: Steps {
                    translate: 0.015,
                    ..Steps::default()
                },
                drag: false,
                scroll: false,
                scale_limits: None,
            },
        }
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.to_string(),
            initial_size: LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
        }
    }
}
