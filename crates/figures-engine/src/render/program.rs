use std::collections::BTreeSet;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::error::{BuildStep, EngineError};
use crate::logging::log_build_failure;

/// Entry point the vertex source must define.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Entry point the fragment source must define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Fixed WGSL sources for one program.
///
/// The vertex source must declare the object transform as a uniform at
/// `@group(0) @binding(0)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderSources {
    pub label: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
}

/// A linked vertex + fragment pair, ready for pipeline creation.
#[derive(Debug)]
pub struct ShaderProgram {
    label: &'static str,
    vertex: wgpu::ShaderModule,
    fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Compiles both stages, links them and creates the GPU modules.
    ///
    /// Failures are logged under their build step and returned; nothing is
    /// created on the device unless both steps succeed.
    pub fn build(device: &wgpu::Device, sources: &ShaderSources) -> Result<Self, EngineError> {
        Self::check(sources).inspect_err(|err| {
            if let EngineError::ShaderBuild { step, label, log } = err {
                log_build_failure(*step, label, log);
            }
        })?;

        let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} vertex", sources.label)),
            source: wgpu::ShaderSource::Wgsl(sources.vertex.into()),
        });
        let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} fragment", sources.label)),
            source: wgpu::ShaderSource::Wgsl(sources.fragment.into()),
        });

        log::info!("shader program '{}' built", sources.label);

        Ok(Self {
            label: sources.label,
            vertex,
            fragment,
        })
    }

    /// Runs the compile and link checks without touching the GPU.
    pub fn check(sources: &ShaderSources) -> Result<(), EngineError> {
        let vertex = compile_stage(sources.label, "vertex", sources.vertex)?;
        let fragment = compile_stage(sources.label, "fragment", sources.fragment)?;
        link(sources.label, &vertex, &fragment)
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn vertex_module(&self) -> &wgpu::ShaderModule {
        &self.vertex
    }

    #[inline]
    pub fn fragment_module(&self) -> &wgpu::ShaderModule {
        &self.fragment
    }
}

fn compile_stage(label: &str, stage: &str, source: &str) -> Result<naga::Module, EngineError> {
    let stage_label = format!("{label} {stage}");

    let module = naga::front::wgsl::parse_str(source).map_err(|e| {
        EngineError::shader_build(BuildStep::ShaderCompile, &stage_label, e.emit_to_string(source))
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| {
            EngineError::shader_build(BuildStep::ShaderCompile, &stage_label, e.emit_to_string(source))
        })?;

    Ok(module)
}

fn link(label: &str, vertex: &naga::Module, fragment: &naga::Module) -> Result<(), EngineError> {
    let link_err = |msg: String| EngineError::shader_build(BuildStep::ProgramLink, label, msg);

    let vs = vertex
        .entry_points
        .iter()
        .find(|ep| ep.stage == naga::ShaderStage::Vertex && ep.name == VERTEX_ENTRY)
        .ok_or_else(|| link_err(format!("vertex stage has no @vertex fn {VERTEX_ENTRY}")))?;

    let fs = fragment
        .entry_points
        .iter()
        .find(|ep| ep.stage == naga::ShaderStage::Fragment && ep.name == FRAGMENT_ENTRY)
        .ok_or_else(|| link_err(format!("fragment stage has no @fragment fn {FRAGMENT_ENTRY}")))?;

    let has_transform = vertex.global_variables.iter().any(|(_, var)| {
        var.space == naga::AddressSpace::Uniform
            && var.binding == Some(naga::ResourceBinding { group: 0, binding: 0 })
    });
    if !has_transform {
        return Err(link_err(
            "vertex stage declares no uniform at @group(0) @binding(0) for the transform".into(),
        ));
    }

    let written: BTreeSet<u32> = vs
        .function
        .result
        .as_ref()
        .map(|r| locations(vertex, r.ty, r.binding.as_ref()))
        .unwrap_or_default();

    let read: BTreeSet<u32> = fs
        .function
        .arguments
        .iter()
        .flat_map(|arg| locations(fragment, arg.ty, arg.binding.as_ref()))
        .collect();

    if let Some(missing) = read.difference(&written).next() {
        return Err(link_err(format!(
            "fragment input @location({missing}) is not written by the vertex stage"
        )));
    }

    Ok(())
}

/// User-defined IO locations carried by a value (directly or as struct members).
fn locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
) -> BTreeSet<u32> {
    match binding {
        Some(naga::Binding::Location { location, .. }) => BTreeSet::from([*location]),
        Some(naga::Binding::BuiltIn(_)) => BTreeSet::new(),
        None => match &module.types[ty].inner {
            naga::TypeInner::Struct { members, .. } => members
                .iter()
                .filter_map(|m| match &m.binding {
                    Some(naga::Binding::Location { location, .. }) => Some(*location),
                    _ => None,
                })
                .collect(),
            _ => BTreeSet::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = r#"
        struct Transform { matrix: mat4x4<f32> };
        @group(0) @binding(0) var<uniform> transform: Transform;

        struct VsOut {
            @builtin(position) clip: vec4<f32>,
            @location(0) color: vec3<f32>,
        };

        @vertex
        fn vs_main(@location(0) pos: vec3<f32>, @location(1) color: vec3<f32>) -> VsOut {
            var out: VsOut;
            out.clip = transform.matrix * vec4<f32>(pos, 1.0);
            out.color = color;
            return out;
        }
    "#;

    const FS: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    "#;

    fn sources(vertex: &'static str, fragment: &'static str) -> ShaderSources {
        ShaderSources { label: "test", vertex, fragment }
    }

    #[test]
    fn matching_pair_links() {
        assert!(ShaderProgram::check(&sources(VS, FS)).is_ok());
    }

    #[test]
    fn syntax_error_is_a_compile_failure_with_diagnostic() {
        let err = ShaderProgram::check(&sources(VS, "@fragment fn fs_main( -> {")).unwrap_err();
        assert_eq!(err.build_step(), Some(BuildStep::ShaderCompile));
        let EngineError::ShaderBuild { label, log, .. } = err else { unreachable!() };
        assert_eq!(label, "test fragment");
        assert!(!log.is_empty());
    }

    #[test]
    fn type_error_is_a_compile_failure() {
        let bad = r#"
            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return 1.0;
            }
        "#;
        let err = ShaderProgram::check(&sources(VS, bad)).unwrap_err();
        assert_eq!(err.build_step(), Some(BuildStep::ShaderCompile));
    }

    #[test]
    fn missing_entry_point_is_a_link_failure() {
        let renamed = r#"
            @fragment
            fn main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(color, 1.0);
            }
        "#;
        let err = ShaderProgram::check(&sources(VS, renamed)).unwrap_err();
        assert_eq!(err.build_step(), Some(BuildStep::ProgramLink));
        assert!(err.to_string().contains(FRAGMENT_ENTRY));
    }

    #[test]
    fn unwritten_varying_is_a_link_failure() {
        let reads_uv = r#"
            @fragment
            fn fs_main(@location(0) color: vec3<f32>, @location(3) uv: vec2<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(color * uv.x, 1.0);
            }
        "#;
        let err = ShaderProgram::check(&sources(VS, reads_uv)).unwrap_err();
        assert_eq!(err.build_step(), Some(BuildStep::ProgramLink));
        assert!(err.to_string().contains("@location(3)"));
    }

    #[test]
    fn missing_transform_uniform_is_a_link_failure() {
        let no_uniform = r#"
            @vertex
            fn vs_main(@location(0) pos: vec3<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(pos, 1.0);
            }
        "#;
        let solid = r#"
            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec4<f32>(1.0, 0.6, 0.1, 1.0);
            }
        "#;
        let err = ShaderProgram::check(&sources(no_uniform, solid)).unwrap_err();
        assert_eq!(err.build_step(), Some(BuildStep::ProgramLink));
    }
}
