//! Mutable per-object transform parameters and the drag state.

use glam::{Mat4, Vec2, Vec3};

/// Transform parameters of one rendered object.
///
/// `rotation` is in radians and never wrapped; `scale_offset` is added to 1.0.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ObjectTransformState {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale_offset: f32,
}

impl ObjectTransformState {
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        1.0 + self.scale_offset
    }
}

/// Inclusive bounds for `ObjectTransformState::scale_offset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleLimits {
    pub min: f32,
    pub max: f32,
}

impl ScaleLimits {
    /// Shrinks to half size at most, grows to triple size at most.
    pub const DEFAULT: Self = Self { min: -0.5, max: 2.0 };

    #[inline]
    pub fn apply(self, offset: f32) -> f32 {
        offset.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A drag in progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ActiveDrag {
    /// Index of the object being dragged, fixed at press time.
    pub target: usize,
    /// Last observed cursor position, logical px.
    pub last: Vec2,
}

/// Mouse drag state. A target exists only while a drag is active.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DragState {
    active: Option<ActiveDrag>,
}

impl DragState {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.active.map(|d| d.target)
    }

    pub(crate) fn start(&mut self, target: usize, at: Vec2) {
        self.active = Some(ActiveDrag { target, last: at });
    }

    /// Records the new cursor position and returns the delta since the last one.
    pub(crate) fn advance(&mut self, to: Vec2) -> Option<(usize, Vec2)> {
        let drag = self.active.as_mut()?;
        let delta = to - drag.last;
        drag.last = to;
        Some((drag.target, delta))
    }

    pub(crate) fn stop(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }
}

/// Everything the input mapper mutates and the renderer reads.
///
/// There is exactly one `ObjectTransformState` per rendered object for the
/// lifetime of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub objects: Vec<ObjectTransformState>,
    pub drag: DragState,
}

impl SceneState {
    pub fn new(object_count: usize) -> Self {
        Self {
            objects: vec![ObjectTransformState::default(); object_count],
            drag: DragState::default(),
        }
    }
}

/// Composes `translate(base) * translate(t) * rotate_z(r) * scale(s) * scale(mesh_scale)`.
///
/// Applied to a vertex, this scales first, then rotates, then translates.
pub fn compose_transform(base: Vec2, state: &ObjectTransformState, mesh_scale: f32) -> Mat4 {
    let s = state.scale_factor();
    Mat4::from_translation(base.extend(0.0))
        * Mat4::from_translation(state.translation.extend(0.0))
        * Mat4::from_rotation_z(state.rotation)
        * Mat4::from_scale(Vec3::new(s, s, 1.0))
        * Mat4::from_scale(Vec3::new(mesh_scale, mesh_scale, 1.0))
}
