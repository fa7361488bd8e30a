//! Turns held keys, drag motion and wheel events into `SceneState` updates.

use figures_engine::coords::Viewport;
use figures_engine::input::{
    InputEvent, InputState, Key, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
use glam::Vec2;

use crate::interaction::{ScaleLimits, SceneState};

/// Keys bound to one object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ObjectKeys {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub rotate: Option<Key>,
    pub shrink: Option<Key>,
    pub grow: Option<Key>,
}

impl ObjectKeys {
    /// Arrows, `R` to rotate, `,` / `.` to scale.
    pub const ARROWS: Self = Self {
        up: Key::ArrowUp,
        down: Key::ArrowDown,
        left: Key::ArrowLeft,
        right: Key::ArrowRight,
        rotate: Some(Key::R),
        shrink: Some(Key::Comma),
        grow: Some(Key::Period),
    };

    /// `W A S D`, `T` to rotate, `[` / `]` to scale.
    pub const WASD: Self = Self {
        up: Key::W,
        down: Key::S,
        left: Key::A,
        right: Key::D,
        rotate: Some(Key::T),
        shrink: Some(Key::BracketLeft),
        grow: Some(Key::BracketRight),
    };

    /// Translation keys only.
    pub const fn translate_only(self) -> Self {
        Self {
            rotate: None,
            shrink: None,
            grow: None,
            ..self
        }
    }

    /// Same translation keys, rotate/scale keys taken from `other`.
    pub const fn sharing_transform_keys(self, other: Self) -> Self {
        Self {
            rotate: other.rotate,
            shrink: other.shrink,
            grow: other.grow,
            ..self
        }
    }
}

/// Per-frame increments applied while a key is held.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Steps {
    pub translate: f32,
    pub rotate: f32,
    pub scale: f32,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            translate: 0.01,
            rotate: 0.01,
            scale: 0.01,
        }
    }
}

/// Scale offset change per wheel notch.
pub const SCROLL_STEP: f32 = 0.05;

/// Input-to-state mapping for one demo variant.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMapper {
    /// Bindings by object index.
    pub bindings: Vec<ObjectKeys>,
    pub steps: Steps,
    pub drag: bool,
    pub scroll: bool,
    /// When set, every scale change is clamped to these bounds.
    pub scale_limits: Option<ScaleLimits>,
}

impl InputMapper {
    /// Applies held keys once. Called every frame; holding a key for N frames
    /// applies its step N times.
    pub fn apply_keys(&self, input: &InputState, scene: &mut SceneState) {
        let steps = self.steps;
        let held = |key: Option<Key>| key.is_some_and(|k| input.key_down(k));

        for (keys, obj) in self.bindings.iter().zip(scene.objects.iter_mut()) {
            if held(Some(keys.up)) {
                obj.translation.y += steps.translate;
            }
            if held(Some(keys.down)) {
                obj.translation.y -= steps.translate;
            }
            if held(Some(keys.left)) {
                obj.translation.x -= steps.translate;
            }
            if held(Some(keys.right)) {
                obj.translation.x += steps.translate;
            }

            if held(keys.rotate) {
                obj.rotation += steps.rotate;
            }

            if held(keys.shrink) {
                obj.scale_offset -= steps.scale;
            }
            if held(keys.grow) {
                obj.scale_offset += steps.scale;
            }
            if let Some(limits) = self.scale_limits {
                obj.scale_offset = limits.apply(obj.scale_offset);
            }
        }
    }

    /// Feeds one pointer, wheel or focus event. Other events are ignored.
    pub fn apply_event(&self, ev: &InputEvent, viewport: Viewport, scene: &mut SceneState) {
        match *ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
            }) if self.drag => match state {
                MouseButtonState::Pressed => self.begin_drag(scene, Vec2::new(x, y), viewport),
                MouseButtonState::Released => self.end_drag(scene),
            },

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) if self.drag => {
                self.drag_to(scene, Vec2::new(x, y), viewport);
            }

            InputEvent::MouseWheel(delta) if self.scroll => self.scroll(scene, delta.vertical()),

            // No release arrives for a button held while focus is lost.
            InputEvent::Focused(false) if self.drag => self.end_drag(scene),

            _ => {}
        }
    }

    /// Starts a drag. The left half of the window selects object 0, the right half object 1.
    pub fn begin_drag(&self, scene: &mut SceneState, at: Vec2, viewport: Viewport) {
        let target = drag_target(at.x, viewport.width);
        scene.drag.start(target, at);
        log::debug!("drag start: object {target} at ({}, {})", at.x, at.y);
    }

    /// Moves the dragged object by the cursor delta converted to NDC.
    pub fn drag_to(&self, scene: &mut SceneState, at: Vec2, viewport: Viewport) {
        let Some((target, delta)) = scene.drag.advance(at) else {
            return;
        };
        if let Some(obj) = scene.objects.get_mut(target) {
            obj.translation += viewport.pixel_delta_to_ndc(delta.x, delta.y);
        }
    }

    pub fn end_drag(&self, scene: &mut SceneState) {
        if let Some(drag) = scene.drag.stop() {
            log::debug!("drag stop: object {}", drag.target);
        }
    }

    /// Scales every object by one wheel step in the direction of `vertical`.
    pub fn scroll(&self, scene: &mut SceneState, vertical: f32) {
        if vertical == 0.0 || !vertical.is_finite() {
            return;
        }
        let step = SCROLL_STEP.copysign(vertical);
        for obj in &mut scene.objects {
            obj.scale_offset += step;
            if let Some(limits) = self.scale_limits {
                obj.scale_offset = limits.apply(obj.scale_offset);
            }
        }
    }
}

/// Object index for a press at `x` in a window `width` logical px wide.
#[inline]
pub fn drag_target(x: f32, width: f32) -> usize {
    if x < width / 2.0 { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figures_engine::input::{InputFrame, KeyState, MouseWheelDelta};

    const VIEW: Viewport = Viewport::new(640.0, 480.0);

    fn mapper() -> InputMapper {
        InputMapper {
            bindings: vec![ObjectKeys::ARROWS, ObjectKeys::WASD],
            steps: Steps::default(),
            drag: true,
            scroll: true,
            scale_limits: Some(ScaleLimits::DEFAULT),
        }
    }

    fn holding(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            input.apply_event(
                &mut frame,
                InputEvent::Key { key, state: KeyState::Pressed, repeat: false },
            );
        }
        input
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn ten_frames_of_up_moves_object_zero() {
        let m = mapper();
        let mut scene = SceneState::new(2);
        let input = holding(&[Key::ArrowUp]);

        for _ in 0..10 {
            m.apply_keys(&input, &mut scene);
        }

        let obj = scene.objects[0];
        assert!(approx(obj.translation.x, 0.0));
        assert!(approx(obj.translation.y, 0.10));
        assert_eq!(obj.rotation, 0.0);
        assert_eq!(obj.scale_factor(), 1.0);
        assert_eq!(scene.objects[1], Default::default());
    }

    #[test]
    fn second_object_uses_its_own_keys() {
        let m = mapper();
        let mut scene = SceneState::new(2);
        let input = holding(&[Key::A, Key::T, Key::BracketRight]);

        for _ in 0..3 {
            m.apply_keys(&input, &mut scene);
        }

        let obj = scene.objects[1];
        assert!(approx(obj.translation.x, -0.03));
        assert!(approx(obj.rotation, 0.03));
        assert!(approx(obj.scale_offset, 0.03));
        assert_eq!(scene.objects[0], Default::default());
    }

    #[test]
    fn opposite_keys_cancel() {
        let m = mapper();
        let mut scene = SceneState::new(2);
        m.apply_keys(&holding(&[Key::ArrowLeft, Key::ArrowRight]), &mut scene);
        assert_eq!(scene.objects[0].translation, Vec2::ZERO);
    }

    #[test]
    fn keyboard_scaling_respects_limits() {
        let m = mapper();
        let mut scene = SceneState::new(2);
        let input = holding(&[Key::Comma]);
        for _ in 0..200 {
            m.apply_keys(&input, &mut scene);
        }
        assert_eq!(scene.objects[0].scale_offset, -0.5);
    }

    #[test]
    fn unclamped_variant_lets_scale_go_negative() {
        let m = InputMapper { scale_limits: None, ..mapper() };
        let mut scene = SceneState::new(2);
        let input = holding(&[Key::Comma]);
        for _ in 0..200 {
            m.apply_keys(&input, &mut scene);
        }
        assert!(scene.objects[0].scale_offset < -1.9);
    }

    #[test]
    fn one_scroll_up_scales_both_objects() {
        let m = mapper();
        let mut scene = SceneState::new(2);
        m.apply_event(&InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }), VIEW, &mut scene);

        for obj in &scene.objects {
            assert!(approx(obj.scale_offset, 0.05));
            assert!(approx(obj.scale_factor(), 1.05));
        }
    }

    #[test]
    fn scroll_uses_sign_only_and_ignores_zero() {
        let m = mapper();
        let mut scene = SceneState::new(2);
        m.scroll(&mut scene, -37.5);
        assert!(approx(scene.objects[0].scale_offset, -0.05));
        m.scroll(&mut scene, 0.0);
        assert!(approx(scene.objects[1].scale_offset, -0.05));
    }

    #[test]
    fn scroll_clamp_is_idempotent_at_bounds() {
        let m = mapper();
        let mut scene = SceneState::new(2);
        for _ in 0..100 {
            m.scroll(&mut scene, 1.0);
        }
        assert_eq!(scene.objects[0].scale_offset, 2.0);
        m.scroll(&mut scene, 1.0);
        assert_eq!(scene.objects[0].scale_offset, 2.0);

        for _ in 0..100 {
            m.scroll(&mut scene, -1.0);
        }
        assert_eq!(scene.objects[1].scale_offset, -0.5);
        m.scroll(&mut scene, -1.0);
        assert_eq!(scene.objects[1].scale_offset, -0.5);
    }

    #[test]
    fn scroll_disabled_variant_ignores_wheel() {
        let m = InputMapper { scroll: false, ..mapper() };
        let mut scene = SceneState::new(2);
        m.apply_event(&InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 4.0 }), VIEW, &mut scene);
        assert_eq!(scene.objects[0].scale_offset, 0.0);
    }

    #[test]
    fn drag_target_depends_on_press_half() {
        assert_eq!(drag_target(100.0, 640.0), 0);
        assert_eq!(drag_target(500.0, 640.0), 1);
        assert_eq!(drag_target(320.0, 640.0), 1);
        assert_eq!(drag_target(319.9, 640.0), 0);
    }

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    }

    fn release(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn drag_moves_the_pressed_object_in_ndc() {
        let m = mapper();
        let mut scene = SceneState::new(2);

        m.apply_event(&press(500.0, 240.0), VIEW, &mut scene);
        assert_eq!(scene.drag.target(), Some(1));

        // 64 px right, 48 px down
        m.apply_event(&moved(564.0, 288.0), VIEW, &mut scene);
        let t = scene.objects[1].translation;
        assert!(approx(t.x, 0.2));
        assert!(approx(t.y, -0.2));
        assert_eq!(scene.objects[0].translation, Vec2::ZERO);

        m.apply_event(&release(564.0, 288.0), VIEW, &mut scene);
        assert_eq!(scene.drag.target(), None);

        // moves after release do nothing
        m.apply_event(&moved(0.0, 0.0), VIEW, &mut scene);
        assert!(approx(scene.objects[1].translation.x, 0.2));
    }

    #[test]
    fn drag_target_is_fixed_at_press() {
        let m = mapper();
        let mut scene = SceneState::new(2);

        m.apply_event(&press(100.0, 100.0), VIEW, &mut scene);
        // crossing the midline keeps dragging object 0
        m.apply_event(&moved(420.0, 100.0), VIEW, &mut scene);
        assert_eq!(scene.drag.target(), Some(0));
        assert!(approx(scene.objects[0].translation.x, 1.0));
        assert_eq!(scene.objects[1].translation, Vec2::ZERO);
    }

    #[test]
    fn losing_focus_ends_the_drag() {
        let m = mapper();
        let mut scene = SceneState::new(2);

        m.apply_event(&press(100.0, 100.0), VIEW, &mut scene);
        m.apply_event(&InputEvent::Focused(false), VIEW, &mut scene);
        assert!(!scene.drag.is_active());

        m.apply_event(&InputEvent::Focused(true), VIEW, &mut scene);
        m.apply_event(&moved(420.0, 100.0), VIEW, &mut scene);
        assert_eq!(scene.objects[0].translation, Vec2::ZERO);
    }

    #[test]
    fn drag_on_missing_object_is_ignored() {
        let m = InputMapper { bindings: vec![ObjectKeys::ARROWS], ..mapper() };
        let mut scene = SceneState::new(1);

        m.apply_event(&press(600.0, 10.0), VIEW, &mut scene);
        m.apply_event(&moved(610.0, 10.0), VIEW, &mut scene);
        assert_eq!(scene.objects[0].translation, Vec2::ZERO);
    }

    #[test]
    fn drag_disabled_ignores_pointer() {
        let m = InputMapper { drag: false, ..mapper() };
        let mut scene = SceneState::new(2);
        m.apply_event(&press(100.0, 100.0), VIEW, &mut scene);
        assert!(!scene.drag.is_active());
    }

    #[test]
    fn shared_transform_keys_drive_both_objects() {
        let second = ObjectKeys::WASD.sharing_transform_keys(ObjectKeys::ARROWS);
        let m = InputMapper { bindings: vec![ObjectKeys::ARROWS, second], ..mapper() };
        let mut scene = SceneState::new(2);

        m.apply_keys(&holding(&[Key::R, Key::Period]), &mut scene);
        assert_eq!(scene.objects[0].rotation, scene.objects[1].rotation);
        assert_eq!(scene.objects[0].scale_offset, scene.objects[1].scale_offset);
        assert!(approx(scene.objects[1].rotation, 0.01));
    }
}
