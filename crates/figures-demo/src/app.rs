use figures_engine::coords::Viewport;
use figures_engine::core::{App, AppControl, FrameCtx};
use figures_engine::input::{InputFrame, InputState, Key};
use figures_engine::render::MeshRenderer;
use figures_engine::time::FrameTime;
use glam::Mat4;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::interaction::{compose_transform, SceneState};
use crate::scene::DemoConfig;

/// Frames taking longer than this (three refreshes at 60 Hz) are logged.
const SLOW_FRAME_SECS: f32 = 0.05;

/// True for a frame that stalled after the first one.
fn is_slow_frame(time: FrameTime) -> bool {
    time.frame_index > 0 && time.dt > SLOW_FRAME_SECS
}

/// Render loop state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// One demo program: owns the scene state and, once the device exists, the
/// mesh renderer.
pub struct DemoApp {
    config: DemoConfig,
    scene: SceneState,
    renderer: Option<MeshRenderer>,
    state: LoopState,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        let scene = SceneState::new(config.object_count());
        Self {
            config,
            scene,
            renderer: None,
            state: LoopState::Running,
        }
    }

    #[inline]
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Applies one frame of input: this frame's pointer/wheel events in
    /// arrival order, then held keys. Escape terminates the loop.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, viewport: Viewport) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        if input.key_down(Key::Escape) {
            log::info!("escape pressed");
            self.state = LoopState::Terminated;
            return self.state;
        }

        let mapper = &self.config.input;
        for ev in frame.events() {
            mapper.apply_event(ev, viewport, &mut self.scene);
        }
        mapper.apply_keys(input, &mut self.scene);

        self.state
    }

    /// Current transform of every object, in draw order.
    pub fn transforms(&self) -> Vec<Mat4> {
        self.config
            .bases
            .iter()
            .zip(&self.scene.objects)
            .map(|(&base, obj)| compose_transform(base, obj, self.config.mesh_scale))
            .collect()
    }
}

impl App for DemoApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        // The runtime stops the loop itself; only the state is tracked here.
        if matches!(event, WindowEvent::CloseRequested) {
            self.state = LoopState::Terminated;
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if is_slow_frame(ctx.time) {
            log::debug!("slow frame {}: {:.1} ms", ctx.time.frame_index, ctx.time.dt * 1000.0);
        }

        if self.update(ctx.input, ctx.input_frame, ctx.window.viewport()) == LoopState::Terminated {
            return AppControl::Exit;
        }

        if self.renderer.is_none() {
            match MeshRenderer::new(&ctx.render_ctx(), &self.config.shaders, &self.config.meshes) {
                Ok(renderer) => self.renderer = Some(renderer),
                Err(err) => {
                    self.state = LoopState::Terminated;
                    ctx.runtime.fail(err.context(format!("cannot set up the '{}' demo", self.config.title)));
                    return AppControl::Exit;
                }
            }
        }

        let Some(renderer) = &self.renderer else {
            return AppControl::Continue;
        };

        let transforms = self.transforms();
        let control = ctx.render(self.config.clear, |rctx, target| {
            renderer.draw(rctx, target, &transforms);
        });

        if control == AppControl::Exit {
            self.state = LoopState::Terminated;
        }
        control
    }

    fn on_exit(&mut self) {
        self.state = LoopState::Terminated;
        if let Some(renderer) = self.renderer.take() {
            renderer.release();
        }
        log::info!("'{}' closed", self.config.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figures_engine::input::{
        InputEvent, KeyState, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
    };
    use glam::{Vec2, Vec4};

    const VIEW: Viewport = Viewport::new(640.0, 480.0);

    fn press_key(input: &mut InputState, frame: &mut InputFrame, key: Key) {
        input.apply_event(frame, InputEvent::Key { key, state: KeyState::Pressed, repeat: false });
    }

    #[test]
    fn holding_up_for_ten_frames() {
        let mut app = DemoApp::new(DemoConfig::colored_pair());
        let mut input = InputState::default();
        let mut frame = InputFrame::default();
        press_key(&mut input, &mut frame, Key::ArrowUp);

        for _ in 0..10 {
            assert_eq!(app.update(&input, &frame, VIEW), LoopState::Running);
            frame.clear();
        }

        let obj = app.scene().objects[0];
        assert!((obj.translation - Vec2::new(0.0, 0.10)).length() < 1e-5);
        assert_eq!(obj.rotation, 0.0);
        assert_eq!(obj.scale_factor(), 1.0);

        // object 0 sits at its base plus the translation
        let origin = app.transforms()[0] * Vec4::W;
        assert!((origin - Vec4::new(-0.5, 0.10, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn escape_terminates_and_stops_updates() {
        let mut app = DemoApp::new(DemoConfig::single());
        let mut input = InputState::default();
        let mut frame = InputFrame::default();
        press_key(&mut input, &mut frame, Key::Escape);
        press_key(&mut input, &mut frame, Key::ArrowUp);

        assert_eq!(app.update(&input, &frame, VIEW), LoopState::Terminated);
        assert_eq!(app.update(&input, &frame, VIEW), LoopState::Terminated);
        assert_eq!(app.scene().objects[0].translation, Vec2::ZERO);
    }

    #[test]
    fn frame_events_feed_scroll_and_drag() {
        let mut app = DemoApp::new(DemoConfig::colored_pair());
        let mut input = InputState::default();
        let mut frame = InputFrame::default();

        input.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }));
        input.apply_event(
            &mut frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 100.0,
                y: 200.0,
            }),
        );
        app.update(&input, &frame, VIEW);

        assert_eq!(app.scene().drag.target(), Some(0));
        for obj in &app.scene().objects {
            assert!((obj.scale_factor() - 1.05).abs() < 1e-5);
        }
    }

    #[test]
    fn close_request_terminates() {
        let mut app = DemoApp::new(DemoConfig::solid_pair());
        let id = WindowId::from(0u64);
        assert_eq!(app.on_window_event(id, &WindowEvent::CloseRequested), AppControl::Continue);
        assert_eq!(app.state(), LoopState::Terminated);
    }

    #[test]
    fn exit_without_renderer_is_clean() {
        let mut app = DemoApp::new(DemoConfig::single());
        app.on_exit();
        assert_eq!(app.state(), LoopState::Terminated);
    }

    #[test]
    fn only_stalled_frames_after_the_first_are_slow() {
        assert!(!is_slow_frame(FrameTime { dt: 0.25, frame_index: 0 }));
        assert!(!is_slow_frame(FrameTime { dt: 1.0 / 60.0, frame_index: 5 }));
        assert!(is_slow_frame(FrameTime { dt: 0.25, frame_index: 5 }));
    }

    #[test]
    fn solid_pair_draws_at_half_size() {
        let app = DemoApp::new(DemoConfig::solid_pair());
        let t = app.transforms();
        assert_eq!(t.len(), 2);
        let rim = t[1] * Vec4::new(0.5, 0.0, 0.0, 1.0);
        assert!((rim - Vec4::new(0.75, 0.0, 0.0, 1.0)).length() < 1e-5);
    }
}
