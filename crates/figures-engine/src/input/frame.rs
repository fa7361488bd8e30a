use super::types::InputEvent;

/// Input that arrived since the previous frame, in arrival order.
///
/// `InputState` answers "what is held now"; `InputFrame` answers "what
/// happened this frame". The runtime clears it after every `on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    pub(super) fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
