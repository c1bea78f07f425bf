use super::Gesture;

/// Pointer state of the drawing surface.
///
/// ```text
///   ┌──────┐  pointer down   ┌──────────┐
///   │ Idle ├────────────────►│ Drawing  │
///   │      │◄────────────────┤ (gesture)│
///   └──────┘   pointer up    └──────────┘
/// ```
#[derive(Debug, Clone, Default)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A drag is in progress
    Drawing { gesture: Gesture },
}

impl EditorState {
    /// Returns true if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true while the pointer is held down on the surface
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            EditorState::Drawing { gesture } => Some(gesture),
            EditorState::Idle => None,
        }
    }

    pub fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        match self {
            EditorState::Drawing { gesture } => Some(gesture),
            EditorState::Idle => None,
        }
    }

    /// Leave the drawing state, handing back the finished gesture if there was one.
    pub fn finish(&mut self) -> Option<Gesture> {
        match std::mem::take(self) {
            EditorState::Drawing { gesture } => Some(gesture),
            EditorState::Idle => None,
        }
    }
}
