mod editor_state;
mod gesture;
mod settings;

pub use editor_state::EditorState;
pub use gesture::Gesture;
pub use settings::EditorSettings;
