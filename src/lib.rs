#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod editor;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod filter;
pub mod geometry;
pub mod input;
pub mod loader;
pub mod panels;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod texture_manager;
pub mod tools;
pub mod upload;
pub mod util;

pub use app::SketchApp;
pub use editor::Editor;
pub use error::{SketchError, SketchResult};
pub use file_handler::PickedFile;
pub use filter::Filter;
pub use input::InputEvent;
pub use loader::SourceImage;
pub use state::{EditorSettings, EditorState, Gesture};
pub use stroke::{BrushWidth, PaletteColor, StrokeStyle};
pub use surface::{CANVAS_HEIGHT, CANVAS_WIDTH, Snapshot, Surface};
pub use tools::{Tool, ToolKind, ToolType};
