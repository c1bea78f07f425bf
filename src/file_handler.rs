use std::future::Future;
use std::sync::Arc;

use eframe::egui;
use parking_lot::Mutex;

/// Raw contents of a file the user picked or dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff"];

/// A file delivered by the picker, tagged with the request that produced it.
#[derive(Debug)]
struct Delivery {
    generation: u64,
    file: PickedFile,
}

/// Collects image files from the file picker and from drag-and-drop.
///
/// Picking is asynchronous. Every request gets a new generation number and only
/// the file from the newest request is handed out; slower, older picks are dropped.
pub struct FileHandler {
    inbox: Arc<Mutex<Option<Delivery>>>,
    generation: u64,
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            inbox: Arc::new(Mutex::new(None)),
            generation: 0,
        }
    }

    /// Open the platform file picker. The chosen file shows up in a later `poll`.
    pub fn open_dialog(&mut self, ctx: &egui::Context) {
        let generation = self.next_generation();
        let inbox = Arc::clone(&self.inbox);
        let ctx = ctx.clone();

        execute(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("Image", &IMAGE_EXTENSIONS)
                .pick_file()
                .await
            else {
                log::debug!("File picker closed without a selection");
                return;
            };

            let file = PickedFile {
                name: handle.file_name(),
                bytes: handle.read().await,
            };
            log::info!("Picked {} ({} bytes)", file.name, file.bytes.len());
            deliver(&inbox, generation, file);
            ctx.request_repaint();
        });
    }

    /// Hand over a file that arrived outside the picker, superseding pending picks.
    pub fn submit(&mut self, file: PickedFile) {
        let generation = self.next_generation();
        deliver(&self.inbox, generation, file);
    }

    /// Take the newest delivered file, if any. Stale deliveries are discarded.
    pub fn take(&mut self) -> Option<PickedFile> {
        let delivery = self.inbox.lock().take()?;
        if delivery.generation < self.generation {
            log::debug!(
                "Discarding stale file {} (request {} superseded by {})",
                delivery.file.name,
                delivery.generation,
                self.generation
            );
            return None;
        }
        Some(delivery.file)
    }

    /// Collect dropped files from this frame, then return whatever is ready.
    pub fn poll(&mut self, ctx: &egui::Context) -> Option<PickedFile> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.iter().rev().find_map(read_dropped_file) {
            self.submit(file);
        }
        self.take()
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop image to load:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(20.0),
            Color32::WHITE,
        );
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

fn deliver(inbox: &Mutex<Option<Delivery>>, generation: u64, file: PickedFile) {
    let mut slot = inbox.lock();
    let newer_waiting = slot.as_ref().is_some_and(|d| d.generation > generation);
    if newer_waiting {
        log::debug!("Ignoring {}: a newer file is already waiting", file.name);
        return;
    }
    *slot = Some(Delivery { generation, file });
}

/// Check if a dropped file is an image based on MIME type or extension
pub fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    let name = file
        .path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.name.clone());
    has_image_extension(&name)
}

pub fn has_image_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        let ext = ext.to_lowercase();
        IMAGE_EXTENSIONS.contains(&ext.as_str())
    })
}

fn read_dropped_file(file: &egui::DroppedFile) -> Option<PickedFile> {
    let name = if let Some(path) = &file.path {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    };

    if !is_image_file(file) {
        log::warn!("Dropped file is not a supported type: {}", name);
        return None;
    }

    if let Some(bytes) = &file.bytes {
        log::info!("Processing dropped image from memory: {} ({} bytes)", name, bytes.len());
        return Some(PickedFile {
            name,
            bytes: bytes.to_vec(),
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        log::info!("Processing dropped image from path: {}", path.display());
        return match std::fs::read(path) {
            Ok(bytes) => Some(PickedFile { name, bytes }),
            Err(err) => {
                log::error!("Failed to read image file: {}: {}", path.display(), err);
                None
            }
        };
    }

    log::warn!("Dropped file has no accessible data: {}", name);
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn execute<F: Future<Output = ()> + Send + 'static>(f: F) {
    std::thread::spawn(move || futures::executor::block_on(f));
}

#[cfg(target_arch = "wasm32")]
fn execute<F: Future<Output = ()> + 'static>(f: F) {
    wasm_bindgen_futures::spawn_local(f);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> PickedFile {
        PickedFile {
            name: name.to_owned(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_extension_check() {
        assert!(has_image_extension("holiday.JPG"));
        assert!(has_image_extension("a.b.webp"));
        assert!(!has_image_extension("notes.txt"));
        assert!(!has_image_extension("png"));
    }

    #[test]
    fn test_submitted_file_is_taken_once() {
        let mut handler = FileHandler::new();
        handler.submit(file("one.png"));
        assert_eq!(handler.take().map(|f| f.name), Some("one.png".to_owned()));
        assert!(handler.take().is_none());
    }

    #[test]
    fn test_stale_delivery_is_discarded() {
        let mut handler = FileHandler::new();
        let slow_request = handler.next_generation();
        let _newer_request = handler.next_generation();

        // The older request finishes first and must not be applied.
        deliver(&handler.inbox, slow_request, file("old.png"));
        assert!(handler.take().is_none());
    }

    #[test]
    fn test_older_delivery_does_not_replace_newer() {
        let mut handler = FileHandler::new();
        let first = handler.next_generation();
        handler.submit(file("dropped.png"));
        deliver(&handler.inbox, first, file("picked.png"));
        assert_eq!(handler.take().map(|f| f.name), Some("dropped.png".to_owned()));
    }

    #[test]
    fn test_dropped_file_mime_check() {
        let dropped = egui::DroppedFile {
            name: "scan".to_owned(),
            mime: "image/png".to_owned(),
            ..Default::default()
        };
        assert!(is_image_file(&dropped));

        let text = egui::DroppedFile {
            name: "readme.md".to_owned(),
            ..Default::default()
        };
        assert!(!is_image_file(&text));
    }
}
