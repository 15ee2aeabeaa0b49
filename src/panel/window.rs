use crate::log_debug;

/// The window mutations the orchestrator is allowed to perform. Supplied by
/// the embedding rendering engine; the orchestration thread is the only
/// caller.
pub trait PanelWindow {
    fn resize(&mut self, width: u32, height: u32);
    fn set_title(&mut self, title: &str);
    /// Request input focus.
    fn activate(&mut self);
    /// Make the window visible and non-minimized.
    fn show_normal(&mut self);
    fn hide(&mut self);
    /// Platform hook for the always-on-top flag.
    fn set_stay_on_top(&mut self, on: bool);
}

/// Window stand-in used when no rendering engine is attached. Tracks the
/// state a real window would carry and logs every transition.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    width: u32,
    height: u32,
    title: String,
    visible: bool,
    stay_on_top: bool,
}

impl HeadlessWindow {
    pub fn new(width: u32, height: u32, title: &str) -> Self {
        Self {
            width,
            height,
            title: title.to_string(),
            visible: false,
            stay_on_top: false,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl PanelWindow for HeadlessWindow {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        log_debug(&format!("Window resized to {width}x{height}"));
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        log_debug(&format!("Window retitled to {title}"));
    }

    fn activate(&mut self) {
        log_debug("Window activated");
    }

    fn show_normal(&mut self) {
        self.visible = true;
        log_debug("Window shown");
    }

    fn hide(&mut self) {
        self.visible = false;
        log_debug("Window hidden");
    }

    fn set_stay_on_top(&mut self, on: bool) {
        self.stay_on_top = on;
    }
}
