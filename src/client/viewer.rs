//! Image overlay with wrap-around paging and a scroll-lock guard.

/// The page-level scroll surface the viewer pins while open. The rendering
/// engine supplies the real document body; tests supply a fake.
pub trait ScrollHost {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Jump to the given offset.
    fn scroll_to(&mut self, offset: f64);

    /// Fix the body in place: pinned positioning, pulled up by `offset` to
    /// compensate for the frozen scroll, forced to full width.
    fn pin_body(&mut self, offset: f64);

    /// Remove the pinned styles.
    fn unpin_body(&mut self);
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn scroll_to(&mut self, offset: f64) {
        (**self).scroll_to(offset);
    }

    fn pin_body(&mut self, offset: f64) {
        (**self).pin_body(offset);
    }

    fn unpin_body(&mut self) {
        (**self).unpin_body();
    }
}

/// Scoped hold on the page scroll.
///
/// Acquiring captures the current offset and pins the body; dropping unpins
/// and restores exactly the captured offset. Because release lives in
/// `Drop`, it runs on every exit path, not just the close button.
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    saved_offset: f64,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn acquire(mut host: H) -> Self {
        let saved_offset = host.scroll_offset();
        host.pin_body(saved_offset);

        Self { host, saved_offset }
    }

    pub fn saved_offset(&self) -> f64 {
        self.saved_offset
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.unpin_body();
        self.host.scroll_to(self.saved_offset);
    }
}

/// Overlay paging through one object's image set.
///
/// Opened with a non-empty URL list (callers filter empty URLs out via
/// `ArtObject::image_set` before opening). The index wraps around in both
/// directions rather than clamping.
pub struct ImageViewer<H: ScrollHost> {
    images: Vec<String>,
    title: String,
    index: usize,
    _scroll_lock: ScrollLock<H>,
}

impl<H: ScrollHost> ImageViewer<H> {
    /// Open the viewer and pin page scroll until it is dropped.
    pub fn open(images: Vec<String>, title: impl Into<String>, host: H) -> Self {
        debug_assert!(!images.is_empty(), "viewer opened with no images");

        Self {
            images,
            title: title.into(),
            index: 0,
            _scroll_lock: ScrollLock::acquire(host),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }

    /// One-based position for the "Image i of n" caption.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.images.len())
    }
}
