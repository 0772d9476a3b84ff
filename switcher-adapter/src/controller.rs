use switcher::{CardVisual, Entry, OverlayVisual, Switcher, SwitcherOptions};

use crate::cache::ScreenshotCache;
use crate::key::entry_key;

/// A card visual resolved against the back stack and screenshot cache.
///
/// `image` is `None` while the capture for this entry is still pending; the
/// renderer draws a placeholder in that case.
#[derive(Clone, Debug)]
pub struct RenderCard<I> {
    pub visual: CardVisual,
    pub entry: Entry,
    pub image: Option<I>,
}

/// The transitioning card with its screenshot resolved.
#[derive(Clone, Debug)]
pub struct RenderOverlay<I> {
    pub visual: OverlayVisual,
    pub entry: Entry,
    pub image: Option<I>,
}

/// One fully resolved frame, ready to draw back to front.
#[derive(Clone, Debug)]
pub struct RenderFrame<I> {
    pub cards: Vec<RenderCard<I>>,
    pub overlay: Option<RenderOverlay<I>>,
    pub scrim_alpha: f32,
}

/// Owns the engine, the back stack, and the screenshot cache, and keeps the
/// three consistent.
///
/// The engine works purely in indices; this type is where indices meet
/// entries. Back-stack mutations go through the controller so the engine's
/// count is always in sync, and evicted entries drop their screenshots.
pub struct Controller<I> {
    switcher: Switcher,
    entries: Vec<Entry>,
    cache: ScreenshotCache<I>,
}

impl<I> Controller<I> {
    pub fn new(options: SwitcherOptions, entries: Vec<Entry>) -> Self {
        let mut switcher = Switcher::new(options);
        switcher.set_count(entries.len());
        Self {
            switcher,
            entries,
            cache: ScreenshotCache::new(),
        }
    }

    pub fn switcher(&self) -> &Switcher {
        &self.switcher
    }

    pub fn switcher_mut(&mut self) -> &mut Switcher {
        &mut self.switcher
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// A shareable cache handle, typically handed to a capture worker.
    pub fn cache(&self) -> ScreenshotCache<I> {
        self.cache.clone()
    }

    /// Pushes a new entry on top of the back stack.
    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.switcher.set_count(self.entries.len());
    }

    /// Pops the top entry, evicting its screenshot. Returns the popped entry.
    pub fn pop_entry(&mut self) -> Option<Entry> {
        let entry = self.entries.pop()?;
        self.cache.remove(&entry_key(&entry));
        self.switcher.set_count(self.entries.len());
        Some(entry)
    }

    /// Replaces the whole back stack, evicting screenshots of entries that
    /// did not survive the swap.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        for old in &self.entries {
            if !entries.contains(old) {
                self.cache.remove(&entry_key(old));
            }
        }
        self.entries = entries;
        self.switcher.set_count(self.entries.len());
    }

    pub fn tick(&mut self, now_ms: u64) {
        self.switcher.tick(now_ms);
    }

    /// Stores the screenshot for `entry` under its derived key.
    pub fn put_screenshot(&self, entry: &Entry, image: I) {
        self.cache.put(entry_key(entry), image);
    }
}

impl<I: Clone> Controller<I> {
    /// Resolves the engine's frame against the back stack and cache.
    ///
    /// Returns `None` when the overlay is hidden, mirroring
    /// [`Switcher::frame`]. A visual whose index falls outside the current
    /// back stack (a stale frame straddling a `set_entries`) is skipped
    /// rather than rendered against the wrong entry.
    pub fn render_frame(&self) -> Option<RenderFrame<I>> {
        let frame = self.switcher.frame()?;
        let cards = frame
            .cards
            .iter()
            .filter_map(|visual| {
                let entry = self.entries.get(visual.index)?.clone();
                let image = self.cache.get(&entry_key(&entry));
                Some(RenderCard {
                    visual: *visual,
                    entry,
                    image,
                })
            })
            .collect();
        let overlay = frame.overlay.and_then(|visual| {
            let entry = self.entries.get(visual.index)?.clone();
            let image = self.cache.get(&entry_key(&entry));
            Some(RenderOverlay {
                visual,
                entry,
                image,
            })
        });
        Some(RenderFrame {
            cards,
            overlay,
            scrim_alpha: frame.scrim_alpha,
        })
    }
}

impl<I> std::fmt::Debug for Controller<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("entries", &self.entries.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
