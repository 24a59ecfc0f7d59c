//! Scroll synchronization between the input surface and the overlay.
//!
//! ## Learning: Breaking Feedback Loops With State
//!
//! Writing a scroll offset to a surface makes that surface report a scroll
//! event of its own. If every event blindly wrote to the other side, the two
//! surfaces would bounce offsets back and forth forever.
//!
//! `ScrollSync` records the offset it writes as the receiving surface's
//! current offset. When the receiving surface then echoes that offset back,
//! both sides already agree and no further write is produced.

/// Offsets closer than this are treated as equal. Toolkits round scroll
/// positions to device pixels, so an echo can differ in the last fraction.
const EPSILON: f32 = 0.5;

/// One of the two stacked surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The editable text surface.
    Input,
    /// The colored, non-interactive rendering.
    Overlay,
}

impl Surface {
    /// The surface a scroll on `self` is copied to.
    pub fn other(self) -> Self {
        match self {
            Self::Input => Self::Overlay,
            Self::Overlay => Self::Input,
        }
    }
}

/// An absolute scroll position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

/// What a scrolling container reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Current offset of the content.
    pub offset: ScrollOffset,
    /// Height of the visible area.
    pub height: f32,
}

/// A scroll position the caller must apply to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncWrite {
    pub target: Surface,
    pub offset: ScrollOffset,
}

/// Last known offsets of both surfaces.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    input: ScrollOffset,
    overlay: ScrollOffset,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `origin` scrolled to `offset`.
    ///
    /// Returns the write that brings the other surface in line, or `None` if
    /// it is already there (which is the case for echoes of our own writes).
    pub fn scrolled(&mut self, origin: Surface, offset: ScrollOffset) -> Option<SyncWrite> {
        *self.slot_mut(origin) = offset;

        let target = origin.other();
        if self.offset(target).approx_eq(offset) {
            return None;
        }

        *self.slot_mut(target) = offset;
        tracing::debug!(?origin, x = offset.x, y = offset.y, "syncing scroll offset");
        Some(SyncWrite { target, offset })
    }

    /// Last known offset of `surface`.
    pub fn offset(&self, surface: Surface) -> ScrollOffset {
        match surface {
            Surface::Input => self.input,
            Surface::Overlay => self.overlay,
        }
    }

    /// Forgets both offsets, e.g. after the document is replaced.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, surface: Surface) -> &mut ScrollOffset {
        match surface {
            Surface::Input => &mut self.input,
            Surface::Overlay => &mut self.overlay,
        }
    }
}
