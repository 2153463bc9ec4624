//! Pointer position and the cursor-follower placement derived from it.

/// Width (and height) of the decorative follower marker, in pixels.
pub const FOLLOWER_SIZE: i32 = 16;

/// Last observed pointer coordinates. No history is kept.
///
/// The default `(0, 0)` doubles as "not yet observed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The follower stays hidden until a pointer with `x > 0` has been seen.
    pub fn is_observed(&self) -> bool {
        self.x > 0
    }

    pub fn follower(&self) -> FollowerPlacement {
        FollowerPlacement::for_pointer(*self)
    }
}

/// Where and how large the cursor follower is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerPlacement {
    pub left: i32,
    pub top: i32,
    pub scale: f32,
}

impl FollowerPlacement {
    /// Center a [`FOLLOWER_SIZE`] marker on the pointer; scale to zero while
    /// no pointer has been observed.
    pub fn for_pointer(pointer: PointerPosition) -> Self {
        let half = FOLLOWER_SIZE / 2;
        Self {
            left: pointer.x - half,
            top: pointer.y - half,
            scale: if pointer.is_observed() { 1.0 } else { 0.0 },
        }
    }

    /// Inline CSS for the follower element.
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; transform: scale({});",
            self.left, self.top, self.scale
        )
    }
}
