//! Drag and pinch gestures that move and scale the QR code.
//!
//! Touches are tracked per id in the order they went down, the same way
//! egui's touch state does. The controller has two modes: one finger drags
//! the code, two or more fingers pinch-scale it while their midpoint moves
//! it. Positions are canvas pixels.

use std::collections::BTreeMap;

use crate::placement::{CanvasSize, Placement, clamp_scale};

/// One finger on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn midpoint(self, other: Self) -> (f32, f32) {
        ((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Active touches keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    /// Value is `(sequence, x, y)`; the sequence keeps arrival order.
    active: BTreeMap<u64, (u64, f32, f32)>,
    next_seq: u64,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, phase: TouchPhase, id: u64, x: f32, y: f32) {
        match phase {
            TouchPhase::Start => {
                self.active.insert(id, (self.next_seq, x, y));
                self.next_seq += 1;
            }
            TouchPhase::Move => {
                if let Some(touch) = self.active.get_mut(&id) {
                    touch.1 = x;
                    touch.2 = y;
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                self.active.remove(&id);
            }
        }
    }

    /// Active touches, oldest first.
    pub fn touches(&self) -> Vec<TouchPoint> {
        let mut touches: Vec<_> = self
            .active
            .iter()
            .map(|(id, (seq, x, y))| (*seq, TouchPoint::new(*id, *x, *y)))
            .collect();
        touches.sort_by_key(|(seq, _)| *seq);
        touches.into_iter().map(|(_, t)| t).collect()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.active.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

/// Snapshot taken when a pinch begins; later frames scale relative to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchStart {
    pub distance: f32,
    pub midpoint: (f32, f32),
    pub placement: Placement,
}

/// What the fingers are currently doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureMode {
    Idle,
    Drag { last: TouchPoint },
    Pinch { start: PinchStart },
}

/// Two-mode gesture state machine over a [`Placement`].
#[derive(Debug, Clone)]
pub struct GestureController {
    placement: Placement,
    locked: bool,
    mode: GestureMode,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(Placement::default())
    }
}

impl GestureController {
    /// Starts locked so stray touches do not move the code.
    pub fn new(placement: Placement) -> Self {
        Self {
            placement: placement.clamped(),
            locked: true,
            mode: GestureMode::Idle,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement.clamped();
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        self.mode = GestureMode::Idle;
    }

    /// Flip the lock and return the new state.
    pub fn toggle_lock(&mut self) -> bool {
        self.set_locked(!self.locked);
        self.locked
    }

    fn begin(&mut self, touches: &[TouchPoint]) {
        self.mode = match touches {
            [] => GestureMode::Idle,
            [only] => GestureMode::Drag { last: *only },
            [a, b, ..] => GestureMode::Pinch {
                start: PinchStart {
                    distance: a.distance(*b),
                    midpoint: a.midpoint(*b),
                    placement: self.placement,
                },
            },
        };
    }

    /// A finger went down. `touches` is every active touch.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if self.locked {
            return;
        }
        self.begin(touches);
    }

    /// Fingers moved. Returns whether the placement changed.
    pub fn touch_move(&mut self, touches: &[TouchPoint], canvas: CanvasSize) -> bool {
        if self.locked {
            return false;
        }
        match (self.mode, touches) {
            (GestureMode::Drag { last }, [touch]) => {
                let before = self.placement;
                self.placement = before.moved_by(touch.x - last.x, touch.y - last.y, canvas);
                self.mode = GestureMode::Drag { last: *touch };
                self.placement != before
            }
            (GestureMode::Pinch { start }, [a, b, ..]) => {
                if start.distance <= f32::EPSILON {
                    return false;
                }
                let before = self.placement;
                let factor = a.distance(*b) / start.distance;
                let (mx, my) = a.midpoint(*b);
                self.placement = start
                    .placement
                    .with_scale(clamp_scale(start.placement.scale * factor))
                    .moved_by(mx - start.midpoint.0, my - start.midpoint.1, canvas);
                self.placement != before
            }
            _ => false,
        }
    }

    /// A finger lifted; `remaining` are the touches still down.
    ///
    /// With one finger left after a pinch the drag re-anchors on it, so the
    /// code does not jump by the distance between the two fingers.
    pub fn touch_end(&mut self, remaining: &[TouchPoint]) {
        if self.locked {
            return;
        }
        match (self.mode, remaining) {
            (_, []) => self.mode = GestureMode::Idle,
            (GestureMode::Pinch { .. }, [only]) => self.mode = GestureMode::Drag { last: *only },
            (_, touches) => self.begin(touches),
        }
    }

    /// Feed one touch event through `tracker` and the controller.
    pub fn handle(
        &mut self,
        tracker: &mut TouchTracker,
        phase: TouchPhase,
        id: u64,
        x: f32,
        y: f32,
        canvas: CanvasSize,
    ) -> bool {
        tracker.update(phase, id, x, y);
        let touches = tracker.touches();
        match phase {
            TouchPhase::Start => {
                self.touch_start(&touches);
                false
            }
            TouchPhase::Move => self.touch_move(&touches, canvas),
            TouchPhase::End | TouchPhase::Cancel => {
                self.touch_end(&touches);
                false
            }
        }
    }
}
