//! Bounce-and-descend movement.
//!
//! The formation moves one fixed step every `speed` frames. The threshold
//! shrinks quadratically as units die, down to `MINIMUM_SPEED`.

use glam::IVec2;
use log::debug;

use invaders_core::constants::*;
use invaders_core::enums::Direction;
use invaders_core::types::{Bounds, Rect};

/// Where the formation sits relative to the screen margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub at_bottom: bool,
    pub at_left: bool,
    pub at_right: bool,
    /// Top edge lies on the descent-step grid.
    pub on_descent_grid: bool,
}

impl Edges {
    pub fn of(extent: Rect, bounds: Bounds) -> Self {
        Self {
            at_bottom: extent.bottom() > bounds.height - BOTTOM_MARGIN,
            at_left: extent.x() <= SIDE_MARGIN,
            at_right: extent.right() >= bounds.width - SIDE_MARGIN,
            on_descent_grid: extent.y().rem_euclid(DESCENT_DISTANCE) == 0,
        }
    }
}

/// Next (direction, previous direction) given the current pair and edges.
pub fn next_direction(current: Direction, previous: Direction, edges: Edges) -> (Direction, Direction) {
    match current {
        Direction::Down if edges.on_descent_grid => match previous {
            Direction::Right => (Direction::Left, previous),
            _ => (Direction::Right, previous),
        },
        Direction::Down => (current, previous),
        Direction::Left if edges.at_left => {
            if edges.at_bottom {
                (Direction::Right, previous)
            } else {
                (Direction::Down, current)
            }
        }
        Direction::Right if edges.at_right => {
            if edges.at_bottom {
                (Direction::Left, previous)
            } else {
                (Direction::Down, current)
            }
        }
        _ => (current, previous),
    }
}

/// Displacement of one step in `direction`. Never diagonal.
pub fn displacement(direction: Direction) -> IVec2 {
    match direction {
        Direction::Right => IVec2::new(X_SPEED, 0),
        Direction::Left => IVec2::new(-X_SPEED, 0),
        Direction::Down => IVec2::new(0, Y_SPEED),
    }
}

#[derive(Debug, Clone)]
pub struct MovementController {
    direction: Direction,
    previous: Direction,
    /// Frames counted toward the next step.
    interval: i32,
    /// Current step threshold.
    speed: i32,
    base_speed: i32,
}

impl MovementController {
    pub fn new(base_speed: i32) -> Self {
        Self {
            direction: Direction::Right,
            previous: Direction::Right,
            interval: 0,
            speed: base_speed + MINIMUM_SPEED,
            base_speed,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn previous_direction(&self) -> Direction {
        self.previous
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Recompute the step threshold from the surviving fraction.
    pub fn rescale(&mut self, live: usize, capacity: usize) {
        let remaining = if capacity == 0 {
            0.0
        } else {
            live as f64 / capacity as f64
        };
        self.speed = (remaining.powi(2) * self.base_speed as f64) as i32 + MINIMUM_SPEED;
    }

    /// Count one frame. When a step is due, update the direction and return
    /// the displacement to apply.
    pub fn advance(&mut self, extent: Rect, bounds: Bounds) -> Option<IVec2> {
        self.interval += 1;
        if self.interval < self.speed {
            return None;
        }
        self.interval = 0;

        let (direction, previous) =
            next_direction(self.direction, self.previous, Edges::of(extent, bounds));
        if direction != self.direction {
            debug!("formation now moving {:?}", direction);
        }
        self.direction = direction;
        self.previous = previous;

        Some(displacement(direction))
    }
}
