//! Robot state: the current task intent and the queued steps.

use std::collections::VecDeque;

use pbs_core::layout::FREEZE_TICKS;
use pbs_core::{GridPos, ItemNumber, PlannedStep, RobotId, Side, Step};

// ── Task ──────────────────────────────────────────────────────────────────────

/// What a robot is currently doing.  Fetching and carrying are mutually
/// exclusive by construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Task {
    /// No assignment; the robot moves only if it still has queued steps.
    #[default]
    Idle,
    /// Navigating toward an item it will pick up.
    Fetch(ItemNumber),
    /// Bringing an item to the I/O cell.
    Carry(ItemNumber),
    /// Retired; en route to (or resting at) a terminal cell.
    Parking,
}

impl Task {
    /// The item this task tracks, if any.
    pub fn item(&self) -> Option<ItemNumber> {
        match *self {
            Task::Fetch(n) | Task::Carry(n) => Some(n),
            Task::Idle | Task::Parking => None,
        }
    }
}

// ── Robot ─────────────────────────────────────────────────────────────────────

/// One of the five warehouse robots.
///
/// The robot's position is not stored here: the grid's robot slots are the
/// ground truth and the simulation keeps a derived position array.
#[derive(Debug)]
pub struct Robot {
    pub id: RobotId,
    /// The warehouse half this robot serves, fixed at load time.
    pub side: Side,
    pub task: Task,
    pub queue: VecDeque<PlannedStep>,
}

impl Robot {
    pub fn new(id: RobotId, side: Side) -> Robot {
        Robot { id, side, task: Task::Idle, queue: VecDeque::new() }
    }

    /// The item this robot is fetching or carrying, if any.
    pub fn tracked_item(&self) -> Option<ItemNumber> {
        self.task.item()
    }

    /// True when the robot has neither an item assignment nor queued steps.
    /// Used by the foreign-escort rule: walking into the escort of an
    /// inactive robot means the blocker will not clear itself.
    pub fn is_inactive(&self) -> bool {
        self.tracked_item().is_none() && self.queue.is_empty()
    }

    /// Replace the whole queue with a fresh route.
    pub fn set_route(&mut self, steps: Vec<PlannedStep>) {
        self.queue = steps.into();
    }

    /// Push `steps` onto the *front* of the queue, preserving their order, so
    /// they run before the interrupted plan resumes (stack discipline).
    pub fn push_front_steps(&mut self, steps: Vec<PlannedStep>) {
        for step in steps.into_iter().rev() {
            self.queue.push_front(step);
        }
    }

    /// Hold still for the standard freeze duration: self-loop steps pushed to
    /// the front of the queue.
    pub fn freeze(&mut self, at: GridPos) {
        for _ in 0..FREEZE_TICKS {
            self.queue.push_front(PlannedStep::Move(Step::fictitious(at)));
        }
    }
}
