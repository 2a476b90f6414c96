//! The conflict-checking plan registry.
//!
//! Owns the set of stored activities and enforces the no-overlap invariant:
//! for any two stored activities A and B, the half-open intervals
//! `[A.start, A.end)` and `[B.start, B.end)` never intersect. Touching
//! endpoints (A.end == B.start) do not count as overlap.
//!
//! Every operation reports its outcome, success or failure, through the
//! registered notification sinks exactly once, and additionally returns a
//! `Result` the caller can use for control flow. Conflict checks run in
//! insertion order, so the reported conflict is always the earliest-added
//! clashing activity.

use log::debug;

use crate::activity::{parse_time, Activity, Priority};
use crate::error::{PlanError, Result};
use crate::notify::NotificationSink;

/// In-memory store of non-overlapping activities.
///
/// Construct one explicitly and hand it to whichever component drives it;
/// there is no global instance. Multiple isolated registries are fine.
#[derive(Default)]
pub struct PlanRegistry {
    plans: Vec<Activity>,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl PlanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink. Sinks are invoked synchronously in registration
    /// order.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Number of stored activities.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Case-insensitive lookup of a stored activity.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.find_index(name).map(|i| &self.plans[i])
    }

    /// Store a new activity.
    ///
    /// Validates, in order: non-empty name, `start < end`, case-insensitive
    /// name uniqueness, then overlap against every stored activity in
    /// insertion order. The first failed check notifies and returns without
    /// any state change.
    pub fn add(&mut self, plan: Activity) -> Result<()> {
        if plan.name.trim().is_empty() {
            self.inform("Plan name cannot be empty.");
            return Err(PlanError::EmptyName);
        }
        if plan.start >= plan.end {
            self.inform("Start must be before End!");
            return Err(PlanError::InvalidInterval {
                start: plan.start,
                end: plan.end,
            });
        }
        if self.find_index(&plan.name).is_some() {
            self.inform(&format!("A plan named '{}' already exists.", plan.name));
            return Err(PlanError::DuplicateName { name: plan.name });
        }
        for old in &self.plans {
            if plan.overlaps(old) {
                self.inform(&format!("Clash with: {}", old.name));
                return Err(PlanError::Overlap {
                    conflicting: old.name.clone(),
                });
            }
        }

        debug!(
            "add plan name={} start={} end={} priority={}",
            plan.name, plan.start, plan.end, plan.priority
        );
        self.inform(&format!("Added: {}", plan.name));
        self.plans.push(plan);
        Ok(())
    }

    /// Remove an activity by name (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Result<()> {
        match self.find_index(name) {
            Some(index) => {
                let removed = self.plans.remove(index);
                debug!("remove plan name={}", removed.name);
                // Echo the caller's spelling, not the stored one.
                self.inform(&format!("Removed {name}"));
                Ok(())
            }
            None => {
                self.inform("Not found!");
                Err(PlanError::NotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Mark an activity completed. Idempotent: completing an already
    /// completed activity succeeds and leaves it completed.
    pub fn complete(&mut self, name: &str) -> Result<()> {
        match self.find_index(name) {
            Some(index) => {
                self.plans[index].completed = true;
                debug!("complete plan name={}", self.plans[index].name);
                self.inform("Marked completed.");
                Ok(())
            }
            None => {
                self.inform("Not found!");
                Err(PlanError::NotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Edit an activity: rename, move its interval, and change its priority
    /// in one atomic step.
    ///
    /// Time and priority arrive as text (`HH:MM` and a priority token) and
    /// are parsed here. All validation (parsing, `start < end`, name
    /// uniqueness and overlap against the other activities) completes before
    /// the first field write, so a failed edit leaves the activity exactly
    /// as it was.
    pub fn edit(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_start: &str,
        new_end: &str,
        new_priority: &str,
    ) -> Result<()> {
        let Some(index) = self.find_index(old_name) else {
            self.inform("Not found!");
            return Err(PlanError::NotFound {
                name: old_name.to_string(),
            });
        };

        let start = match parse_time(new_start) {
            Ok(t) => t,
            Err(err) => {
                self.inform("Bad time format.");
                return Err(err);
            }
        };
        let end = match parse_time(new_end) {
            Ok(t) => t,
            Err(err) => {
                self.inform("Bad time format.");
                return Err(err);
            }
        };
        let priority = match new_priority.parse::<Priority>() {
            Ok(p) => p,
            Err(err) => {
                self.inform("Bad input.");
                return Err(err);
            }
        };

        if new_name.trim().is_empty() {
            self.inform("Plan name cannot be empty.");
            return Err(PlanError::EmptyName);
        }
        if start >= end {
            self.inform("Start must be before End!");
            return Err(PlanError::InvalidInterval { start, end });
        }

        // The edited activity is excluded from both checks: it may keep its
        // own name and may stay inside its own old slot.
        let others = self
            .plans
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p);
        for other in others {
            if other.name.eq_ignore_ascii_case(new_name) {
                self.inform(&format!("A plan named '{}' already exists.", other.name));
                return Err(PlanError::DuplicateName {
                    name: new_name.to_string(),
                });
            }
            if start < other.end && end > other.start {
                self.inform(&format!("Edit clashes with: {}", other.name));
                return Err(PlanError::Overlap {
                    conflicting: other.name.clone(),
                });
            }
        }

        let plan = &mut self.plans[index];
        plan.name = new_name.to_string();
        plan.start = start;
        plan.end = end;
        plan.priority = priority;
        debug!(
            "edit plan old={} new={} start={} end={} priority={}",
            old_name, new_name, start, end, priority
        );
        self.inform("Edited successfully.");
        Ok(())
    }

    /// All stored activities sorted ascending by start time.
    ///
    /// The sort is stable, so insertion order breaks ties (which cannot
    /// occur among stored activities while the overlap invariant holds).
    /// An empty registry notifies instead of rendering nothing.
    pub fn list_all(&self) -> Vec<&Activity> {
        if self.plans.is_empty() {
            self.inform("No plans today.");
            return Vec::new();
        }
        let mut sorted: Vec<&Activity> = self.plans.iter().collect();
        sorted.sort_by_key(|p| p.start);
        sorted
    }

    /// Stored activities of one priority, sorted ascending by start time.
    ///
    /// The priority arrives as text from a string-typed caller; an
    /// unrecognized token fails with [`PlanError::InvalidPriority`].
    pub fn list_by_priority(&self, token: &str) -> Result<Vec<&Activity>> {
        let priority = match token.parse::<Priority>() {
            Ok(p) => p,
            Err(err) => {
                self.inform("Invalid priority.");
                return Err(err);
            }
        };
        let mut matched: Vec<&Activity> = self
            .plans
            .iter()
            .filter(|p| p.priority == priority)
            .collect();
        if matched.is_empty() {
            self.inform(&format!("No tasks with {token}"));
            return Ok(matched);
        }
        matched.sort_by_key(|p| p.start);
        Ok(matched)
    }

    fn find_index(&self, name: &str) -> Option<usize> {
        self.plans
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn inform(&self, message: &str) {
        for sink in &self.sinks {
            sink.notify(message);
        }
    }
}
