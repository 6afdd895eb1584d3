//! Comparison session state machine
//!
//! Placing a new show into a non-empty ranked list is a binary search driven
//! by the user: every answer halves the candidate window until it collapses
//! to a single insertion point.
//!
//! ```text
//! Idle ──start──▶ Active ──answer/skip──▶ Active
//!                    │
//!                    └──window collapses / skip limit──▶ Resolved
//! ```
//!
//! Sessions are plain values owned by the caller, never stored by the engine,
//! so undo is a snapshot stack and concurrency is whatever the caller makes
//! of it.

use std::collections::BTreeSet;

use crate::item::Show;

/// Skip answers tolerated before a session is force-terminated.
pub const SKIP_LIMIT: usize = 5;

/// The user's side of one pairwise question: does the new show rank above
/// the probe (`PreferNew`) or below it (`PreferExisting`)?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    PreferNew,
    PreferExisting,
}

/// An in-flight insertion. `low..high` is the candidate window (half-open);
/// `compare_index` is the position currently being asked about.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSession {
    new_item: Show,
    low: usize,
    high: usize,
    compare_index: usize,
    skipped: BTreeSet<usize>,
}

/// Result of one transition: either the session continues, or the insertion
/// point is resolved and the session is spent.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep {
    Active(ComparisonSession),
    Resolved { item: Show, position: usize },
}

impl ComparisonSession {
    /// Open a session over a list of `list_len` existing entries.
    ///
    /// Callers validate first (non-empty list, no title collision); this
    /// only refuses the structurally impossible zero-length window.
    pub fn start(new_item: Show, list_len: usize) -> Option<Self> {
        if list_len == 0 {
            return None;
        }
        Some(Self {
            new_item,
            low: 0,
            high: list_len,
            compare_index: list_len / 2,
            skipped: BTreeSet::new(),
        })
    }

    pub fn new_item(&self) -> &Show {
        &self.new_item
    }

    /// Index of the existing entry the caller should present for comparison.
    pub fn compare_index(&self) -> usize {
        self.compare_index
    }

    /// Current half-open candidate window `(low, high)`.
    pub fn bounds(&self) -> (usize, usize) {
        (self.low, self.high)
    }

    pub fn skipped(&self) -> &BTreeSet<usize> {
        &self.skipped
    }

    /// Worst-case questions remaining for a decisively-answered session.
    pub fn questions_remaining(&self) -> u32 {
        usize::BITS - (self.high - self.low).leading_zeros()
    }

    /// Narrow the window with a decisive answer.
    pub fn answer(self, preference: Preference) -> SessionStep {
        let Self {
            new_item,
            mut low,
            mut high,
            compare_index,
            skipped,
        } = self;
        match preference {
            // New show ranks above the probe: everything at or below it is out.
            Preference::PreferNew => high = compare_index,
            // New show ranks below the probe: the probe and everything above stay.
            Preference::PreferExisting => low = compare_index + 1,
        }
        if low >= high {
            return SessionStep::Resolved {
                item: new_item,
                position: low,
            };
        }
        SessionStep::Active(Self {
            new_item,
            low,
            high,
            compare_index: (low + high) / 2,
            skipped,
        })
    }

    /// Decline the current question.
    ///
    /// The probe index is marked skipped and the nearest in-window unskipped
    /// index becomes the new probe, searching outward (`+1, -1, +2, -2, …`).
    /// When no candidate remains, or the session has absorbed [`SKIP_LIMIT`]
    /// skips, the window collapses and the show lands at the window's end,
    /// an implicit `PreferNew` against the whole remaining range. That keeps
    /// every session finite even if the user never decides.
    pub fn skip(mut self) -> SessionStep {
        self.skipped.insert(self.compare_index);
        if self.skipped.len() >= SKIP_LIMIT {
            return SessionStep::Resolved {
                position: self.high,
                item: self.new_item,
            };
        }
        match self.nearest_unskipped() {
            Some(index) => {
                self.compare_index = index;
                SessionStep::Active(self)
            }
            None => SessionStep::Resolved {
                position: self.high,
                item: self.new_item,
            },
        }
    }

    fn nearest_unskipped(&self) -> Option<usize> {
        let span = self.high - self.low;
        for offset in 1..=span {
            let above = self.compare_index + offset;
            if above < self.high && !self.skipped.contains(&above) {
                return Some(above);
            }
            if let Some(below) = self.compare_index.checked_sub(offset) {
                if below >= self.low && !self.skipped.contains(&below) {
                    return Some(below);
                }
            }
        }
        None
    }
}

/// Caller-held undo stack for one session.
///
/// Push a snapshot immediately before every `answer`/`skip`; `undo` restores
/// the most recent one. The stack is scoped to a single session and has no
/// effect across session boundaries.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    snapshots: Vec<ComparisonSession>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, session: &ComparisonSession) {
        self.snapshots.push(session.clone());
    }

    /// Restore the most recent snapshot, or hand `current` back unchanged
    /// when there is nothing to undo.
    pub fn undo(&mut self, current: ComparisonSession) -> ComparisonSession {
        self.snapshots.pop().unwrap_or(current)
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(len: usize) -> ComparisonSession {
        ComparisonSession::start(Show::new("New Show"), len).unwrap()
    }

    #[test]
    fn start_refuses_empty_list() {
        assert!(ComparisonSession::start(Show::new("X"), 0).is_none());
    }

    #[test]
    fn start_probes_the_midpoint() {
        let s = session(5);
        assert_eq!(s.bounds(), (0, 5));
        assert_eq!(s.compare_index(), 2);
    }

    #[test]
    fn prefer_new_narrows_from_above() {
        let s = session(5);
        match s.answer(Preference::PreferNew) {
            SessionStep::Active(s) => {
                assert_eq!(s.bounds(), (0, 2));
                assert_eq!(s.compare_index(), 1);
            }
            step => panic!("unexpected step: {step:?}"),
        }
    }

    #[test]
    fn prefer_existing_narrows_from_below() {
        let s = session(5);
        match s.answer(Preference::PreferExisting) {
            SessionStep::Active(s) => {
                assert_eq!(s.bounds(), (3, 5));
                assert_eq!(s.compare_index(), 4);
            }
            step => panic!("unexpected step: {step:?}"),
        }
    }

    #[test]
    fn single_entry_list_resolves_in_one_answer() {
        match session(1).answer(Preference::PreferNew) {
            SessionStep::Resolved { position, .. } => assert_eq!(position, 0),
            step => panic!("unexpected step: {step:?}"),
        }
        match session(1).answer(Preference::PreferExisting) {
            SessionStep::Resolved { position, .. } => assert_eq!(position, 1),
            step => panic!("unexpected step: {step:?}"),
        }
    }

    #[test]
    fn skip_searches_outward_preferring_above() {
        let s = session(5);
        let s = match s.skip() {
            SessionStep::Active(s) => {
                assert_eq!(s.compare_index(), 3);
                s
            }
            step => panic!("unexpected step: {step:?}"),
        };
        match s.skip() {
            SessionStep::Active(s) => assert_eq!(s.compare_index(), 4),
            step => panic!("unexpected step: {step:?}"),
        }
    }

    #[test]
    fn skip_falls_back_below_when_above_is_exhausted() {
        // Window [0, 3), probe 1: skipping 1 then 2 leaves only 0.
        let s = session(3);
        let s = match s.skip() {
            SessionStep::Active(s) => s,
            step => panic!("unexpected step: {step:?}"),
        };
        assert_eq!(s.compare_index(), 2);
        match s.skip() {
            SessionStep::Active(s) => assert_eq!(s.compare_index(), 0),
            step => panic!("unexpected step: {step:?}"),
        }
    }

    #[test]
    fn exhausting_the_window_resolves_at_window_end() {
        let mut s = session(2);
        for _ in 0..2 {
            s = match s.skip() {
                SessionStep::Active(s) => s,
                SessionStep::Resolved { position, .. } => {
                    assert_eq!(position, 2);
                    return;
                }
            };
        }
        panic!("session should have resolved");
    }

    #[test]
    fn skip_limit_forces_termination() {
        let mut s = session(20);
        for n in 1..=SKIP_LIMIT {
            match s.skip() {
                SessionStep::Active(next) => {
                    assert!(n < SKIP_LIMIT, "session outlived the skip limit");
                    s = next;
                }
                SessionStep::Resolved { position, .. } => {
                    assert_eq!(n, SKIP_LIMIT);
                    assert_eq!(position, 20);
                    return;
                }
            }
        }
        panic!("session should have resolved at the skip limit");
    }

    #[test]
    fn skip_termination_uses_current_window_not_list_end() {
        // Narrow to [0, 10) first, then skip out: lands at 10, not 20.
        let s = session(20);
        let mut s = match s.answer(Preference::PreferNew) {
            SessionStep::Active(s) => s,
            step => panic!("unexpected step: {step:?}"),
        };
        assert_eq!(s.bounds(), (0, 10));
        for _ in 0..SKIP_LIMIT {
            s = match s.skip() {
                SessionStep::Active(s) => s,
                SessionStep::Resolved { position, .. } => {
                    assert_eq!(position, 10);
                    return;
                }
            };
        }
        panic!("session should have resolved");
    }

    #[test]
    fn undo_restores_observationally_identical_state() {
        let s = session(8);
        let mut history = SessionHistory::new();
        history.push(&s);
        let before = s.clone();
        let after = match s.answer(Preference::PreferExisting) {
            SessionStep::Active(s) => s,
            step => panic!("unexpected step: {step:?}"),
        };
        assert_ne!(before, after);
        let restored = history.undo(after);
        assert_eq!(restored, before);
        assert!(history.is_empty());
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let s = session(4);
        let mut history = SessionHistory::new();
        let same = history.undo(s.clone());
        assert_eq!(same, s);
    }

    #[test]
    fn undo_restores_the_skip_set_too() {
        let s = session(6);
        let mut history = SessionHistory::new();
        let s = match s.skip() {
            SessionStep::Active(s) => s,
            step => panic!("unexpected step: {step:?}"),
        };
        history.push(&s);
        let skipped_before = s.skipped().clone();
        let after = match s.skip() {
            SessionStep::Active(s) => s,
            step => panic!("unexpected step: {step:?}"),
        };
        assert_ne!(after.skipped(), &skipped_before);
        let restored = history.undo(after);
        assert_eq!(restored.skipped(), &skipped_before);
    }
}
