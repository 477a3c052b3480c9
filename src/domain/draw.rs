//! Lucky draw engine
//!
//! Picks one winner at a time from the eligible pool and records it in a
//! most-recent-first history. Without repeats the pool is the name list minus
//! the names already drawn, counted name by name, so a name listed twice can
//! win twice.
//!
//! A draw can run as a single call ([`DrawEngine::draw`]) or as an animated
//! spin: [`DrawEngine::begin_spin`], any number of cosmetic
//! [`DrawEngine::spin_tick`] calls, then [`DrawEngine::finish_spin`]. Only the
//! finishing step touches the history.

use std::collections::{HashMap, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use super::names::NameList;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("No names left to draw. Add names, allow repeats, or reset the history.")]
    ExhaustedPool,

    #[error("A draw is already in progress")]
    DrawInProgress,
}

/// Committed winners, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawHistory(VecDeque<String>);

impl DrawHistory {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates from the most recent winner to the oldest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.0.iter().map(String::as_str)
    }

    /// The most recent winner
    pub fn latest(&self) -> Option<&str> {
        self.0.front().map(String::as_str)
    }

    /// Returns how many times each name has been drawn
    pub fn counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for name in &self.0 {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    fn record(&mut self, winner: String) {
        self.0.push_front(winner);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// What the front-end should show for the draw
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WinnerState {
    /// Nothing drawn since the last reset
    #[default]
    Idle,
    /// A spin is running; `candidate` is the flickering pick, never committed
    Spinning { candidate: Option<String> },
    /// The last committed winner
    Winner { name: String },
}

impl WinnerState {
    pub fn is_spinning(&self) -> bool {
        matches!(self, WinnerState::Spinning { .. })
    }
}

/// Stateful lucky draw over a name list snapshot
#[derive(Debug)]
pub struct DrawEngine<R = StdRng> {
    names: NameList,
    history: DrawHistory,
    allow_repeat: bool,
    state: WinnerState,
    rng: R,
}

impl DrawEngine<StdRng> {
    /// Creates an engine seeded from OS entropy
    pub fn new(names: NameList) -> Self {
        Self::with_rng(names, StdRng::from_entropy())
    }

    /// Creates an engine with a fixed seed (reproducible draws)
    pub fn seeded(names: NameList, seed: u64) -> Self {
        Self::with_rng(names, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawEngine<R> {
    pub fn with_rng(names: NameList, rng: R) -> Self {
        Self {
            names,
            history: DrawHistory::new(),
            allow_repeat: false,
            state: WinnerState::Idle,
            rng,
        }
    }

    /// Replaces the name list. The history is kept.
    pub fn set_names(&mut self, names: NameList) {
        self.names = names;
    }

    pub fn names(&self) -> &NameList {
        &self.names
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    pub fn winner_state(&self) -> &WinnerState {
        &self.state
    }

    /// The committed winner currently on show
    ///
    /// `None` before the first draw, after a reset and while a spin runs.
    pub fn last_winner(&self) -> Option<&str> {
        match &self.state {
            WinnerState::Winner { name } => Some(name),
            _ => None,
        }
    }

    pub fn allow_repeat(&self) -> bool {
        self.allow_repeat
    }

    /// Changes repeat eligibility for future draws only
    pub fn set_allow_repeat(&mut self, allow: bool) {
        self.allow_repeat = allow;
    }

    pub fn toggle_allow_repeat(&mut self) -> bool {
        self.allow_repeat = !self.allow_repeat;
        self.allow_repeat
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Names a draw could select right now, in list order
    pub fn eligible_pool(&self) -> Vec<&str> {
        eligible(&self.names, &self.history, self.allow_repeat)
    }

    pub fn pool_size(&self) -> usize {
        self.eligible_pool().len()
    }

    /// Draws and commits one winner
    pub fn draw(&mut self) -> Result<String, DrawError> {
        if self.is_spinning() {
            return Err(DrawError::DrawInProgress);
        }
        self.commit()
    }

    /// Starts an animated draw
    ///
    /// Fails without changing anything when another spin is pending or when
    /// nothing is eligible.
    pub fn begin_spin(&mut self) -> Result<(), DrawError> {
        if self.is_spinning() {
            return Err(DrawError::DrawInProgress);
        }
        if self.pool_size() == 0 {
            return Err(DrawError::ExhaustedPool);
        }
        self.state = WinnerState::Spinning { candidate: None };
        Ok(())
    }

    /// Shows a new transient candidate while spinning
    ///
    /// Returns `None` when no spin is pending or the pool emptied mid-spin.
    pub fn spin_tick(&mut self) -> Option<&str> {
        if !self.is_spinning() {
            return None;
        }

        let pool = eligible(&self.names, &self.history, self.allow_repeat);
        let candidate = if pool.is_empty() {
            None
        } else {
            Some(pool[self.rng.gen_range(0..pool.len())].to_string())
        };

        self.state = WinnerState::Spinning { candidate };
        match &self.state {
            WinnerState::Spinning { candidate } => candidate.as_deref(),
            _ => None,
        }
    }

    /// Ends the spin and commits the real winner
    ///
    /// The winner is picked from the pool as it stands now, independently of
    /// the candidates shown during the spin. Without a pending spin this is
    /// the same as [`DrawEngine::draw`].
    pub fn finish_spin(&mut self) -> Result<String, DrawError> {
        let result = self.commit();
        if result.is_err() && self.is_spinning() {
            self.state = WinnerState::Idle;
        }
        result
    }

    /// Drops a pending spin. The history is untouched.
    pub fn abandon_spin(&mut self) {
        if self.is_spinning() {
            self.state = WinnerState::Idle;
        }
    }

    /// Clears the history
    pub fn reset(&mut self) {
        self.history.clear();
        if !self.is_spinning() {
            self.state = WinnerState::Idle;
        }
    }

    fn commit(&mut self) -> Result<String, DrawError> {
        let winner = {
            let pool = eligible(&self.names, &self.history, self.allow_repeat);
            if pool.is_empty() {
                return Err(DrawError::ExhaustedPool);
            }
            pool[self.rng.gen_range(0..pool.len())].to_string()
        };

        self.history.record(winner.clone());
        self.state = WinnerState::Winner {
            name: winner.clone(),
        };
        Ok(winner)
    }
}

/// Multiset difference `names - history` (or all names when repeats are on)
fn eligible<'a>(names: &'a NameList, history: &DrawHistory, allow_repeat: bool) -> Vec<&'a str> {
    if allow_repeat {
        return names.iter().map(String::as_str).collect();
    }

    let mut drawn = history.counts();
    names
        .iter()
        .filter(|name| match drawn.get_mut(name.as_str()) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                false
            }
            _ => true,
        })
        .map(String::as_str)
        .collect()
}
