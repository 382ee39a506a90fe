// src/infrastructure/random.rs
//
// Random source used for suggestion draws.

use rand::Rng;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

pub trait RandomSource: Send + Sync {
    /// Uniformly pick an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Unseeded thread-local RNG; every call is an independent draw
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed sequence of picks (wrapped into range), then repeats 0
#[derive(Debug, Default)]
pub struct SequenceRandom {
    picks: Mutex<VecDeque<usize>>,
}

impl SequenceRandom {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: Mutex::new(picks.into_iter().collect()),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&self, len: usize) -> usize {
        let next = self
            .picks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(0);
        next % len
    }
}
