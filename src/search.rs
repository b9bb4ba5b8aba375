//! Shortest transformation of an integer into a prime.
//!
//! From a value `v` two steps are allowed: the 0-step `v -> 2v + 1` ([Step::Double]) and the
//! 1-step `v -> v + 1` ([Step::Increment]). A search looks for the shortest sequence of steps
//! that turns the start value into a prime while never leaving the domain `[0, bound]`. When
//! several shortest sequences exist, the one taking the 0-step earliest wins, which makes the
//! result the lexicographically smallest shortest path in its symbol form.
//!
//! Both steps strictly increase the value, so the transformation graph restricted to the domain
//! is a finite DAG. Two strategies are provided:
//!
//! - [SearchStrategy::BreadthFirst] explores the graph layer by layer, enqueuing 0-steps before
//!   1-steps. The first prime discovered terminates the search.
//! - [SearchStrategy::Memoized] evaluates the recursive definition (prime -> empty path, out of
//!   domain -> unreachable, otherwise the shorter branch, 0-step on ties) bottom-up from the
//!   bound down to the start value, so it needs no call stack.
//!
//! Both strategies return the same outcome for every input.

use crate::error::{Error, Result};
use crate::traits::PrimeBuffer;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;
use tracing::{debug, warn};

/// One transformation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// The 0-step, v -> 2v + 1
    Double,
    /// The 1-step, v -> v + 1
    Increment,
}

impl Step {
    /// Steps in the order they are tried, which decides ties
    pub const ALL: [Step; 2] = [Step::Double, Step::Increment];

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Step::Double => '0',
            Step::Increment => '1',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '0' => Ok(Step::Double),
            '1' => Ok(Step::Increment),
            c => Err(Error::InvalidSymbol(c)),
        }
    }

    /// Apply the step on the value, return None if the result overflows
    #[inline]
    pub fn apply(self, value: u64) -> Option<u64> {
        match self {
            Step::Double => value.checked_mul(2).and_then(|v| v.checked_add(1)),
            Step::Increment => value.checked_add(1),
        }
    }
}

/// A sequence of steps, ordered from the first applied to the last applied.
///
/// The empty path means the start value is already a prime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Step>);

impl Path {
    #[inline]
    pub fn new() -> Self {
        Path(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    /// Apply the steps one by one from start, returning the value after each step.
    /// Return None if any step overflows.
    pub fn replay(&self, start: u64) -> Option<Vec<u64>> {
        let mut value = start;
        let mut values = Vec::with_capacity(self.len());
        for step in self.iter() {
            value = step.apply(value)?;
            values.push(value);
        }
        Some(values)
    }

    /// Apply all the steps from start and return the final value
    pub fn apply(&self, start: u64) -> Option<u64> {
        self.iter().try_fold(start, |v, step| step.apply(v))
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Path(steps)
    }
}

impl FromIterator<Step> for Path {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for step in self.iter() {
            f.write_char(step.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars().map(Step::from_symbol).collect()
    }
}

/// Result of a transformation search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// A shortest path into a prime
    Found(Path),
    /// Every sequence of steps leaves the domain before reaching a prime
    Unreachable,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::Unreachable => None,
        }
    }

    #[inline]
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::Unreachable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Layered search over the transformation graph, visiting each value once
    BreadthFirst,
    /// Bottom-up evaluation of the recursive definition with a memo table per value
    Memoized,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::BreadthFirst
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,

    /// Maximum number of values to expand before giving up with
    /// [Error::SearchBudgetExhausted]. None means no limit.
    pub max_states: Option<usize>,
}

impl SearchConfig {
    /// Create a configuration for the memoized strategy without state limit
    pub fn memoized() -> Self {
        Self {
            strategy: SearchStrategy::Memoized,
            max_states: None,
        }
    }

    pub fn with_max_states(self, limit: usize) -> Self {
        Self {
            max_states: Some(limit),
            ..self
        }
    }
}

/// Find the shortest path from start into a prime contained in the buffer, without any
/// intermediate value exceeding the bound of the buffer.
pub fn shortest_path<B>(buffer: &B, start: u64, config: &SearchConfig) -> Result<SearchOutcome>
where
    for<'a> B: PrimeBuffer<'a>,
{
    if buffer.contains(start) {
        return Ok(SearchOutcome::Found(Path::new()));
    }
    if start > buffer.bound() {
        return Ok(SearchOutcome::Unreachable);
    }

    let (outcome, explored) = match config.strategy {
        SearchStrategy::BreadthFirst => breadth_first(buffer, start, config.max_states),
        SearchStrategy::Memoized => memoized(buffer, start, config.max_states),
    }
    .map_err(|e| {
        warn!(start, strategy = ?config.strategy, "{}", e);
        e
    })?;

    debug!(
        start,
        strategy = ?config.strategy,
        explored,
        steps = outcome.path().map(Path::len),
        "transformation search finished"
    );
    Ok(outcome)
}

fn budget_check(explored: usize, max_states: Option<usize>) -> Result<()> {
    match max_states {
        Some(limit) if explored > limit => Err(Error::SearchBudgetExhausted { limit }),
        _ => Ok(()),
    }
}

/// Breadth-first search from a non-prime start value inside the domain.
/// Return the outcome and the number of expanded values.
///
/// Only discovered values are recorded, so the cost is bounded by the explored part of the
/// graph rather than by the size of the domain.
fn breadth_first<B>(
    buffer: &B,
    start: u64,
    max_states: Option<usize>,
) -> Result<(SearchOutcome, usize)>
where
    for<'a> B: PrimeBuffer<'a>,
{
    let bound = buffer.bound();

    // the value and step that first discovered each value, the start value is never recorded
    let mut parents: HashMap<u64, (u64, Step)> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    let mut explored = 0;
    while let Some(value) = queue.pop_front() {
        explored += 1;
        budget_check(explored, max_states)?;

        for &step in Step::ALL.iter() {
            let next = match step.apply(value) {
                Some(v) if v <= bound => v,
                _ => continue,
            };
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, (value, step));

            if buffer.contains(next) {
                let path = trace_back(&parents, start, next);
                return Ok((SearchOutcome::Found(path), explored));
            }
            queue.push_back(next);
        }
    }

    Ok((SearchOutcome::Unreachable, explored))
}

/// Rebuild the path from start to target by following the recorded parents
fn trace_back(parents: &HashMap<u64, (u64, Step)>, start: u64, target: u64) -> Path {
    let mut steps = Vec::new();
    let mut value = target;
    while let Some(&(parent, step)) = parents.get(&value) {
        steps.push(step);
        value = parent;
    }
    assert_eq!(value, start, "broken parent chain from {} to {}", target, start);
    steps.reverse();
    Path(steps)
}

/// Resolved value in the memo table: the length of the shortest path and its first step.
/// None marks a value from which no prime is reachable.
type MemoEntry = Option<(usize, Option<Step>)>;

/// Evaluate the recursive definition for every value in [start, bound], from the largest value
/// down, so that both successors of a value are resolved before the value itself.
/// Return the outcome and the number of resolved values.
fn memoized<B>(buffer: &B, start: u64, max_states: Option<usize>) -> Result<(SearchOutcome, usize)>
where
    for<'a> B: PrimeBuffer<'a>,
{
    let bound = buffer.bound();
    let span = (bound - start) as usize + 1;
    budget_check(span, max_states)?;

    let mut memo: Vec<MemoEntry> = vec![None; span];
    let resolved = |memo: &[MemoEntry], step: Step, value: u64| -> Option<usize> {
        let next = step.apply(value).filter(|&v| v <= bound)?;
        memo[(next - start) as usize].map(|(len, _)| len + 1)
    };

    for value in (start..=bound).rev() {
        let entry = if buffer.contains(value) {
            Some((0, None))
        } else {
            match (
                resolved(&memo[..], Step::Double, value),
                resolved(&memo[..], Step::Increment, value),
            ) {
                (Some(d), Some(i)) if d <= i => Some((d, Some(Step::Double))),
                (_, Some(i)) => Some((i, Some(Step::Increment))),
                (Some(d), None) => Some((d, Some(Step::Double))),
                (None, None) => None,
            }
        };
        memo[(value - start) as usize] = entry;
    }

    let outcome = match memo[0] {
        None => SearchOutcome::Unreachable,
        Some((len, _)) => {
            let mut steps = Vec::with_capacity(len);
            let mut value = start;
            while let Some((_, Some(step))) = memo[(value - start) as usize] {
                steps.push(step);
                value = match step.apply(value) {
                    Some(v) => v,
                    None => break,
                };
            }
            SearchOutcome::Found(Path(steps))
        }
    };
    Ok((outcome, span))
}
