/*!
# Utilities

Provides the [`Probability`] helper trait and the [`GeometricJumper`]: the
skip-sampler behind [`Gnp`](crate::gens::Gnp) graphs. Apart from generator
configuration you probably do not need to interact with this module directly.
*/

use num::{One, Zero};
use rand::Rng;
use rand_distr::Geometric;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Selects every value in `0..stop` independently with probability `p` by
/// jumping over the skipped values instead of flipping a coin per value.
///
/// For `p > 1/2` it is cheaper to draw the *skipped* values from a geometric
/// distribution with success probability `1 - p` and emit everything in
/// between, which is what the [`Inverted`](JumpMode::Inverted) mode does.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    mode: JumpMode,
    /// Stop if this value is reached
    stop: Option<u64>,
}

#[derive(Debug, Copy, Clone)]
enum JumpMode {
    /// `p = 0`: emit nothing
    Empty,
    /// `p = 1`: emit every value
    Full,
    /// `p <= 1/2`: the distribution yields the gap before the next emitted value
    Direct(Geometric),
    /// `p > 1/2`: the distribution yields the gap before the next *skipped* value
    Inverted(Geometric),
}

impl GeometricJumper {
    /// Creates a new geometric jumper from a probability with no stop value.
    /// ** Panics if `prob` is not in `[0, 1]` **
    pub fn new(prob: f64) -> Self {
        assert!(prob.is_valid_probability());

        let mode = if prob == 0.0 {
            JumpMode::Empty
        } else if prob == 1.0 {
            JumpMode::Full
        } else if prob <= 0.5 {
            JumpMode::Direct(Geometric::new(prob).unwrap())
        } else {
            JumpMode::Inverted(Geometric::new(1.0 - prob).unwrap())
        };

        Self { mode, stop: None }
    }

    /// Updates the stop value of the jumper
    pub fn stop_at(mut self, stop: u64) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Creates an iterator over the selected values starting at `0`
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        GeometricJumperIter {
            mode: self.mode,
            stop: self.stop,
            rng,
            cur: 0,
            next_skip: None,
        }
    }
}

/// An iterator over the values selected by a [`GeometricJumper`]
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R>
where
    R: Rng,
{
    mode: JumpMode,
    stop: Option<u64>,
    rng: &'a mut R,
    cur: u64,
    /// In inverted mode: the next value that must *not* be emitted
    next_skip: Option<u64>,
}

impl<R> Iterator for GeometricJumperIter<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let stop = self.stop.unwrap_or(u64::MAX);
        let mode = self.mode;

        loop {
            if self.cur >= stop {
                return None;
            }

            match mode {
                JumpMode::Empty => return None,
                JumpMode::Full => {
                    self.cur += 1;
                    return Some(self.cur - 1);
                }
                JumpMode::Direct(distr) => {
                    let gap = self.rng.sample(distr);
                    self.cur = self.cur.checked_add(gap)?;
                    if self.cur >= stop {
                        return None;
                    }
                    self.cur += 1;
                    return Some(self.cur - 1);
                }
                JumpMode::Inverted(distr) => {
                    // The first skipped value sits `gap` emitted values in
                    let next_skip = match self.next_skip {
                        Some(x) => x,
                        None => {
                            let first = self.rng.sample(distr);
                            self.next_skip = Some(first);
                            first
                        }
                    };

                    if self.cur == next_skip {
                        let gap = self.rng.sample(distr);
                        self.next_skip = Some(
                            next_skip
                                .checked_add(gap)
                                .and_then(|x| x.checked_add(1))
                                .unwrap_or(u64::MAX),
                        );
                        self.cur += 1;
                        continue;
                    }

                    self.cur += 1;
                    return Some(self.cur - 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn wrong_prob() {
        for prob in [-10.0, -0.001, 1.0001, 3.4] {
            assert!(std::panic::catch_unwind(|| GeometricJumper::new(prob)).is_err());
        }
    }

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        // p = 1.0
        for stop in [3u64, 10] {
            assert_eq!(
                GeometricJumper::new(1.0)
                    .stop_at(stop)
                    .iter(rng)
                    .collect::<Vec<_>>(),
                (0..stop).collect::<Vec<_>>()
            );
        }

        // p = 0.0
        assert_eq!(GeometricJumper::new(0.0).stop_at(100).iter(rng).count(), 0);
    }

    #[test]
    fn values_sorted_and_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for prob in [0.1, 0.5, 0.9] {
            let values: Vec<u64> = GeometricJumper::new(prob).stop_at(1000).iter(rng).collect();
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            assert!(values.iter().all(|&x| x < 1000));
        }
    }

    #[test]
    fn occurences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let stop = 100u64;

        for (prob, range) in [(0.25, 150..350), (0.9, 800..1000)] {
            let mut occurences = vec![0; stop as usize];
            for _ in 0..1000 {
                for x in GeometricJumper::new(prob).stop_at(stop).iter(rng) {
                    occurences[x as usize] += 1;
                }
            }

            assert!(occurences.into_iter().all(|x| range.contains(&x)));
        }
    }
}
