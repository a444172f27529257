use super::bet::Bet;
use super::denomination::Denomination;
use super::holding::Holding;
use crate::Chips;
use crate::Error;

const N: usize = Denomination::N;

/// Chooses which chips to put forward for a target wager.
///
/// This is an unbounded knapsack over the denominations: a chip's weight
/// is its face value and its worth is how many of that chip the player
/// owns. The selection maximizes total worth without its face value
/// exceeding the target, so the result may fall short when no exact
/// combination exists.
///
/// Denominations are considered from the back of [`Denomination::all`]
/// forwards. At each `(denomination, capacity)` cell another unit of the
/// current chip is taken only when that is strictly better than leaving it
/// out, so ties resolve toward not taking it.
///
/// The table is filled bottom-up, one row per denomination and one
/// column per unit of capacity, which visits each cell once. Targets above
/// [`MAX_WAGER`](crate::MAX_WAGER) are refused before it is allocated.
#[derive(Debug, Clone, Copy)]
pub struct Distribution {
    target: Chips,
    worth: [u64; N],
}

impl From<(Chips, &Holding)> for Distribution {
    fn from((target, holding): (Chips, &Holding)) -> Self {
        Self {
            target,
            worth: Denomination::all().map(|d| holding.count(d) as u64),
        }
    }
}

impl Distribution {
    /// Objective value of a selection under this holding.
    pub fn objective(&self, bet: &Bet) -> u64 {
        Denomination::all()
            .into_iter()
            .map(|d| bet.count(d) as u64 * self.worth[d.index()])
            .sum()
    }
    pub fn solve(&self) -> Result<Bet, Error> {
        if self.target > crate::MAX_WAGER {
            return Err(Error::WagerTooLarge {
                target: self.target,
                max: crate::MAX_WAGER,
            });
        }
        let width = self.target as usize + 1;
        let ref mut best = vec![0u64; (N + 1) * width];
        let ref mut take = vec![false; (N + 1) * width];
        log::trace!("distributing {} over {} cells", self.target, N * width);
        // row 0 is the empty prefix; row i admits denominations up to i - 1
        for i in 1..=N {
            let face = Self::face(i - 1);
            for w in 1..width {
                let skip = best[(i - 1) * width + w];
                if face > w {
                    best[i * width + w] = skip;
                    continue;
                }
                let keep = best[i * width + w - face] + self.worth[i - 1];
                if keep > skip {
                    best[i * width + w] = keep;
                    take[i * width + w] = true;
                } else {
                    best[i * width + w] = skip;
                }
            }
        }
        let mut counts = [0u32; N];
        let mut i = N;
        let mut w = width - 1;
        while i > 0 && w > 0 {
            if take[i * width + w] {
                counts[i - 1] += 1;
                w -= Self::face(i - 1);
            } else {
                i -= 1;
            }
        }
        Ok(Bet::from(counts))
    }
    fn face(index: usize) -> usize {
        Denomination::all()[index].value() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unmemoized recursion over (index, capacity), kept as the oracle
    /// the table must agree with.
    fn naive(worth: &[u64; N], i: isize, w: usize) -> ([u32; N], u64) {
        if i < 0 || w == 0 {
            return ([0; N], 0);
        }
        let face = Distribution::face(i as usize);
        if face > w {
            return naive(worth, i - 1, w);
        }
        let (skip, v0) = naive(worth, i - 1, w);
        let (mut keep, v1) = naive(worth, i, w - face);
        let v1 = v1 + worth[i as usize];
        if v1 > v0 {
            keep[i as usize] += 1;
            (keep, v1)
        } else {
            (skip, v0)
        }
    }

    #[test]
    fn two_tens_for_twenty() {
        let bet = Holding::default().select(20).unwrap();
        assert!(bet == Bet::from([0, 0, 0, 2]));
        assert!(bet.total() == 20);
    }

    #[test]
    fn one_ten_for_ten() {
        let bet = Holding::default().select(10).unwrap();
        assert!(bet == Bet::from([0, 0, 0, 1]));
        assert!(bet.total() == 10);
    }

    #[test]
    fn three_tens_beat_a_quarter() {
        let bet = Holding::default().select(30).unwrap();
        assert!(bet == Bet::from([0, 0, 0, 3]));
        assert!(bet.total() == 30);
    }

    #[test]
    fn zero_target_is_empty() {
        assert!(Holding::default().select(0).unwrap().is_empty());
    }

    #[test]
    fn below_smallest_chip_is_empty() {
        assert!(Holding::default().select(9).unwrap().is_empty());
    }

    #[test]
    fn may_fall_short() {
        let bet = Holding::default().select(15).unwrap();
        assert!(bet.total() == 10);
    }

    #[test]
    fn never_exceeds_target() {
        let holdings = [
            Holding::default(),
            Holding::from([1, 2, 3, 4]),
            Holding::from([9, 0, 0, 1]),
            Holding::from([0, 0, 0, 0]),
        ];
        for holding in holdings.iter() {
            for target in 0..=400 {
                assert!(holding.select(target).unwrap().total() <= target);
            }
        }
    }

    #[test]
    fn deterministic() {
        let holding = Holding::from([3, 1, 4, 1]);
        for target in 0..=300 {
            assert!(holding.select(target).unwrap() == holding.select(target).unwrap());
        }
    }

    #[test]
    fn empty_holding_selects_nothing() {
        let holding = Holding::from([0, 0, 0, 0]);
        assert!(holding.select(250).unwrap().is_empty());
    }

    #[test]
    fn matches_recursion() {
        let holdings = [
            Holding::default(),
            Holding::from([1, 2, 3, 4]),
            Holding::from([5, 1, 1, 2]),
            Holding::from([2, 7, 0, 3]),
        ];
        for holding in holdings.iter() {
            let distribution = Distribution::from((0, holding));
            for target in 0..=160 {
                let (counts, value) = naive(&distribution.worth, N as isize - 1, target);
                let bet = holding.select(target as Chips).unwrap();
                assert!(bet == Bet::from(counts), "target {}", target);
                assert!(distribution.objective(&bet) == value);
            }
        }
    }

    #[test]
    fn oversized_target_is_refused() {
        let holding = Holding::default();
        assert!(holding.select(crate::MAX_WAGER).is_ok());
        assert!(
            holding.select(crate::MAX_WAGER + 1)
                == Err(Error::WagerTooLarge {
                    target: crate::MAX_WAGER + 1,
                    max: crate::MAX_WAGER,
                })
        );
        assert!(holding.select(Chips::MAX).is_err());
    }

    #[test]
    fn weighted_toward_larger_stock() {
        let holding = Holding::from([0, 0, 20, 1]);
        let bet = holding.select(50).unwrap();
        assert!(bet == Bet::from([0, 0, 2, 0]));
    }
}
