use rand::Rng;

use crate::arm::Arm;

/// UCB1 selection policy
///
/// Plays the arm with the highest [index](Arm::index). Ties are settled while scanning the
/// arms in order: an arm whose index equals the running maximum replaces the incumbent on a
/// fair coin flip. With three or more tied arms this favors later arms (for three ties the
/// odds are 1/4, 1/4, 1/2) rather than choosing uniformly among them.
#[derive(Debug, Clone, Copy, Default)]
pub struct UCB1;

impl UCB1 {
    pub fn new() -> Self {
        Self
    }

    /// Invoke UCB1 policy at time `t` and return the index of the arm to play
    ///
    /// **Panics** if `arms` is empty or any arm has never been pulled
    pub fn choose<R: Rng + ?Sized>(&self, arms: &[Arm], t: usize, rng: &mut R) -> usize {
        argmax_coin_flip(arms.iter().map(|arm| arm.index(t)), rng)
            .expect("`arms` is not empty")
    }
}

/// Position of the maximum value, settling exact ties against the incumbent by coin flip
///
/// **Returns** `None` if `values` is empty
pub fn argmax_coin_flip<I, R>(values: I, rng: &mut R) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
    R: Rng + ?Sized,
{
    let mut values = values.into_iter();
    let mut max = values.next()?;
    let mut choice = 0;
    for (i, x) in values.enumerate().map(|(i, x)| (i + 1, x)) {
        if x > max || (x == max && rng.gen_bool(0.5)) {
            max = x;
            choice = i;
        }
    }
    Some(choice)
}
