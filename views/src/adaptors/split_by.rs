//! Eager splitting of a multipass view into runs.
//!
//! Each element of a [`SplitBy`] view is itself a view: a [`Range`] from the
//! first element of a run to the separator (or end) that closes it. The
//! closing position is found before the run is handed out, so the run's
//! back is a real backward cursor, not a lazy sentinel.
//!
//! Both directions share one scanning core. A cursor remembers where its next
//! run starts and where its latest run ended; the latter is what the opposite
//! cursor checks against to tell that the two have met.

use core::fmt;

use duality_core::{
    BackwardOf, EmptinessView, ForwardOf, Infinite, MultipassStepper, Range, SentinelFor,
    SizedView, Stepper, View,
};

/// The runs of a view between elements that satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct SplitBy<V, P> {
    view: V,
    pred: P,
}

/// Splits `view` into maximal runs separated by elements for which `pred`
/// returns `true`. Separators are dropped.
///
/// There is always one more run than there are separators, so an empty view
/// yields a single empty run and a trailing separator yields a trailing empty
/// run. The outer view walks forward over a multipass forward input and
/// backward over a multipass backward input. It is never sized, except that
/// splitting an infinite view gives an infinite view.
///
/// ```
/// use duality_core::View;
/// use duality_views::split_by;
///
/// let words = *b"to be or";
/// let view = split_by(&words[..], |c: &&u8| **c == b' ');
/// let lens: Vec<usize> = view.traverse().map(|run| run.traverse().count()).collect();
/// assert_eq!(lens, [2, 2, 2]);
///
/// let last = view.traverse().next_back().map(|run| run.traverse().copied().collect::<Vec<u8>>());
/// assert_eq!(last.as_deref(), Some(&b"or"[..]));
/// ```
pub fn split_by<V, P>(view: V, pred: P) -> SplitBy<V, P> {
    SplitBy { view, pred }
}

/// Scan state of one split cursor.
///
/// `I` moves in the cursor's direction and `S` is the end it scans to. `O` is
/// where the traversal began; inversion hands it to the opposite cursor as
/// that cursor's end.
///
/// `after` is where the next run starts, or `None` once the last run has been
/// yielded. A position alone is not enough: after a trailing separator the
/// inner cursor sits at the end but one empty run is still due. `before` is
/// where the latest run ended, just short of its closing separator.
struct Runs<'a, I, S, O, P> {
    after: Option<I>,
    before: Option<I>,
    origin: O,
    end: S,
    pred: &'a P,
}

impl<'a, I, S, O, P> Runs<'a, I, S, O, P> {
    fn start(front: I, origin: O, end: S, pred: &'a P) -> Self
    where
        I: Clone,
    {
        Runs {
            after: Some(front),
            before: None,
            origin,
            end,
            pred,
        }
    }
}

impl<I: Clone, S: Clone, O: Clone, P> Clone for Runs<'_, I, S, O, P> {
    fn clone(&self) -> Self {
        Runs {
            after: self.after.clone(),
            before: self.before.clone(),
            origin: self.origin.clone(),
            end: self.end.clone(),
            pred: self.pred,
        }
    }
}

impl<I: fmt::Debug, S, O, P> fmt::Debug for Runs<'_, I, S, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runs")
            .field("after", &self.after)
            .field("before", &self.before)
            .finish_non_exhaustive()
    }
}

impl<I, S, O, P> Runs<'_, I, S, O, P>
where
    I: MultipassStepper,
    S: SentinelFor<I>,
    P: Fn(&I::Item) -> bool,
{
    /// Scans on from `cur` to whatever closes the run starting at `begin`.
    /// Returns `begin` and the position just short of the closer.
    fn close(&mut self, begin: I, mut cur: I, mut len: usize) -> (I, I) {
        loop {
            let before = cur.clone();
            match cur.next_until(&self.end) {
                Some(item) if !(self.pred)(&item) => len += 1,
                Some(_) => {
                    tracing::trace!(len, "split run closed by separator");
                    self.after = Some(cur);
                    self.before = Some(before.clone());
                    return (begin, before);
                }
                None => {
                    tracing::trace!(len, "split run closed by end");
                    self.before = Some(before.clone());
                    return (begin, before);
                }
            }
        }
    }

    fn next_run(&mut self) -> (I, I) {
        let Some(begin) = self.after.take() else {
            unreachable!("split_by stepped past its last run");
        };
        let cur = begin.clone();
        self.close(begin, cur, 0)
    }

    /// The next run, unless this cursor has reached `mark`: the far side of
    /// the separator that closed the opposite cursor's latest run. `None`
    /// for `mark` means the opposite cursor has not yielded yet.
    ///
    /// The run closes at the first separator, which is never past `mark`.
    fn next_run_until<M>(&mut self, mark: Option<&M>) -> Option<(I, I)>
    where
        M: SentinelFor<I>,
    {
        let begin = self.after.take()?;
        let mut cur = begin.clone();
        let Some(mark) = mark else {
            return Some(self.close(begin, cur, 0));
        };
        match cur.next_until(mark) {
            None => {
                self.after = Some(cur);
                None
            }
            Some(item) if (self.pred)(&item) => {
                tracing::trace!(len = 0, "split run closed by separator");
                self.after = Some(cur);
                self.before = Some(begin.clone());
                let last = begin.clone();
                Some((begin, last))
            }
            Some(_) => Some(self.close(begin, cur, 1)),
        }
    }
}

/// The forward cursor of [`SplitBy`]. Its runs are `Range<I, I::Inverse>`.
pub struct SplitForward<'a, I, S, O, P> {
    runs: Runs<'a, I, S, O, P>,
}

/// The backward cursor of [`SplitBy`]. `J` walks the input backward; its runs
/// are `Range<J::Inverse, J>`.
///
/// Over an input that only walks forward this is just the end of the outer
/// view.
pub struct SplitBackward<'a, J, K, E, P> {
    runs: Runs<'a, J, K, E, P>,
}

impl<I, S, O, P> SplitForward<'_, I, S, O, P> {
    /// Whether every run has been yielded.
    pub fn is_done(&self) -> bool {
        self.runs.after.is_none()
    }
}

impl<J, K, E, P> SplitBackward<'_, J, K, E, P> {
    /// Whether every run has been yielded.
    pub fn is_done(&self) -> bool {
        self.runs.after.is_none()
    }
}

impl<I: Clone, S: Clone, O: Clone, P> Clone for SplitForward<'_, I, S, O, P> {
    fn clone(&self) -> Self {
        Self {
            runs: self.runs.clone(),
        }
    }
}

impl<J: Clone, K: Clone, E: Clone, P> Clone for SplitBackward<'_, J, K, E, P> {
    fn clone(&self) -> Self {
        Self {
            runs: self.runs.clone(),
        }
    }
}

impl<I: fmt::Debug, S, O, P> fmt::Debug for SplitForward<'_, I, S, O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SplitForward").field(&self.runs).finish()
    }
}

impl<J: fmt::Debug, K, E, P> fmt::Debug for SplitBackward<'_, J, K, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SplitBackward").field(&self.runs).finish()
    }
}

// ============================================================================
// Stepping
// ============================================================================

impl<'a, I, S, O, P> Stepper for SplitForward<'a, I, S, O, P>
where
    I: MultipassStepper,
    S: SentinelFor<I>,
    P: Fn(&I::Item) -> bool,
{
    type Item = Range<I, I::Inverse>;

    /// Scans to the end of the next run. Panics once every run is out.
    fn next(&mut self) -> Self::Item {
        let (begin, last) = self.runs.next_run();
        Range::new(begin, last.invert())
    }
}

impl<'a, J, K, E, P> Stepper for SplitBackward<'a, J, K, E, P>
where
    J: MultipassStepper,
    K: SentinelFor<J>,
    P: Fn(&J::Item) -> bool,
{
    type Item = Range<J::Inverse, J>;

    /// Scans back to the start of the previous run. Panics once every run is
    /// out.
    fn next(&mut self) -> Self::Item {
        let (begin, last) = self.runs.next_run();
        Range::new(last.invert(), begin)
    }
}

// ============================================================================
// Meeting
// ============================================================================

impl<'a, I, S, O, J, K, E, P> SentinelFor<SplitForward<'a, I, S, O, P>>
    for SplitBackward<'a, J, K, E, P>
where
    I: MultipassStepper,
    S: SentinelFor<I>,
    J: SentinelFor<I>,
    P: Fn(&I::Item) -> bool,
{
    fn next_from(&self, it: &mut SplitForward<'a, I, S, O, P>) -> Option<Range<I, I::Inverse>> {
        let (begin, last) = it.runs.next_run_until(self.runs.before.as_ref())?;
        Some(Range::new(begin, last.invert()))
    }
}

impl<'a, I, S, O, J, K, E, P> SentinelFor<SplitBackward<'a, J, K, E, P>>
    for SplitForward<'a, I, S, O, P>
where
    J: MultipassStepper,
    K: SentinelFor<J>,
    I: SentinelFor<J>,
    P: Fn(&J::Item) -> bool,
{
    fn next_from(&self, it: &mut SplitBackward<'a, J, K, E, P>) -> Option<Range<J::Inverse, J>> {
        let (begin, last) = it.runs.next_run_until(self.runs.before.as_ref())?;
        Some(Range::new(last.invert(), begin))
    }
}

// ============================================================================
// Inversion
// ============================================================================

impl<'a, I, S, O, P> MultipassStepper for SplitForward<'a, I, S, O, P>
where
    I: MultipassStepper,
    S: SentinelFor<I> + Clone,
    O: Clone,
    P: Fn(&I::Item) -> bool,
{
    type Inverse = SplitBackward<'a, I::Inverse, O, S, P>;

    /// The run just yielded becomes the next one backward.
    fn invert(&self) -> Self::Inverse {
        SplitBackward {
            runs: Runs {
                after: self.runs.before.as_ref().map(|it| it.invert()),
                before: self.runs.after.as_ref().map(|it| it.invert()),
                origin: self.runs.end.clone(),
                end: self.runs.origin.clone(),
                pred: self.runs.pred,
            },
        }
    }
}

impl<'a, J, K, E, P> MultipassStepper for SplitBackward<'a, J, K, E, P>
where
    J: MultipassStepper,
    K: SentinelFor<J> + Clone,
    E: Clone,
    P: Fn(&J::Item) -> bool,
{
    type Inverse = SplitForward<'a, J::Inverse, E, K, P>;

    fn invert(&self) -> Self::Inverse {
        SplitForward {
            runs: Runs {
                after: self.runs.before.as_ref().map(|it| it.invert()),
                before: self.runs.after.as_ref().map(|it| it.invert()),
                origin: self.runs.end.clone(),
                end: self.runs.origin.clone(),
                pred: self.runs.pred,
            },
        }
    }
}

// ============================================================================
// View
// ============================================================================

impl<'a, V, P> View for &'a SplitBy<V, P>
where
    &'a V: View,
    ForwardOf<'a, V>: Clone,
    BackwardOf<'a, V>: Clone,
{
    type Forward = SplitForward<'a, ForwardOf<'a, V>, BackwardOf<'a, V>, ForwardOf<'a, V>, P>;
    type Backward = SplitBackward<'a, BackwardOf<'a, V>, ForwardOf<'a, V>, BackwardOf<'a, V>, P>;
    type Extent = <&'a V as View>::Extent;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        let front = (&self.view).forward_iter();
        SplitForward {
            runs: Runs::start(front.clone(), front, (&self.view).backward_iter(), &self.pred),
        }
    }

    #[inline]
    fn backward_iter(self) -> Self::Backward {
        let back = (&self.view).backward_iter();
        SplitBackward {
            runs: Runs::start(back.clone(), back, (&self.view).forward_iter(), &self.pred),
        }
    }
}

impl<'a, V, P> EmptinessView for &'a SplitBy<V, P>
where
    &'a V: View,
    ForwardOf<'a, V>: Clone,
    BackwardOf<'a, V>: Clone,
{
    /// Never empty: even an empty view has one run.
    #[inline]
    fn is_empty(self) -> bool {
        false
    }
}

impl<'a, V, P> SizedView for &'a SplitBy<V, P>
where
    &'a V: View<Extent = Infinite>,
    ForwardOf<'a, V>: Clone,
    BackwardOf<'a, V>: Clone,
{
    type Size = Infinite;

    #[inline]
    fn size(self) -> Infinite {
        Infinite
    }
}

#[cfg(test)]
mod tests {
    use duality_core::{
        BackwardView, InfiniteView, MultipassBidirectionalView, MultipassForwardView,
        RandomAccessView, ReversibleStepper, SliceBackward, SliceForward,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Take, empty, iota, iota_from, reverse, test_utils};

    type Even = fn(&&'static u8) -> bool;
    type Odd = fn(&u32) -> bool;
    type SliceRuns = SplitBy<&'static [u8], Even>;

    static_assertions::assert_impl_all!(&'static SliceRuns: MultipassBidirectionalView, EmptinessView);
    static_assertions::assert_not_impl_any!(&'static SliceRuns: SizedView, RandomAccessView);
    static_assertions::assert_impl_all!(ForwardOf<'static, SliceRuns>: ReversibleStepper);
    static_assertions::assert_impl_all!(&'static SplitBy<Take<crate::Iota<u32>>, Odd>: MultipassForwardView);
    static_assertions::assert_not_impl_any!(&'static SplitBy<Take<crate::Iota<u32>>, Odd>: BackwardView);

    fn runs<'a, V, P>(view: &'a SplitBy<V, P>) -> Vec<Vec<i32>>
    where
        &'a V: View<Forward = SliceForward<'a, i32>, Backward = SliceBackward<'a, i32>>,
        P: Fn(&&'a i32) -> bool,
    {
        view.traverse()
            .map(|run| run.traverse().copied().collect())
            .collect()
    }

    fn runs_back<'a, V, P>(view: &'a SplitBy<V, P>) -> Vec<Vec<i32>>
    where
        &'a V: View<Forward = SliceForward<'a, i32>, Backward = SliceBackward<'a, i32>>,
        P: Fn(&&'a i32) -> bool,
    {
        view.traverse()
            .rev()
            .map(|run| run.traverse().copied().collect())
            .collect()
    }

    #[test]
    fn test_drops_separators() {
        test_utils::init_test_logging();

        let data = [1, 2, 3, 5, 6, 8, 9, 10];
        let view = split_by(&data[..], |x: &&i32| **x % 2 == 0);
        let expected: [&[i32]; 5] = [&[1], &[3, 5], &[], &[9], &[]];
        assert_eq!(runs::<&[i32], _>(&view), expected);
    }

    #[test]
    fn test_backward_yields_runs_last_to_first() {
        let data = [1, 2, 3, 5, 6, 8, 9, 10];
        let view = split_by(&data[..], |x: &&i32| **x % 2 == 0);
        let expected: [&[i32]; 5] = [&[], &[9], &[], &[3, 5], &[1]];
        assert_eq!(runs_back::<&[i32], _>(&view), expected);

        let flipped: Vec<Vec<i32>> = reverse(&view)
            .traverse()
            .map(|run| run.traverse().copied().collect())
            .collect();
        assert_eq!(flipped, expected);
    }

    #[test]
    fn test_empty_input_has_one_run() {
        let data: [i32; 0] = [];
        let view = split_by(&data[..], |_: &&i32| true);
        assert_eq!(runs::<&[i32], _>(&view), [Vec::<i32>::new()]);
        assert_eq!(runs_back::<&[i32], _>(&view), [Vec::<i32>::new()]);
        assert!(!view.is_empty());

        let nothing = split_by(empty::<u8>(), |_: &u8| false);
        assert_eq!(nothing.traverse().count(), 1);
        assert_eq!(nothing.traverse().rev().count(), 1);
    }

    #[test]
    fn test_runs_rejoin_to_the_input() {
        let data = [7, 0, 0, 3, 4, 0, 5, 0];
        let is_zero = |x: &&i32| **x == 0;
        let view = split_by(&data[..], is_zero);

        let got = runs::<&[i32], _>(&view);
        let separators = data.iter().filter(|x| is_zero(x)).count();
        assert_eq!(got.len(), separators + 1);

        let mut rejoined = Vec::new();
        for (i, run) in got.iter().enumerate() {
            if i > 0 {
                rejoined.push(0);
            }
            rejoined.extend_from_slice(run);
        }
        assert_eq!(rejoined, data);
    }

    #[test]
    fn test_ends_meet_in_the_middle() {
        let data = [7, 0, 0, 3, 4, 0, 5, 0];
        let view = split_by(&data[..], |x: &&i32| **x == 0);
        let mut both = view.traverse();
        let mut take = |back: bool| {
            let run = if back { both.next_back() } else { both.next() };
            run.map(|run| run.traverse().copied().collect::<Vec<i32>>())
        };
        assert_eq!(take(false), Some(vec![7]));
        assert_eq!(take(true), Some(vec![]));
        assert_eq!(take(false), Some(vec![]));
        assert_eq!(take(true), Some(vec![5]));
        assert_eq!(take(false), Some(vec![3, 4]));
        assert_eq!(take(true), None);
        assert_eq!(take(false), None);
    }

    #[test]
    fn test_runs_are_bidirectional() {
        let view = split_by(iota(0u32, 10), |x: &u32| x % 4 == 3);
        let backward: Vec<Vec<u32>> = view
            .traverse()
            .map(|run| run.traverse().rev().collect())
            .collect();
        assert_eq!(backward, [vec![2, 1, 0], vec![6, 5, 4], vec![9, 8]]);
    }

    #[test]
    fn test_inversion_turns_around_between_runs() {
        let data = [7, 0, 0, 3];
        let view = split_by(&data[..], |x: &&i32| **x == 0);
        let begin = view.forward_iter();

        let mut it = view.forward_iter();
        let first = it.next_until(&view.backward_iter());
        assert_eq!(first.map(|run| run.traverse().count()), Some(1));

        let mark = it.invert();
        let mut fresh = view.forward_iter();
        assert!(fresh.skip_until(&mark));
        assert!(!fresh.skip_until(&mark));

        let mut back = it.invert();
        let again = back.next_until(&begin).map(|run| run.traverse().copied().collect::<Vec<_>>());
        assert_eq!(again, Some(vec![7]));
        assert!(back.next_until(&begin).is_none());
        assert!(back.is_done());

        let mut forward = back.invert();
        let rest: Vec<usize> = core::iter::from_fn(|| forward.next_until(&view.backward_iter()))
            .map(|run| run.traverse().count())
            .collect();
        assert_eq!(rest, [1, 0, 1]);
        assert!(forward.is_done());

        let done = forward.invert();
        let mut fresh = view.forward_iter();
        assert_eq!(fresh.advance_until(10, &done), 3);
    }

    #[test]
    fn test_infinite_input() {
        fn assert_infinite<V: InfiniteView>(_: V) {}

        let view = split_by(iota_from(1u32), |x: &u32| x % 3 == 0);
        assert_infinite(&view);
        let got: Vec<Vec<u32>> = view
            .traverse()
            .take(3)
            .map(|run| run.traverse().collect())
            .collect();
        assert_eq!(got, [vec![1, 2], vec![4, 5], vec![7, 8]]);
    }
}
