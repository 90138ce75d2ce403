use average::Mean;
use itertools::Itertools;

impl<T> RollingMean for T where T: ?Sized {}

pub trait RollingMean {
    /// Trailing mean over the last `window` values.
    ///
    /// The output is aligned with the input. A point is `None` until a full window is available,
    /// and whenever any value inside its window is missing.
    #[must_use]
    fn rolling_mean(self, window: usize) -> Vec<Option<f64>>
    where
        Self: Sized + IntoIterator<Item = Option<f64>>,
    {
        let values = self.into_iter().collect_vec();
        let mut means = vec![None; values.len()];
        if window == 0 {
            return means;
        }
        for (index, chunk) in values.windows(window).enumerate() {
            means[index + window - 1] =
                chunk.iter().copied().collect::<Option<Mean>>().map(|mean| mean.mean());
        }
        means
    }
}
