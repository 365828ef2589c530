use std::time::SystemTime;

use crate::{
    core::{
        metrics::{MetricState, StateMut},
        sample::{Input, Sample},
        types::Value,
    },
    error::Result,
};

/// Trait for types that record metric samples
///
/// This is the mix-in seam. A host only has to say where its
/// [`MetricState`] lives; `record`, `recorded` and `value_of` come for free.
/// The [`mix!`](crate::mix) macro writes the two accessors for a named field.
///
/// The mutable accessor returns an opaque [`StateMut`], so callers holding a
/// host can record into it but cannot take or swap its history.
///
/// A host must run [`Metric::init`](crate::Metric::init) on itself before the
/// provided methods succeed; until then they return
/// [`Error::Uninitialized`](crate::Error::Uninitialized).
///
/// Inherent methods with the same names take precedence in method-call
/// syntax. The trait's versions stay reachable as `Recorder::record(&mut host, ..)`.
///
/// # Examples
///
/// ```rust
/// use resource_metric::{Metric, MetricState, Recorder, StateMut};
///
/// #[derive(Default)]
/// struct Fan {
///     rpm: MetricState,
///     label: String,
/// }
///
/// impl Recorder for Fan {
///     fn metric_state(&self) -> &MetricState {
///         &self.rpm
///     }
///
///     fn metric_state_mut(&mut self) -> StateMut<'_> {
///         StateMut::from(&mut self.rpm)
///     }
/// }
///
/// let mut fan = Fan { label: "left".into(), ..Fan::default() };
/// Metric::init(&mut fan);
/// fan.record(1200)?;
/// assert_eq!(fan.value_of()?.map(|v| v.as_f64()), Some(1200.0));
/// # Ok::<(), resource_metric::Error>(())
/// ```
pub trait Recorder {
    /// Shared access to the host's metric state
    fn metric_state(&self) -> &MetricState;

    /// Exclusive access to the host's metric state
    fn metric_state_mut(&mut self) -> StateMut<'_>;

    /// Record a sample taken now
    fn record<S>(&mut self, sample: S) -> Result<()>
    where
        S: Into<Input>,
        Self: Sized,
    {
        self.metric_state_mut().0.append(sample.into(), None)
    }

    /// Record a sample taken at `when`
    ///
    /// Samples are kept in call order; `when` is not used for ordering.
    fn record_at<S>(&mut self, sample: S, when: SystemTime) -> Result<()>
    where
        S: Into<Input>,
        Self: Sized,
    {
        self.metric_state_mut().0.append(sample.into(), Some(when))
    }

    /// A copy of every recorded sample, oldest first
    fn recorded(&self) -> Result<Vec<Sample>> {
        self.metric_state().samples().map(<[Sample]>::to_vec)
    }

    /// The value of the most recent sample, `None` if nothing was recorded
    fn value_of(&self) -> Result<Option<Value>> {
        Ok(self.metric_state().samples()?.last().map(|sample| sample.value))
    }
}
