/// # Core Metrics Module
///
/// The recorder itself: [`Metric`], the per-instance [`MetricState`] it keeps
/// its history in, and the registry that decides what counts as a metric.
///
/// ## Example
///
/// ```rust
/// use resource_metric::prelude::*;
///
/// let mut cpu = Metric::new();
/// assert_eq!(cpu.value(), None);
///
/// cpu.record(75.5)?;
/// cpu.record(80)?;
///
/// assert_eq!(cpu.len(), 2);
/// assert!(cpu == 80.0);
/// assert!(cpu > 50.0);
/// # Ok::<(), resource_metric::Error>(())
/// ```
use std::{
    any::{type_name, Any},
    cmp::Ordering,
    time::SystemTime,
};

use tracing::{debug, instrument, trace};

use crate::{
    core::{
        sample::{Input, Sample},
        types::Value,
    },
    error::{Error, Result},
    traits::Recorder,
};

mod registry;

/// Private sample history of one recorder
///
/// A default-constructed state is detached: recording into it fails with
/// [`Error::Uninitialized`] until [`Metric::init`] attaches it. Hosts that
/// mix in recorder behaviour keep one of these as a field.
#[derive(Debug, Default)]
pub struct MetricState {
    id: Option<u64>,
    samples: Vec<Sample>,
}

impl MetricState {
    /// True once `Metric::init` has attached this state and it is registered
    pub fn is_initialized(&self) -> bool {
        self.id.is_some_and(registry::is_registered)
    }

    /// Only `attach` sets the id and `Drop` retires it, so recording needs no registry lookup
    fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Attaches a fresh identity and an empty history, retiring any previous one
    fn attach(&mut self) -> u64 {
        let id = registry::register();
        if let Some(previous) = self.id.replace(id) {
            registry::unregister(previous);
        }
        self.samples = Vec::new();
        id
    }

    pub(crate) fn samples(&self) -> Result<&[Sample]> {
        if self.is_attached() {
            Ok(&self.samples)
        } else {
            Err(Error::Uninitialized)
        }
    }

    /// Validates `input` and appends it; nothing changes on error
    pub(crate) fn append(&mut self, input: Input, when: Option<SystemTime>) -> Result<()> {
        if !self.is_attached() {
            return Err(Error::Uninitialized);
        }

        let when = when.unwrap_or_else(SystemTime::now);
        let (value, raw) = input.coerce().inspect_err(|e| debug!(error = %e, "sample rejected"))?;

        self.samples.push(Sample { when, value, raw });
        trace!(id = ?self.id, %value, len = self.samples.len(), "sample recorded");
        Ok(())
    }
}

impl Drop for MetricState {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            registry::unregister(id);
        }
    }
}

/// Exclusive handle on a host's [`MetricState`]
///
/// Returned by [`Recorder::metric_state_mut`]. It has no public API, so code
/// outside the host cannot take, swap or edit the history through it; swapping
/// two handles only swaps the borrows.
pub struct StateMut<'a>(pub(crate) &'a mut MetricState);

impl<'a> From<&'a mut MetricState> for StateMut<'a> {
    fn from(state: &'a mut MetricState) -> Self {
        Self(state)
    }
}

/// A resource metric: an append-only history of timestamped samples
///
/// `Metric` is the ready-made recorder. Other types gain the same behaviour by
/// holding a [`MetricState`] and implementing [`Recorder`], usually through
/// [`mix!`](crate::mix).
#[derive(Debug)]
pub struct Metric {
    state: MetricState,
}

crate::mix!(Metric, state);

impl Default for Metric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric {
    /// Creates an empty, initialized metric
    pub fn new() -> Self {
        let mut metric = Self {
            state: MetricState::default(),
        };
        Self::init(&mut metric);
        metric
    }

    /// Establishes fresh private state on `instance`
    ///
    /// Required before a mixed-in host can record, and all that
    /// [`Metric::is_metric`] needs to recognise it. Running it again on the
    /// same instance starts a new, empty history.
    #[instrument(level = "debug", skip_all, fields(host = type_name::<T>()))]
    pub fn init<T: Recorder + Any>(instance: &mut T) {
        registry::mix_if_absent::<T>();
        let id = instance.metric_state_mut().0.attach();
        debug!(id, "metric state initialized");
    }

    /// Registers `T` as a mixed-in host ahead of any `init`
    ///
    /// Mixing the same type again replaces the earlier registration.
    #[instrument(level = "debug", fields(host = type_name::<T>()))]
    pub fn mix<T: Recorder + Any>() {
        let replaced = registry::mix::<T>();
        debug!(replaced, "metric mixed in");
    }

    /// True for a `Metric`, or a host whose state went through `init`
    ///
    /// Having methods called `record` or `recorded` is not enough.
    pub fn is_metric(value: &dyn Any) -> bool {
        let state = match value.downcast_ref::<Metric>() {
            Some(metric) => Some(&metric.state),
            None => registry::accessor(value.type_id()).and_then(|access| access(value)),
        };
        state.is_some_and(MetricState::is_initialized)
    }

    /// The most recent value, `None` before anything is recorded
    pub fn value(&self) -> Option<Value> {
        self.latest().map(|sample| sample.value)
    }

    /// The most recent value as a float, booleans coercing to `1.0` / `0.0`
    pub fn as_f64(&self) -> Option<f64> {
        self.value().map(|value| value.as_f64())
    }

    /// The most recent sample
    pub fn latest(&self) -> Option<&Sample> {
        self.state.samples.last()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl PartialEq<Value> for Metric {
    fn eq(&self, other: &Value) -> bool {
        self.value().as_ref() == Some(other)
    }
}

impl PartialEq<f64> for Metric {
    fn eq(&self, other: &f64) -> bool {
        self.value().is_some_and(|value| value == *other)
    }
}

impl PartialEq<bool> for Metric {
    fn eq(&self, other: &bool) -> bool {
        self.value().is_some_and(|value| value == *other)
    }
}

impl PartialOrd<f64> for Metric {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        match self.value() {
            Some(Value::Number(n)) => n.partial_cmp(other),
            _ => None,
        }
    }
}
