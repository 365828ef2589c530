/// Mixes recorder behaviour into a host type
///
/// Implements [`Recorder`](crate::Recorder) for `$host` by delegating to the
/// [`MetricState`](crate::MetricState) stored in `$field`. Call
/// [`Metric::init`](crate::Metric::init) from the host's constructor; that
/// also registers the type with [`Metric::is_metric`](crate::Metric::is_metric).
/// [`Metric::mix`](crate::Metric::mix) registers it ahead of the first `init`.
///
/// # Examples
///
/// ```rust
/// use resource_metric::{mix, Metric, MetricState, Recorder};
///
/// struct Battery {
///     charge: MetricState,
///     cycles: u32,
/// }
///
/// mix!(Battery, charge);
///
/// impl Battery {
///     fn new(cycles: u32) -> Self {
///         let mut battery = Self { charge: MetricState::default(), cycles };
///         Metric::init(&mut battery);
///         battery
///     }
/// }
///
/// let mut battery = Battery::new(12);
/// battery.record(87.5)?;
/// assert!(Metric::is_metric(&battery));
/// assert_eq!(battery.cycles, 12);
/// # Ok::<(), resource_metric::Error>(())
/// ```
#[macro_export]
macro_rules! mix {
    ($host:ty, $field:tt) => {
        impl $crate::Recorder for $host {
            fn metric_state(&self) -> &$crate::MetricState {
                &self.$field
            }

            fn metric_state_mut(&mut self) -> $crate::StateMut<'_> {
                $crate::StateMut::from(&mut self.$field)
            }
        }
    };
}
