use resource_metric::prelude::*;

use crate::common::init_tracing;

#[derive(Default)]
struct Volume {
    name: String,
    usage: MetricState,
}

mix!(Volume, usage);

impl Volume {
    fn new(name: &str) -> Self {
        let mut volume = Self {
            name: name.into(),
            usage: MetricState::default(),
        };
        Metric::init(&mut volume);
        volume
    }
}

/// Same method names, no recorder state behind them
struct LookAlike;

impl LookAlike {
    fn record(&mut self, _sample: f64) -> Result<()> {
        Ok(())
    }

    fn recorded(&self) -> Vec<Sample> {
        Vec::new()
    }
}

struct Sensor(MetricState);

mix!(Sensor, 0);

#[test]
fn test_mixed_host_is_metric() -> Result<()> {
    init_tracing();
    Metric::mix::<Volume>();

    let mut volume = Volume::new("data");
    assert!(Metric::is_metric(&volume));

    volume.record(1)?;
    volume.record(0.5)?;
    assert_eq!(volume.recorded()?.len(), 2);
    assert_eq!(volume.value_of()?, Some(Value::Number(0.5)));
    assert_eq!(volume.name, "data");
    Ok(())
}

#[test]
fn test_look_alike_is_not_metric() -> Result<()> {
    let mut look_alike = LookAlike;
    look_alike.record(1.0)?;
    assert!(look_alike.recorded().is_empty());

    assert!(!Metric::is_metric(&look_alike));
    assert!(!Metric::is_metric(&1.0_f64));
    assert!(!Metric::is_metric(&"metric"));
    Ok(())
}

#[test]
fn test_uninitialized_host() {
    Metric::mix::<Volume>();

    let mut volume = Volume::default();
    assert!(!Metric::is_metric(&volume));
    assert!(matches!(volume.record(1), Err(Error::Uninitialized)));
    assert!(matches!(volume.recorded(), Err(Error::Uninitialized)));

    Metric::init(&mut volume);
    assert!(Metric::is_metric(&volume));
    assert!(volume.record(1).is_ok());
}

#[test]
fn test_init_alone_makes_mixed_host_a_metric() -> Result<()> {
    // Sensor is never passed to Metric::mix.
    let mut sensor = Sensor(MetricState::default());
    assert!(!Metric::is_metric(&sensor));

    Metric::init(&mut sensor);
    sensor.record(false)?;

    assert!(Metric::is_metric(&sensor));
    assert_eq!(sensor.value_of()?, Some(Value::Boolean(false)));
    Ok(())
}

#[test]
fn test_hosts_have_independent_histories() -> Result<()> {
    let mut a = Volume::new("a");
    let mut b = Volume::new("b");
    a.record(1)?;
    a.record(2)?;
    b.record(true)?;

    assert_eq!(a.recorded()?.len(), 2);
    assert_eq!(b.recorded()?.len(), 1);
    Ok(())
}

#[test]
fn test_recorder_as_trait_object() -> Result<()> {
    let mut metric = Metric::new();
    metric.record(3)?;
    let volume = Volume::new("root");

    let recorders: [&dyn Recorder; 2] = [&metric, &volume];
    let latest: Vec<Option<Value>> = recorders
        .iter()
        .map(|r| r.value_of())
        .collect::<Result<_>>()?;
    assert_eq!(latest, vec![Some(Value::Number(3.0)), None]);
    Ok(())
}
