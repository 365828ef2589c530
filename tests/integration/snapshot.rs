use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use resource_metric::prelude::*;
use serde_json::json;

use crate::common::TestObjectBuilder;

#[test]
fn test_snapshot_survives_caller_mutation() -> Result<()> {
    let mut object = TestObjectBuilder::new().field("tag", "a").build();
    let mut metric = Metric::new();
    metric.record(&object)?;

    object.set("tag", "b");
    object.set("value", 9);

    let recorded = metric.recorded()?;
    assert_eq!(recorded[0].raw.get("tag"), Some(&json!("a")));
    assert_eq!(recorded[0].value, 5.0);
    assert_eq!(recorded[0].raw.snapshot().map(|s| s.value_of()), Some(json!(5)));
    Ok(())
}

#[test]
fn test_snapshot_keeps_all_fields() -> Result<()> {
    let object = TestObjectBuilder::new()
        .value_from("used")
        .field("used", 40.5)
        .field("mount", "/")
        .field("removable", false)
        .build();

    let mut metric = Metric::new();
    metric.record(object)?;

    let snapshot = metric.recorded()?.remove(0);
    let fields = snapshot.raw.snapshot().map(|s| s.fields().clone()).unwrap_or_default();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields["mount"], json!("/"));
    assert_eq!(fields["removable"], json!(false));
    assert_eq!(snapshot.value, 40.5);
    Ok(())
}

#[test]
fn test_varying_coercion_type_accepted_when_scalar() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let object = Object::new().with_value_of(move |_: &Fields| {
        match counter.fetch_add(1, Ordering::SeqCst) {
            0 => json!(1),
            1 => json!(true),
            _ => json!("done"),
        }
    });

    let mut metric = Metric::new();
    metric.record(&object)?;
    metric.record(&object)?;
    assert!(metric.record(&object).is_err());

    let values: Vec<Value> = metric.recorded()?.into_iter().map(|s| s.value).collect();
    assert_eq!(values, vec![Value::Number(1.0), Value::Boolean(true)]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}
