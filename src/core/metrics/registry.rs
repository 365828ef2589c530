//! Process-wide bookkeeping behind `Metric::is_metric`.
//!
//! Two tables live here. `INITIALIZED` holds the id of every live state that
//! went through `Metric::init`; nothing else inserts into it. `MIXED` maps a
//! host type to an accessor that finds its state through `dyn Any`; `init`
//! fills it on first use, so `Metric::mix` is only needed to register early.

use std::{
    any::{Any, TypeId},
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicU64, Ordering},
};

use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use super::MetricState;
use crate::traits::Recorder;

/// Finds the state of a mixed-in host behind `dyn Any`
pub(crate) type Accessor = for<'a> fn(&'a dyn Any) -> Option<&'a MetricState>;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

static INITIALIZED: Lazy<Mutex<HashSet<u64>>> = Lazy::new(|| Mutex::new(HashSet::new()));

static MIXED: Lazy<RwLock<HashMap<TypeId, Accessor>>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Allocates and registers a fresh state id
pub(crate) fn register() -> u64 {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    INITIALIZED.lock().insert(id);
    id
}

pub(crate) fn unregister(id: u64) {
    INITIALIZED.lock().remove(&id);
}

pub(crate) fn is_registered(id: u64) -> bool {
    INITIALIZED.lock().contains(&id)
}

fn access<T: Recorder + Any>(value: &dyn Any) -> Option<&MetricState> {
    value.downcast_ref::<T>().map(T::metric_state)
}

/// Records `T` as a mixed-in host; returns true if it replaced an earlier entry
pub(crate) fn mix<T: Recorder + Any>() -> bool {
    MIXED.write().insert(TypeId::of::<T>(), access::<T> as Accessor).is_some()
}

/// Records `T` unless it is already known, keeping any explicit `mix`
pub(crate) fn mix_if_absent<T: Recorder + Any>() {
    let type_id = TypeId::of::<T>();
    if MIXED.read().contains_key(&type_id) {
        return;
    }
    MIXED.write().entry(type_id).or_insert(access::<T> as Accessor);
}

pub(crate) fn accessor(type_id: TypeId) -> Option<Accessor> {
    MIXED.read().get(&type_id).copied()
}
