//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Concurrency tests for the serializer registry.

use objconv::ObjectConverter;
use objconv::registry::{ConstructionError, SerializerFactory, SerializerRegistry, TypeKey};
use objconv::serialization::{XmlFactory, XmlSerializer};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const THREADS: usize = 12;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Label {
    text: String,
}

/// Slow XML factory that counts builds.
#[derive(Default)]
struct SlowXmlFactory {
    inner: XmlFactory,
    builds: AtomicUsize,
}

impl SerializerFactory for SlowXmlFactory {
    type Entry<T: 'static> = XmlSerializer<T>;

    fn build<T: 'static>(&self, key: &TypeKey) -> Result<XmlSerializer<T>, ConstructionError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        self.inner.build::<T>(key)
    }
}

#[test]
fn test_first_access_races_build_once() {
    let registry = Arc::new(SerializerRegistry::new(SlowXmlFactory::default()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let entry = registry.get::<Point>().unwrap();
                let point = Point { x: i as i32, y: -(i as i32) };
                let xml = entry.serialize(&point).unwrap();
                assert_eq!(entry.deserialize(&xml).unwrap(), point);
                entry
            })
        })
        .collect();

    let entries: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(registry.factory().builds.load(Ordering::SeqCst), 1);
    assert!(entries.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    assert_eq!(registry.stats().constructions(), 1);
}

#[test]
fn test_mixed_types_build_once_each() {
    let registry = Arc::new(SerializerRegistry::new(SlowXmlFactory::default()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..50 {
                    if i % 2 == 0 {
                        let entry = registry.get::<Point>().unwrap();
                        entry.serialize(&Point { x: 1, y: 2 }).unwrap();
                    } else {
                        let entry = registry.get::<Label>().unwrap();
                        let label = Label {
                            text: format!("thread {i}"),
                        };
                        let xml = entry.serialize(&label).unwrap();
                        assert_eq!(entry.deserialize(&xml).unwrap(), label);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.factory().builds.load(Ordering::SeqCst), 2);
    assert_eq!(registry.len(), 2);

    let stats = registry.stats().snapshot();
    assert_eq!(stats.lookups(), (THREADS * 50) as u64);
    assert_eq!(stats.constructions, 2);
}

#[test]
fn test_concurrent_failures_leave_type_absent() {
    let registry = Arc::new(SerializerRegistry::new(SlowXmlFactory::default()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get::<(i32, i32)>().unwrap_err()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_construction_failure());
    }
    assert!(!registry.contains::<(i32, i32)>());
    assert!(registry.is_empty());
    assert!(registry.factory().builds.load(Ordering::SeqCst) >= 1);
}

#[test]
fn test_shared_converter_across_threads() {
    let converter = Arc::new(ObjectConverter::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let converter = Arc::clone(&converter);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let point = Point { x: i as i32, y: 7 };
                let xml = converter.to_xml(&point).unwrap();
                let json = converter.to_json(&point).unwrap();
                assert_eq!(converter.from_xml::<Point>(&xml).unwrap(), point);
                assert_eq!(converter.from_json::<Point>(&json).unwrap(), point);
                assert_eq!(converter.deep_clone(&point).unwrap(), point);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(converter.xml_registry().stats().constructions(), 1);
    assert_eq!(converter.json_registry().stats().constructions(), 1);
}
