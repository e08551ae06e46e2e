//! Runtime registration on global and standalone tables: overwrite,
//! unregister, strict registration and concurrent access.

use registrar::{
    GlobalRegistry, Optional, Origin, Registrable, Registry, RegistryError,
    testing::{CallCounter, ScopedRegistration},
};
use std::{
    any::Any,
    sync::{
        Arc, Barrier,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

trait Greeter {
    fn greet(&self, name: &str) -> String;
}

struct Hello;

impl Greeter for Hello {
    fn greet(&self, name: &str) -> String {
        format!("hello {}", name)
    }
}

struct Hi;

impl Greeter for Hi {
    fn greet(&self, name: &str) -> String {
        format!("hi {}", name)
    }
}

struct Custom(String);

impl Greeter for Custom {
    fn greet(&self, name: &str) -> String {
        format!("{} {}", self.0, name)
    }
}

impl Registrable<GreeterRegistry> for Hello {
    fn construct(_: (String,)) -> Box<dyn Greeter> {
        Box::new(Hello)
    }
}

registrar::registry_kind! {
    GreeterRegistry {
        key: String,
        args: (String,),
        output: Box<dyn Greeter>,
        policy: Optional,
    }
}

registrar::enroll!(GreeterRegistry, Hello);

fn greet(key: &str, name: &str) -> Option<String> {
    GreeterRegistry::dispatch(key, (String::new(),)).map(|greeter| greeter.greet(name))
}

// ============================================================================
// Global Table
// ============================================================================

#[test]
fn test_runtime_registration_after_startup() {
    let _guard = ScopedRegistration::<GreeterRegistry>::new("Hi", |_| Box::new(Hi));
    assert_eq!(greet("Hi", "ann").as_deref(), Some("hi ann"));
}

#[test]
fn test_last_registration_wins() {
    let _guard = ScopedRegistration::<GreeterRegistry>::new("Twice", |_| Box::new(Hello));
    assert!(GreeterRegistry::register("Twice", |_| Box::new(Hi)));

    assert_eq!(greet("Twice", "bo").as_deref(), Some("hi bo"));
}

#[test]
fn test_runtime_registration_replaces_enrolled_entry() {
    // Runs against a private copy so the enrolled "Hello" stays intact for
    // the other tests.
    let table = Registry::<GreeterRegistry>::enrolled();
    table.register("Hello", |(prefix,)| Box::new(Custom(prefix)));

    let greeter = table.dispatch("Hello", ("hey".to_string(),)).unwrap();
    assert_eq!(greeter.greet("cy"), "hey cy");
    assert_eq!(table.registrations(), vec![("Hello".to_string(), Origin::Runtime)]);
}

#[test]
fn test_unregister_then_dispatch_misses() {
    GreeterRegistry::register("Gone", |_| Box::new(Hi));
    assert!(GreeterRegistry::is_registered("Gone"));

    GreeterRegistry::unregister("Gone");
    assert!(!GreeterRegistry::is_registered("Gone"));
    assert!(greet("Gone", "di").is_none());

    // Absent keys are ignored.
    GreeterRegistry::unregister("Gone");
}

#[test]
fn test_register_type_on_global_table() {
    assert!(GreeterRegistry::register_type::<Hello>("Typed"));
    assert_eq!(greet("Typed", "jo").as_deref(), Some("hello jo"));

    GreeterRegistry::unregister("Typed");
    assert!(!GreeterRegistry::is_registered("Typed"));
}

#[test]
fn test_scoped_registration_restores_enrolled_entry() {
    {
        let guard = ScopedRegistration::<GreeterRegistry>::new("Hello", |_| Box::new(Hi));
        assert!(guard.is_shadowing());
        assert_eq!(greet("Hello", "kit").as_deref(), Some("hi kit"));
    }
    assert_eq!(greet("Hello", "kit").as_deref(), Some("hello kit"));
}

#[test]
fn test_scoped_registration_is_removed_on_drop() {
    {
        let guard = ScopedRegistration::<GreeterRegistry>::new("Scoped", |_| Box::new(Hi));
        assert_eq!(guard.key(), "Scoped");
        assert!(GreeterRegistry::is_registered("Scoped"));
    }
    assert!(!GreeterRegistry::is_registered("Scoped"));
}

#[test]
fn test_try_register_keeps_existing_entry() {
    let _guard = ScopedRegistration::<GreeterRegistry>::new("Strict", |_| Box::new(Hello));

    let result = GreeterRegistry::try_register("Strict", |_| Box::new(Hi));
    assert_eq!(
        result,
        Err(RegistryError::AlreadyRegistered("\"Strict\"".to_string()))
    );
    assert_eq!(greet("Strict", "ed").as_deref(), Some("hello ed"));
}

#[test]
fn test_args_are_passed_through() {
    let _guard = ScopedRegistration::<GreeterRegistry>::new("Prefixed", |(prefix,)| {
        Box::new(Custom(prefix))
    });

    let greeter = GreeterRegistry::dispatch("Prefixed", ("howdy".to_string(),)).unwrap();
    assert_eq!(greeter.greet("fay"), "howdy fay");
}

#[test]
fn test_each_dispatch_invokes_constructor_once() {
    let counter = CallCounter::new();
    let _guard = ScopedRegistration::<GreeterRegistry>::new(
        "Counted",
        counter.wrap(|_: (String,)| Box::new(Hello) as Box<dyn Greeter>),
    );

    assert!(GreeterRegistry::lookup("Counted").is_some());
    assert_eq!(counter.count(), 0);

    greet("Counted", "gus");
    greet("Counted", "hal");
    assert_eq!(counter.count(), 2);

    greet("Uncounted", "ivy");
    assert_eq!(counter.count(), 2);
}

// ============================================================================
// Concurrency
// ============================================================================

const THREADS: usize = 8;

registrar::registry_kind! {
    WorkerRegistry {
        key: String,
        args: (usize,),
        output: usize,
        policy: Optional,
    }
}

// Hand-written enrollment so table initialization can be counted.
static SQUARE_INSTALLS: AtomicUsize = AtomicUsize::new(0);

fn install_square(table: &dyn Any) {
    SQUARE_INSTALLS.fetch_add(1, Ordering::SeqCst);
    registrar::enroll::install::<WorkerRegistry, _>(table, "square", |(n,)| n * n, module_path!());
}

registrar::inventory::submit! {
    registrar::Enrollment::new::<WorkerRegistry>("square", module_path!(), install_square)
}

#[test]
fn test_concurrent_registration_with_distinct_keys() {
    let table = Registry::<WorkerRegistry>::new();
    table.register("base", |(n,)| n);

    thread::scope(|s| {
        for i in 0..THREADS {
            let table = &table;
            s.spawn(move || {
                let key = format!("worker-{}", i);
                table.register(key.clone(), move |(n,)| n + i);
                assert_eq!(table.dispatch(&key, (100,)), Some(100 + i));
                assert_eq!(table.dispatch("base", (i,)), Some(i));
            });
        }
    });

    assert_eq!(table.len(), THREADS + 1);
    for i in 0..THREADS {
        assert_eq!(table.dispatch(&format!("worker-{}", i), (1,)), Some(1 + i));
    }
}

#[test]
fn test_concurrent_first_access_initializes_once() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let barrier = barrier.clone();
                s.spawn(move || {
                    barrier.wait();
                    WorkerRegistry::dispatch("square", (i,))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result, Some(i * i));
    }
    assert_eq!(WorkerRegistry::registry().len(), 1);
    assert_eq!(SQUARE_INSTALLS.load(Ordering::SeqCst), 1);

    // Later accesses reuse the same table.
    assert_eq!(WorkerRegistry::dispatch("square", (9,)), Some(81));
    assert_eq!(SQUARE_INSTALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_dispatch_of_preregistered_keys() {
    let table = Registry::<WorkerRegistry>::new();
    for i in 0..THREADS {
        table.register(format!("worker-{}", i), move |(n,)| n * 10 + i);
    }
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for i in 0..THREADS {
            let table = &table;
            let barrier = &barrier;
            s.spawn(move || {
                let key = format!("worker-{}", i);
                barrier.wait();
                for round in 0..100 {
                    assert_eq!(table.dispatch(&key, (round,)), Some(round * 10 + i));
                    assert!(table.is_registered(&key));
                }
            });
        }
    });

    assert_eq!(table.len(), THREADS);
}
