//! Shared fixtures: a three-level hierarchy of printable types. Each level has
//! its own registry kind, and the constructors of the upper levels take an
//! instance of the level below.
#![allow(dead_code)]

use registrar::{Fallible, Registrable};
use std::sync::Arc;

// ============================================================================
// Abstract Types
// ============================================================================

pub trait Base0 {
    fn print(&self) -> String;
}

pub trait Base1 {
    fn print(&self) -> String;
}

pub trait Base2 {
    fn print(&self) -> String;
}

registrar::registry_kind! {
    /// Level 0: built from nothing.
    pub Base0Registry {
        key: String,
        args: (),
        output: Box<dyn Base0>,
        policy: Fallible,
    }
}

registrar::registry_kind! {
    /// Level 1: wraps a level 0 instance.
    pub Base1Registry {
        key: String,
        args: (Arc<dyn Base0>,),
        output: Box<dyn Base1>,
        policy: Fallible,
    }
}

registrar::registry_kind! {
    /// Level 2: wraps a level 1 instance and carries an id.
    pub Base2Registry {
        key: String,
        args: (Arc<dyn Base1>, i32),
        output: Box<dyn Base2>,
        policy: Fallible,
    }
}

// ============================================================================
// Level 0
// ============================================================================

pub struct Derived01;

impl Base0 for Derived01 {
    fn print(&self) -> String {
        "Derived01".to_string()
    }
}

impl Registrable<Base0Registry> for Derived01 {
    fn construct(_: ()) -> Box<dyn Base0> {
        Box::new(Derived01)
    }
}

registrar::enroll!(Base0Registry, Derived01);

pub struct Derived02;

impl Base0 for Derived02 {
    fn print(&self) -> String {
        "Derived02".to_string()
    }
}

impl Registrable<Base0Registry> for Derived02 {
    fn construct(_: ()) -> Box<dyn Base0> {
        Box::new(Derived02)
    }
}

registrar::enroll!(Base0Registry, Derived02);

// ============================================================================
// Level 1
// ============================================================================

pub struct Derived11 {
    inner: Arc<dyn Base0>,
}

impl Base1 for Derived11 {
    fn print(&self) -> String {
        format!("Derived11: {}", self.inner.print())
    }
}

impl Registrable<Base1Registry> for Derived11 {
    fn construct((inner,): (Arc<dyn Base0>,)) -> Box<dyn Base1> {
        Box::new(Derived11 { inner })
    }
}

registrar::enroll!(Base1Registry, Derived11);

pub struct Derived12 {
    inner: Arc<dyn Base0>,
}

impl Base1 for Derived12 {
    fn print(&self) -> String {
        format!("Derived12: {}", self.inner.print())
    }
}

registrar::enroll!(Base1Registry, "Derived12" => |(inner,)| Box::new(Derived12 { inner }));

// ============================================================================
// Level 2
// ============================================================================

pub struct Derived21 {
    inner: Arc<dyn Base1>,
    id: i32,
}

impl Base2 for Derived21 {
    fn print(&self) -> String {
        format!("Derived21 ({}): {}", self.id, self.inner.print())
    }
}

impl Registrable<Base2Registry> for Derived21 {
    fn construct((inner, id): (Arc<dyn Base1>, i32)) -> Box<dyn Base2> {
        Box::new(Derived21 { inner, id })
    }
}

registrar::enroll!(Base2Registry, Derived21);

pub struct Derived22 {
    inner: Arc<dyn Base1>,
    id: i32,
}

impl Base2 for Derived22 {
    fn print(&self) -> String {
        format!("Derived22 ({}): {}", self.id, self.inner.print())
    }
}

registrar::enroll!(Base2Registry, "Derived22" => |(inner, id)| Box::new(Derived22 { inner, id }));
