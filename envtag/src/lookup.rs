//! Sources of raw environment strings

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read-only key/value source queried for each field's derived key.
///
/// An absent entry and an empty one are treated the same by the binder.
pub trait Lookup {
    /// Get the raw value for `key`, or `None` if it is not set
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnv;

impl Lookup for OsEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Lookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// A [`Lookup`] backed by a closure, see [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Lookup for FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

/// Build a [`Lookup`] from a closure
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    FromFn(f)
}
