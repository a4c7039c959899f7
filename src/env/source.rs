//! Sources of raw environment values.

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read access to a set of named string values.
///
/// `None` means the name is absent. Any value that is set counts as present.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The ambient process environment.
///
/// Values that are not valid UTF-8 are decoded lossily, with invalid bytes
/// replaced by U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
