//! Parameter bags
//!
//! The engine walks a JSON object. Anything a caller holds request
//! parameters in is normalized into one through [`ParameterBag`], exactly
//! once, before traversal starts.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A container of decoded request parameters.
pub trait ParameterBag {
    /// Returns the top-level parameters as a JSON object.
    ///
    /// `None` means the bag holds something other than a keyed container;
    /// the engine then treats every field as missing.
    fn to_object(&self) -> Option<Cow<'_, Map<String, Value>>>;
}

impl ParameterBag for Value {
    fn to_object(&self) -> Option<Cow<'_, Map<String, Value>>> {
        self.as_object().map(Cow::Borrowed)
    }
}

impl ParameterBag for Map<String, Value> {
    fn to_object(&self) -> Option<Cow<'_, Map<String, Value>>> {
        Some(Cow::Borrowed(self))
    }
}

impl<S: std::hash::BuildHasher> ParameterBag for HashMap<String, Value, S> {
    fn to_object(&self) -> Option<Cow<'_, Map<String, Value>>> {
        Some(Cow::Owned(
            self.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ))
    }
}

impl ParameterBag for BTreeMap<String, Value> {
    fn to_object(&self) -> Option<Cow<'_, Map<String, Value>>> {
        Some(Cow::Owned(
            self.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ))
    }
}

impl<S: std::hash::BuildHasher> ParameterBag for IndexMap<String, Value, S> {
    fn to_object(&self) -> Option<Cow<'_, Map<String, Value>>> {
        Some(Cow::Owned(
            self.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        ))
    }
}

impl<T: ParameterBag + ?Sized> ParameterBag for &T {
    fn to_object(&self) -> Option<Cow<'_, Map<String, Value>>> {
        (**self).to_object()
    }
}
