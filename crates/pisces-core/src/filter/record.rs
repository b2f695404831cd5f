//! Record key extraction

use serde_json::Value;

/// A record whose first element identifies a structure or chain
pub trait KeyedRecord {
    /// The identifier to filter on, if the record carries a usable one
    fn key(&self) -> Option<&str>;
}

macro_rules! impl_keyed_tuple {
    ($($rest:ident),*) => {
        impl<K: AsRef<str>, $($rest),*> KeyedRecord for (K, $($rest,)*) {
            fn key(&self) -> Option<&str> {
                Some(self.0.as_ref())
            }
        }
    };
}

impl_keyed_tuple!();
impl_keyed_tuple!(B);
impl_keyed_tuple!(B, C);
impl_keyed_tuple!(B, C, D);

impl<S: AsRef<str>> KeyedRecord for [S] {
    fn key(&self) -> Option<&str> {
        self.first().map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, const N: usize> KeyedRecord for [S; N] {
    fn key(&self) -> Option<&str> {
        self.as_slice().key()
    }
}

impl<S: AsRef<str>> KeyedRecord for Vec<S> {
    fn key(&self) -> Option<&str> {
        self.as_slice().key()
    }
}

/// Heterogeneous records, e.g. decoded from JSON lines.
///
/// Only an array headed by a string has a key.
impl KeyedRecord for Value {
    fn key(&self) -> Option<&str> {
        self.as_array()?.first()?.as_str()
    }
}
