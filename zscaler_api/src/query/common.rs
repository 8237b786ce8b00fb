//! Shared query infrastructure: the [`Query`] trait and its implementations
//! for explicit parameter lists.

use std::collections::BTreeMap;

use url::Url;

/// Anything that can append query parameters to a request URL.
///
/// Implementations decide which fields to emit; an absent optional field
/// must not produce a key at all.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

impl<Q: Query + ?Sized> Query for &Q {
    fn add_to_url(&self, url: &Url) -> Url {
        (**self).add_to_url(url)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Query for [(K, V)] {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.iter() {
            url.query_pairs_mut()
                .append_pair(key.as_ref(), value.as_ref());
        }
        url
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Query for Vec<(K, V)> {
    fn add_to_url(&self, url: &Url) -> Url {
        self.as_slice().add_to_url(url)
    }
}

impl Query for BTreeMap<String, String> {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.iter() {
            url.query_pairs_mut().append_pair(key, value);
        }
        url
    }
}

/// Two query sources applied one after the other.
pub struct Chain<A, B>(pub A, pub B);

impl<A: Query, B: Query> Query for Chain<A, B> {
    fn add_to_url(&self, url: &Url) -> Url {
        self.1.add_to_url(&self.0.add_to_url(url))
    }
}
