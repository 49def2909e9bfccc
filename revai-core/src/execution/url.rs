//! URL and query-string construction.

/// Join a base URL ending in `/` with a relative path.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Ordered, single-valued query parameters.
///
/// Setting a key that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `k1=v1&k2=v2`, percent-encoding keys and values.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Append `?` and the query string. The `?` is always written, even for an
/// empty query, so `.../result?` is what goes on the wire.
pub fn with_query(url: &str, params: &QueryParams) -> String {
    format!("{url}?{}", params.to_query_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_slashes() {
        assert_eq!(
            join_url("https://api.rev.ai/languageid/v1/", "jobs"),
            "https://api.rev.ai/languageid/v1/jobs"
        );
        assert_eq!(join_url("http://h/a", "/jobs/1"), "http://h/a/jobs/1");
    }

    #[test]
    fn empty_query_keeps_question_mark() {
        assert_eq!(
            with_query("http://h/jobs/1/result", &QueryParams::new()),
            "http://h/jobs/1/result?"
        );
    }

    #[test]
    fn pairs_are_joined_in_insertion_order() {
        let params = QueryParams::new()
            .with("filter_for", "negative")
            .with("limit", "10");
        assert_eq!(params.to_query_string(), "filter_for=negative&limit=10");
    }

    #[test]
    fn setting_existing_key_replaces_value() {
        let params: QueryParams = [("filter_for", "positive"), ("filter_for", "negative")]
            .into_iter()
            .collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("filter_for"), Some("negative"));
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = QueryParams::new().with("starting_after", "a b&c");
        assert_eq!(params.to_query_string(), "starting_after=a%20b%26c");
    }
}
