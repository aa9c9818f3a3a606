use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryPair {
    /// Text as it appeared in the URL; `None` once the pair has been rewritten
    raw: Option<String>,
    key: String,
    value: String,
}

/// Ordered query parameters that re-serialize untouched pairs byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<QueryPair>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = form_urlencoded::parse(segment.as_bytes())
                    .next()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .unwrap_or_default();
                QueryPair {
                    raw: Some(segment.to_string()),
                    key,
                    value,
                }
            })
            .collect();

        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Decoded value of `key`; the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// True when `key` is missing or carries an empty value.
    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).map_or(true, str::is_empty)
    }

    /// Replaces the value of `key` in place, or appends it when absent.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().rev().find(|pair| pair.key == key) {
            Some(pair) => {
                pair.raw = None;
                pair.value = value.to_string();
            }
            None => self.pairs.push(QueryPair {
                raw: None,
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|pair| match &pair.raw {
                Some(raw) => raw.clone(),
                None => format!("{}={}", encode(&pair.key), encode(&pair.value)),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}
