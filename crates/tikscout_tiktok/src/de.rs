use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Whole(u64),
    Fractional(f64),
    Text(String),
}

/// Counts show up as numbers, numeric strings or null depending on the endpoint.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawCount>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawCount::Whole(n)) => Ok(n),
        Some(RawCount::Fractional(f)) if f >= 0.0 => Ok(f as u64),
        Some(RawCount::Fractional(f)) => Err(de::Error::custom(format!("negative count {f}"))),
        Some(RawCount::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| de::Error::custom(format!("invalid count {s:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::count")]
        n: u64,
    }

    fn parse(json: &str) -> Result<u64, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.n)
    }

    #[test]
    fn accepts_numbers_strings_and_null() {
        assert_eq!(parse(r#"{"n": 42}"#).unwrap(), 42);
        assert_eq!(parse(r#"{"n": "1200"}"#).unwrap(), 1200);
        assert_eq!(parse(r#"{"n": 7.9}"#).unwrap(), 7);
        assert_eq!(parse(r#"{"n": null}"#).unwrap(), 0);
        assert_eq!(parse(r#"{}"#).unwrap(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse(r#"{"n": "lots"}"#).is_err());
        assert!(parse(r#"{"n": -3}"#).is_err());
    }
}
