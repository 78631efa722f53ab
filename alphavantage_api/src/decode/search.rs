use std::io::Read;

use serde::Deserialize;

use crate::{
    types::{SymbolMatch, SymbolMatches},
    Error,
};

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "bestMatches")]
    best_matches: Vec<serde_json::Value>,
}

/// Decodes a `SYMBOL_SEARCH` JSON body.
///
/// The body is read fully before parsing. Decode failures are reported, with
/// `row` set to the 1-based index of the offending match (0 for the envelope).
pub fn symbol_search<R: Read>(mut body: R) -> Result<SymbolMatches, Error> {
    let mut raw = Vec::new();
    body.read_to_end(&mut raw).map_err(super::read_error)?;

    let value: serde_json::Value =
        serde_json::from_slice(&raw).map_err(|e| Error::decode(0, e.to_string()))?;
    if value.get("bestMatches").is_none() {
        if let Some(message) = super::api_message(&value) {
            return Err(Error::Api(message));
        }
    }

    let envelope: Envelope =
        serde_json::from_value(value).map_err(|e| Error::decode(0, e.to_string()))?;
    let matches = envelope
        .best_matches
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            serde_json::from_value::<SymbolMatch>(m).map_err(|e| Error::decode(i + 1, e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SymbolMatches { matches })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_match() {
        let body = r#"{"bestMatches":[{"1. symbol":"IBM","2. name":"International Business Machines"}]}"#;
        let matches = symbol_search(body.as_bytes()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.matches[0].symbol, "IBM");
        assert_eq!(matches.matches[0].name, "International Business Machines");
        assert_eq!(matches.matches[0].region, "");
        assert_eq!(matches.matches[0].match_score, 0.0);
    }

    #[test]
    fn full_match_fields() {
        let body = r#"{"bestMatches":[{
            "1. symbol": "TSCO.LON",
            "2. name": "Tesco PLC",
            "3. type": "Equity",
            "4. region": "United Kingdom",
            "5. marketOpen": "08:00",
            "6. marketClose": "16:30",
            "7. timezone": "UTC+01",
            "8. currency": "GBX",
            "9. matchScore": "0.7273"
        }]}"#;
        let matches = symbol_search(body.as_bytes()).unwrap();
        let tesco = &matches.matches[0];
        assert_eq!(tesco.match_type, "Equity");
        assert_eq!(tesco.region, "United Kingdom");
        assert_eq!(tesco.market_open, "08:00");
        assert_eq!(tesco.market_close, "16:30");
        assert_eq!(tesco.timezone, "UTC+01");
        assert_eq!(tesco.currency, "GBX");
        assert_eq!(tesco.match_score, 0.7273);
    }

    #[test]
    fn empty_matches() {
        let matches = symbol_search(r#"{"bestMatches":[]}"#.as_bytes()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn malformed_json_is_surfaced() {
        let err = symbol_search("{not valid json}".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Decode { row: 0, .. }));
    }

    #[test]
    fn bad_match_names_its_index() {
        let body = r#"{"bestMatches":[{"1. symbol":"IBM"},{"2. name":"no symbol"}]}"#;
        let err = symbol_search(body.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Decode { row: 2, .. }));
    }

    #[test]
    fn missing_best_matches_is_decode_error() {
        let err = symbol_search(r#"{"matches":[]}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Decode { row: 0, .. }));
    }

    #[test]
    fn information_envelope_is_api_error() {
        let body = r#"{"Information": "The **demo** API key is for demo purposes only."}"#;
        let err = symbol_search(body.as_bytes()).unwrap_err();
        match err {
            Error::Api(message) => assert!(message.contains("demo")),
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
