//! SenML documents - an ordered list of measurements sharing one base

use serde_json::{Map, Number, Value as JsonValue};

use crate::config::Config;
use crate::error::{MalformedInputError, Result};
use crate::measurement::{Measurement, keys};
use crate::value::Value;

/// Builds measurements out of record objects while a document is parsed
///
/// [`Measurement`] itself is the default factory. Supply another one through
/// [`Document::from_json_with`] to post-process or restrict what a record may
/// contain.
pub trait MeasurementFactory {
    /// Read the base fields of the first record
    fn base_from_json(&self, data: &JsonValue) -> Result<Measurement>;

    /// Read one record
    fn from_json(&self, data: &JsonValue) -> Result<Measurement>;
}

/// The default factory, delegating to [`Measurement::base_from_json`] and
/// [`Measurement::from_json`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl MeasurementFactory for DefaultFactory {
    fn base_from_json(&self, data: &JsonValue) -> Result<Measurement> {
        Measurement::base_from_json(data)
    }

    fn from_json(&self, data: &JsonValue) -> Result<Measurement> {
        Measurement::from_json(data)
    }
}

/// A SenML document
///
/// The first record of a SenML array carries the base fields that apply to
/// every record, and is a record in its own right at the same time. A parsed
/// document keeps the base separately in [`Document::base`], while
/// [`Document::measurements`] holds every record including the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Records in array order
    pub measurements: Vec<Measurement>,
    /// Defaults shared by all records
    pub base: Measurement,
    config: Config,
}

impl Document {
    /// Create a document from its records and base
    pub fn new(measurements: Vec<Measurement>, base: Measurement) -> Self {
        Self {
            measurements,
            base,
            config: Config::default(),
        }
    }

    /// Replace the serialization settings
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Serialization settings in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse a SenML array
    pub fn from_json(data: &JsonValue) -> Result<Self> {
        Self::from_json_with(&DefaultFactory, data)
    }

    /// Parse a SenML array, building measurements with the given factory
    pub fn from_json_with<F>(factory: &F, data: &JsonValue) -> Result<Self>
    where
        F: MeasurementFactory + ?Sized,
    {
        let records = data
            .as_array()
            .ok_or_else(|| MalformedInputError::not_an_array(data))?;
        let first = records.first().ok_or(MalformedInputError::EmptyDocument)?;

        let base = factory
            .base_from_json(first)
            .map_err(|e| e.at_record(0))?;

        let measurements = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                tracing::trace!(index, "parsing SenML record");
                factory.from_json(record).map_err(|e| e.at_record(index))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(records = measurements.len(), "parsed SenML document");

        Ok(Self::new(measurements, base))
    }

    /// Write the compact SenML array
    ///
    /// The first record gets the `bver` marker and the base fields. A document
    /// without measurements serializes to an empty array, whatever its base.
    pub fn to_json(&self) -> JsonValue {
        let Some((first, rest)) = self.measurements.split_first() else {
            return JsonValue::Array(Vec::new());
        };

        let mut head = Map::new();
        head.insert(
            keys::BASE_VERSION.into(),
            JsonValue::from(self.config.version),
        );
        head.extend(base_fields(&self.base));
        head.extend(first.to_json());

        let mut ret = Vec::with_capacity(self.measurements.len());
        ret.push(JsonValue::Object(head));
        ret.extend(rest.iter().map(|m| JsonValue::Object(m.to_json())));

        JsonValue::Array(ret)
    }

    /// Resolve every measurement against the base
    pub fn normalize(&self) -> Vec<Measurement> {
        tracing::debug!(records = self.measurements.len(), "normalizing SenML document");
        self.measurements
            .iter()
            .map(|m| m.to_absolute(&self.base))
            .collect()
    }

    /// Write the document as self-contained records with no base fields
    pub fn to_normalized_json(&self) -> JsonValue {
        JsonValue::Array(
            self.normalize()
                .iter()
                .map(|m| JsonValue::Object(m.to_json()))
                .collect(),
        )
    }

    /// Append a measurement
    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Number of measurements
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the document holds no measurements
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Iterate over measurements in document order
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter()
    }
}

/// The `b*` keys written for a base. Only finite numeric base values have a
/// `bv` form, and a non-finite base time is left out.
fn base_fields(base: &Measurement) -> Map<String, JsonValue> {
    let mut ret = Map::new();

    if let Some(name) = &base.name {
        ret.insert(keys::BASE_NAME.into(), JsonValue::String(name.clone()));
    }
    if let Some(time) = base.time.and_then(Number::from_f64) {
        ret.insert(keys::BASE_TIME.into(), JsonValue::Number(time));
    }
    if let Some(isotime) = &base.isotime {
        ret.insert(keys::BASE_ISOTIME.into(), JsonValue::String(isotime.clone()));
    }
    if let Some(unit) = &base.unit {
        ret.insert(keys::BASE_UNIT.into(), JsonValue::String(unit.clone()));
    }
    if let Some(value) = base
        .value
        .as_ref()
        .and_then(Value::as_f64)
        .and_then(Number::from_f64)
    {
        ret.insert(keys::BASE_VALUE.into(), JsonValue::Number(value));
    }

    ret
}

impl FromIterator<Measurement> for Document {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), Measurement::default())
    }
}

impl IntoIterator for Document {
    type Item = Measurement;
    type IntoIter = std::vec::IntoIter<Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonValue {
        json!([
            {"bn": "p/", "bt": 100, "bu": "u", "n": "a", "v": 1, "t": 0},
            {"n": "b", "v": 2, "t": 1}
        ])
    }

    #[test]
    fn test_from_json_splits_base() {
        let doc = Document::from_json(&sample()).unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.base.name.as_deref(), Some("p/"));
        assert_eq!(doc.base.time, Some(100.0));
        assert_eq!(doc.base.unit.as_deref(), Some("u"));
        assert_eq!(doc.measurements[0].name.as_deref(), Some("a"));
        assert_eq!(doc.measurements[0].unit, None);
        assert_eq!(doc.measurements[1].value, Some(Value::Numeric(2.0)));
    }

    #[test]
    fn test_to_json_restores_compact_form() {
        let doc = Document::from_json(&sample()).unwrap();
        assert_eq!(
            doc.to_json(),
            json!([
                {"bver": 5, "bn": "p/", "bt": 100.0, "bu": "u", "n": "a", "v": 1.0, "t": 0.0},
                {"n": "b", "v": 2.0, "t": 1.0}
            ])
        );
    }

    #[test]
    fn test_to_normalized_json_flattens() {
        let doc = Document::from_json(&sample()).unwrap();
        assert_eq!(
            doc.to_normalized_json(),
            json!([
                {"n": "p/a", "v": 1.0, "u": "u", "t": 100.0},
                {"n": "p/b", "v": 2.0, "u": "u", "t": 101.0}
            ])
        );
    }

    #[test]
    fn test_empty_document() {
        let base = Measurement::default().with_name("p/").with_value(3.0);
        for doc in [Document::default(), Document::new(Vec::new(), base)] {
            assert_eq!(doc.to_json(), json!([]));
            assert_eq!(doc.to_normalized_json(), json!([]));
        }
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert_eq!(
            Document::from_json(&json!([])),
            Err(MalformedInputError::EmptyDocument)
        );
        assert!(matches!(
            Document::from_json(&json!({"n": "a"})),
            Err(MalformedInputError::NotAnArray { .. })
        ));
        assert!(matches!(
            Document::from_json(&json!([{"n": "a"}, 7])),
            Err(MalformedInputError::InvalidRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_one_bad_record_fails_document() {
        let err = Document::from_json(&json!([
            {"n": "a", "v": 1},
            {"n": "b", "t": "later"}
        ]))
        .unwrap_err();

        let MalformedInputError::InvalidRecord { index, source } = err else {
            panic!("expected a record error");
        };
        assert_eq!(index, 1);
        assert!(matches!(*source, MalformedInputError::InvalidField { .. }));
    }

    #[test]
    fn test_config_sets_version_marker() {
        let doc = Document::from_json(&json!([{"n": "a", "v": 1}]))
            .unwrap()
            .with_config(Config { version: 10 });
        assert_eq!(doc.to_json(), json!([{"bver": 10, "n": "a", "v": 1.0}]));
    }

    #[test]
    fn test_non_numeric_base_value_has_no_bv() {
        let base = Measurement::default().with_value(true);
        let doc = Document::new(vec![Measurement::default().with_name("a")], base);
        assert_eq!(doc.to_json(), json!([{"bver": 5, "n": "a"}]));
    }

    #[test]
    fn test_overflow_never_writes_null() {
        let doc = Document::from_json(&json!([
            {"bt": 1e308, "t": 1e308, "n": "a", "bv": 1e308, "v": 1e308}
        ]))
        .unwrap();
        assert_eq!(doc.to_normalized_json(), json!([{"n": "a"}]));

        let doc = Document::new(
            vec![Measurement::default().with_name("a")],
            Measurement::default().with_time(f64::NAN).with_value(f64::INFINITY),
        );
        assert_eq!(doc.to_json(), json!([{"bver": 5, "n": "a"}]));
    }

    struct Prefixing;

    impl MeasurementFactory for Prefixing {
        fn base_from_json(&self, data: &JsonValue) -> Result<Measurement> {
            Measurement::base_from_json(data)
        }

        fn from_json(&self, data: &JsonValue) -> Result<Measurement> {
            let meas = Measurement::from_json(data)?;
            let name = format!("x-{}", meas.name.as_deref().unwrap_or_default());
            Ok(meas.with_name(name))
        }
    }

    #[test]
    fn test_injected_factory() {
        let doc = Document::from_json_with(&Prefixing, &sample()).unwrap();
        let names: Vec<_> = doc.iter().filter_map(|m| m.name.as_deref()).collect();
        assert_eq!(names, vec!["x-a", "x-b"]);
        assert_eq!(doc.base.name.as_deref(), Some("p/"));
    }

    #[test]
    fn test_collect_and_iterate() {
        let mut doc: Document = vec![Measurement::default().with_name("a")]
            .into_iter()
            .collect();
        doc.push(Measurement::default().with_name("b"));

        assert_eq!(doc.base, Measurement::default());
        assert_eq!((&doc).into_iter().count(), 2);
        assert_eq!(doc.into_iter().last().and_then(|m| m.name), Some("b".into()));
    }
}
