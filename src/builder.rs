//! Builder pattern for creating SenML documents

use crate::{Document, Measurement, Value};

/// Builder for creating SenML documents with a fluent API
///
/// ```rust
/// use senml_document::DocumentBuilder;
///
/// let doc = DocumentBuilder::new()
///     .base_name("urn:dev:sensor1/")
///     .base_unit("Cel")
///     .add_value("temp", 22.5)
///     .build();
///
/// assert_eq!(doc.normalize()[0].name.as_deref(), Some("urn:dev:sensor1/temp"));
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    base: Measurement,
    measurements: Vec<Measurement>,
}

impl DocumentBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base name prepended to every record name
    pub fn base_name<S: Into<String>>(mut self, name: S) -> Self {
        self.base.name = Some(name.into());
        self
    }

    /// Set the base time added to every record time
    pub fn base_time(mut self, time: f64) -> Self {
        self.base.time = Some(time);
        self
    }

    /// Set the base ISO-8601 timestamp
    pub fn base_isotime<S: Into<String>>(mut self, isotime: S) -> Self {
        self.base.isotime = Some(isotime.into());
        self
    }

    /// Set the unit used by records without one
    pub fn base_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.base.unit = Some(unit.into());
        self
    }

    /// Set the base value added to numeric values
    pub fn base_value(mut self, value: f64) -> Self {
        self.base.value = Some(Value::Numeric(value));
        self
    }

    /// Add a record with a numeric value
    pub fn add_value<S: Into<String>>(self, name: S, value: f64) -> Self {
        self.add_measurement(Measurement::default().with_name(name).with_value(value))
    }

    /// Add a record with a numeric value and a time
    pub fn add_timed_value<S: Into<String>>(self, name: S, value: f64, time: f64) -> Self {
        self.add_measurement(
            Measurement::default()
                .with_name(name)
                .with_value(value)
                .with_time(time),
        )
    }

    /// Add a record with a text value
    pub fn add_text_value<S: Into<String>, V: Into<String>>(self, name: S, value: V) -> Self {
        self.add_measurement(
            Measurement::default()
                .with_name(name)
                .with_value(Value::Text(value.into())),
        )
    }

    /// Add a record with a boolean value
    pub fn add_bool_value<S: Into<String>>(self, name: S, value: bool) -> Self {
        self.add_measurement(Measurement::default().with_name(name).with_value(value))
    }

    /// Add a record with a raw data value
    pub fn add_raw_value<S: Into<String>, V: Into<String>>(self, name: S, data: V) -> Self {
        self.add_measurement(
            Measurement::default()
                .with_name(name)
                .with_value(Value::raw_text(data)),
        )
    }

    /// Add an existing measurement
    pub fn add_measurement(mut self, measurement: Measurement) -> Self {
        self.measurements.push(measurement);
        self
    }

    /// Build the document
    pub fn build(self) -> Document {
        Document::new(self.measurements, self.base)
    }
}
