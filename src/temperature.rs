//! Temperature Conversion
//!
//! Logic behind the props page converter: one value, tagged with the scale the
//! reader last typed into; the other field is always derived.

/// Which field was edited last
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Scale {
    pub fn label(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
        }
    }
}

pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Values this large have no fractional digits left to round
const ROUND3_LIMIT: f64 = 4_503_599_627_370.496; // 2^52 / 1000

/// Round half-up to 3 decimals
fn round3(value: f64) -> f64 {
    if value.abs() >= ROUND3_LIMIT {
        return value;
    }
    let rounded = (value * 1000.0 + 0.5).floor() / 1000.0;
    // -0 reads badly in an input field
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert user input with `convert`.
///
/// Anything that does not parse to a finite number yields an empty string.
pub fn try_convert(input: &str, convert: impl Fn(f64) -> f64) -> String {
    let Ok(value) = input.trim().parse::<f64>() else {
        return String::new();
    };
    if !value.is_finite() {
        return String::new();
    }
    let output = round3(convert(value));
    if output.is_finite() {
        output.to_string()
    } else {
        String::new()
    }
}

/// Converter state: the raw text of the last edited field and its scale
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemperatureInput {
    pub value: String,
    pub scale: Scale,
}

impl TemperatureInput {
    pub fn new(value: impl Into<String>, scale: Scale) -> Self {
        Self {
            value: value.into(),
            scale,
        }
    }

    /// Text shown in the Celsius field
    pub fn celsius(&self) -> String {
        match self.scale {
            Scale::Celsius => self.value.clone(),
            Scale::Fahrenheit => try_convert(&self.value, to_celsius),
        }
    }

    /// Text shown in the Fahrenheit field
    pub fn fahrenheit(&self) -> String {
        match self.scale {
            Scale::Fahrenheit => self.value.clone(),
            Scale::Celsius => try_convert(&self.value, to_fahrenheit),
        }
    }

    /// Text of the field for `scale`
    pub fn field(&self, scale: Scale) -> String {
        match scale {
            Scale::Celsius => self.celsius(),
            Scale::Fahrenheit => self.fahrenheit(),
        }
    }

    /// One-line summary, empty fields shown as 0
    pub fn summary(&self) -> String {
        let or_zero = |s: String| if s.is_empty() { "0".to_string() } else { s };
        format!(
            "{} {} = {} {}",
            or_zero(self.celsius()),
            Scale::Celsius.symbol(),
            or_zero(self.fahrenheit()),
            Scale::Fahrenheit.symbol(),
        )
    }
}
