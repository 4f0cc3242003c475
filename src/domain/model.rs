use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A scalar value as it appears in the feed. YAML lets authors write
/// `year: 2025` or `year: "2025"`, so every text field accepts any scalar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Int(i) => write!(f, "{}", i),
            // Whole floats keep their fractional part: `2025.0`, not `2025`.
            Scalar::Float(x) if x.is_nan() => f.write_str("nan"),
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Reads an optional field, treating a value of the wrong shape like an
/// absent one.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(serde_yaml::from_value(value).ok())
}

/// Reads an optional list. A non-list value counts as absent; an element of
/// the wrong shape becomes `None` so positions are kept.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::Sequence(items) => Some(
            items
                .into_iter()
                .map(|item| serde_yaml::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// One conference entry exactly as the feed describes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConference {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub dblp: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub rank: Option<RawRank>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<Scalar>,
    /// Entries that are not mappings are `None` and produce no page.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub confs: Option<Vec<Option<RawYearInstance>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRank {
    #[serde(default, deserialize_with = "lenient")]
    pub ccf: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawYearInstance {
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub place: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub timeline: Option<Vec<Option<RawDeadlines>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDeadlines {
    #[serde(default, deserialize_with = "lenient")]
    pub abstract_deadline: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub deadline: Option<Scalar>,
}

/// A conference with every default resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceSeries {
    pub title: String,
    /// Title used for file names; falls back to `conf` rather than `N/A`.
    pub file_title: String,
    pub dblp: String,
    pub ccf_rank: String,
    pub description: String,
    pub instances: Vec<YearInstance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearInstance {
    pub year: String,
    pub date: String,
    pub place: String,
    pub link: String,
    pub abstract_deadline: String,
    pub submit_deadline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub file_name: String,
    pub html: String,
}

/// What a run produced on disk.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub output_dir: String,
    pub stylesheet_path: String,
    pub page_paths: Vec<String>,
    /// Series that had no `confs` entries and therefore no pages.
    pub skipped_series: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display_matches_feed_text() {
        assert_eq!(Scalar::Int(2025).to_string(), "2025");
        assert_eq!(Scalar::Float(2025.0).to_string(), "2025.0");
        assert_eq!(Scalar::Float(2025.5).to_string(), "2025.5");
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Scalar::Bool(true).to_string(), "True");
        assert_eq!(Scalar::Text("TBD".to_string()).to_string(), "TBD");
    }

    #[test]
    fn test_float_year_is_read_as_float() {
        let raw: RawYearInstance = serde_yaml::from_str("year: 2025.0\n").unwrap();
        assert_eq!(raw.year.unwrap().to_string(), "2025.0");
    }

    #[test]
    fn test_wrong_shapes_read_as_absent() {
        let raw: RawConference = serde_yaml::from_str(
            "title: [a, b]\nrank: A\ndescription: {x: 1}\nconfs: {year: 2025}\n",
        )
        .unwrap();

        assert!(raw.title.is_none());
        assert!(raw.rank.is_none());
        assert!(raw.description.is_none());
        assert!(raw.confs.is_none());
    }

    #[test]
    fn test_malformed_list_elements_keep_their_position() {
        let raw: RawYearInstance = serde_yaml::from_str(
            "timeline:\n  - just text\n  - deadline: \"2025-01-15\"\n",
        )
        .unwrap();

        let timeline = raw.timeline.unwrap();
        assert_eq!(timeline.len(), 2);
        assert!(timeline[0].is_none());
        assert!(timeline[1].is_some());
    }
}
