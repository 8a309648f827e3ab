//! Typed content document.
//!
//! Mirrors the JSON content file one struct per entity. Every field is optional in
//! the file; defaults are filled here so downstream code works on plain values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// Root of the content file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: String,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub intro: Option<Intro>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub timeline_ranges: Vec<TimeRange>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub highlights: Vec<Highlight>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub metrics: Vec<Metric>,

    #[serde(default, deserialize_with = "deserialize_matrix")]
    pub matrix: Vec<KpiCategory>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub achievements: Vec<Achievement>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub feedback_section: FeedbackSection,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub growth: Vec<String>,
}

impl ContentDocument {
    /// Look up a KPI category by its exact name.
    pub fn category(&self, name: &str) -> Option<&KpiCategory> {
        self.matrix.iter().find(|c| c.name == name)
    }
}

/// One bar on the journey timeline.
///
/// The outer `Option` records whether the key appears in the entry at all, the inner
/// one whether it holds usable text. The timeline normalizer skips the chart only
/// for a key absent from every entry; `"end": null` still means "ends today".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimeRange {
    #[serde(default, deserialize_with = "lenient::present_text")]
    pub lane: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::present_text")]
    pub start: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::present_text")]
    pub end: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::present_text")]
    pub label: Option<Option<String>>,
}

impl TimeRange {
    /// Entry with every key present.
    pub fn new(lane: &str, start: &str, end: &str, label: &str) -> Self {
        let text = |s: &str| Some(Some(s.to_string()));
        Self {
            lane: text(lane),
            start: text(start),
            end: text(end),
            label: text(label),
        }
    }

    pub fn lane(&self) -> Option<&str> {
        self.lane.as_ref().and_then(|v| v.as_deref())
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_ref().and_then(|v| v.as_deref())
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_ref().and_then(|v| v.as_deref())
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_ref().and_then(|v| v.as_deref())
    }

    /// True when `field` is a key of the entry, whatever its value.
    pub fn has(&self, field: &str) -> bool {
        match field {
            "lane" => self.lane.is_some(),
            "start" => self.start.is_some(),
            "end" => self.end.is_some(),
            "label" => self.label.is_some(),
            _ => false,
        }
    }
}

/// Summary card surfacing one notable outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub metric: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub context: String,
}

/// A headline number such as `[12, "projects"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Metric {
    pub value: String,
    pub label: String,
}

impl TryFrom<Value> for Metric {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(parts) => {
                let value = parts
                    .first()
                    .and_then(lenient::scalar_text)
                    .ok_or_else(|| "metric pair has no value".to_string())?;
                let label = parts.get(1).and_then(lenient::scalar_text).unwrap_or_default();
                Ok(Metric { value, label })
            }
            Value::Object(fields) => {
                let value = fields
                    .get("value")
                    .and_then(lenient::scalar_text)
                    .ok_or_else(|| "metric object has no value".to_string())?;
                let label = fields
                    .get("label")
                    .and_then(lenient::scalar_text)
                    .unwrap_or_default();
                Ok(Metric { value, label })
            }
            other => Err(format!(
                "metric must be a pair or object, found {}",
                lenient::json_kind(&other)
            )),
        }
    }
}

/// Named competency area with its supporting bullets, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KpiCategory {
    pub name: String,
    pub bullets: Vec<String>,
}

fn deserialize_matrix<'de, D>(deserializer: D) -> Result<Vec<KpiCategory>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let fields: Map<String, Value> = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(
                "Expected matrix to be a mapping, found {}",
                lenient::json_kind(&other)
            );
            return Ok(Vec::new());
        }
    };

    let mut categories = Vec::with_capacity(fields.len());
    for (name, bullets) in fields {
        if !bullets.is_array() {
            tracing::warn!("Skipping KPI category '{}': bullets are not a list", name);
            continue;
        }
        let what = format!("matrix category '{}'", name);
        categories.push(KpiCategory {
            bullets: lenient::text_items(bullets, &what),
            name,
        });
    }
    Ok(categories)
}

/// Certification or award.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Achievement {
    #[serde(default = "default_achievement_icon", deserialize_with = "lenient::text")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub issuer: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub note: String,
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub link: Option<String>,
}

fn default_achievement_icon() -> String {
    "🎓".to_string()
}

/// Optional introduction block under the hero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Intro {
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_caption: String,
}

/// Feedback tab content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedbackSection {
    #[serde(default, deserialize_with = "lenient::list")]
    pub quotes: Vec<Quote>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub good: Vec<StrengthCard>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub improve: Vec<ImprovementCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub quote: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub org: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub quote: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub org: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_caption: String,
}

impl Testimonial {
    pub fn as_quote(&self) -> Quote {
        Quote {
            quote: self.quote.clone(),
            name: self.name.clone(),
            org: self.org.clone(),
        }
    }
}

/// "Strengths Recognised" card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StrengthCard {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub context: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tag: String,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub evidence_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub evidence: String,
}

/// "Working on Feedback" card (was / now).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImprovementCard {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub was: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub now: String,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub evidence_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub evidence: String,
}
