use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Marketing attribution captured from the landing URL and passed through
/// to the API unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utm {
  #[serde(rename = "utmSource", default, skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,
  #[serde(rename = "utmCampaign", default, skip_serializing_if = "Option::is_none")]
  pub campaign: Option<String>,
  #[serde(rename = "utmMedium", default, skip_serializing_if = "Option::is_none")]
  pub medium: Option<String>,
  #[serde(rename = "utmTerm", default, skip_serializing_if = "Option::is_none")]
  pub term: Option<String>,
  #[serde(rename = "utmContent", default, skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
}

impl Utm {
  /// Reads `utm_*` parameters from a query string, with or without the leading `?`.
  /// Empty values are dropped; the first occurrence of a repeated key wins.
  pub fn from_query(query: &str) -> Self {
    let mut utm = Utm::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
      if value.trim().is_empty() {
        continue;
      }
      let slot = match key.as_ref() {
        "utm_source" => &mut utm.source,
        "utm_campaign" => &mut utm.campaign,
        "utm_medium" => &mut utm.medium,
        "utm_term" => &mut utm.term,
        "utm_content" => &mut utm.content,
        _ => continue,
      };
      if slot.is_none() {
        *slot = Some(value.into_owned());
      }
    }
    utm
  }

  pub fn is_empty(&self) -> bool {
    self.source.is_none()
      && self.campaign.is_none()
      && self.medium.is_none()
      && self.term.is_none()
      && self.content.is_none()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_utm_params_and_ignores_others() {
    let utm = Utm::from_query("?utm_source=newsletter&utm_medium=email&ref=abc&utm_campaign=spring%20launch");
    assert_eq!(utm.source.as_deref(), Some("newsletter"));
    assert_eq!(utm.medium.as_deref(), Some("email"));
    assert_eq!(utm.campaign.as_deref(), Some("spring launch"));
    assert_eq!(utm.term, None);
    assert!(!utm.is_empty());
  }

  #[test]
  fn empty_and_repeated_values() {
    let utm = Utm::from_query("utm_source=&utm_term=a&utm_term=b");
    assert_eq!(utm.source, None);
    assert_eq!(utm.term.as_deref(), Some("a"));
    assert!(Utm::from_query("").is_empty());
  }

  #[test]
  fn serializes_with_prefixed_keys() {
    let utm = Utm { source: Some("google".into()), ..Default::default() };
    assert_eq!(serde_json::to_value(&utm).unwrap(), serde_json::json!({"utmSource": "google"}));
  }
}
