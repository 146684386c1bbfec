//! Widget configuration: defaults, caller overrides and validation

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PaginationError, Result};

/// Option keys that may carry the container locator
const CONTAINER_KEYS: [&str; 2] = ["container", "tag"];

/// Labels shown on the edge controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabels {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self {
            first: "<<".to_string(),
            prev: "<".to_string(),
            next: ">".to_string(),
            last: ">>".to_string(),
        }
    }
}

/// Immutable configuration of one pagination control.
///
/// Every instance starts from its own [`Default`] value; overrides are merged
/// per key and nothing is shared between controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Selector of the element the control renders into
    pub container: String,
    /// Page links shown per window
    pub row_size: u32,
    /// Total number of pages
    pub total: u32,
    /// Positions moved by prev/next
    pub step: u32,
    /// Initially selected page (1-based)
    pub current: u32,
    pub labels: ControlLabels,
    pub show_prev_next: bool,
    pub show_first_last: bool,
    /// Extra class appended to the list element, passed through untouched
    pub sizing_class: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            container: String::new(),
            row_size: 5,
            total: 25,
            step: 5,
            current: 1,
            labels: ControlLabels::default(),
            show_prev_next: true,
            show_first_last: true,
            sizing_class: String::new(),
        }
    }
}

impl Configuration {
    /// Defaults bound to the given container
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Self::default()
        }
    }

    /// Parse caller options (a JSON object) and merge them over the defaults.
    pub fn from_value(options: Value) -> Result<Self> {
        let Value::Object(map) = &options else {
            return Err(PaginationError::config("options must be an object"));
        };

        let locator = CONTAINER_KEYS.iter().find_map(|key| map.get(*key));
        match locator {
            None | Some(Value::Null) => {
                return Err(PaginationError::config("container locator is missing"))
            }
            Some(Value::String(_)) => {}
            Some(_) => {
                return Err(PaginationError::config(
                    "container locator is not a string",
                ))
            }
        }

        let overrides: ConfigOverrides = serde_json::from_value(options)?;
        let config = overrides.apply(Self::default());
        config.validate()?;
        Ok(config)
    }

    /// Parse options given as JSON text
    pub fn from_json(options: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(options)?;
        Self::from_value(value)
    }

    pub fn with_row_size(mut self, row_size: u32) -> Self {
        self.row_size = row_size;
        self
    }

    pub fn with_total(mut self, total: u32) -> Self {
        self.total = total;
        self
    }

    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub fn with_current(mut self, current: u32) -> Self {
        self.current = current;
        self
    }

    pub fn with_labels(mut self, labels: ControlLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_prev_next(mut self, show: bool) -> Self {
        self.show_prev_next = show;
        self
    }

    pub fn with_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    pub fn with_sizing_class(mut self, sizing_class: impl Into<String>) -> Self {
        self.sizing_class = sizing_class.into();
        self
    }

    /// Check the numeric and locator constraints
    pub fn validate(&self) -> Result<()> {
        if self.container.trim().is_empty() {
            return Err(PaginationError::config("container locator is empty"));
        }
        if self.row_size == 0 {
            return Err(PaginationError::config("row size must be greater than zero"));
        }
        if self.step == 0 {
            return Err(PaginationError::config("step must be greater than zero"));
        }
        Ok(())
    }
}

/// Caller-supplied options. Unset keys keep their default.
///
/// Accepts camelCase keys as well as the legacy widget names
/// (`tag`, `row`, `prev_text`, `first_last`, `sizing`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(alias = "tag")]
    pub container: Option<String>,
    #[serde(alias = "row")]
    pub row_size: Option<u32>,
    pub total: Option<u32>,
    pub step: Option<u32>,
    pub current: Option<u32>,
    #[serde(alias = "first_text")]
    pub first_text: Option<String>,
    #[serde(alias = "prev_text")]
    pub prev_text: Option<String>,
    #[serde(alias = "next_text")]
    pub next_text: Option<String>,
    #[serde(alias = "last_text")]
    pub last_text: Option<String>,
    #[serde(alias = "prev_next")]
    pub show_prev_next: Option<bool>,
    #[serde(alias = "first_last")]
    pub show_first_last: Option<bool>,
    #[serde(alias = "sizing")]
    pub sizing_class: Option<String>,
}

impl ConfigOverrides {
    /// Shallow merge: every key present here wins over `base`.
    pub fn apply(self, base: Configuration) -> Configuration {
        let labels = ControlLabels {
            first: self.first_text.unwrap_or(base.labels.first),
            prev: self.prev_text.unwrap_or(base.labels.prev),
            next: self.next_text.unwrap_or(base.labels.next),
            last: self.last_text.unwrap_or(base.labels.last),
        };

        Configuration {
            container: self.container.unwrap_or(base.container),
            row_size: self.row_size.unwrap_or(base.row_size),
            total: self.total.unwrap_or(base.total),
            step: self.step.unwrap_or(base.step),
            current: self.current.unwrap_or(base.current),
            labels,
            show_prev_next: self.show_prev_next.unwrap_or(base.show_prev_next),
            show_first_last: self.show_first_last.unwrap_or(base.show_first_last),
            sizing_class: self.sizing_class.unwrap_or(base.sizing_class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = Configuration::from_value(json!({ "container": "#pager", "total": 40 })).unwrap();
        assert_eq!(config.container, "#pager");
        assert_eq!(config.total, 40);
        assert_eq!(config.row_size, 5);
        assert_eq!(config.step, 5);
        assert_eq!(config.current, 1);
        assert_eq!(config.labels, ControlLabels::default());
        assert!(config.show_prev_next);
        assert!(config.show_first_last);
        assert_eq!(config.sizing_class, "");
    }

    #[test]
    fn test_legacy_keys() {
        let config = Configuration::from_value(json!({
            "tag": ".pagination-box",
            "row": 7,
            "prev_text": "prev",
            "first_last": false,
            "sizing": "pagination-lg",
        }))
        .unwrap();
        assert_eq!(config.container, ".pagination-box");
        assert_eq!(config.row_size, 7);
        assert_eq!(config.labels.prev, "prev");
        assert_eq!(config.labels.next, ">");
        assert!(!config.show_first_last);
        assert_eq!(config.sizing_class, "pagination-lg");
    }

    #[test]
    fn test_defaults_not_shared_between_instances() {
        let a = Configuration::from_value(json!({ "container": "#a", "nextText": "more" })).unwrap();
        let b = Configuration::from_value(json!({ "container": "#b" })).unwrap();
        assert_eq!(a.labels.next, "more");
        assert_eq!(b.labels.next, ">");
    }

    #[test]
    fn test_missing_container() {
        let err = Configuration::from_value(json!({ "total": 10 })).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_container_not_a_string() {
        let err = Configuration::from_value(json!({ "tag": 42 })).unwrap_err();
        assert_eq!(
            err,
            PaginationError::config("container locator is not a string")
        );
    }

    #[test]
    fn test_wrongly_typed_field() {
        let err = Configuration::from_value(json!({ "container": "#p", "row": "five" })).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidConfiguration(_)));

        let err = Configuration::from_value(json!({ "container": "#p", "total": -3 })).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_row_or_step_rejected() {
        assert!(Configuration::from_value(json!({ "container": "#p", "rowSize": 0 })).is_err());
        assert!(Configuration::from_value(json!({ "container": "#p", "step": 0 })).is_err());
        assert!(Configuration::new("#p").with_step(0).validate().is_err());
    }

    #[test]
    fn test_not_an_object() {
        assert!(Configuration::from_value(json!("#pager")).is_err());
        assert!(Configuration::from_json("[1, 2]").is_err());
        assert!(Configuration::from_json("{").is_err());
    }

    #[test]
    fn test_builder() {
        let config = Configuration::new("#p")
            .with_row_size(3)
            .with_total(9)
            .with_current(4)
            .with_prev_next(false);
        assert!(config.validate().is_ok());
        assert_eq!(config.row_size, 3);
        assert_eq!(config.total, 9);
        assert_eq!(config.current, 4);
        assert!(!config.show_prev_next);
    }
}
