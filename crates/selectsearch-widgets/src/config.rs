//! Widget configuration.
//!
//! Hosts pass a partial configuration object that is merged over the
//! defaults. Every key replaces the default wholesale except `custom_class`,
//! which is merged key by key so a host can style one element without
//! repeating the others. `lang` also accepts a language code naming one of
//! the built-in presets.
//!
//! # Example
//!
//! ```
//! use selectsearch_widgets::{ClassTarget, Config};
//!
//! let config = Config::from_json(r#"{"list_limit": 5, "custom_class": {"item": "px-2"}}"#)?;
//! assert_eq!(config.limit(), Some(5));
//! assert_eq!(config.class_list("ss-item", ClassTarget::Item), "ss-item px-2");
//! # Ok::<(), selectsearch_widgets::SelectSearchError>(())
//! ```

use crate::error::{Result, SelectSearchError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Localized strings shown by the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lang {
    /// Placeholder text of the filter input
    pub search: String,
    /// Message shown when no item matches
    pub no_results: String,
}

impl Default for Lang {
    fn default() -> Self {
        Self::english()
    }
}

impl Lang {
    /// English strings, the default.
    #[must_use]
    pub fn english() -> Self {
        Self {
            search: "Search...".to_string(),
            no_results: "No results".to_string(),
        }
    }

    /// Italian strings.
    #[must_use]
    pub fn italian() -> Self {
        Self {
            search: "Cerca...".to_string(),
            no_results: "Nessun risultato".to_string(),
        }
    }

    /// Preset for a language code (`"en"`, `"it"`).
    #[must_use]
    pub fn for_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Self::english()),
            "it" => Some(Self::italian()),
            _ => None,
        }
    }
}

/// Extra CSS classes appended to the widget's elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomClass {
    /// Outer container
    pub container: String,
    /// Always-visible summary control
    pub placeholder: String,
    /// Filter input
    pub input: String,
    /// Rendered item list
    pub list: String,
    /// Group heading
    pub group: String,
    /// Rendered item
    pub item: String,
}

/// Element a custom class applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassTarget {
    /// Outer container
    Container,
    /// Placeholder
    Placeholder,
    /// Filter input
    Input,
    /// Item list
    List,
    /// Group heading
    Group,
    /// Item
    Item,
}

/// SelectSearch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Localized strings
    pub lang: Lang,
    /// Minimum query length (in characters) before anything renders
    pub min_length: usize,
    /// Maximum number of matched items rendered, `-1` for no limit
    pub list_limit: i64,
    /// Render the empty option when it matches the query
    pub display_empty: bool,
    /// Always render the empty option, whatever the query
    pub always_display_empty: bool,
    /// Separator between selected items in the placeholder (multiple mode)
    pub separator: String,
    /// Extra CSS classes
    pub custom_class: CustomClass,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            min_length: 0,
            list_limit: -1,
            display_empty: false,
            always_display_empty: false,
            separator: ", ".to_string(),
            custom_class: CustomClass::default(),
        }
    }
}

impl Config {
    /// Merge `overrides` over the default configuration.
    pub fn merged(overrides: Value) -> Result<Self> {
        Self::default().merge_over(overrides)
    }

    /// Merge `overrides` over this configuration.
    pub fn merge_over(&self, overrides: Value) -> Result<Self> {
        let mut base = serde_json::to_value(self)?;
        merge_values(&mut base, overrides)?;
        let config: Self = serde_json::from_value(base)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object and merge it over the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::merged(serde_json::from_str(json)?)
    }

    /// Parse a YAML mapping and merge it over the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml_ng::from_str(yaml)?;
        Self::merged(value)
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.list_limit < -1 {
            return Err(SelectSearchError::InvalidValue {
                field: "list_limit".to_string(),
                message: format!("must be -1 or greater, got {}", self.list_limit),
            });
        }
        Ok(())
    }

    /// Cap on matched items, `None` when unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.list_limit).ok()
    }

    /// Base class followed by the configured custom class, if any.
    #[must_use]
    pub fn class_list(&self, base: &str, target: ClassTarget) -> String {
        let custom = match target {
            ClassTarget::Container => &self.custom_class.container,
            ClassTarget::Placeholder => &self.custom_class.placeholder,
            ClassTarget::Input => &self.custom_class.input,
            ClassTarget::List => &self.custom_class.list,
            ClassTarget::Group => &self.custom_class.group,
            ClassTarget::Item => &self.custom_class.item,
        };
        let custom = custom.trim();
        if custom.is_empty() {
            base.to_string()
        } else {
            format!("{base} {custom}")
        }
    }
}

fn merge_values(base: &mut Value, overrides: Value) -> Result<()> {
    let overrides = match overrides {
        Value::Null => return Ok(()),
        Value::Object(map) => map,
        other => {
            return Err(SelectSearchError::InvalidValue {
                field: "options".to_string(),
                message: format!("expected an object, got {other}"),
            })
        }
    };
    let Value::Object(base) = base else {
        return Ok(());
    };
    for (key, value) in overrides {
        if let ("lang", Value::String(code)) = (key.as_str(), &value) {
            let lang = Lang::for_code(code).ok_or_else(|| SelectSearchError::InvalidValue {
                field: "lang".to_string(),
                message: format!("unknown language code {code:?}"),
            })?;
            base.insert(key, serde_json::to_value(lang)?);
            continue;
        }
        if key == "custom_class" {
            if let (Some(Value::Object(current)), Value::Object(classes)) =
                (base.get_mut("custom_class"), &value)
            {
                current.extend(classes.clone());
                continue;
            }
        }
        base.insert(key, value);
    }
    Ok(())
}
