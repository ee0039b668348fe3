use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
    str::FromStr,
};

use crate::{
    animation::value::OptionValue,
    document::selector::Selector,
    document::viewport::Viewport,
    foundation::error::{EmberError, EmberResult},
};

/// Option overrides keyed by role, then animation name, then option name.
pub type PerAnimationOptions = BTreeMap<String, BTreeMap<String, BTreeMap<String, OptionValue>>>;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Process-wide runtime settings.
///
/// Established once before `init` and read by every resolution step afterwards.
pub struct Settings {
    /// Trigger offset applied to the viewport when testing group visibility.
    pub root_margin: RootMargin,
    /// Default spacing in milliseconds between consecutive elements of a group.
    pub delay_between: i64,
    /// Element category (`primary`, `secondary`, ...) to animation name.
    pub default_animations: BTreeMap<String, String>,
    /// Global option defaults shared by every animation.
    pub animation_options: BTreeMap<String, OptionValue>,
    /// Per role and animation option overrides.
    pub per_animation_options: PerAnimationOptions,
    /// Settle delay between gathering groups and starting to observe them.
    pub observe_delay_ms: u64,
    /// Pad added to every element delay before its completed tween starts.
    pub tween_start_pad_ms: u64,
    /// Markup markers used for discovery.
    pub selectors: SelectorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let mut animation_options = BTreeMap::new();
        animation_options.insert("duration".to_string(), OptionValue::Number(0.5));
        animation_options.insert("offset".to_string(), OptionValue::Number(50.0));
        animation_options.insert("stagger".to_string(), OptionValue::Number(0.015));
        animation_options.insert("easing".to_string(), OptionValue::from("power2.out"));

        let mut per_animation_options = BTreeMap::new();
        per_animation_options.insert(crate::ENTRANCE_ROLE.to_string(), BTreeMap::new());

        Self {
            root_margin: RootMargin::default(),
            delay_between: 150,
            default_animations: BTreeMap::from([("primary".to_string(), "fade".to_string())]),
            animation_options,
            per_animation_options,
            observe_delay_ms: 300,
            tween_start_pad_ms: 100,
            selectors: SelectorConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Partial settings used by [`Settings::merge`].
pub struct SettingsPatch {
    /// Replaces [`Settings::root_margin`].
    pub root_margin: Option<RootMargin>,
    /// Replaces [`Settings::delay_between`].
    pub delay_between: Option<i64>,
    /// Replaces [`Settings::default_animations`].
    pub default_animations: Option<BTreeMap<String, String>>,
    /// Merged key by key into [`Settings::animation_options`].
    pub animation_options: Option<BTreeMap<String, OptionValue>>,
    /// Replaces [`Settings::per_animation_options`].
    pub per_animation_options: Option<PerAnimationOptions>,
    /// Replaces [`Settings::observe_delay_ms`].
    pub observe_delay_ms: Option<u64>,
    /// Replaces [`Settings::tween_start_pad_ms`].
    pub tween_start_pad_ms: Option<u64>,
    /// Replaces [`Settings::selectors`].
    pub selectors: Option<SelectorConfig>,
}

impl SettingsPatch {
    /// Parse a patch from JSON.
    pub fn from_reader<R: Read>(r: R) -> EmberResult<Self> {
        serde_json::from_reader(r).map_err(|e| EmberError::serde(format!("settings JSON: {e}")))
    }

    /// Load a patch from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> EmberResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EmberError::validation(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl Settings {
    /// Apply a patch: `animation_options` merges key by key, every other key replaces.
    pub fn merge(&mut self, patch: SettingsPatch) {
        let SettingsPatch {
            root_margin,
            delay_between,
            default_animations,
            animation_options,
            per_animation_options,
            observe_delay_ms,
            tween_start_pad_ms,
            selectors,
        } = patch;

        if let Some(v) = root_margin {
            self.root_margin = v;
        }
        if let Some(v) = delay_between {
            self.delay_between = v;
        }
        if let Some(v) = default_animations {
            self.default_animations = v;
        }
        if let Some(v) = animation_options {
            self.animation_options.extend(v);
        }
        if let Some(v) = per_animation_options {
            self.per_animation_options = v;
        }
        if let Some(v) = observe_delay_ms {
            self.observe_delay_ms = v;
        }
        if let Some(v) = tween_start_pad_ms {
            self.tween_start_pad_ms = v;
        }
        if let Some(v) = selectors {
            self.selectors = v;
        }
    }

    /// Option overrides registered for `(role, name)`, if any.
    pub fn per_animation(&self, role: &str, name: &str) -> Option<&BTreeMap<String, OptionValue>> {
        self.per_animation_options.get(role)?.get(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Class names marking groups, skip zones and animated elements.
pub struct SelectorConfig {
    /// Class marking an entrance group container.
    pub group_class: String,
    /// Class marking a skipped subtree.
    pub skip_class: String,
    /// Class marking an animated element.
    pub element_class: String,
    /// Class prefix naming an element category (`<prefix><category>`).
    pub category_prefix: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            group_class: "ember-entrance-group".to_string(),
            skip_class: "ember-entrance-skip".to_string(),
            element_class: "ember-entrance".to_string(),
            category_prefix: "ember-entrance--".to_string(),
        }
    }
}

impl SelectorConfig {
    /// Matcher for group containers.
    pub fn group(&self) -> Selector {
        Selector::Class(self.group_class.clone())
    }

    /// Matcher for skip zones.
    pub fn skip(&self) -> Selector {
        Selector::Class(self.skip_class.clone())
    }

    /// Matcher for animated elements (marker class or any category class).
    pub fn element(&self) -> Selector {
        Selector::AnyOf(vec![
            Selector::Class(self.element_class.clone()),
            Selector::ClassPrefix(self.category_prefix.clone()),
        ])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A single margin length.
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the matching viewport dimension.
    Percent(f64),
}

impl Length {
    fn resolve(self, basis: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => basis * p / 100.0,
        }
    }
}

impl FromStr for Length {
    type Err = EmberError;

    fn from_str(s: &str) -> EmberResult<Self> {
        let s = s.trim();
        let (num, ctor): (&str, fn(f64) -> Length) = if let Some(n) = s.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Length::Percent)
        } else {
            (s, Length::Px)
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| EmberError::validation(format!("invalid margin length '{s}'")))?;
        if !v.is_finite() {
            return Err(EmberError::validation(format!(
                "margin length must be finite, got '{s}'"
            )));
        }
        Ok(ctor(v))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
/// CSS-style margin shorthand that grows (positive) or shrinks (negative) the viewport
/// when testing intersection.
pub struct RootMargin {
    /// Top edge.
    pub top: Length,
    /// Right edge.
    pub right: Length,
    /// Bottom edge.
    pub bottom: Length,
    /// Left edge.
    pub left: Length,
}

impl Default for RootMargin {
    fn default() -> Self {
        Self {
            top: Length::Px(0.0),
            right: Length::Px(0.0),
            bottom: Length::Px(-250.0),
            left: Length::Px(0.0),
        }
    }
}

impl RootMargin {
    /// Margins in pixels as `(top, right, bottom, left)` for the given viewport.
    pub fn resolve(&self, viewport: &Viewport) -> (f64, f64, f64, f64) {
        (
            self.top.resolve(viewport.height),
            self.right.resolve(viewport.width),
            self.bottom.resolve(viewport.height),
            self.left.resolve(viewport.width),
        )
    }
}

impl FromStr for RootMargin {
    type Err = EmberError;

    fn from_str(s: &str) -> EmberResult<Self> {
        let parts = s
            .split_whitespace()
            .map(Length::from_str)
            .collect::<EmberResult<Vec<_>>>()?;
        let (top, right, bottom, left) = match parts.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => {
                return Err(EmberError::validation(format!(
                    "root margin must have 1 to 4 lengths, got '{s}'"
                )));
            }
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = EmberError;

    fn try_from(s: String) -> EmberResult<Self> {
        s.parse()
    }
}

impl From<RootMargin> for String {
    fn from(m: RootMargin) -> Self {
        format!("{} {} {} {}", m.top, m.right, m.bottom, m.left)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
