//! Construction options for scrolled frames.
//!
//! Options come in two stages:
//!
//! * [`Options`] is what the user asks for. It can be built in code with
//!   chainable setters, or read from a config blob with
//!   [`Options::from_config`]. Nothing is checked at this point.
//! * [`Settings`] is the validated form, created by
//!   [`Settings::from_options`]. A scrolled frame is only ever built from
//!   valid settings, so an invalid option never leaves half-built widgets
//!   behind.
//!
//! # Config blobs
//!
//! A config blob is a json-like object. The keys `scrollbars`, `padding`,
//! `auto_hide`, `auto_update` and `scroll_speed` are frame options; every
//! other key is a style option given to the outer container.
//!
//! ```yaml
//! scrollbars: SW
//! padding: [4, 8]
//! scroll_speed: 3
//! background: white
//! relief: sunken
//! ```
//!
//! With the `toml` feature, the same document can be loaded from toml with
//! [`load_toml`] or [`load_options_file`].
use enumset::EnumSet;

use crate::direction::{Edge, Orientation};
use crate::error::ConfigError;
use crate::Padding;

#[cfg(feature = "toml")]
use std::fs::File;
#[cfg(feature = "toml")]
use std::io::Read;
#[cfg(feature = "toml")]
use std::path::Path;

use std::io;

/// Type of a config item.
pub type Config = serde_json::Value;

/// Type of a config object.
pub type Object = serde_json::Map<String, serde_json::Value>;

/// Raw construction options.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Edges holding a scrollbar, as a placement string like `"SE"`.
    pub scrollbars: String,

    /// Padding around the viewport.
    ///
    /// Either an integer or a list of 2 or 4 integers.
    pub padding: Config,

    /// Hide scrollbars when they are not needed.
    pub auto_hide: bool,

    /// Redraw whenever the viewport is resized.
    pub auto_update: bool,

    /// Number of units scrolled per wheel notch. `0` disables the wheel.
    pub scroll_speed: u32,

    /// Style options given to the outer container.
    pub style: Object,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            scrollbars: String::from("SE"),
            padding: Padding::default().into(),
            auto_hide: true,
            auto_update: true,
            scroll_speed: 2,
            style: Object::new(),
        }
    }
}

impl Options {
    /// Creates options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scrollbar placement string.
    pub fn set_scrollbars<S: Into<String>>(&mut self, scrollbars: S) {
        self.scrollbars = scrollbars.into();
    }

    /// Sets the scrollbar placement string.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn scrollbars<S: Into<String>>(mut self, scrollbars: S) -> Self {
        self.set_scrollbars(scrollbars);
        self
    }

    /// Sets the padding around the viewport.
    pub fn set_padding<C: Into<Config>>(&mut self, padding: C) {
        self.padding = padding.into();
    }

    /// Sets the padding around the viewport.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn padding<C: Into<Config>>(mut self, padding: C) -> Self {
        self.set_padding(padding);
        self
    }

    /// Sets whether unneeded scrollbars are hidden.
    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        self.auto_hide = auto_hide;
    }

    /// Sets whether unneeded scrollbars are hidden.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.set_auto_hide(auto_hide);
        self
    }

    /// Sets whether the frame redraws itself when resized.
    pub fn set_auto_update(&mut self, auto_update: bool) {
        self.auto_update = auto_update;
    }

    /// Sets whether the frame redraws itself when resized.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn auto_update(mut self, auto_update: bool) -> Self {
        self.set_auto_update(auto_update);
        self
    }

    /// Sets the number of units scrolled per wheel notch.
    pub fn set_scroll_speed(&mut self, scroll_speed: u32) {
        self.scroll_speed = scroll_speed;
    }

    /// Sets the number of units scrolled per wheel notch.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn scroll_speed(mut self, scroll_speed: u32) -> Self {
        self.set_scroll_speed(scroll_speed);
        self
    }

    /// Sets a style option of the outer container.
    pub fn set_style<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Config>,
    {
        self.style.insert(key.into(), value.into());
    }

    /// Sets a style option of the outer container.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn style<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Config>,
    {
        self.set_style(key, value);
        self
    }

    /// Reads options from a config blob.
    ///
    /// Missing keys keep their default value. The padding and scrollbars
    /// values are only checked by [`Settings::from_options`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use autoscroll::config::Options;
    /// let config = serde_json::json!({
    ///     "scrollbars": "W",
    ///     "scroll_speed": 0,
    ///     "bg": "white",
    /// });
    /// let options = Options::from_config(&config).unwrap();
    /// assert_eq!(options.scrollbars, "W");
    /// assert_eq!(options.scroll_speed, 0);
    /// assert_eq!(options.style["bg"], "white");
    /// ```
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let object = config
            .as_object()
            .ok_or_else(|| invalid_option("options", "an object", config))?;

        let mut options = Options::default();
        for (key, value) in object {
            match key.as_str() {
                "scrollbars" => {
                    let scrollbars = value
                        .as_str()
                        .ok_or_else(|| invalid_option(key, "a string", value))?;
                    options.set_scrollbars(scrollbars);
                }
                "padding" => options.set_padding(value.clone()),
                "auto_hide" => {
                    options.set_auto_hide(parse_bool(key, value)?);
                }
                "auto_update" => {
                    options.set_auto_update(parse_bool(key, value)?);
                }
                "scroll_speed" => {
                    let speed = value
                        .as_u64()
                        .and_then(|speed| u32::try_from(speed).ok())
                        .ok_or_else(|| {
                            invalid_option(key, "a non-negative integer", value)
                        })?;
                    options.set_scroll_speed(speed);
                }
                _ => options.set_style(key.as_str(), value.clone()),
            }
        }

        Ok(options)
    }
}

fn parse_bool(key: &str, value: &Config) -> Result<bool, ConfigError> {
    value
        .as_bool()
        .ok_or_else(|| invalid_option(key, "a boolean", value))
}

fn invalid_option(
    key: &str,
    expected: &'static str,
    config: &Config,
) -> ConfigError {
    ConfigError::InvalidOption {
        key: key.to_string(),
        expected,
        config: config.clone(),
    }
}

impl From<Padding> for Config {
    fn from(padding: Padding) -> Self {
        serde_json::json!([
            padding.top,
            padding.right,
            padding.bottom,
            padding.left
        ])
    }
}

/// Validated construction options.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Edges holding a scrollbar. At most one per axis.
    pub edges: EnumSet<Edge>,
    /// Padding around the viewport.
    pub padding: Padding,
    /// Hide scrollbars when they are not needed.
    pub auto_hide: bool,
    /// Redraw whenever the viewport is resized.
    pub auto_update: bool,
    /// Number of units scrolled per wheel notch.
    pub scroll_speed: u32,
    /// Background shared by the container, viewport and content.
    pub background: Option<String>,
    /// Cursor shared by the container, viewport and content.
    pub cursor: Option<String>,
    /// Normalized style options for the outer container.
    pub style: Object,
}

impl Settings {
    /// Validates options.
    ///
    /// Style options are normalized:
    ///
    /// * `bd` is renamed `borderwidth`, and `bg` is renamed `background`.
    ///   The long name wins when both are given.
    /// * `borderwidth`, `relief`, `width` and `height` default to `2`,
    ///   `"ridge"`, `300` and `200`.
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let edges = validate_scrollbar_placement(&options.scrollbars)?;
        let padding = validate_padding(&options.padding)?;

        let mut style = options.style.clone();

        let bd = style.remove("bd");
        let borderwidth = style
            .remove("borderwidth")
            .or(bd)
            .unwrap_or_else(|| Config::from(2));
        style.insert("borderwidth".into(), borderwidth);

        for (key, value) in [
            ("relief", Config::from("ridge")),
            ("width", Config::from(300)),
            ("height", Config::from(200)),
        ] {
            style.entry(key).or_insert(value);
        }

        let bg = style.remove("bg");
        let background = non_empty(style.get("background"))
            .or_else(|| non_empty(bg.as_ref()));
        match background {
            Some(ref background) => {
                style.insert("background".into(), background.as_str().into());
            }
            None => {
                style.remove("background");
            }
        }

        let cursor = non_empty(style.get("cursor"));

        Ok(Settings {
            edges,
            padding,
            auto_hide: options.auto_hide,
            auto_update: options.auto_update,
            scroll_speed: options.scroll_speed,
            background,
            cursor,
            style,
        })
    }

    /// Returns the edge holding the scrollbar for this axis, if any.
    pub fn scrollbar_edge(&self, o: Orientation) -> Option<Edge> {
        (self.edges & o.edges()).iter().next()
    }

    /// Returns `true` if this axis has a scrollbar.
    pub fn has_scrollbar(&self, o: Orientation) -> bool {
        self.scrollbar_edge(o).is_some()
    }

    /// Returns the options shared by the three inner surfaces.
    pub fn shared_style(&self) -> Object {
        let mut object = Object::new();
        if let Some(ref background) = self.background {
            object.insert("background".into(), background.as_str().into());
        }
        if let Some(ref cursor) = self.cursor {
            object.insert("cursor".into(), cursor.as_str().into());
        }
        object
    }
}

pub(crate) fn non_empty(value: Option<&Config>) -> Option<String> {
    value
        .and_then(Config::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Normalizes a padding value.
///
/// Accepts an integer (all sides), a list of 2 integers (vertical,
/// horizontal) or a list of 4 integers (top, right, bottom, left).
///
/// # Examples
///
/// ```rust
/// # use autoscroll::config::validate_padding;
/// # use autoscroll::Padding;
/// # use serde_json::json;
/// assert_eq!(validate_padding(&json!(5)).unwrap(), Padding::all(5));
/// assert_eq!(validate_padding(&json!([1, 2])).unwrap(), Padding::trbl(1, 2, 1, 2));
/// assert!(validate_padding(&json!([1, 2, 3])).is_err());
/// ```
pub fn validate_padding(config: &Config) -> Result<Padding, ConfigError> {
    let invalid = || ConfigError::InvalidPadding {
        config: config.clone(),
    };

    let as_size =
        |value: &Config| value.as_u64().map(|n| n as usize).ok_or_else(invalid);

    match config {
        Config::Number(_) => as_size(config).map(Padding::all),
        Config::Array(values) => {
            let values = values
                .iter()
                .map(as_size)
                .collect::<Result<Vec<_>, _>>()?;
            match values[..] {
                [vertical, horizontal] => Ok(Padding::vh(vertical, horizontal)),
                [top, right, bottom, left] => {
                    Ok(Padding::trbl(top, right, bottom, left))
                }
                _ => Err(invalid()),
            }
        }
        _ => Err(invalid()),
    }
}

/// Parses a scrollbar placement string into a set of edges.
///
/// The string is made of up to two edge codes (see [`Edge::from_code`]),
/// at most one per axis. The empty string means no scrollbar at all.
///
/// # Examples
///
/// ```rust
/// # use autoscroll::config::validate_scrollbar_placement;
/// # use autoscroll::direction::Edge;
/// assert_eq!(
///     validate_scrollbar_placement("bl").unwrap(),
///     Edge::South | Edge::West
/// );
/// assert!(validate_scrollbar_placement("NS").is_err());
/// ```
pub fn validate_scrollbar_placement(
    placement: &str,
) -> Result<EnumSet<Edge>, ConfigError> {
    let invalid = || ConfigError::InvalidScrollbars {
        placement: placement.to_string(),
    };

    let mut edges = EnumSet::empty();
    for code in placement.chars() {
        let edge = Edge::from_code(code).ok_or_else(invalid)?;
        if edges.contains(edge) || edges.contains(edge.opposite()) {
            return Err(invalid());
        }
        edges.insert(edge);
    }

    if edges.len() > 2 {
        return Err(invalid());
    }

    Ok(edges)
}

/// Possible error returned when loading options.
#[derive(Debug)]
pub enum LoadError {
    /// An error occurred when reading the file.
    Io(io::Error),

    #[cfg(feature = "toml")]
    #[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
    /// An error occurred when parsing the toml content.
    Parse(toml::de::Error),

    /// The document was parsed but holds invalid options.
    Invalid(ConfigError),
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
impl From<toml::de::Error> for LoadError {
    fn from(err: toml::de::Error) -> Self {
        LoadError::Parse(err)
    }
}

impl From<ConfigError> for LoadError {
    fn from(err: ConfigError) -> Self {
        LoadError::Invalid(err)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "could not read options: {err}"),
            #[cfg(feature = "toml")]
            LoadError::Parse(err) => {
                write!(f, "could not parse options: {err}")
            }
            LoadError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Loads options from a toml file.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
pub fn load_options_file<P: AsRef<Path>>(
    filename: P,
) -> Result<Options, LoadError> {
    let content = {
        let mut content = String::new();
        let mut file = File::open(filename)?;
        file.read_to_string(&mut content)?;
        content
    };

    load_toml(&content)
}

/// Loads options from a toml string.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
pub fn load_toml(content: &str) -> Result<Options, LoadError> {
    let config: Config = toml::from_str(content)?;
    Ok(Options::from_config(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn padding_forms() {
        assert_eq!(validate_padding(&json!(0)).unwrap(), Padding::zeroes());
        assert_eq!(
            validate_padding(&json!([3, 0, 0, 3])).unwrap(),
            Padding::default()
        );
        assert_eq!(
            validate_padding(&json!([4, 8])).unwrap(),
            Padding::trbl(4, 8, 4, 8)
        );
    }

    #[test]
    fn padding_errors() {
        for config in [
            json!([]),
            json!([1]),
            json!([1, 2, 3]),
            json!([1, 2, 3, 4, 5]),
            json!(-1),
            json!(1.5),
            json!([1, "2"]),
            json!([1, -2]),
            json!("3"),
            json!(true),
            json!(null),
        ] {
            assert_eq!(
                validate_padding(&config),
                Err(ConfigError::InvalidPadding {
                    config: config.clone()
                }),
                "{config} should be rejected"
            );
        }
    }

    #[test]
    fn placement_aliases() {
        assert_eq!(
            validate_scrollbar_placement("SE").unwrap(),
            Edge::South | Edge::East
        );
        assert_eq!(
            validate_scrollbar_placement("rt").unwrap(),
            Edge::North | Edge::East
        );
        assert_eq!(
            validate_scrollbar_placement("W").unwrap(),
            EnumSet::only(Edge::West)
        );
        assert!(validate_scrollbar_placement("").unwrap().is_empty());
    }

    #[test]
    fn placement_errors() {
        for placement in ["NS", "EW", "TB", "lr", "SS", "nN", "SEN", "X", "S E"] {
            assert!(
                validate_scrollbar_placement(placement).is_err(),
                "{placement:?} should be rejected"
            );
        }
    }

    #[test]
    fn every_opposing_pair_fails() {
        let codes = ['N', 'S', 'E', 'W', 'T', 'B', 'R', 'L'];
        for a in codes {
            for b in codes {
                let (ea, eb) = match (Edge::from_code(a), Edge::from_code(b)) {
                    (Some(ea), Some(eb)) => (ea, eb),
                    _ => unreachable!(),
                };
                let placement: String = [a, b].iter().collect();
                if ea.opposite() == eb {
                    assert!(validate_scrollbar_placement(&placement).is_err());
                }
            }
        }
    }

    #[test]
    fn style_defaults() {
        let settings = Settings::from_options(&Options::default()).unwrap();
        assert_eq!(settings.edges, Edge::South | Edge::East);
        assert_eq!(settings.padding, Padding::trbl(3, 0, 0, 3));
        assert_eq!(settings.style["borderwidth"], 2);
        assert_eq!(settings.style["relief"], "ridge");
        assert_eq!(settings.style["width"], 300);
        assert_eq!(settings.style["height"], 200);
        assert_eq!(settings.background, None);
        assert_eq!(settings.cursor, None);
    }

    #[test]
    fn style_aliases() {
        let options = Options::new()
            .style("bd", 5)
            .style("bg", "red")
            .style("width", 120);
        let settings = Settings::from_options(&options).unwrap();
        assert_eq!(settings.style["borderwidth"], 5);
        assert!(settings.style.get("bd").is_none());
        assert!(settings.style.get("bg").is_none());
        assert_eq!(settings.style["background"], "red");
        assert_eq!(settings.background.as_deref(), Some("red"));
        assert_eq!(settings.style["width"], 120);

        let options = Options::new()
            .style("bd", 5)
            .style("borderwidth", 1)
            .style("bg", "red")
            .style("background", "blue")
            .style("cursor", "");
        let settings = Settings::from_options(&options).unwrap();
        assert_eq!(settings.style["borderwidth"], 1);
        assert_eq!(settings.background.as_deref(), Some("blue"));
        assert_eq!(settings.cursor, None);
    }

    #[test]
    fn options_from_yaml() {
        let config: Config = serde_yaml::from_str(
            r#"
            scrollbars: nw
            padding: [1, 2, 3, 4]
            auto_hide: false
            scroll_speed: 5
            relief: sunken
            "#,
        )
        .unwrap();

        let options = Options::from_config(&config).unwrap();
        assert_eq!(options.scrollbars, "nw");
        assert!(!options.auto_hide);
        assert!(options.auto_update);
        assert_eq!(options.scroll_speed, 5);
        assert_eq!(options.style["relief"], "sunken");

        let settings = Settings::from_options(&options).unwrap();
        assert_eq!(settings.edges, Edge::North | Edge::West);
        assert_eq!(settings.padding, Padding::trbl(1, 2, 3, 4));
        assert_eq!(
            settings.scrollbar_edge(Orientation::Vertical),
            Some(Edge::West)
        );
    }

    #[test]
    fn options_type_errors() {
        let config: Config =
            serde_yaml::from_str("scroll_speed: -2").unwrap();
        assert!(matches!(
            Options::from_config(&config),
            Err(ConfigError::InvalidOption { ref key, .. }) if key == "scroll_speed"
        ));

        let config: Config = serde_yaml::from_str("auto_hide: yes").unwrap();
        assert!(Options::from_config(&config).is_err());

        assert!(Options::from_config(&json!([1, 2])).is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn options_from_toml() {
        let options = load_toml(
            r#"
            scrollbars = "E"
            padding = 0
            bg = "white"
            "#,
        )
        .unwrap();
        let settings = Settings::from_options(&options).unwrap();
        assert_eq!(settings.edges, EnumSet::only(Edge::East));
        assert_eq!(settings.padding, Padding::zeroes());
        assert_eq!(settings.background.as_deref(), Some("white"));
    }
}
