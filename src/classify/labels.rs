use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A closed set of mutually exclusive outcomes for one classification axis.
///
/// `ALL` is the declaration order, which doubles as the tie-break order:
/// among equal scores the earliest label wins.
pub trait Label: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    const ALL: &'static [Self];
    /// Key used for this axis in reports and fallback evidence.
    const AXIS: &'static str;
    /// Key used in `override: <key>=<value>` evidence.
    const OVERRIDE_KEY: &'static str;

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|label| label.as_str() == value)
    }
}

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, axis = $axis:literal, override_key = $key:literal,
        { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl Label for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];
            const AXIS: &'static str = $axis;
            const OVERRIDE_KEY: &'static str = $key;

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Label>::parse(s).ok_or_else(|| unknown_value::<$name>(s))
            }
        }
    };
}

label_enum! {
    /// Front-end framework a project is built with.
    Framework, axis = "framework", override_key = "framework",
    {
        Next => "next",
        React => "react",
        Nuxt => "nuxt",
        Vue => "vue",
        Taro => "taro",
        Svelte => "svelte",
        Vanilla => "vanilla",
    }
}

label_enum! {
    /// How a project authors its styles.
    StyleSystem, axis = "style_system", override_key = "style",
    {
        Tailwind => "tailwind",
        CssModules => "css-modules",
        Scss => "scss",
        Less => "less",
        StyledComponents => "styled-components",
        Emotion => "emotion",
        Css => "css",
    }
}

label_enum! {
    Language, axis = "language", override_key = "language",
    {
        TypeScript => "typescript",
        JavaScript => "javascript",
    }
}

label_enum! {
    PackageManager, axis = "package_manager", override_key = "package_manager",
    {
        Pnpm => "pnpm",
        Yarn => "yarn",
        Npm => "npm",
        Bun => "bun",
    }
}

fn unknown_value<L: Label>(value: &str) -> String {
    let expected = L::ALL
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("unknown {} '{}' (expected auto, {})", L::AXIS, value, expected)
}

/// Either let the detector decide, or force an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<L> {
    Auto,
    Forced(L),
}

impl<L> Default for Selection<L> {
    fn default() -> Self {
        Selection::Auto
    }
}

impl<L: Label> Selection<L> {
    pub fn forced(self) -> Option<L> {
        match self {
            Selection::Auto => None,
            Selection::Forced(label) => Some(label),
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Selection::Auto)
    }
}

impl<L: Label> FromStr for Selection<L> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Selection::Auto);
        }
        L::parse(s)
            .map(Selection::Forced)
            .ok_or_else(|| unknown_value::<L>(s))
    }
}

impl<L: Label> fmt::Display for Selection<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Auto => f.write_str("auto"),
            Selection::Forced(label) => write!(f, "{}", label),
        }
    }
}

impl<'de, L: Label> Deserialize<'de> for Selection<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_text() {
        for label in StyleSystem::ALL {
            assert_eq!(label.as_str().parse::<StyleSystem>().unwrap(), *label);
        }
        assert_eq!("css-modules".parse::<StyleSystem>().unwrap(), StyleSystem::CssModules);
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("auto".parse::<Selection<Framework>>().unwrap(), Selection::Auto);
        assert_eq!(
            "nuxt".parse::<Selection<Framework>>().unwrap(),
            Selection::Forced(Framework::Nuxt)
        );

        let err = "angular".parse::<Selection<Framework>>().unwrap_err();
        assert!(err.contains("unknown framework"));
        assert!(err.contains("vanilla"));
    }

    #[test]
    fn test_serialized_names_match_display() {
        let json = serde_json::to_string(&StyleSystem::StyledComponents).unwrap();
        assert_eq!(json, "\"styled-components\"");
        assert_eq!(StyleSystem::StyledComponents.to_string(), "styled-components");
    }
}
