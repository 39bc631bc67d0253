//! vCard version, charset and line-ending selection.
//!
//! Contact importers disagree on what they accept. iOS reads unlabelled UTF-8
//! in 3.0 cards, older Android importers need `CHARSET=UTF-8` to avoid
//! mojibake, feature phones only understand 2.1 with quoted-printable, and
//! RFC 6350 forbids `CHARSET` altogether. A [`Profile`] bundles the choices
//! that work for one family of importers; [`EncodeOptions`] carries them into
//! the encoder and can be adjusted field by field.

use std::fmt;
use std::str::FromStr;

use crate::error::VCardError;
use crate::name::NameSplit;

/// vCard format version written to the `VERSION` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// vCard 2.1 (Versit). Non-ASCII values travel as quoted-printable.
    V2_1,
    /// vCard 3.0 (RFC 2426).
    V3_0,
    /// vCard 4.0 (RFC 6350). UTF-8 only.
    V4_0,
}

impl Version {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
        }
    }

    /// Whether the `CHARSET` parameter may appear at all.
    pub fn allows_charset(self) -> bool {
        !matches!(self, Self::V4_0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = VCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.1" | "21" => Ok(Self::V2_1),
            "3.0" | "3" | "30" => Ok(Self::V3_0),
            "4.0" | "4" | "40" => Ok(Self::V4_0),
            other => Err(VCardError::UnknownVersion(other.to_owned())),
        }
    }
}

/// When to attach `CHARSET=UTF-8` to a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharsetPolicy {
    /// Never label the charset.
    #[default]
    Never,
    /// Label only properties whose value contains non-ASCII characters.
    NonAscii,
    /// Label every text property.
    Always,
}

/// Line terminator between content lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`, as every vCard RFC requires.
    #[default]
    Crlf,
    /// Bare `\n`. Some QR scanner apps reject CR in payloads.
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Importer-oriented presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// vCard 3.0, unlabelled UTF-8, CRLF.
    #[default]
    Standard,
    /// Same wire shape as [`Profile::Standard`]; kept separate so the CLI
    /// can name the target explicitly.
    Apple,
    /// vCard 3.0 with `CHARSET=UTF-8` on non-ASCII properties.
    Android,
    /// vCard 2.1 with charset labels and quoted-printable values.
    Legacy,
    /// vCard 4.0.
    Modern,
    /// vCard 3.0 with the whole name in the given-name slot and `\n` joins.
    Minimal,
}

impl Profile {
    pub const ALL: [Self; 6] = [
        Self::Standard,
        Self::Apple,
        Self::Android,
        Self::Legacy,
        Self::Modern,
        Self::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Apple => "apple",
            Self::Android => "android",
            Self::Legacy => "legacy",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
        }
    }

    /// The version this preset writes unless overridden.
    pub fn version(self) -> Version {
        match self {
            Self::Legacy => Version::V2_1,
            Self::Modern => Version::V4_0,
            Self::Standard | Self::Apple | Self::Android | Self::Minimal => Version::V3_0,
        }
    }

    pub fn options(self) -> EncodeOptions {
        let base = EncodeOptions {
            version: self.version(),
            ..EncodeOptions::default()
        };
        match self {
            Self::Standard | Self::Apple | Self::Modern => base,
            Self::Android | Self::Legacy => EncodeOptions {
                charset: CharsetPolicy::NonAscii,
                ..base
            },
            Self::Minimal => EncodeOptions {
                name_split: NameSplit::GivenOnly,
                line_ending: LineEnding::Lf,
                ..base
            },
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = VCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| VCardError::UnknownProfile(s.to_owned()))
    }
}

/// Version selection as requested by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionChoice {
    /// Use the profile's version.
    #[default]
    Auto,
    Exact(Version),
}

impl VersionChoice {
    pub fn resolve(self, profile: Profile) -> Version {
        match self {
            Self::Auto => profile.version(),
            Self::Exact(version) => version,
        }
    }
}

/// Everything the encoder needs to know besides the contact itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub version: Version,
    pub charset: CharsetPolicy,
    pub line_ending: LineEnding,
    pub name_split: NameSplit,
    /// Fold content lines longer than 75 octets.
    pub fold: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            version: Version::V3_0,
            charset: CharsetPolicy::Never,
            line_ending: LineEnding::Crlf,
            name_split: NameSplit::Auto,
            fold: true,
        }
    }
}

impl EncodeOptions {
    /// Options for `profile`, with the version chosen by `choice`.
    pub fn for_profile(profile: Profile, choice: VersionChoice) -> Self {
        Self {
            version: choice.resolve(profile),
            ..profile.options()
        }
    }

    pub fn with_version(self, version: Version) -> Self {
        Self { version, ..self }
    }

    pub fn with_charset(self, charset: CharsetPolicy) -> Self {
        Self { charset, ..self }
    }

    pub fn with_line_ending(self, line_ending: LineEnding) -> Self {
        Self {
            line_ending,
            ..self
        }
    }

    pub fn with_name_split(self, name_split: NameSplit) -> Self {
        Self { name_split, ..self }
    }

    /// Whether a property should carry `CHARSET=UTF-8`.
    pub(crate) fn wants_charset(&self, is_text: bool, value: &str) -> bool {
        if !self.version.allows_charset() {
            return false;
        }
        match self.charset {
            CharsetPolicy::Never => false,
            CharsetPolicy::NonAscii => !value.is_ascii(),
            CharsetPolicy::Always => is_text || !value.is_ascii(),
        }
    }
}
