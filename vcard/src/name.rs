//! Structured-name (`N`) decomposition.
//!
//! `FN` is shown to the user, but most importers sort and match on `N`.
//! Latin names are written given-first and separated by spaces, CJK names
//! are written family-first and usually without any separator, so the split
//! depends on the script of the name.

/// Chinese compound (two-character) surnames, simplified and traditional.
const CHINESE_COMPOUND_SURNAMES: &[&str] = &[
    "欧阳", "司马", "诸葛", "上官", "东方", "皇甫", "尉迟", "公孙", "慕容", "长孙", "宇文",
    "司徒", "夏侯", "令狐", "端木", "独孤", "南宫", "西门", "轩辕", "呼延", "闻人", "澹台",
    "公冶", "宗政", "濮阳", "太史", "申屠", "钟离", "百里", "东郭", "歐陽", "司馬", "諸葛",
    "東方", "尉遲", "長孫", "獨孤", "軒轅", "聞人", "鍾離",
];

/// Korean two-syllable surnames.
const KOREAN_COMPOUND_SURNAMES: &[&str] = &["남궁", "황보", "제갈", "선우", "독고", "사공", "서문"];

const NAME_PREFIXES: &[&str] = &["mr", "mrs", "ms", "miss", "mx", "dr", "prof", "sir", "dame"];

const NAME_SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "phd", "md", "esq", "mba", "dds",
];

/// Separators used when a foreign name is transliterated into CJK.
const INTERPUNCT: &[char] = &['·', '・', '•', '‧'];

/// Writing system of a name, as far as the split rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Han,
    /// Japanese: contains hiragana or katakana.
    Kana,
    Hangul,
}

impl Script {
    pub fn is_cjk(self) -> bool {
        !matches!(self, Self::Latin)
    }
}

/// How the full name is spread over the `N` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameSplit {
    /// Decompose by script.
    #[default]
    Auto,
    /// Put the whole name into the given-name component.
    GivenOnly,
}

/// The five components of the vCard `N` property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    pub family: String,
    pub given: String,
    pub additional: String,
    pub prefixes: String,
    pub suffixes: String,
}

impl StructuredName {
    pub fn given_only(name: &str) -> Self {
        Self {
            given: name.to_owned(),
            ..Self::default()
        }
    }

    pub fn family_given(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    /// Components in `N` order.
    pub fn components(&self) -> [&str; 5] {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{3005}')
}

fn is_kana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}')
        && !INTERPUNCT.contains(&c)
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

/// Classify `name`. Kana wins over Han so that Japanese names mixing both
/// are treated as Japanese.
pub fn detect_script(name: &str) -> Script {
    if name.chars().any(is_kana) {
        Script::Kana
    } else if name.chars().any(is_hangul) {
        Script::Hangul
    } else if name.chars().any(is_han) {
        Script::Han
    } else {
        Script::Latin
    }
}

/// Split `name` into `N` components according to `strategy`.
pub fn split_name(name: &str, strategy: NameSplit) -> StructuredName {
    let name = name.trim();
    if name.is_empty() {
        return StructuredName::default();
    }
    match strategy {
        NameSplit::GivenOnly => StructuredName::given_only(name),
        NameSplit::Auto => {
            let script = detect_script(name);
            let split = if script.is_cjk() {
                split_cjk(name, script)
            } else {
                split_latin(name)
            };
            log::debug!("split {script:?} name into {:?}", split.components());
            split
        }
    }
}

fn split_cjk(name: &str, script: Script) -> StructuredName {
    if name.contains(INTERPUNCT) {
        return split_transliterated(name);
    }

    let tokens: Vec<&str> = name.split_whitespace().collect();
    if let [family, rest @ ..] = tokens.as_slice()
        && !rest.is_empty()
    {
        return StructuredName::family_given(*family, rest.concat());
    }

    let compounds = match script {
        Script::Hangul => KOREAN_COMPOUND_SURNAMES,
        Script::Han => CHINESE_COMPOUND_SURNAMES,
        // Japanese family names have no fixed length; without a space the
        // boundary is unknown.
        Script::Kana | Script::Latin => return StructuredName::given_only(name),
    };

    let len = name.chars().count();
    if let Some(surname) = compounds
        .iter()
        .find(|s| name.starts_with(**s) && len > s.chars().count())
    {
        return StructuredName::family_given(*surname, &name[surname.len()..]);
    }

    let family_chars = match (script, len) {
        (_, 2 | 3) => 1,
        // Four Han characters without a known compound surname are most
        // often a Japanese two-plus-two name.
        (Script::Han, 4) => 2,
        (Script::Hangul, 4) => 1,
        _ => return StructuredName::given_only(name),
    };
    let boundary = name
        .char_indices()
        .nth(family_chars)
        .map(|(i, _)| i)
        .unwrap_or(name.len());
    StructuredName::family_given(&name[..boundary], &name[boundary..])
}

/// `列夫·托尔斯泰`: given first, family last, like the source language.
fn split_transliterated(name: &str) -> StructuredName {
    let parts: Vec<&str> = name
        .split(INTERPUNCT)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [] => StructuredName::default(),
        [only] => StructuredName::given_only(only),
        [given, middle @ .., family] => StructuredName {
            family: (*family).to_owned(),
            given: (*given).to_owned(),
            additional: middle.join(" "),
            ..StructuredName::default()
        },
    }
}

fn normalized_affix(token: &str) -> String {
    token.trim_end_matches('.').replace('.', "").to_lowercase()
}

fn is_suffix(token: &str) -> bool {
    NAME_SUFFIXES.contains(&normalized_affix(token).as_str())
}

/// Whitespace- and comma-separated tokens; commas only delimit.
fn name_tokens(value: &str) -> Vec<&str> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

fn split_latin(name: &str) -> StructuredName {
    let (family_from_comma, rest) = match name.split_once(',') {
        // `Martin Luther King, Jr.`: the comma only sets off the suffix.
        Some((_, rest)) if name_tokens(rest).iter().all(|t| is_suffix(t)) => (None, name),
        Some((family, rest)) if !family.trim().is_empty() && !rest.trim().is_empty() => {
            (Some(family.trim()), rest.trim())
        }
        _ => (None, name),
    };

    let mut tokens = name_tokens(rest);

    let mut prefixes = Vec::new();
    while tokens.len() > 1 && NAME_PREFIXES.contains(&normalized_affix(tokens[0]).as_str()) {
        prefixes.push(tokens.remove(0));
    }
    let mut suffixes = Vec::new();
    while tokens.len() > 1
        && tokens
            .last()
            .is_some_and(|t| is_suffix(t))
    {
        if let Some(suffix) = tokens.pop() {
            suffixes.insert(0, suffix);
        }
    }

    let mut split = match (family_from_comma, tokens.as_slice()) {
        (Some(family), [given, additional @ ..]) => StructuredName {
            family: family.to_owned(),
            given: (*given).to_owned(),
            additional: additional.join(" "),
            ..StructuredName::default()
        },
        (Some(family), []) => StructuredName {
            family: family.to_owned(),
            ..StructuredName::default()
        },
        (None, [only]) => StructuredName::given_only(only),
        (None, [given, additional @ .., family]) => StructuredName {
            family: (*family).to_owned(),
            given: (*given).to_owned(),
            additional: additional.join(" "),
            ..StructuredName::default()
        },
        (None, []) => StructuredName::default(),
    };
    split.prefixes = prefixes.join(" ");
    split.suffixes = suffixes.join(" ");
    split
}
