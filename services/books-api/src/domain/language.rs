// Translation language rules
//
// The translate operation accepts a closed set of target languages and
// always translates from English. The enum keeps unknown codes out of the
// infrastructure layer entirely.

/// Source language every translation starts from.
pub const SOURCE_LANGUAGE_CODE: &str = "en";

/// Longest description slice sent to the translation service, in characters.
pub const MAX_TRANSLATE_CHARS: usize = 5000;

/// A permitted translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    En,
    Fr,
    Es,
    De,
}

impl TargetLanguage {
    /// Match a request-supplied code against the allow-list.
    ///
    /// Codes are compared case-sensitively; anything but the four known
    /// lowercase codes is rejected.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(TargetLanguage::En),
            "fr" => Some(TargetLanguage::Fr),
            "es" => Some(TargetLanguage::Es),
            "de" => Some(TargetLanguage::De),
            _ => None,
        }
    }

    /// The wire code the translation service expects.
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::En => "en",
            TargetLanguage::Fr => "fr",
            TargetLanguage::Es => "es",
            TargetLanguage::De => "de",
        }
    }
}
