//! Language codes known to the transliteration providers.
//!
//! Google Input Tools identifies transliteration engines by an input tool
//! code (`itc`) such as `mr-t-i0-und`. The table below covers the languages
//! offered by the document builder; anything else falls back to the generic
//! `{code}-t-i0-und` form.

/// A supported target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code used by both providers.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Google Input Tools `itc` tag.
    pub input_tool: &'static str,
}

#[rustfmt::skip]
const LANGUAGES: &[Language] = &[
    Language { code: "as", name: "Assamese", input_tool: "as-t-i0-und" },
    Language { code: "bn", name: "Bengali", input_tool: "bn-t-i0-und" },
    Language { code: "gu", name: "Gujarati", input_tool: "gu-t-i0-und" },
    Language { code: "hi", name: "Hindi", input_tool: "hi-t-i0-und" },
    Language { code: "kn", name: "Kannada", input_tool: "kn-t-i0-und" },
    Language { code: "ml", name: "Malayalam", input_tool: "ml-t-i0-und" },
    Language { code: "mr", name: "Marathi", input_tool: "mr-t-i0-und" },
    Language { code: "ne", name: "Nepali", input_tool: "ne-t-i0-und" },
    Language { code: "or", name: "Odia", input_tool: "or-t-i0-und" },
    Language { code: "pa", name: "Punjabi", input_tool: "pa-t-i0-und" },
    Language { code: "sa", name: "Sanskrit", input_tool: "sa-t-i0-und" },
    Language { code: "si", name: "Sinhala", input_tool: "si-t-i0-und" },
    Language { code: "ta", name: "Tamil", input_tool: "ta-t-i0-und" },
    Language { code: "te", name: "Telugu", input_tool: "te-t-i0-und" },
    Language { code: "ur", name: "Urdu", input_tool: "ur-t-i0-und" },
];

/// All languages with a known input tool tag.
pub fn supported_languages() -> &'static [Language] {
    LANGUAGES
}

/// Look up a language by code.
pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Google Input Tools tag for a language code.
pub fn input_tool_for(code: &str) -> String {
    match find(code) {
        Some(lang) => lang.input_tool.to_string(),
        None => format!("{}-t-i0-und", code),
    }
}
