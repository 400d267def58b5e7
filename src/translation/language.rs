//! Language table of the translation backend and language code resolution.

use anyhow::{Result, bail};

use crate::ui::Style;

/// Source language value that asks the backend to detect the language.
pub const AUTO_DETECT: &str = "auto";

/// Language abbreviations accepted by the backend and their names, sorted by abbreviation.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("az", "azerbaijani"),
    ("be", "belarusian"),
    ("bg", "bulgarian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("co", "corsican"),
    ("cs", "czech"),
    ("cy", "welsh"),
    ("da", "danish"),
    ("de", "german"),
    ("el", "greek"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("es", "spanish"),
    ("et", "estonian"),
    ("eu", "basque"),
    ("fa", "persian"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("ga", "irish"),
    ("gd", "scots gaelic"),
    ("gl", "galician"),
    ("gu", "gujarati"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hr", "croatian"),
    ("ht", "haitian creole"),
    ("hu", "hungarian"),
    ("hy", "armenian"),
    ("id", "indonesian"),
    ("ig", "igbo"),
    ("is", "icelandic"),
    ("it", "italian"),
    ("iw", "hebrew"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("ka", "georgian"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("kn", "kannada"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("la", "latin"),
    ("lb", "luxembourgish"),
    ("lo", "lao"),
    ("lt", "lithuanian"),
    ("lv", "latvian"),
    ("mg", "malagasy"),
    ("mi", "maori"),
    ("mk", "macedonian"),
    ("ml", "malayalam"),
    ("mn", "mongolian"),
    ("mr", "marathi"),
    ("ms", "malay"),
    ("mt", "maltese"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("nl", "dutch"),
    ("no", "norwegian"),
    ("ny", "chichewa"),
    ("or", "odia"),
    ("pa", "punjabi"),
    ("pl", "polish"),
    ("ps", "pashto"),
    ("pt", "portuguese"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("sm", "samoan"),
    ("sn", "shona"),
    ("so", "somali"),
    ("sq", "albanian"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("su", "sundanese"),
    ("sv", "swedish"),
    ("sw", "swahili"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("tg", "tajik"),
    ("th", "thai"),
    ("tl", "filipino"),
    ("tr", "turkish"),
    ("ug", "uyghur"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("zu", "zulu"),
];

// Codes the backend still answers to under an older name.
const ALIASES: &[(&str, &str)] = &[("ee", "et")];

/// Prints the language table (index, abbreviation, name) to stdout.
pub fn print_languages() {
    println!("{}", Style::value(render_language_table()));
}

/// Renders the language table as a bordered text table.
pub fn render_language_table() -> String {
    let headers = ("Index", "Abbr", "Language");
    let index_width = headers.0.len().max(LANGUAGES.len().to_string().len());
    let abbr_width = LANGUAGES
        .iter()
        .map(|(abbr, _)| abbr.len())
        .chain(std::iter::once(headers.1.len()))
        .max()
        .unwrap_or_default();
    let name_width = LANGUAGES
        .iter()
        .map(|(_, name)| name.len())
        .chain(std::iter::once(headers.2.len()))
        .max()
        .unwrap_or_default();

    let border = format!(
        "+{}+{}+{}+",
        "-".repeat(index_width + 2),
        "-".repeat(abbr_width + 2),
        "-".repeat(name_width + 2)
    );

    let mut lines = vec![
        border.clone(),
        format!(
            "| {:^index_width$} | {:<abbr_width$} | {:<name_width$} |",
            headers.0, headers.1, headers.2
        ),
        border.clone(),
    ];
    for (n, (abbr, name)) in LANGUAGES.iter().enumerate() {
        lines.push(format!(
            "| {:^index_width$} | {abbr:<abbr_width$} | {name:<name_width$} |",
            n + 1
        ));
    }
    lines.push(border);

    lines.join("\n")
}

/// Resolves a user-supplied language into the backend's abbreviation.
///
/// Accepts an abbreviation or an English language name, case-insensitively.
/// `auto` is accepted only when `allow_auto` is set (source languages).
pub fn resolve_language(input: &str, allow_auto: bool) -> Result<&'static str> {
    let lang = input.trim().to_lowercase();

    if allow_auto && lang == AUTO_DETECT {
        return Ok(AUTO_DETECT);
    }

    let lang = ALIASES
        .iter()
        .find(|(alias, _)| *alias == lang)
        .map_or(lang.as_str(), |(_, code)| *code);

    if let Some((code, _)) = LANGUAGES.iter().find(|(code, _)| *code == lang) {
        return Ok(*code);
    }
    if let Some((code, _)) = LANGUAGES.iter().find(|(_, name)| *name == lang) {
        return Ok(*code);
    }

    bail!(
        "Invalid language: '{input}'\n\n\
         Use an abbreviation (en, ja, zh-cn, ...) or a language name (english, japanese, ...).\n\
         Run 'gtranslate --list' to see all supported languages."
    )
}

/// Looks up the display name for an abbreviation.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(abbr, _)| *abbr == code)
        .map(|(_, name)| *name)
}
