/// A supported interface language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
    pub message: &'static str,
    pub button: &'static str,
}

impl LanguageEntry {
    const fn new(
        code: &'static str,
        label: &'static str,
        flag: &'static str,
        message: &'static str,
        button: &'static str,
    ) -> Self {
        Self {
            code,
            label,
            flag,
            message,
            button,
        }
    }

    /// Path of the small flag icon served next to the app.
    pub fn flag_asset_path(&self) -> String {
        format!("/flags/{}.png", self.code)
    }
}

pub static CATALOG: [LanguageEntry; 15] = [
    LanguageEntry::new("en", "English", "🇬🇧", "Good day!", "Continue"),
    LanguageEntry::new("es", "Español", "🇪🇸", "¡Buenos días!", "Continuar"),
    LanguageEntry::new("fr", "Français", "🇫🇷", "Bonjour !", "Continuer"),
    LanguageEntry::new("de", "Deutsch", "🇩🇪", "Guten Tag!", "Fortsetzen"),
    LanguageEntry::new("it", "Italiano", "🇮🇹", "Buongiorno!", "Continua"),
    LanguageEntry::new("pt", "Português", "🇵🇹", "Bom dia!", "Continuar"),
    LanguageEntry::new("ru", "Русский", "🇷🇺", "Добрый день!", "Продолжить"),
    LanguageEntry::new("zh", "中文", "🇨🇳", "您好！", "继续"),
    LanguageEntry::new("ja", "日本語", "🇯🇵", "おはようございます！", "続ける"),
    LanguageEntry::new("ko", "한국어", "🇰🇷", "안녕하세요!", "계속하다"),
    LanguageEntry::new("ar", "العربية", "🇸🇦", "صباح الخير!", "استمر"),
    LanguageEntry::new("hi", "हिन्दी", "🇮🇳", "नमस्कार!", "जारी रखें"),
    LanguageEntry::new("nl", "Nederlands", "🇳🇱", "Goedendag!", "Doorgaan"),
    LanguageEntry::new("sv", "Svenska", "🇸🇪", "God dag!", "Fortsätt"),
    LanguageEntry::new("pl", "Polski", "🇵🇱", "Dzień dobry!", "Kontynuuj"),
];

pub fn default_language() -> &'static LanguageEntry {
    &CATALOG[0]
}

pub fn find(code: &str) -> Option<&'static LanguageEntry> {
    CATALOG.iter().find(|entry| entry.code == code)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = CATALOG.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), CATALOG.len());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(default_language().code, "en");
        assert_eq!(default_language().label, "English");
    }

    #[test]
    fn find_by_code() {
        assert_eq!(find("ja").map(|e| e.label), Some("日本語"));
        assert_eq!(find("xx"), None);
    }

    #[test]
    fn flag_path_uses_code() {
        assert_eq!(find("sv").unwrap().flag_asset_path(), "/flags/sv.png");
    }
}
