//! Process-wide registry of built configurations.
//!
//! Each language has one [`OnceLock`] slot. The first caller for a language
//! runs its factory; concurrent first callers block until that single build
//! finishes, and every later lookup is a lock-free read of the same
//! `&'static` value.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::config::LanguageConfiguration;
use crate::error::UnknownLanguage;
use crate::languages;
use crate::service::ServiceHandle;

/// A supported language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    C,
    Html,
    Css,
    Java,
    Dart,
    Json,
    Swift,
    Haskell,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 11] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::C,
        Language::Html,
        Language::Css,
        Language::Java,
        Language::Dart,
        Language::Json,
        Language::Swift,
        Language::Haskell,
    ];

    /// Display name, identical to the configuration's name.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::C => "C",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Java => "Java",
            Language::Dart => "Dart",
            Language::Json => "JSON",
            Language::Swift => "Swift",
            Language::Haskell => "Haskell",
        }
    }

    /// File extensions, without the dot.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyi"],
            Language::JavaScript => &["js", "mjs", "cjs"],
            Language::TypeScript => &["ts", "tsx"],
            Language::C => &["c", "h"],
            Language::Html => &["html", "htm"],
            Language::Css => &["css"],
            Language::Java => &["java"],
            Language::Dart => &["dart"],
            Language::Json => &["json"],
            Language::Swift => &["swift"],
            Language::Haskell => &["hs"],
        }
    }

    /// Short names accepted by [`Language::from_name`] besides the display name.
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::JavaScript => &["js"],
            Language::TypeScript => &["ts"],
            Language::Haskell => &["hs"],
            _ => &[],
        }
    }

    /// Looks a language up by name or alias, ignoring ASCII case.
    ///
    /// ```
    /// use lexa_grammar::Language;
    ///
    /// assert_eq!(Language::from_name("typescript"), Some(Language::TypeScript));
    /// assert_eq!(Language::from_name("JS"), Some(Language::JavaScript));
    /// assert_eq!(Language::from_name("cobol"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Language> {
        let name = name.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.name().eq_ignore_ascii_case(name)
                || lang.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
        })
    }

    /// Looks a language up by file extension, with or without a leading dot.
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Builds a fresh configuration carrying `service`, bypassing the registry.
    pub fn build(self, service: ServiceHandle) -> LanguageConfiguration {
        let factory: fn(ServiceHandle) -> LanguageConfiguration = match self {
            Language::Python => languages::python,
            Language::JavaScript => languages::javascript,
            Language::TypeScript => languages::typescript,
            Language::C => languages::c,
            Language::Html => languages::html,
            Language::Css => languages::css,
            Language::Java => languages::java,
            Language::Dart => languages::dart,
            Language::Json => languages::json,
            Language::Swift => languages::swift,
            Language::Haskell => languages::haskell,
        };
        factory(service)
    }

    /// The shared configuration of this language.
    pub fn configuration(self) -> &'static LanguageConfiguration {
        configuration(self)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_name(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

static REGISTRY: [OnceLock<LanguageConfiguration>; Language::ALL.len()] =
    [const { OnceLock::new() }; Language::ALL.len()];

/// Returns the shared configuration of `language`, building it on first use.
pub fn configuration(language: Language) -> &'static LanguageConfiguration {
    REGISTRY[language.index()].get_or_init(|| {
        let config = language.build(None);
        debug!(
            language = config.name(),
            reserved_identifiers = config.reserved_identifiers().len(),
            reserved_operators = config.reserved_operators().len(),
            "built language configuration"
        );
        config
    })
}

/// Returns true if `language` has already been built.
pub fn is_built(language: Language) -> bool {
    REGISTRY[language.index()].get().is_some()
}

/// Iterates over every configuration, building any that are missing.
pub fn all() -> impl Iterator<Item = &'static LanguageConfiguration> {
    Language::ALL.into_iter().map(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use crate::service::tests::StubService;
    use crate::service::LanguageService;

    #[test]
    fn test_every_language_builds_with_matching_name() {
        for lang in Language::ALL {
            assert_eq!(configuration(lang).name(), lang.name());
            assert!(is_built(lang));
        }
        assert_eq!(all().count(), Language::ALL.len());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, lang) in Language::ALL.into_iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }

    #[test]
    fn test_from_name_and_alias() {
        assert_eq!(Language::from_name("Python"), Some(Language::Python));
        assert_eq!(Language::from_name("html"), Some(Language::Html));
        assert_eq!(Language::from_name(" ts "), Some(Language::TypeScript));
        assert_eq!("json".parse::<Language>(), Ok(Language::Json));
        assert_eq!(
            "brainfuck".parse::<Language>(),
            Err(UnknownLanguage("brainfuck".to_string()))
        );
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("pyi"), Some(Language::Python));
        assert_eq!(Language::from_extension(".h"), Some(Language::C));
        assert_eq!(Language::from_extension("TSX"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("rs"), None);
    }

    #[test]
    fn test_extensions_are_unique() {
        let mut seen = rustc_hash::FxHashSet::default();
        for lang in Language::ALL {
            for ext in lang.extensions() {
                assert!(seen.insert(*ext), "duplicate extension {ext}");
            }
        }
    }

    #[test]
    fn test_concurrent_first_access_yields_one_value() {
        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| configuration(Language::Haskell) as *const _ as usize)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_service_attachment_leaves_registry_untouched() {
        let service: Arc<dyn LanguageService> = Arc::new(StubService("pyright"));
        let shared = configuration(Language::Python);
        let derived = shared.with_language_service(service.clone());
        let fresh = Language::Python.build(Some(service));
        assert!(shared.language_service().is_none());
        assert_eq!(derived, fresh);
        assert!(std::ptr::eq(shared, configuration(Language::Python)));
    }
}
