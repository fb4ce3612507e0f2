use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use fluent_bundle::{FluentBundle, FluentResource};
use tracing::error;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

const BUNDLED: &[(&str, &str)] = &[
    ("en-US", include_str!("../assets/i18n/en-US.ftl")),
    ("fr", include_str!("../assets/i18n/fr.ftl")),
];

/// Maps a label key to a display string.
pub trait Translate {
    fn tr(&self, key: &str) -> String;
}

/// Fluent bundles for the locales shipped with the crate
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    /// Load the bundled locales and select `requested` when it is one of them
    /// (exact match first, then language-only), else en-US.
    pub fn new(requested: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (tag, source) in BUNDLED {
            let Ok(locale) = tag.parse::<LanguageIdentifier>() else {
                continue;
            };
            let resource = FluentResource::try_new(source.to_string()).unwrap_or_else(|(partial, errors)| {
                error!("Errors in {} translations: {:?}", tag, errors);
                partial
            });
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                error!("Failed to add {} translations: {:?}", tag, errors);
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale = requested
            .and_then(|tag| resolve_locale(tag, &available_locales))
            .or_else(|| DEFAULT_LOCALE.parse().ok())
            .unwrap_or_default();

        Self {
            bundles,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }
}

impl Translate for I18n {
    /// Unknown keys (including free-text labels that are not Fluent ids)
    /// are returned unchanged.
    fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        key.to_string()
    }
}

fn resolve_locale(tag: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let requested = tag.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&requested) {
        return Some(requested);
    }
    available
        .iter()
        .find(|locale| locale.language == requested.language)
        .cloned()
}

/// Returns every key as-is
struct Passthrough;

impl Translate for Passthrough {
    fn tr(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Cloneable translation handle shared through component context
#[derive(Clone)]
pub struct Translator(Rc<dyn Translate>);

impl Translator {
    pub fn new(translate: impl Translate + 'static) -> Self {
        Self(Rc::new(translate))
    }

    pub fn passthrough() -> Self {
        Self::new(Passthrough)
    }

    pub fn tr(&self, key: &str) -> String {
        self.0.tr(key)
    }
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Translator")
    }
}
