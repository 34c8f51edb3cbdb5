// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

fn load_bundle(filename: &str, locale: &LanguageIdentifier) -> Option<FluentBundle<FluentResource>> {
    let content = Asset::get(filename)?;
    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(file = filename, errors = errors.len(), "translation file has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Plain output; the site renders text, not bidi-isolated fragments.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(file = filename, errors = errors.len(), "duplicate translation messages");
    }
    Some(bundle)
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(bundle) = load_bundle(filename, &locale) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(default_locale);
        tracing::debug!(locale = %current_locale, "translations loaded");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches language; locales without a bundle are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        } else {
            tracing::debug!(%locale, "no translations for locale");
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Picks the shipped locale matching `requested`, exactly or by language.
fn match_available(requested: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let requested = requested.replace('_', "-");
    let lang = requested.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang.and_then(|lang| match_available(&lang, available)) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config
        .language
        .as_deref()
        .and_then(|lang| match_available(lang, available))
    {
        return Some(lang);
    }

    // 3. Check OS locale
    os_locale.and_then(|lang| match_available(&lang, available))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en".parse().unwrap(), "es".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config {
            language: Some("en".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(Some("es".to_string()), &config, None, &available());
        assert_eq!(lang, Some("es".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let config = Config {
            language: Some("en".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, Some("es-PA".to_string()), &available());
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_os_region_falls_back_to_language() {
        let lang = resolve_locale(None, &Config::default(), Some("es_PA".to_string()), &available());
        assert_eq!(lang, Some("es".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_unsupported_everywhere() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(Some("de".to_string()), &config, Some("ja-JP".to_string()), &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn bundles_are_embedded_for_both_locales() {
        let i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert_eq!(i18n.available_locales, available());
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn tr_switches_with_locale() {
        let mut i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert_eq!(i18n.tr("gallery-filter-all"), "All");
        i18n.set_locale("es".parse().unwrap());
        assert_eq!(i18n.tr("gallery-filter-all"), "Todas");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en".to_string()), &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_substitutes_count() {
        let i18n = I18n::new(Some("en".to_string()), &Config::default());
        let mut args = FluentArgs::new();
        args.set("count", 3);
        assert_eq!(i18n.tr_with_args("services-min-group", &args), "Minimum 3 people");
    }
}
