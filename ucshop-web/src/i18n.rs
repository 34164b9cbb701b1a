use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use yew::AttrValue;
use yew::functional::{hook, use_context};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Storage key holding the chosen locale.
pub const LOCALE_KEY: &str = "ucshop.locale";
const DEFAULT_LANG: &str = "ru";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "ru",
        name: "Русский",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ru", include_str!("../i18n/ru.json")),
    ("en", include_str!("../i18n/en.json")),
];

static BUNDLES: Lazy<Vec<(&'static str, Value)>> = Lazy::new(|| {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, raw)| match serde_json::from_str(raw) {
            Ok(value) => Some((*code, value)),
            Err(err) => {
                log::error!("locale bundle {code} is invalid: {err}");
                None
            }
        })
        .collect()
});

fn bundle(lang: &str) -> Option<&'static Value> {
    BUNDLES
        .iter()
        .find_map(|(code, value)| (*code == lang).then_some(value))
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn saved_lang() -> String {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
        .filter(|code| bundle(code).is_some())
        .unwrap_or_else(|| DEFAULT_LANG.to_string())
}

thread_local! {
    static CURRENT: RefCell<String> = RefCell::new(saved_lang());
}

/// Switch the active locale.
///
/// Updates `<html lang>` and remembers the choice for the next visit.
/// Unknown codes are ignored.
pub fn set_lang(lang: &str) {
    if bundle(lang).is_none() {
        log::debug!("ignoring unsupported locale {lang}");
        return;
    }
    CURRENT.with(|cell| cell.replace(lang.to_string()));
    if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
        let _ = el.set_attribute("lang", lang);
    }
    if let Ok(storage) = crate::dom::local_storage()
        && let Err(err) = storage.set_item(LOCALE_KEY, lang)
    {
        log::warn!(
            "locale preference not saved: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

/// Two-letter code of the active locale.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let lookup = |lang: &str| {
        bundle(lang)
            .and_then(|b| get_nested_value(b, key))
            .and_then(|v| render_value(v, args))
    };
    CURRENT
        .with(|cell| lookup(cell.borrow().as_str()))
        .or_else(|| lookup(DEFAULT_LANG))
}

/// Translate a key to the current language.
///
/// Falls back to Russian, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Shorthand for [`tr`] with a single placeholder.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}

/// Active locale code from the page's language context.
///
/// Components that call this re-render when the language changes, even
/// when their own props stay equal. Outside a provider it reads the
/// global locale.
#[hook]
pub fn use_lang() -> AttrValue {
    use_context::<AttrValue>().unwrap_or_else(|| AttrValue::from(current_lang()))
}

/// Whole rubles grouped by thousands with non-breaking spaces, e.g. `6 000₽`.
#[must_use]
pub fn fmt_rub(rubles: u64) -> String {
    format!("{}₽", group_thousands(rubles))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

/// Record timestamp in the current locale (browser-side).
#[must_use]
pub fn fmt_datetime(at: &DateTime<Utc>) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let lang = current_lang();
        #[allow(clippy::cast_precision_loss)]
        let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
        date.to_locale_string(&lang, &JsValue::UNDEFINED)
            .as_string()
            .unwrap_or_else(|| at.format("%d.%m.%Y %H:%M").to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        at.format("%d.%m.%Y %H:%M").to_string()
    }
}
