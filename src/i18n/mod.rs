//! Localized user-facing messages.
//!
//! Messages are looked up by key. The process-wide locale is resolved once
//! from `PICTORA_LOCALE`, falling back to `LANG`, then English, and can be
//! replaced with [`set_locale`].

use std::sync::{OnceLock, RwLock};

use strum::{Display, EnumString};

/// Key for the "base URL or API key missing" message.
pub const ERROR_IMAGE_API_CONFIG_INCOMPLETE: &str = "error_image_api_config_incomplete";
/// Key for the "response carried no image" message.
pub const ERROR_IMAGE_GENERATION_NO_IMAGE: &str = "error_image_generation_no_image";

static CURRENT_LOCALE: OnceLock<RwLock<Locale>> = OnceLock::new();

/// Supported message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[default]
    #[strum(to_string = "en", serialize = "en-US", serialize = "en-GB")]
    En,
    #[strum(to_string = "zh-CN", serialize = "zh", serialize = "zh-Hans")]
    ZhCn,
}

impl Locale {
    /// Parse a POSIX or BCP 47 locale tag (`zh_CN.UTF-8`, `en-US`, `C`).
    ///
    /// Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default().replace('_', "-");
        if let Ok(locale) = tag.parse() {
            return locale;
        }
        if tag.to_ascii_lowercase().starts_with("zh") {
            Self::ZhCn
        } else {
            Self::En
        }
    }

    /// Resolve from `PICTORA_LOCALE`, then `LANG`.
    pub fn from_env() -> Self {
        std::env::var("PICTORA_LOCALE")
            .or_else(|_| std::env::var("LANG"))
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }

    /// Look up `key` in this locale's catalog. Unknown keys come back as-is.
    pub fn translate(self, key: &str) -> String {
        let catalog = match self {
            Self::En => EN,
            Self::ZhCn => ZH_CN,
        };
        catalog
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, message)| (*message).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

fn locale_cell() -> &'static RwLock<Locale> {
    CURRENT_LOCALE.get_or_init(|| RwLock::new(Locale::from_env()))
}

/// The process-wide locale.
pub fn current_locale() -> Locale {
    *locale_cell()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replace the process-wide locale.
pub fn set_locale(locale: Locale) {
    *locale_cell()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = locale;
}

/// Translate `key` using the process-wide locale.
pub fn t(key: &str) -> String {
    current_locale().translate(key)
}

const EN: &[(&str, &str)] = &[
    (
        ERROR_IMAGE_API_CONFIG_INCOMPLETE,
        "Image API configuration is incomplete. Please set the base URL and API key.",
    ),
    (
        ERROR_IMAGE_GENERATION_NO_IMAGE,
        "No image was found in the image generation response.",
    ),
];

const ZH_CN: &[(&str, &str)] = &[
    (
        ERROR_IMAGE_API_CONFIG_INCOMPLETE,
        "图片 API 配置不完整，请设置 API 地址和 API Key。",
    ),
    (ERROR_IMAGE_GENERATION_NO_IMAGE, "未能从生成结果中获取图片。"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_understands_posix_and_bcp47() {
        assert_eq!(Locale::from_tag("zh_CN.UTF-8"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("zh-TW"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("EN"), Locale::En);
        assert_eq!(Locale::from_tag("C"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn translate_returns_catalog_entry() {
        assert_eq!(
            Locale::ZhCn.translate(ERROR_IMAGE_GENERATION_NO_IMAGE),
            "未能从生成结果中获取图片。"
        );
        assert!(Locale::En
            .translate(ERROR_IMAGE_API_CONFIG_INCOMPLETE)
            .contains("incomplete"));
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(Locale::En.translate("no_such_key"), "no_such_key");
        assert_eq!(Locale::ZhCn.translate("no_such_key"), "no_such_key");
    }

    #[test]
    fn every_key_is_translated_in_every_locale() {
        for (key, _) in EN {
            assert!(ZH_CN.iter().any(|(k, _)| k == key), "missing zh-CN entry for {key}");
        }
        assert_eq!(EN.len(), ZH_CN.len());
    }
}
