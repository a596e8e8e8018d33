//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Map a language tag such as `"zh-CN"` or `"en"` to a supported locale
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Locale of the running system
    pub fn detect() -> Self {
        Self::from_tag(&locale_config::Locale::current().to_string())
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Popup menu
    map.insert("menu-detach", ("Detach module", "分离模块"));
    map.insert("menu-attach", ("Attach module", "停靠模块"));
    map.insert("menu-fullscreen", ("Fullscreen", "全屏"));
    map.insert("menu-leave-fullscreen", ("Leave fullscreen", "退出全屏"));
    map.insert("menu-sky-at-glance", ("Sky at a glance", "天空一览"));
    map.insert("menu-time-controller", ("Time Controller", "时间控制器"));
    map.insert("menu-radio-control", ("Radio Control", "电台控制"));
    map.insert("menu-antenna-control", ("Antenna Control", "天线控制"));
    map.insert("menu-configure", ("Configure", "配置"));
    map.insert("menu-clone", ("Clone...", "克隆..."));
    map.insert("menu-delete", ("Delete", "删除"));
    map.insert("menu-close", ("Close", "关闭"));

    // Window titles
    map.insert("title-radio-control", ("Gpredict Radio Control: {name}", "Gpredict 电台控制: {name}"));
    map.insert("title-rotator-control", ("Gpredict Rotator Control: {name}", "Gpredict 转台控制: {name}"));
    map.insert("title-sky-at-glance", ("The sky at a glance ({name})", "天空一览 ({name})"));
    map.insert("title-time-controller", ("Time Controller - {name}", "时间控制器 - {name}"));
    map.insert("title-clone", ("Clone Module", "克隆模块"));
    map.insert("title-error", ("ERROR", "错误"));

    // Clone dialog
    map.insert("clone-name-label", ("Name of new module:", "新模块名称:"));
    map.insert(
        "clone-name-tooltip",
        (
            "Enter a short name for this module.\nAllowed characters: 0..9, a..z, A..Z, - and _",
            "输入模块的简短名称。\n允许的字符: 0..9, a..z, A..Z, - 和 _",
        ),
    );
    map.insert("clone-open-toggle", ("Open module when created", "创建后打开模块"));

    // Errors and confirmations
    map.insert(
        "error-no-radio",
        (
            "You have no radio configuration!\nPlease configure a radio first.",
            "没有电台配置！\n请先配置电台。",
        ),
    );
    map.insert(
        "error-no-rotator",
        (
            "You have no rotator configuration!\nPlease configure an antenna rotator first.",
            "没有转台配置！\n请先配置天线转台。",
        ),
    );
    map.insert(
        "error-configure-busy",
        (
            "A module can not be configured while the radio or rotator controller is active.\n\nPlease close the radio and rotator controllers and try again.",
            "电台或转台控制器运行时无法配置模块。\n\n请关闭电台和转台控制器后重试。",
        ),
    );
    map.insert(
        "confirm-delete",
        (
            "This operation will permanently delete\n{file}\nfrom the disk.\nDo you want to proceed?",
            "此操作将从磁盘永久删除\n{file}\n是否继续？",
        ),
    );
    map.insert("toast-delete-failed", ("Failed to delete {file}", "删除 {file} 失败"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => en.to_string(),
            Locale::ZhCN => zh.to_string(),
        }
    } else {
        // Fallback: return the key itself
        key.to_string()
    }
}

/// Translate a key and substitute `{name}` style placeholders
pub fn t_format(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(locale, key);
    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }
    result
}
