use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::{
    DesktopLanguageRequester,
    fluent::{FluentLanguageLoader, fluent_language_loader},
};
use i18n_embed_fl::fl;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::task::MAX_TITLE_LEN;

#[derive(RustEmbed)]
#[folder = "i18n"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader = fluent_language_loader!();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    if let Err(error) = i18n_embed::select(&loader, &Localizations, &requested_languages) {
        tracing::warn!(%error, "falling back to the default language");
    }
    loader
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Korean,
}

impl Default for Language {
    fn default() -> Self {
        let requested_languages = DesktopLanguageRequester::requested_languages();
        if requested_languages
            .iter()
            .any(|lang| lang.language.as_str() == "ko")
        {
            Language::Korean
        } else {
            Language::English
        }
    }
}

impl Language {
    pub fn other(self) -> Self {
        match self {
            Language::English => Language::Korean,
            Language::Korean => Language::English,
        }
    }

    fn identifier(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Korean => "ko-KR",
        }
    }
}

pub fn translate(key: &str) -> String {
    match key {
        "app-title" => fl!(LANGUAGE_LOADER, "app-title"),
        "new-task-title" => fl!(LANGUAGE_LOADER, "new-task-title"),
        "task-detail-title" => fl!(LANGUAGE_LOADER, "task-detail-title"),
        "loading" => fl!(LANGUAGE_LOADER, "loading"),
        "empty-title" => fl!(LANGUAGE_LOADER, "empty-title"),
        "empty-subtitle" => fl!(LANGUAGE_LOADER, "empty-subtitle"),
        "section-todo" => fl!(LANGUAGE_LOADER, "section-todo"),
        "section-done" => fl!(LANGUAGE_LOADER, "section-done"),
        "add-task-label" => fl!(LANGUAGE_LOADER, "add-task-label"),
        "add-task-placeholder" => fl!(LANGUAGE_LOADER, "add-task-placeholder"),
        "add-task-button" => fl!(LANGUAGE_LOADER, "add-task-button"),
        "alert-oops" => fl!(LANGUAGE_LOADER, "alert-oops"),
        "title-required" => fl!(LANGUAGE_LOADER, "title-required"),
        "title-empty" => fl!(LANGUAGE_LOADER, "title-empty"),
        "status-completed" => fl!(LANGUAGE_LOADER, "status-completed"),
        "status-pending" => fl!(LANGUAGE_LOADER, "status-pending"),
        "action-mark-done" => fl!(LANGUAGE_LOADER, "action-mark-done"),
        "action-mark-pending" => fl!(LANGUAGE_LOADER, "action-mark-pending"),
        "action-edit" => fl!(LANGUAGE_LOADER, "action-edit"),
        "action-delete" => fl!(LANGUAGE_LOADER, "action-delete"),
        "action-save" => fl!(LANGUAGE_LOADER, "action-save"),
        "action-cancel" => fl!(LANGUAGE_LOADER, "action-cancel"),
        "action-back" => fl!(LANGUAGE_LOADER, "action-back"),
        "delete-title" => fl!(LANGUAGE_LOADER, "delete-title"),
        "task-not-found" => fl!(LANGUAGE_LOADER, "task-not-found"),
        "save-failed" => fl!(LANGUAGE_LOADER, "save-failed"),
        _ => key.to_string(),
    }
}

pub fn translate_tasks_left(count: usize) -> String {
    fl!(LANGUAGE_LOADER, "tasks-left", count = count)
}

pub fn translate_title_too_long() -> String {
    fl!(LANGUAGE_LOADER, "title-too-long", max = MAX_TITLE_LEN)
}

pub fn translate_delete_confirm(title: &str) -> String {
    fl!(LANGUAGE_LOADER, "delete-confirm", title = title)
}

/// Label of the button that switches to the other language.
pub fn language_toggle_label(current: Language) -> &'static str {
    match current {
        Language::Korean => "En",
        Language::English => "Ko",
    }
}

pub fn update_language(language: Language) {
    let lang_ids: Vec<LanguageIdentifier> = match language.identifier().parse() {
        Ok(id) => vec![id],
        Err(error) => {
            tracing::warn!(%error, "invalid language identifier");
            return;
        }
    };

    if let Err(error) = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &lang_ids) {
        tracing::warn!(%error, ?language, "failed to switch language");
    }
}
