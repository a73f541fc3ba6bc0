//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。

use crate::catalog::{
    Context,
    Message,
};
use crate::types::TranslationStatus;

/// Finished message with a translation.
pub(crate) fn message(source: &str, translation: &str) -> Message {
    Message {
        source: source.to_string(),
        translation: Some(translation.to_string()),
        status: TranslationStatus::Finished,
        locations: Vec::new(),
    }
}

/// Unfinished message with an empty translation.
pub(crate) fn unfinished(source: &str) -> Message {
    Message {
        source: source.to_string(),
        translation: Some(String::new()),
        status: TranslationStatus::Unfinished,
        locations: Vec::new(),
    }
}

/// Obsolete message retained for translator reference.
pub(crate) fn obsolete(source: &str, translation: &str) -> Message {
    Message {
        source: source.to_string(),
        translation: Some(translation.to_string()),
        status: TranslationStatus::Obsolete,
        locations: Vec::new(),
    }
}

/// Context block with the given messages.
pub(crate) fn context(name: &str, messages: Vec<Message>) -> Context {
    Context { name: name.to_string(), messages }
}
