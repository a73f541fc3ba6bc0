//! linguist-catalog
//!
//! Qt Linguist TS 形式の翻訳カタログを読み込み、イミュータブルな
//! ルックアップテーブルを提供するライブラリ

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

// よく使う型を再エクスポート
pub use catalog::{
    Catalog,
    DuplicatePolicy,
    LoadError,
    TranslationTable,
};
pub use types::TranslationStatus;
