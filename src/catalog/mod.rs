//! 翻訳カタログの読み込み・書き出し・ルックアップ

mod document;
mod error;
mod parser;
mod table;
mod writer;

pub use document::{
    Catalog,
    Context,
    Message,
};
pub use error::LoadError;
pub use table::{
    DuplicatePolicy,
    TranslationTable,
};
