//! カタログ読み込みとルックアップの結合テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use linguist_catalog::config::{
    self,
    CatalogSettings,
};
use linguist_catalog::{
    Catalog,
    DuplicatePolicy,
    TranslationTable,
    discovery,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// gpg4usb_ru.ts から切り出した実データ
const GPG4USB_RU: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="ru">
<context>
    <name>Attachments</name>
    <message>
        <source>Add File</source>
        <translation type="obsolete">Добавить файл</translation>
    </message>
    <message>
        <source>Encrypt</source>
        <translation type="obsolete">Зашифровать</translation>
    </message>
</context>
<context>
    <name>FileEncryptionDialog</name>
    <message>
        <location filename="../../fileencryptiondialog.cpp" line="41"/>
        <source>Encrypt / Decrypt File</source>
        <translation>За-/Расшифровать файл</translation>
    </message>
    <message>
        <location filename="../../fileencryptiondialog.cpp" line="110"/>
        <source>All Files (*)</source>
        <translation type="unfinished"></translation>
    </message>
</context>
<context>
    <name>KeyMgmt</name>
    <message>
        <location filename="../../keymgmt.cpp" line="45"/>
        <source>Keymanagement</source>
        <translation>Менеджер ключей</translation>
    </message>
    <message>
        <location filename="../../keymgmt.cpp" line="52"/>
        <source>&amp;Close Key Management</source>
        <translation>Закр&amp;ыть Менеджер ключей</translation>
    </message>
</context>
</TS>
"#;

fn load_table() -> TranslationTable {
    let catalog = Catalog::from_xml(GPG4USB_RU).unwrap();
    catalog.to_table(DuplicatePolicy::default())
}

#[test]
fn test_lookup_finished_translation() {
    let table = load_table();

    assert_eq!(table.lookup("KeyMgmt", "&Close Key Management"), "Закр&ыть Менеджер ключей");
    assert_eq!(table.lookup("FileEncryptionDialog", "Encrypt / Decrypt File"), "За-/Расшифровать файл");
}

#[test]
fn test_lookup_unfinished_falls_back_to_source() {
    let table = load_table();

    assert_eq!(table.lookup("FileEncryptionDialog", "All Files (*)"), "All Files (*)");
}

#[test]
fn test_lookup_never_returns_obsolete_translation() {
    let table = load_table();

    assert_eq!(table.lookup("Attachments", "Add File"), "Add File");
    assert_eq!(table.lookup("Attachments", "Encrypt"), "Encrypt");
}

#[test]
fn test_loading_twice_yields_identical_lookups() {
    let first = load_table();
    let second = load_table();

    assert_eq!(first, second);
}

#[test]
fn test_round_trip_reproduces_catalog() {
    let catalog = Catalog::from_xml(GPG4USB_RU).unwrap();

    let reparsed = Catalog::from_xml(&catalog.to_xml().unwrap()).unwrap();

    assert_eq!(catalog, reparsed);
    assert_eq!(
        catalog.to_table(DuplicatePolicy::default()),
        reparsed.to_table(DuplicatePolicy::default())
    );
}

#[test]
fn test_malformed_catalog_is_rejected_wholesale() {
    let truncated = GPG4USB_RU.split("</TS>").next().unwrap();

    let result = Catalog::from_xml(truncated);

    assert!(result.is_err());
}

#[test]
fn test_host_fallback_after_load_error_is_identity() {
    let table = Catalog::from_xml("<TS><broken>")
        .map(|catalog| catalog.to_table(DuplicatePolicy::default()))
        .unwrap_or_else(|_| TranslationTable::empty());

    assert_eq!(table.lookup("KeyMgmt", "&Close Key Management"), "&Close Key Management");
}

#[test]
fn test_workspace_discovery_and_selection() {
    let temp_dir = TempDir::new().unwrap();
    let ts_dir = temp_dir.path().join("release/ts");
    fs::create_dir_all(&ts_dir).unwrap();
    fs::write(ts_dir.join("gpg4usb_ru.ts"), GPG4USB_RU).unwrap();
    fs::write(
        ts_dir.join("gpg4usb_de.ts"),
        "<TS version=\"2.0\" language=\"de\"><context><name>KeyMgmt</name><message><source>Keymanagement</source><translation>Schlüsselverwaltung</translation></message></context></TS>",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join(".linguist-catalog.json"),
        r#"{"language": "ru_RU", "catalogFiles": {"filePattern": "release/ts/*.ts"}}"#,
    )
    .unwrap();

    let settings = config::load_from_workspace(temp_dir.path()).unwrap().unwrap();
    let catalogs = discovery::find_catalog_files(temp_dir.path(), &settings).unwrap();
    assert_eq!(catalogs.len(), 2);

    // "ru_RU" の要求はベース言語 "ru" のカタログへフォールバックする
    let selected =
        discovery::select_for_language(&catalogs, settings.language.as_deref().unwrap()).unwrap();
    let catalog = Catalog::load(&selected.path).unwrap();
    let table = catalog.to_table(settings.duplicate_policy);

    assert_eq!(catalog.language.as_deref(), Some("ru"));
    assert_eq!(table.lookup("KeyMgmt", "Keymanagement"), "Менеджер ключей");
}

#[test]
fn test_default_settings_discover_catalogs_anywhere() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("gpg4usb_ru.ts"), GPG4USB_RU).unwrap();

    let settings = CatalogSettings::default();
    let catalogs = discovery::find_catalog_files(temp_dir.path(), &settings).unwrap();

    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0].language.as_deref(), Some("ru"));
}
