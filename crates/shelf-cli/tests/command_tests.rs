// Rust guideline compliant 2026-10-16

//! Integration tests for CLI commands.

use shelf_cli::commands::{self, search::Query};
use shelf_cli::create_formatter;
use shelf_core::{Config, Error, InventoryStore, OutputFormat, RecordFormat, Status};
use std::fs;
use tempfile::TempDir;
use termcolor::ColorChoice;

fn config_in(dir: &TempDir, format: RecordFormat) -> Config {
    Config {
        data_file: dir.path().join("books.txt"),
        record_format: format,
        output_format: OutputFormat::Plain,
    }
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("output is UTF-8")
}

#[test]
fn test_init_creates_config_and_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::default();
    let mut out: Vec<u8> = Vec::new();

    commands::init::execute(temp_dir.path(), &config, &mut out).unwrap();
    assert!(temp_dir.path().join("shelf.toml").exists());
    assert_eq!(fs::read_to_string(temp_dir.path().join("books.txt")).unwrap(), "");

    let config_content = fs::read_to_string(temp_dir.path().join("shelf.toml")).unwrap();
    assert!(config_content.contains("data_file"));

    // A second run leaves both files alone.
    fs::write(temp_dir.path().join("books.txt"), "Dune | Herbert | 111 | available\n").unwrap();
    let mut out: Vec<u8> = Vec::new();
    commands::init::execute(temp_dir.path(), &config, &mut out).unwrap();
    assert!(output(out).contains("already exists"));
    assert!(fs::read_to_string(temp_dir.path().join("books.txt"))
        .unwrap()
        .contains("Dune"));
}

#[test]
fn test_add_issue_return_cycle_persists_each_step() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Pipe);
    let formatter = create_formatter(OutputFormat::Plain);

    let mut store = commands::open_store(&config, ColorChoice::Never).unwrap();
    let mut out: Vec<u8> = Vec::new();
    commands::add::execute(
        &mut store,
        "Dune".to_string(),
        "Herbert".to_string(),
        "111".to_string(),
        formatter.as_ref(),
        &mut out,
    )
    .unwrap();
    assert_eq!(output(out), "added 111\n");

    let mut store = commands::open_store(&config, ColorChoice::Never).unwrap();
    let mut out: Vec<u8> = Vec::new();
    commands::issue::execute(&mut store, "111", formatter.as_ref(), &mut out).unwrap();
    assert_eq!(output(out), "issued 111\n");
    assert_eq!(
        fs::read_to_string(&config.data_file).unwrap(),
        "Dune | Herbert | 111 | issued\n"
    );

    let mut store = commands::open_store(&config, ColorChoice::Never).unwrap();
    let mut sink: Vec<u8> = Vec::new();
    let err = commands::issue::execute(&mut store, "111", formatter.as_ref(), &mut sink)
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::AlreadyIssued { .. })
    ));

    let mut out: Vec<u8> = Vec::new();
    commands::return_book::execute(&mut store, "111", formatter.as_ref(), &mut out).unwrap();
    assert_eq!(output(out), "returned 111\n");

    let reloaded = commands::open_store(&config, ColorChoice::Never).unwrap();
    assert_eq!(reloaded.list_all()[0].status(), Status::Available);
}

#[test]
fn test_add_rejects_line_breaks() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Pipe);
    let formatter = create_formatter(OutputFormat::Plain);
    let mut store = commands::open_store(&config, ColorChoice::Never).unwrap();

    let err = commands::add::execute(
        &mut store,
        "Bad\nTitle".to_string(),
        "A".to_string(),
        "1".to_string(),
        formatter.as_ref(),
        &mut Vec::<u8>::new(),
    )
    .unwrap_err();

    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidBook(_))));
    assert!(store.is_empty());
    assert!(!config.data_file.exists());
}

#[test]
fn test_return_unknown_isbn() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Pipe);
    let formatter = create_formatter(OutputFormat::Plain);
    let mut store = commands::open_store(&config, ColorChoice::Never).unwrap();

    let mut sink: Vec<u8> = Vec::new();
    let err = commands::return_book::execute(&mut store, "404", formatter.as_ref(), &mut sink)
        .unwrap_err();
    let core = err.downcast_ref::<Error>().expect("core error");
    assert_eq!(core.code(), "not_found");
}

#[test]
fn test_list_filters_by_status() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Pipe);
    fs::write(
        &config.data_file,
        "Dune | Herbert | 111 | issued\nEmma | Austen | 200 | available\n",
    )
    .unwrap();
    let formatter = create_formatter(OutputFormat::Plain);
    let store = commands::open_store(&config, ColorChoice::Never).unwrap();

    let mut out: Vec<u8> = Vec::new();
    commands::list::execute(&store, Some("issued".to_string()), formatter.as_ref(), &mut out)
        .unwrap();
    assert_eq!(output(out), "Dune (111) by Herbert - issued\n");

    let mut out: Vec<u8> = Vec::new();
    commands::list::execute(&store, None, formatter.as_ref(), &mut out).unwrap();
    assert_eq!(output(out).lines().count(), 2);

    let bad_filter = commands::list::execute(
        &store,
        Some("lost".to_string()),
        formatter.as_ref(),
        &mut Vec::<u8>::new(),
    );
    assert!(bad_filter.is_err());
}

#[test]
fn test_search_by_title_and_isbn() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Jsonl);
    let formatter = create_formatter(OutputFormat::Plain);

    let mut store = InventoryStore::new(&config.data_file, config.record_format).unwrap();
    store.add(shelf_core::Book::new("Dune", "Herbert", "111"));
    store.add(shelf_core::Book::new("Dune Messiah", "Herbert", "112"));
    store.save().unwrap();

    let store = commands::open_store(&config, ColorChoice::Never).unwrap();

    let mut out: Vec<u8> = Vec::new();
    commands::search::execute(&store, &Query::Title("DUNE".to_string()), formatter.as_ref(), &mut out)
        .unwrap();
    assert_eq!(
        output(out),
        "Dune (111) by Herbert - available\nDune Messiah (112) by Herbert - available\n"
    );

    let mut out: Vec<u8> = Vec::new();
    commands::search::execute(&store, &Query::Isbn("112".to_string()), formatter.as_ref(), &mut out)
        .unwrap();
    assert_eq!(output(out), "Dune Messiah (112) by Herbert - available\n");
}

#[test]
fn test_open_store_survives_load_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Pipe);
    let mut bytes = b"Dune | Herbert | 111 | available\n".to_vec();
    bytes.extend_from_slice(&[0xc3, 0x28, b'\n']);
    fs::write(&config.data_file, bytes).unwrap();

    let store = commands::open_store(&config, ColorChoice::Never).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_open_store_for_update_refuses_partial_load() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Pipe);
    let mut bytes = b"Dune | Herbert | 111 | available\n".to_vec();
    bytes.extend_from_slice(&[0xc3, 0x28, b'\n']);
    bytes.extend_from_slice(b"Emma | Austen | 200 | available\n");
    fs::write(&config.data_file, &bytes).unwrap();

    let err = commands::open_store_for_update(&config).unwrap_err();
    let core = err.downcast_ref::<Error>().expect("core error");
    assert_eq!(core.code(), "load_failure");

    // Nothing was written back, so Emma is still on disk.
    assert_eq!(fs::read(&config.data_file).unwrap(), bytes);
}

#[test]
fn test_open_store_for_update_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, RecordFormat::Pipe);

    let store = commands::open_store_for_update(&config).unwrap();
    assert!(store.is_empty());
}
