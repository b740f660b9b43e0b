// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use super::{create_test_path, remove_test_path};
use crate::{FileStore, LineStore, MemoryStore, PersistenceError};

#[test]
fn test_missing_file_reads_as_empty() {
    let path: PathBuf = create_test_path("missing");
    let store: FileStore = FileStore::new(&path);

    assert!(store.read_lines().unwrap().is_empty());
}

#[test]
fn test_file_store_write_then_read() {
    let path: PathBuf = create_test_path("roundtrip");
    let mut store: FileStore = FileStore::new(&path);

    store
        .write_lines(&[String::from("first"), String::from("second")])
        .unwrap();
    assert_eq!(store.read_lines().unwrap(), vec!["first", "second"]);

    store.write_lines(&[String::from("only")]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "only\n");

    remove_test_path(&path);
}

#[test]
fn test_unreadable_path_is_io_error() {
    let path: PathBuf = create_test_path("directory");
    std::fs::create_dir_all(&path).unwrap();
    let store: FileStore = FileStore::new(&path);

    let err: PersistenceError = store.read_lines().unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));

    remove_test_path(&path);
}

#[test]
fn test_memory_store_replaces_content() {
    let mut store: MemoryStore = MemoryStore::from_text("a\nb\n");
    assert_eq!(store.read_lines().unwrap(), vec!["a", "b"]);

    store.write_lines(&[String::from("c")]).unwrap();
    assert_eq!(store.lines(), ["c"]);
    assert_eq!(store.origin(), "memory");
}
