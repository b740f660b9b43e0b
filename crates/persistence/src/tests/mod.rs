// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod store_tests;

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use roomkeep_domain::ValidationRules;

/// Counter giving each file-backed test its own path.
static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn create_test_rules() -> ValidationRules {
    ValidationRules::standard().unwrap()
}

/// A fresh path under the system temp directory. Nothing is created.
pub fn create_test_path(label: &str) -> PathBuf {
    let id: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir()
        .join(format!("roomkeep_test_{}_{id}", std::process::id()))
        .join(format!("{label}.txt"))
}

pub fn remove_test_path(path: &std::path::Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

pub fn create_room_lines() -> Vec<String> {
    vec![
        String::from("r101;Garden View;deluxe;120.5;2;1 King bed"),
        String::from("S2;Sky Suite;SUITE;300;4;Sofa and bar"),
        String::from("A7;Budget Twin;standard;45;2;Twin beds"),
    ]
}

pub fn create_reservation_line(national_id: &str, full_name: &str, room_id: &str) -> String {
    format!("{national_id},{full_name},15/03/1990,male,0912345678,{room_id},3,10/06/2024,")
}
