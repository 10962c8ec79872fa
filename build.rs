//! Build script for embedded SQL.
//!
//! `sqlx::migrate!` reads `data/sql/sqlite` at compile time and the sample
//! question set is pulled in with `include_str!`. Cargo does not track new
//! files in those directories on its own, so changes there must trigger a
//! rebuild explicitly.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
    println!("cargo:rerun-if-changed=data/sql/seed");
}
