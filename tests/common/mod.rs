// Test utility module for goimpl integration tests
#![allow(dead_code)]

use goimpl::{Catalog, TypeDescriptor};
use std::path::PathBuf;

/// Catalog shared by the integration tests.
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/catalog.json")
}

pub fn catalog() -> Catalog {
    Catalog::load(&catalog_path()).expect("test catalog should load")
}

pub fn read_closer() -> TypeDescriptor {
    catalog()
        .resolve("io", "ReadCloser", false)
        .expect("io.ReadCloser is in the test catalog")
}

pub fn client_codec() -> TypeDescriptor {
    catalog()
        .resolve("rpc", "ClientCodec", false)
        .expect("rpc.ClientCodec is in the test catalog")
}

/// `*main.codec`, a partial implementation of `rpc.ClientCodec`.
pub fn existing_codec() -> TypeDescriptor {
    catalog()
        .resolve("main", "codec", true)
        .expect("main.codec is in the test catalog")
}
