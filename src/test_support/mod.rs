//! Test utilities for pkgq unit tests.
//!
//! Queries are exercised against fake registry-tool scripts written
//! into a temporary directory, so no test depends on a real pkg-config
//! installation or its registry state.

use std::path::{Path, PathBuf};

/// A fake registry tool covering every invocation the client makes,
/// with two known packages: `alpha` (full metadata) and `beta`
/// (description-less listing entry).
pub const FAKE_REGISTRY_SCRIPT: &str = r#"#!/bin/sh
case "$1" in
    --exists)
        case "$2" in
            alpha|beta) exit 0 ;;
            *) exit 1 ;;
        esac
        ;;
    --list-all)
        printf 'alpha   A description\nbeta\n'
        ;;
    --cflags)
        printf '%s\n' '-I/usr/include/alpha'
        ;;
    --libs)
        printf '%s\n' '-lalpha'
        ;;
    --print-provides)
        printf 'alpha = 1.2.0\n'
        ;;
    --print-requires)
        printf 'beta >= 0.9\ngamma\n'
        ;;
    *)
        exit 64
        ;;
esac
"#;

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("pkg-config");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(not(unix))]
pub fn fake_tool(_dir: &Path, _script: &str) -> PathBuf {
    unimplemented!("fake tool scripts require a unix shell")
}
