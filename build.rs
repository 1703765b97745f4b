fn main() {
    let mut target_board: Option<String> = None;

    for (name, _) in std::env::vars() {
        let prefix = "CARGO_FEATURE_TARGET_BOARD_";
        if let Some(suffix) = name.strip_prefix(prefix) {
            if let Some(previous) = &target_board {
                panic!(
                    "multiple target board features defined (at least {} and {})",
                    show_feature(previous),
                    show_feature(suffix)
                );
            }

            target_board = Some(suffix.to_string());
        }
    }

    let Some(board) = target_board else {
        panic!("missing target-board-* feature");
    };

    // The lib and both images are built for the same board; surface which
    // one in the build log.
    println!("cargo:rustc-env=GATEKEEPER_BOARD={}", show_feature(&board));
    println!("cargo:rerun-if-changed=build.rs");
}

fn show_feature(envvar: &str) -> String {
    let mut name = "target-board-".to_string();
    name.push_str(&envvar.to_ascii_lowercase().replace('_', "-"));
    name
}
