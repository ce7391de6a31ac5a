//! `--dump-layout` prints the positioned tree without opening the terminal.
//!
//! Stderr is piped in these tests, so the screen falls back to 80x24 cells,
//! which is 80x48 pixels with the pointer in the centre at (40, 24).

mod common;

use common::*;

#[test]
fn dump_layout_places_root_and_submenu() {
    let env = TestEnv::new();
    let result = env.run(&["--dump-layout"], "Foo\n\tBar\n");
    assert!(result.success, "stderr:\n{}", result.stderr);

    let json = result.json();
    let menus = json["menus"].as_array().expect("menus array");
    assert_eq!(menus.len(), 2);

    // Default diameter 24: the root is centred on (40, 24)
    assert_eq!(menus[0]["position"]["x"], 28);
    assert_eq!(menus[0]["position"]["y"], 12);
    assert_eq!(menus[0]["items"][0]["label"], "Foo");
    assert_eq!(menus[0]["items"][0]["submenu"], 1);

    // The submenu sits two radii to the right, pulled back to stay on screen
    assert_eq!(menus[1]["parent"], 0);
    assert_eq!(menus[1]["level"], 1);
    assert_eq!(menus[1]["position"]["x"], 52);
    assert_eq!(menus[1]["items"][0]["output"], "Bar");
}

#[test]
fn dump_layout_honours_position_flag() {
    let env = TestEnv::new();
    let result = env.run(&["--dump-layout", "--position", "0,0"], "a\nb\n");
    assert!(result.success, "stderr:\n{}", result.stderr);

    let json = result.json();
    assert_eq!(json["menus"][0]["position"]["x"], 0);
    assert_eq!(json["menus"][0]["position"]["y"], 0);
}

#[test]
fn dump_layout_uses_explicit_config() {
    let env = TestEnv::new();
    let config = env.write("pie.toml", "[geometry]\ndiameter = 10\n");
    let result = env.run(
        &["--dump-layout", "--config", config.to_str().unwrap()],
        "a\n",
    );
    assert!(result.success, "stderr:\n{}", result.stderr);

    let json = result.json();
    assert_eq!(json["menus"][0]["size"]["width"], 10);
    assert_eq!(json["menus"][0]["position"]["x"], 35);
}

#[test]
fn dump_layout_reads_user_config_and_env() {
    let env = TestEnv::new().with_env("PIEMENU_DIAMETER", "16");
    env.user_config("[geometry]\ndiameter = 10\n");
    let result = env.run(&["--dump-layout"], "a\n");
    assert!(result.success, "stderr:\n{}", result.stderr);

    // The environment overrides the user config
    assert_eq!(result.json()["menus"][0]["size"]["width"], 16);
}

#[test]
fn dump_layout_keeps_separators_and_icons() {
    let env = TestEnv::new();
    let result = env.run(&["--dump-layout"], "a\n\nIMG:x.png\tb\n");
    assert!(result.success, "stderr:\n{}", result.stderr);

    let items = result.json()["menus"][0]["items"].clone();
    assert_eq!(items[1]["separator"], true);
    assert_eq!(items[2]["icon"], "x.png");
    assert_eq!(items[2]["label"], "b");
}

#[test]
fn unknown_config_key_is_a_warning() {
    let env = TestEnv::new();
    let config = env.write("pie.toml", "[geometry]\ndiamter = 10\n");
    let result = env.run(
        &["--dump-layout", "-c", config.to_str().unwrap()],
        "a\n",
    );
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stderr.contains("diameter"),
        "expected a suggestion in:\n{}",
        result.stderr
    );
}

#[test]
fn oversized_geometry_from_env_keeps_defaults() {
    let env = TestEnv::new()
        .with_env("PIEMENU_DIAMETER", "2147483647")
        .with_env("PIEMENU_PADDING", "2000000000");
    let result = env.run(&["--dump-layout"], "Foo\n\tBar\n");
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stderr.contains("must be at most 4096"),
        "expected a range warning in:\n{}",
        result.stderr
    );

    let json = result.json();
    assert_eq!(json["menus"][0]["size"]["width"], 24);
}

#[test]
fn verbose_run_reports_the_built_tree_once() {
    let env = TestEnv::new();
    let result = env.run(&["--dump-layout", "-v"], "Foo\n\tBar\n");
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stderr.matches("built 2 menus with 2 items").count(),
        1,
        "stderr:\n{}",
        result.stderr
    );
}
