use std::io::Write;

use elevator_sim::config::toml_config::TomlConfig;
use elevator_sim::{ElevatorError, SimConfig};
use tempfile::NamedTempFile;

#[test]
fn config_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [building]
        total_floors = 16
        cars = 3

        [timing]
        travel_ms = 0
        boarding_ms = 0

        [simulation]
        ticks = 25
        seed = 7
        "#
    )
    .unwrap();

    let mut config = SimConfig::default();
    TomlConfig::from_file(file.path())
        .unwrap()
        .apply_to(&mut config);

    assert_eq!(config.total_floors, 16);
    assert_eq!(config.cars, 3);
    assert_eq!(config.travel_ms, 0);
    assert_eq!(config.boarding_ms, 0);
    assert_eq!(config.ticks, 25);
    assert_eq!(config.seed, Some(7));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = TomlConfig::from_file("/nonexistent/elevator-sim.toml").unwrap_err();
    assert!(matches!(err, ElevatorError::Io(_)));
}

#[cfg(feature = "cli")]
#[test]
fn cli_flags_win_over_config_file() {
    use clap::Parser;
    use elevator_sim::CliConfig;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [building]
        total_floors = 16

        [timing]
        travel_ms = 500
        "#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let cli = CliConfig::parse_from(["elevator-sim", "--config", path, "--floors", "20"]);
    let config = SimConfig::from_cli(&cli).unwrap();

    // Flag beats file, file beats default.
    assert_eq!(config.total_floors, 20);
    assert_eq!(config.travel_ms, 500);
}
