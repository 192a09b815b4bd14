use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use fleet_cli::CliConfig;
use fleet_cli::commands::{Air, Day, Night};
use fleet_core::{DayAttackKind, NightAttackKind};
use tempfile::TempDir;

fn config() -> CliConfig {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../content/data");
    CliConfig::default().with_overrides(Some(data_dir), None)
}

#[test]
fn air_for_master_ids() {
    let config = config();
    let factory = config.content_factory().unwrap();
    let catalog = factory.load_catalogs().unwrap();

    let air = Air::try_parse_from(["air", "--ship", "83", "84", "89"]).unwrap();
    assert_eq!(air.evaluate(&factory, &catalog).unwrap(), 82);

    let air = Air::try_parse_from(["air", "--ship", "-1", "9999"]).unwrap();
    assert_eq!(air.evaluate(&factory, &catalog).unwrap(), 0);
}

#[test]
fn air_for_named_and_file_fleets() {
    let config = config();
    let factory = config.content_factory().unwrap();
    let catalog = factory.load_catalogs().unwrap();

    let named = Air::try_parse_from(["air", "--fleet", "kido_butai"]).unwrap();
    assert_eq!(named.evaluate(&factory, &catalog).unwrap(), 99);

    let temp_dir = TempDir::new().unwrap();
    let path: PathBuf = temp_dir.path().join("hosho.ron");
    fs::write(
        &path,
        "(members: [Some((ship_id: 89, slots: [19], aircraft: [9]))])",
    )
    .unwrap();
    let file = Air::try_parse_from(["air", "--fleet", path.to_str().unwrap()]).unwrap();
    // floor(6 * 3)
    assert_eq!(file.evaluate(&factory, &catalog).unwrap(), 18);
}

#[test]
fn air_requires_exactly_one_source() {
    assert!(Air::try_parse_from(["air"]).is_err());
    assert!(Air::try_parse_from(["air", "--ship", "83", "--fleet", "kido_butai"]).is_err());
}

#[test]
fn attack_kinds_against_bundled_data() {
    let catalog = config().content_factory().unwrap().load_catalogs().unwrap();
    let catalogs = catalog.catalogs();

    let day = Day::try_parse_from(["day", "--slots=7,7,116,25", "--attacker", "80"]).unwrap();
    assert_eq!(day.evaluate(&catalogs), DayAttackKind::CutinMainMain);

    let day = Day::try_parse_from(["day", "--attacker", "80"]).unwrap();
    assert_eq!(day.evaluate(&catalogs), DayAttackKind::NoData);

    let day = Day::try_parse_from(["day", "--slots", "", "--attacker", "83"]).unwrap();
    assert_eq!(day.evaluate(&catalogs), DayAttackKind::AirAttack);

    let night = Night::try_parse_from(["night", "--slots=15,15", "--attacker", "1"]).unwrap();
    assert_eq!(night.evaluate(&catalogs), NightAttackKind::CutinTorpedoTorpedo);

    let night = Night::try_parse_from([
        "night",
        "--slots=13,28",
        "--attacker",
        "51",
        "--defender",
        "501",
    ])
    .unwrap();
    assert_eq!(night.evaluate(&catalogs), NightAttackKind::Torpedo);
}

#[test]
fn attack_reports_name_hulls_and_cutins() {
    let catalog = config().content_factory().unwrap().load_catalogs().unwrap();
    let catalogs = catalog.catalogs();

    let day = Day::try_parse_from([
        "day",
        "--slots=7,7,116,25",
        "--attacker",
        "80",
        "--defender",
        "501",
    ])
    .unwrap();
    assert_eq!(
        day.report(&catalogs).to_string(),
        "6 (cutin_main_main, cut-in) BB vs DD"
    );

    let night = Night::try_parse_from(["night", "--slots=2,12", "--attacker", "9999"]).unwrap();
    let report = night.report(&catalogs);
    assert!(!report.cutin);
    assert_eq!(report.attacker, None);
    assert_eq!(report.to_string(), "1 (double_attack) unknown ship");
}
