//! Integration tests for the inspect commands, driven through files.

use std::path::PathBuf;

use arsenal_core::{decode, BulletType, RECORD_SIZE};
use arsenal_inspect::{run, Command, InspectError};

const BARREL_TOML: &str = r#"
[barrel]
angle = 0.0
delay = 0.5
size = 0.95
offset = 0.0
is_trapezoid = 3
recoil = 1.0
width = 0.42
bullet_type = 2
_unknown0 = 1
bullet_speed = 1.0
max_drones = 0
bullet_damage = 1.0
bullet_base_health = 1.0
_unknown1 = 1
_unknown2 = -77
trapezoidal_dir = 3.14159
base_reload = 1.5
bullet_friction = 1.0
bullet_durability = 3.0
reserved = [-1, 2, 3, 4, 0]
addon = 105
"#;

fn temp_path(name: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("arsenal_{id}_{name}"))
}

#[test]
fn test_encode_then_decode() {
    let input = temp_path("barrel.toml");
    let output = temp_path("barrel.bin");
    let config = temp_path("inspect.toml");
    std::fs::write(&input, BARREL_TOML).unwrap();
    std::fs::write(&config, "[addons]\n\"105\" = \"trap_launcher\"\n").unwrap();

    let rendered = run(&Command::Encode {
        input: input.clone(),
        output: output.clone(),
    })
    .unwrap();
    assert_eq!(rendered.trim().len(), RECORD_SIZE * 2);

    let bytes = std::fs::read(&output).unwrap();
    let barrel = decode(&bytes).unwrap();
    assert_eq!(barrel.delay, 0.5);
    assert!(barrel.is_trapezoid_flag());
    assert_eq!(barrel.is_trapezoid.other_bits(), 2);
    assert_eq!(barrel.bullet_type_kind(), BulletType::Trap);
    assert_eq!(barrel._unknown2, -77);
    assert_eq!(barrel.reserved, [-1, 2, 3, 4, 0]);
    assert_eq!(barrel.addon.raw(), 105);

    let report = run(&Command::Decode {
        dump: output.clone(),
        hex: false,
        config: Some(config.clone()),
    })
    .unwrap();
    assert!(report.contains("BARREL 0"));
    assert!(report.contains("bullet type:   trap"));
    assert!(report.contains("(trap_launcher)"));
    assert!(report.contains("reload ticks:  23"));

    for path in [input, output, config] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn test_encode_rejects_partial_barrel() {
    let input = temp_path("partial.toml");
    std::fs::write(&input, "[barrel]\nangle = 1.0\n").unwrap();

    let err = run(&Command::Encode {
        input: input.clone(),
        output: temp_path("never.bin"),
    })
    .unwrap_err();
    assert!(matches!(err, InspectError::Toml { .. }));

    std::fs::remove_file(input).ok();
}

#[test]
fn test_encode_rejects_unknown_barrel_keys() {
    for extra in ["is_trapezoid_flag = true", "reserved_5 = 7"] {
        let input = temp_path("extra.toml");
        let output = temp_path("extra.bin");
        std::fs::write(&input, format!("{BARREL_TOML}{extra}\n")).unwrap();

        let err = run(&Command::Encode {
            input: input.clone(),
            output: output.clone(),
        })
        .unwrap_err();
        assert!(matches!(err, InspectError::Toml { .. }), "{extra}: {err}");
        assert!(!output.exists());

        std::fs::remove_file(input).ok();
    }
}

#[test]
fn test_decode_hex_dump_with_two_records() {
    let dump = temp_path("two.hex");
    let mut second = [0u8; RECORD_SIZE];
    second[0x1C] = 1;
    let text = format!(
        "{}\n{}\n",
        hex::encode([0u8; RECORD_SIZE]),
        hex::encode(second)
    );
    std::fs::write(&dump, text).unwrap();

    let report = run(&Command::Decode {
        dump: dump.clone(),
        hex: true,
        config: None,
    })
    .unwrap();
    assert!(report.contains("BARREL 0"));
    assert!(report.contains("BARREL 1"));
    assert!(report.contains("bullet type:   drone"));

    std::fs::remove_file(dump).ok();
}

#[test]
fn test_decode_trailing_bytes() {
    let dump = temp_path("short.bin");
    std::fs::write(&dump, [0u8; RECORD_SIZE + 4]).unwrap();

    let err = run(&Command::Decode {
        dump: dump.clone(),
        hex: false,
        config: None,
    })
    .unwrap_err();
    assert!(matches!(err, InspectError::TrailingBytes { remainder: 4, .. }));

    std::fs::remove_file(dump).ok();
}

#[test]
fn test_decode_empty_dump() {
    let dump = temp_path("empty.bin");
    std::fs::write(&dump, b"").unwrap();

    let err = run(&Command::Decode {
        dump: dump.clone(),
        hex: false,
        config: None,
    })
    .unwrap_err();
    assert!(matches!(err, InspectError::EmptyDump { .. }));

    std::fs::remove_file(dump).ok();
}

#[test]
fn test_diff_command() {
    let left = temp_path("left.bin");
    let right = temp_path("right.bin");
    let mut bytes = [0u8; RECORD_SIZE];
    std::fs::write(&left, bytes).unwrap();
    bytes[0x5C] = 0xFF;
    std::fs::write(&right, bytes).unwrap();

    let text = run(&Command::Diff {
        left: left.clone(),
        right: right.clone(),
        hex: false,
    })
    .unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("reserved[4]"));
    assert!(text.contains("-> 255"));

    for path in [left, right] {
        std::fs::remove_file(path).ok();
    }
}
