//! End-to-end CLI tests for audara

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn audara() -> Command {
    cargo_bin_cmd!("audara")
}

const IMAGES: [&str; 4] = [
    "audara-app-preview.png",
    "search-music.png",
    "auto-download.png",
    "stream-anywhere.png",
];

fn public_dir_with_images(root: &TempDir) -> std::path::PathBuf {
    let public = root.path().join("public");
    fs::create_dir_all(public.join("images")).unwrap();
    for name in IMAGES {
        fs::write(public.join("images").join(name), b"png").unwrap();
    }
    public
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        audara()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("content"))
            .stdout(predicate::str::contains("check-assets"));
    }

    #[test]
    fn shows_version() {
        audara()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_index_with_pinned_year() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        audara()
            .current_dir(tmp.path())
            .args(["build", "--year", "2026", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("© 2026 Audara — Built with ❤️ by PyzaTech"));
    }

    #[test]
    fn warns_about_missing_assets_but_succeeds() {
        let tmp = TempDir::new().unwrap();

        audara()
            .current_dir(tmp.path())
            .args(["build", "--year", "2026"])
            .assert()
            .success()
            .stderr(predicate::str::contains("/images/search-music.png"));

        assert!(tmp.path().join("dist/index.html").is_file());
    }

    #[test]
    fn copies_public_files() {
        let tmp = TempDir::new().unwrap();
        let public = public_dir_with_images(&tmp);

        audara()
            .current_dir(tmp.path())
            .args(["build", "--year", "2026", "--public"])
            .arg(&public)
            .assert()
            .success();

        for name in IMAGES {
            assert!(tmp.path().join("dist/images").join(name).is_file(), "{name}");
        }
    }

    #[test]
    fn refuses_public_dir_that_is_the_output() {
        let tmp = TempDir::new().unwrap();
        let images = tmp.path().join("dist/images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("search-music.png"), b"png-data").unwrap();

        audara()
            .current_dir(tmp.path())
            .args(["build", "--year", "2026", "--public", "dist"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("also the output directory"));

        assert_eq!(fs::read(images.join("search-music.png")).unwrap(), b"png-data");
    }

    #[test]
    fn reads_config_from_working_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("audara.toml"),
            "[build]\nout_dir = \"site\"\nyear = 2031\n",
        )
        .unwrap();

        audara()
            .current_dir(tmp.path())
            .arg("build")
            .assert()
            .success();

        let html = fs::read_to_string(tmp.path().join("site/index.html")).unwrap();
        assert!(html.contains("© 2031 Audara"));
    }

    #[test]
    fn year_flag_beats_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("audara.toml"), "[build]\nyear = 2031\n").unwrap();

        audara()
            .current_dir(tmp.path())
            .args(["build", "--year", "2026"])
            .assert()
            .success();

        let html = fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
        assert!(html.contains("© 2026 Audara"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let tmp = TempDir::new().unwrap();

        audara()
            .current_dir(tmp.path())
            .args(["build", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.toml"));
    }
}

mod content {
    use super::*;

    #[test]
    fn prints_cards_as_json() {
        let output = audara().arg("content").output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let titles = |key: &str| -> Vec<String> {
            json[key]
                .as_array()
                .unwrap()
                .iter()
                .map(|c| c["title"].as_str().unwrap().to_string())
                .collect()
        };
        assert_eq!(
            titles("features"),
            ["Self-Hosted", "Automatic Downloads", "Modern UI", "Open Source"]
        );
        assert_eq!(
            titles("steps"),
            ["Search and Add", "Automatic Download", "Stream Anywhere"]
        );
        assert_eq!(json["nav"][1]["href"], "#how-it-works");
    }

    #[test]
    fn compact_output_is_one_line() {
        audara()
            .args(["content", "--compact"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"^\{.*\}\n$").unwrap());
    }
}

mod check_assets {
    use super::*;

    #[test]
    fn fails_when_images_are_missing() {
        let tmp = TempDir::new().unwrap();

        audara()
            .args(["check-assets", "--public"])
            .arg(tmp.path())
            .assert()
            .failure()
            .stdout(predicate::str::contains("missing /images/audara-app-preview.png"));
    }

    #[test]
    fn succeeds_when_all_images_exist() {
        let tmp = TempDir::new().unwrap();
        let public = public_dir_with_images(&tmp);

        audara()
            .args(["check-assets", "--json", "--public"])
            .arg(&public)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"present\": true"))
            .stdout(predicate::str::contains("\"present\": false").not());
    }
}
