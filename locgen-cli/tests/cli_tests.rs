use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn setup_project(dir: &Path) {
    write_file(
        &dir.join("locgen.toml"),
        r#"
package = "com.example.app"
jvm = true
android = true

[[locale]]
name = "fr"
jvm-tag = "fr"
android-tag = "fr"
"#,
    );
    write_file(
        &dir.join("root/strings.yaml"),
        "strings:\n  greeting:\n    hello: \"Hello, {name:%s}!\"\n  app_name: Example\n",
    );
    write_file(
        &dir.join("fr/strings.yaml"),
        "strings:\n  app_name: Exemple\n",
    );
}

fn locgen() -> Command {
    Command::cargo_bin("locgen").unwrap()
}

#[test]
fn test_generate_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("i18n");
    let output = tmp.path().join("generated");
    setup_project(&input);

    locgen()
        .args(["generate", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicates::str::contains("Generated"));

    let fr_properties = fs::read_to_string(
        output.join("jvm/resources/com/example/app/i18n_fr.properties"),
    )
    .unwrap();
    // Overridden in fr.
    assert!(fr_properties.contains("i18n.app_name=Exemple"));
    // Missing in fr: base fallback.
    assert!(fr_properties.contains("i18n.greeting.hello=Hello, %1$s\\!"));

    let accessors = fs::read_to_string(
        output.join("common/kotlin/com/example/app/I18n.kt"),
    )
    .unwrap();
    assert!(accessors.contains("public fun hello(name: String): String"));

    let android = fs::read_to_string(output.join("android/res/values-fr/strings.xml")).unwrap();
    assert!(android.contains("<string name=\"i18n_app_name\">Exemple</string>"));
}

#[test]
fn test_check_reports_counts() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("i18n");
    setup_project(&input);

    locgen()
        .args(["check", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicates::str::contains("OK: 2 keys, 1 overlay locales"));
}

#[test]
fn test_duplicate_key_fails_with_nonzero_exit() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("i18n");
    setup_project(&input);
    // A second base file redefining greeting.hello.
    write_file(
        &input.join("root/extra.yaml"),
        "strings:\n  greeting:\n    hello: \"Hi again\"\n",
    );

    locgen()
        .args(["check", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicates::str::contains("duplicate key"));
}

#[test]
fn test_missing_locale_tag_fails() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("i18n");
    setup_project(&input);
    write_file(
        &input.join("locgen.toml"),
        r#"
package = "com.example.app"
jvm = true

[[locale]]
name = "fr"
android-tag = "fr"
"#,
    );

    locgen()
        .args(["check", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicates::str::contains("jvm"));
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("i18n");
    fs::create_dir_all(&input).unwrap();

    locgen()
        .args(["check", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicates::str::contains("locgen.toml"));
}

#[test]
fn test_generate_rejects_path_conflict() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("i18n");
    let output = tmp.path().join("generated");
    setup_project(&input);
    // `greeting` is already a namespace; making it a leaf as well conflicts.
    write_file(
        &input.join("root/conflict.yaml"),
        "strings:\n  greeting: \"oops\"\n",
    );

    locgen()
        .args(["generate", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicates::str::contains("path conflict"));
}
