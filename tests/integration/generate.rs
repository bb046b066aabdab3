use crate::helpers::prelude::*;

#[test]
fn it_can_generate_a_project() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("Setting up project in demo")
                .from_utf8()
                .and(predicates::str::contains("All done! To get started, run:").from_utf8())
                .and(predicates::str::contains("cd demo").from_utf8())
                .and(predicates::str::contains("npm install").from_utf8())
                .and(predicates::str::contains("npm run dev").from_utf8()),
        );

    assert!(dir.read("demo/package.json").contains("\"name\": \"demo\""));
    assert_eq!(dir.read("demo/index.html"), "<title>Demo</title>\n");
    assert_eq!(dir.read("demo/src/main.js"), "console.log(\"hello\");\n");
}

#[test]
fn it_strips_the_template_suffix() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("demo/package.json"));
    assert!(!dir.exists("demo/package.json.tmpl"));
}

#[test]
fn it_prefixes_instructions_with_a_shell_prompt() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .current_dir(dir.path())
        .assert()
        .success();

    let readme = dir.read("demo/README.md");
    assert!(readme.contains("# Demo"));
    assert!(readme.contains("$ npm install\n$ npm run dev"));
}

#[test]
fn it_speaks_the_invoking_package_manager() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .env("npm_config_user_agent", "yarn/1.22.19 npm/? node/v20.1.0 darwin arm64")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("yarn dev")
                .from_utf8()
                .and(predicates::str::contains("npm install").from_utf8().not()),
        );

    assert!(dir.read("demo/README.md").contains("$ yarn\n$ yarn dev"));
}

#[test]
fn it_falls_back_to_npm_on_a_malformed_user_agent() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .env("npm_config_user_agent", "malformed")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("npm install").from_utf8());
}

#[test]
fn it_copies_plain_files_verbatim() {
    let bytes: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x00, 0x1f];
    let template = tempdir()
        .with_default_template()
        .binary_file("assets/logo.png", bytes)
        .build();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read_bytes("demo/assets/logo.png"), bytes);
}

#[test]
fn it_fails_on_an_unresolved_placeholder() {
    let template = tempdir()
        .file("broken.txt.tmpl", "Hello {{missing}}")
        .build();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("missing").from_utf8());

    assert!(!dir.exists("demo/broken.txt"));
}
