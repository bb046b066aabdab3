use crate::helpers::prelude::*;

#[test]
fn it_need_input_projectname() {
    let template = create_template();
    let dir = tempdir().build();

    // no positional argument means prompting, which needs a terminal
    binary(&template)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a terminal").from_utf8());
}

#[test]
fn it_rejects_a_leading_digit() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("9lives")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicates::str::contains("Invalid project name \"9lives\"")
                .from_utf8()
                .and(predicates::str::contains("no leading digits").from_utf8()),
        );
}

#[test]
fn it_rejects_an_embedded_slash() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("a/b")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Invalid project name").from_utf8());
}

#[test]
fn it_rejects_an_existing_target_directory() {
    let template = create_template();
    let dir = tempdir().build();
    std::fs::create_dir(dir.path().join("demo")).unwrap();

    binary(&template)
        .arg("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Project directory already exists").from_utf8());
}
