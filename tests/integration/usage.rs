use crate::helpers::prelude::*;

#[test]
fn it_rejects_extra_positional_arguments() {
    let template = create_template();
    let dir = tempdir().build();

    binary(&template)
        .arg("demo")
        .arg("extra")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicates::str::contains("Too many positional arguments. Expected 0 or 1.")
                .from_utf8(),
        );

    assert!(!dir.exists("demo"), "nothing should have been generated");
}
