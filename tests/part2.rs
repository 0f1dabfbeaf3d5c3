use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("tests/inputs/sample2.txt");

    cmd.assert().success().stdout("Part 2: 48\n");
}

#[test]
fn part2_keeps_toggle_across_lines() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("tests/inputs/multiline.txt");

    cmd.assert().success().stdout("Part 2: 7\n");
}

#[test]
fn part2_rejects_too_large_operand() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("tests/inputs/overflow.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("99999999999999999999"));
}
