//! End-to-end operation tests: decode a model reply, dispatch it, and check
//! the bytes written under the guarded root.

use std::fs;

use agent::core::operation::Operation;
use agent::dispatch;
use agent::test_support::{contact_sort, guarded_tempdir, weekday_count};
use serde_json::json;

#[test]
fn count_weekdays_scenario_writes_count_and_reports_it() {
    let (temp, guard) = guarded_tempdir();
    let input = temp.path().join("dates.txt");
    let output = temp.path().join("count.txt");
    fs::write(
        &input,
        "2024-01-01 Monday\n2024-01-08 Monday\n2024-01-02 Tuesday\n",
    )
    .expect("write input");

    let operation = weekday_count(
        &input.display().to_string(),
        "Monday",
        &output.display().to_string(),
    );
    let message = dispatch::execute(&guard, &operation).expect("execute");

    assert_eq!(message, "Counted 2 Mondays");
    assert_eq!(fs::read_to_string(&output).expect("read output"), "2");
}

#[test]
fn count_weekdays_empty_input_writes_zero() {
    let (temp, guard) = guarded_tempdir();
    let input = temp.path().join("dates.txt");
    let output = temp.path().join("count.txt");
    fs::write(&input, "").expect("write input");

    let operation = weekday_count(
        &input.display().to_string(),
        "Friday",
        &output.display().to_string(),
    );
    let message = dispatch::execute(&guard, &operation).expect("execute");

    assert_eq!(message, "Counted 0 Fridays");
    assert_eq!(fs::read_to_string(&output).expect("read output"), "0");
}

#[test]
fn count_weekdays_overwrites_existing_output() {
    let (temp, guard) = guarded_tempdir();
    let input = temp.path().join("dates.txt");
    let output = temp.path().join("count.txt");
    fs::write(&input, "2024-01-02 Tuesday\n").expect("write input");
    fs::write(&output, "stale contents").expect("write stale output");

    let operation = weekday_count(
        &input.display().to_string(),
        "Tuesday",
        &output.display().to_string(),
    );
    dispatch::execute(&guard, &operation).expect("execute");

    assert_eq!(fs::read_to_string(&output).expect("read output"), "1");
}

#[test]
fn sort_contacts_scenario_writes_four_space_indented_array() {
    let (temp, guard) = guarded_tempdir();
    let input = temp.path().join("contacts.json");
    let output = temp.path().join("sorted.json");
    fs::write(
        &input,
        r#"[{"first_name":"Bob","last_name":"Zed"},{"first_name":"Amy","last_name":"Ang"}]"#,
    )
    .expect("write input");

    let operation = contact_sort(
        &input.display().to_string(),
        &output.display().to_string(),
    );
    let message = dispatch::execute(&guard, &operation).expect("execute");

    assert_eq!(message, "Sorted contacts successfully");
    let expected = concat!(
        "[\n",
        "    {\n",
        "        \"first_name\": \"Amy\",\n",
        "        \"last_name\": \"Ang\"\n",
        "    },\n",
        "    {\n",
        "        \"first_name\": \"Bob\",\n",
        "        \"last_name\": \"Zed\"\n",
        "    }\n",
        "]"
    );
    assert_eq!(fs::read_to_string(&output).expect("read output"), expected);
}

#[test]
fn sort_contacts_is_idempotent_across_runs() {
    let (temp, guard) = guarded_tempdir();
    let input = temp.path().join("contacts.json");
    let output = temp.path().join("sorted.json");
    fs::write(
        &input,
        r#"[{"first_name":"Bob","last_name":"Zed"},{"first_name":"Amy","last_name":"Ang"}]"#,
    )
    .expect("write input");

    let first_pass = contact_sort(
        &input.display().to_string(),
        &output.display().to_string(),
    );
    dispatch::execute(&guard, &first_pass).expect("first sort");
    let once = fs::read_to_string(&output).expect("read output");

    // Sorting the already-sorted output must reproduce it byte for byte.
    let second_pass = contact_sort(
        &output.display().to_string(),
        &output.display().to_string(),
    );
    dispatch::execute(&guard, &second_pass).expect("second sort");
    let twice = fs::read_to_string(&output).expect("read output");

    assert_eq!(once, twice);
}

#[test]
fn reply_decoded_operation_executes_end_to_end() {
    let (temp, guard) = guarded_tempdir();
    let input = temp.path().join("dates.txt");
    let output = temp.path().join("count.txt");
    fs::write(&input, "2024-01-03 Wednesday\n").expect("write input");

    let reply = json!({
        "operation": "count_weekdays",
        "parameters": {
            "file_path": input.display().to_string(),
            "weekday_name": "Wednesday",
            "output_path": output.display().to_string(),
        }
    });
    let operation = Operation::from_reply(&reply).expect("decode");
    let message = dispatch::execute(&guard, &operation).expect("execute");

    assert_eq!(message, "Counted 1 Wednesdays");
    assert_eq!(fs::read_to_string(&output).expect("read output"), "1");
}

#[test]
fn unsupported_operation_writes_nothing() {
    let (temp, _guard) = guarded_tempdir();
    let reply = json!({
        "operation": "format_disk",
        "parameters": {"output_path": temp.path().join("out").display().to_string()}
    });

    let err = Operation::from_reply(&reply).expect_err("must reject");
    assert_eq!(err.to_string(), "Unsupported operation");
    assert!(!temp.path().join("out").exists());
}
