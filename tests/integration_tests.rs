mod common;
use common::{init_db, init_db_with_data, rta, setup_test_db, temp_out};

use predicates::str::contains;
use rattendance::db::pool::DbPool;
use rattendance::persistence::{self, SlotStore, USERS_SLOT};
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rta()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_and_list");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "add", "Alice"])
        .assert()
        .success()
        .stdout(contains("Employee 'Alice' added (#0)"));

    rta()
        .args(["--db", &db_path, "add", "  Bob  ", "--photo", "bob.png"])
        .assert()
        .success()
        .stdout(contains("Employee 'Bob' added (#1)"));

    rta()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Employees (2)"))
        .stdout(contains("Alice"))
        .stdout(contains("Bob"));
}

#[test]
fn test_list_empty_roster() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No employees yet"));
}

#[test]
fn test_duplicate_add_fails() {
    let db_path = setup_test_db("duplicate_add");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "add", "Alice"])
        .assert()
        .success();

    rta()
        .args(["--db", &db_path, "add", "Alice"])
        .assert()
        .failure()
        .stderr(contains("Employee already exists: Alice"));

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(persistence::load(&pool).unwrap().len(), 1);
}

#[test]
fn test_blank_name_fails() {
    let db_path = setup_test_db("blank_name");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "add", "   "])
        .assert()
        .failure()
        .stderr(contains("Please enter a valid name."));
}

#[test]
fn test_mark_by_name_and_position() {
    let db_path = setup_test_db("mark_name_pos");
    init_db(&db_path);

    for name in ["Alice", "Bob"] {
        rta()
            .args(["--db", &db_path, "add", name])
            .assert()
            .success();
    }

    rta()
        .args(["--db", &db_path, "mark", "Alice", "present", "--date", "3/4/2024"])
        .assert()
        .success()
        .stdout(contains("Alice was"))
        .stdout(contains("on 3/4/2024"));

    rta()
        .args(["--db", &db_path, "mark", "1", "a", "--date", "3/4/2024"])
        .assert()
        .success()
        .stdout(contains("Bob was"));

    let pool = DbPool::new(&db_path).unwrap();
    let roster = persistence::load(&pool).unwrap();
    let bob = &roster.list_employees()[1];
    assert_eq!(bob.attendance_history.len(), 1);
    assert_eq!(bob.attendance_history[0].status.as_str(), "absent");
}

#[test]
fn test_mark_today_without_date() {
    let db_path = setup_test_db("mark_today");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "add", "Alice"])
        .assert()
        .success();

    rta()
        .args(["--db", &db_path, "mark", "Alice", "present"])
        .assert()
        .success();

    // second mark on the same day is refused, whatever the status
    rta()
        .args(["--db", &db_path, "mark", "Alice", "absent"])
        .assert()
        .failure()
        .stderr(contains("Attendance already marked for Alice"));
}

#[test]
fn test_duplicate_mark_fails() {
    let db_path = setup_test_db("duplicate_mark");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "mark", "Carol", "absent", "--date", "1/1/2024"])
        .assert()
        .failure()
        .stderr(contains("Attendance already marked for Carol on 1/1/2024"));
}

#[test]
fn test_mark_unknown_employee_fails() {
    let db_path = setup_test_db("mark_unknown");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "mark", "Mallory", "present", "--date", "1/3/2024"])
        .assert()
        .failure()
        .stderr(contains("Please select an employee."));

    rta()
        .args(["--db", &db_path, "mark", "42", "present", "--date", "1/3/2024"])
        .assert()
        .failure()
        .stderr(contains("Please select an employee."));
}

#[test]
fn test_mark_invalid_status_fails() {
    let db_path = setup_test_db("mark_bad_status");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "mark", "Carol", "late", "--date", "1/3/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid attendance status: late"));
}

#[test]
fn test_summary_counts() {
    let db_path = setup_test_db("summary_counts");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Employees: 2"))
        .stdout(contains("Present: 1"))
        .stdout(contains("Absent: 2"))
        .stdout(contains("Chart data: [1, 2]"));
}

#[test]
fn test_summary_log_lines() {
    let db_path = setup_test_db("summary_log");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "summary", "--log"])
        .assert()
        .success()
        .stdout(contains("Carol was present on 1/1/2024"))
        .stdout(contains("Carol was absent on 1/2/2024"))
        .stdout(contains("Dave was absent on 1/1/2024"));
}

#[test]
fn test_summary_empty_roster() {
    let db_path = setup_test_db("summary_empty");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Present: 0"))
        .stdout(contains("Absent: 0"))
        .stdout(contains("Presence rate: --"));
}

#[test]
fn test_show_employee() {
    let db_path = setup_test_db("show_employee");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "show", "Carol"])
        .assert()
        .success()
        .stdout(contains("Employee #0: Carol"))
        .stdout(contains("Present: 1"))
        .stdout(contains("Absent: 1"))
        .stdout(contains("Presence rate: 50.0%"))
        .stdout(contains("History:"))
        .stdout(contains("1/2/2024"));
}

#[test]
fn test_show_out_of_range_fails() {
    let db_path = setup_test_db("show_out_of_range");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "show", "7"])
        .assert()
        .failure()
        .stderr(contains("No employee at position 7"));

    rta()
        .args(["--db", &db_path, "show", "Mallory"])
        .assert()
        .failure()
        .stderr(contains("Please select an employee."));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed (3 rows)"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("position,name,date,status"));
    assert_eq!(lines.next(), Some("0,Carol,1/1/2024,present"));
    assert_eq!(lines.next(), Some("0,Carol,1/2/2024,absent"));
    assert_eq!(lines.next(), Some("1,Dave,1/1/2024,absent"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_json_matches_slot_layout() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let exported = persistence::decode(&content).unwrap();

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(exported, persistence::load(&pool).unwrap());
}

#[test]
fn test_export_relative_path_fails() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "export", "--file", "out.csv", "--force"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_db_check_and_repair() {
    let db_path = setup_test_db("db_check_repair");
    init_db(&db_path);

    {
        let mut pool = DbPool::new(&db_path).unwrap();
        pool.write(
            USERS_SLOT,
            r#"[{"name":"Ann","photo":"","attendance":[]},{"name":"Ann","photo":"","attendance":[]}]"#,
        )
        .unwrap();
    }

    rta()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("name 'Ann' used by #0 and #1"));

    rta()
        .args(["--db", &db_path, "db", "--repair"])
        .assert()
        .success()
        .stdout(contains("Removed 1 employee(s) and 0 mark(s)"));

    rta()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Roster integrity check passed (1 employees)."));
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let db_path = setup_test_db("corrupt_slot");
    init_db(&db_path);

    {
        let mut pool = DbPool::new(&db_path).unwrap();
        pool.write(USERS_SLOT, "{not json").unwrap();
    }

    rta()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stderr(contains("Stored roster could not be read"))
        .stdout(contains("No employees yet"));

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(
        pool.read("users.corrupt").unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Slot 'users'"))
        .stdout(contains("Employees:"))
        .stdout(contains("present 1, absent 2"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("Employee added at position 1"))
        .stdout(contains("Dave was absent on 1/1/2024"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    let out = temp_out("backup", "sqlite");
    let zipped = temp_out("backup", "zip");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&out).is_ok());

    fs::remove_file(&out).ok();
    rta()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));
    assert!(fs::metadata(&zipped).is_ok());
    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_state_survives_between_runs() {
    let db_path = setup_test_db("survives_runs");
    init_db_with_data(&db_path);

    rta()
        .args(["--db", &db_path, "mark", "Dave", "present", "--date", "1/2/2024"])
        .assert()
        .success();

    rta()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Present: 2"))
        .stdout(contains("Absent: 2"))
        .stdout(contains("Chart data: [2, 2]"));
}
