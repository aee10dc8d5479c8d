use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "finance";

fn finance(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINANCE_TRACKER_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    finance(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("starter categories"));
    dir
}

fn add_coffee_category(dir: &TempDir) {
    finance(dir)
        .args(["category", "add", "Coffee Shops", "--type", "expense", "--icon", "coffee"])
        .assert()
        .success()
        .stdout(contains("Created category"));
}

fn add_latte(dir: &TempDir) {
    finance(dir)
        .args([
            "txn",
            "add",
            "expense",
            "4.50",
            "Latte",
            "--category",
            "coffee shops",
            "--date",
            "2024-03-05",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded expense: Latte"));
}

#[test]
fn cli_without_command_prints_overview() {
    let dir = TempDir::new().expect("temp dir");
    finance(&dir)
        .assert()
        .success()
        .stdout(contains("finance --help"));
}

#[test]
fn cli_init_seeds_categories_once() {
    let dir = initialized();
    finance(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Salary")));

    finance(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("starter categories").not());
}

#[test]
fn cli_config_shows_paths() {
    let dir = initialized();
    finance(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("finance-tracker-data").and(contains("Initialized:     true")));
}

#[test]
fn cli_transaction_round_trip() {
    let dir = initialized();
    add_coffee_category(&dir);
    add_latte(&dir);

    finance(&dir)
        .args(["txn", "list", "--search", "COFFEE"])
        .assert()
        .success()
        .stdout(contains("Latte").and(contains("-$4.50")));

    finance(&dir)
        .args(["txn", "list", "--type", "income"])
        .assert()
        .success()
        .stdout(contains("No transactions found."));

    finance(&dir)
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Summary: 2024-03 (1 transactions)").and(contains("$4.50")));

    finance(&dir)
        .args(["breakdown", "--type", "expense"])
        .assert()
        .success()
        .stdout(contains("Coffee Shops").and(contains("100.0")));
}

#[test]
fn cli_rejects_deleting_category_in_use() {
    let dir = initialized();
    add_coffee_category(&dir);
    add_latte(&dir);

    finance(&dir)
        .args(["category", "delete", "Coffee Shops"])
        .assert()
        .failure()
        .stderr(contains("Cannot delete category 'Coffee Shops': used by 1 transaction(s)"));

    finance(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(contains("Latte"));
}

#[test]
fn cli_rejects_invalid_transactions() {
    let dir = initialized();

    finance(&dir)
        .args(["txn", "add", "expense", "0", "Nothing", "--category", "Groceries"])
        .assert()
        .failure()
        .stderr(contains("Amount must be greater than zero"));

    finance(&dir)
        .args(["txn", "add", "income", "10", "Wrong", "--category", "Groceries"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    finance(&dir)
        .args(["txn", "add", "expense", "abc", "Bad", "--category", "Groceries"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    finance(&dir)
        .args(["summary", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("expected YYYY-MM"));
}

#[test]
fn cli_export_json_and_csv() {
    let dir = initialized();
    add_coffee_category(&dir);
    add_latte(&dir);

    finance(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"description\": \"Latte\"").and(contains("\"category\": \"Coffee Shops\"")));

    let output = dir.path().join("out.csv");
    finance(&dir)
        .args(["export", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("Exported 1 transaction(s)"));

    let contents = std::fs::read_to_string(&output).expect("export file");
    assert!(contents.starts_with("id,date,type,description,category,amount"));
    assert!(contents.contains("2024-03-05,expense,Latte,Coffee Shops,4.50"));
}

#[test]
fn cli_dashboard_runs_on_empty_data() {
    let dir = TempDir::new().expect("temp dir");
    finance(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Dashboard:").and(contains("No transactions yet")));
}

const SAVED_BLOB: &str = r##"{
  "transactions": [
    {
      "id": "abcd0000-0000-4000-8000-000000000000",
      "amount": 12.5,
      "description": "Farmers market",
      "date": "2024-03-05T09:15:00.000Z",
      "categoryId": "7d1e2f3a-4b5c-4d6e-8f70-8192a3b4c5d6",
      "type": "expense"
    },
    {
      "id": "abcd1111-0000-4000-8000-000000000000",
      "amount": 100,
      "description": "Cashback",
      "date": "2024-03-06",
      "categoryId": "7d1e2f3a-4b5c-4d6e-8f70-8192a3b4c5d6",
      "type": "income"
    }
  ],
  "categories": [
    {
      "id": "7d1e2f3a-4b5c-4d6e-8f70-8192a3b4c5d6",
      "name": "Groceries",
      "icon": "shopping-cart",
      "color": "#22c55e",
      "type": "both"
    }
  ]
}"##;

fn with_saved_blob() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).expect("data dir");
    std::fs::write(data_dir.join("finance-tracker-data.json"), SAVED_BLOB).expect("write blob");
    dir
}

#[test]
fn cli_reads_amounts_saved_as_units() {
    let dir = with_saved_blob();

    finance(&dir)
        .args(["summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("$100.00").and(contains("$12.50")).and(contains("$87.50")));

    finance(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(contains("Farmers market").and(contains("-$12.50")));
}

#[test]
fn cli_delete_refuses_ambiguous_short_id() {
    let dir = with_saved_blob();

    finance(&dir)
        .args(["txn", "delete", "abcd"])
        .assert()
        .failure()
        .stderr(contains("ambiguous"));

    finance(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(contains("Farmers market").and(contains("Cashback")));

    finance(&dir)
        .args(["txn", "delete", "abcd1"])
        .assert()
        .success()
        .stdout(contains("Cashback"));
}
