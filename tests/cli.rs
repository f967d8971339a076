use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use tempfile::TempDir;

fn townhall(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("townhall").unwrap();
    cmd.env("TOWNHALL_DATA", data.path());
    cmd
}

#[test]
fn test_home_shows_announcements() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Announcements"));
}

#[test]
fn test_events_lists_board_and_seeds_cache() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bacoor City Festival"))
        .stdout(predicate::str::contains("All Saints' Day"));

    assert!(data.path().join("events.json").exists());
}

#[test]
fn test_events_filter_upcoming() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["events", "--filter", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clean-up Drive"))
        .stdout(predicate::str::contains("All Saints' Day").not());
}

#[test]
fn test_events_search() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["events", "--search", "FESTIVAL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bacoor City Festival"))
        .stdout(predicate::str::contains("Clean-up Drive").not());
}

#[test]
fn test_events_search_without_results() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["events", "--search", "carnival"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No events found matching your search criteria.",
        ));
}

#[test]
fn test_unknown_filter_fails() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["events", "--filter", "concerts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'concerts'"));
}

#[test]
fn test_page_size_from_config() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    townhall(&data)
        .args(["events", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 3"));

    townhall(&data)
        .args(["events", "--page", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 9 is past the end"));
}

#[test]
fn test_event_detail() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["event", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location: Bacoor Baywalk"))
        .stdout(predicate::str::contains("Registration: Required"));

    townhall(&data)
        .args(["event", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found: event 42"));
}

#[test]
fn test_browse_reads_commands_from_stdin() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .arg("browse")
        .write_stdin("n\nf holiday\nf concerts\ns clean-up\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already on the last page."))
        .stdout(predicate::str::contains("holiday, 1 item"))
        .stdout(predicate::str::contains("Unknown category 'concerts'"))
        .stdout(predicate::str::contains("search \"clean-up\", 1 match"));
}

#[test]
fn test_services_and_search() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["services", "--tab", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Health Services"));

    townhall(&data)
        .args(["search-services", "permit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Business Permit"));

    townhall(&data)
        .args(["services", "--tab", "parks"])
        .assert()
        .failure();
}

#[test]
fn test_subscribe_once() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["subscribe", "ana@example.ph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for subscribing"));

    townhall(&data)
        .args(["subscribe", "ana@example.ph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already subscribed"));

    townhall(&data)
        .args(["subscribe", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid email"));
}

#[test]
fn test_contact_submission() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args([
            "contact",
            "--name",
            "Maria Santos",
            "--email",
            "maria@example.ph",
            "--subject",
            "general",
            "--message",
            "When is the next clean-up drive?",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for your message!"));

    townhall(&data)
        .arg("inquiries")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maria Santos <maria@example.ph>"));
}

#[test]
fn test_contact_validation_failure() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["contact", "--name", "Maria", "--email", "maria@"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email: Please enter a valid email address"))
        .stderr(predicate::str::contains("message: Please enter your message"));

    assert!(!data.path().join("inquiries.json").exists());
}

#[test]
fn test_draft_then_contact_from_draft() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["draft", "save", "--name", "Jose", "--email", "jose@example.ph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft saved."));

    townhall(&data)
        .args(["draft", "save", "--subject", "complaint"])
        .assert()
        .success();

    townhall(&data)
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Jose"))
        .stdout(predicate::str::contains("Subject: complaint"));

    townhall(&data)
        .args(["contact", "--use-draft", "--message", "Streetlight is out."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft restored from previous session"));

    townhall(&data)
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved draft."));
}

#[test]
fn test_config_rejects_bad_value() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["config", "excerpt-width", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("excerpt-width must be at least 10"));

    townhall(&data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("excerpt-width = 120"));
}

#[test]
fn test_grouped_help() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resident Services:"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_programs() {
    let data = TempDir::new().unwrap();
    townhall(&data)
        .args(["programs", "volunteer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disaster Response Volunteers"));
}

#[test]
fn test_config_repairs_out_of_range_file() {
    let data = TempDir::new().unwrap();
    std::fs::write(data.path().join("config.json"), r#"{"log-level":"loud"}"#).unwrap();

    townhall(&data)
        .args(["config", "log-level", "warn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log-level set to warn"))
        .stderr(predicate::str::contains("got 'loud'; using warn"));

    let saved = std::fs::read_to_string(data.path().join("config.json")).unwrap();
    assert!(saved.contains(r#""log-level": "warn""#));

    townhall(&data)
        .arg("events")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
