
use fixtures::{GENERATE_PATH, can_bind_localhost, techintel, text_response};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

#[test]
fn test_suggest_without_key_filters_builtin_list() {
    let dir = tempdir().unwrap();

    techintel(dir.path())
        .args(["suggest", "MILITARY"])
        .assert()
        .success()
        .stdout(
            "Autonomous military drones\nMilitary satellite technology\nMilitary logistics optimization\n",
        );
}

#[test]
fn test_suggest_no_match_prints_nothing() {
    let dir = tempdir().unwrap();

    techintel(dir.path())
        .args(["suggest", "submarine cables"])
        .assert()
        .success()
        .stdout("");
}

#[tokio::test]
async fn test_suggest_with_key_uses_api_lines() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let dir = tempdir().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(text_response(
            "1. Counter-drone directed energy\nok\n2. Passive coherent location radar\n",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    techintel(dir.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", mock_server.uri())
        .args(["suggest", "drone"])
        .assert()
        .success()
        .stdout("1. Counter-drone directed energy\n2. Passive coherent location radar\n");
}
