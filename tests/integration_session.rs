//! Full-session integration tests
//!
//! Drives the menu controller end-to-end with a scripted console over
//! tempfile catalogs, exercising navigation, launch dispatch, the simulated
//! execution branch, and the catalog fallback.

use std::io::Write as _;
use std::sync::Mutex;

use armory::auth;
use armory::catalog::CatalogStore;
use armory::console::ScriptedConsole;
use armory::interrupt;
use armory::launch::{LaunchOutcome, Launcher, resolve};
use armory::menu::MenuController;
use tempfile::{NamedTempFile, TempDir};

// Sessions read the process-global interrupt flag and launches may chdir;
// keep full-session tests from overlapping.
static SESSION_LOCK: Mutex<()> = Mutex::new(());

fn catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn run_session(store: &CatalogStore, launcher: &Launcher, inputs: &[&str]) -> ScriptedConsole {
    let _guard = SESSION_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    interrupt::reset();
    let mut console = ScriptedConsole::new(inputs);
    {
        let mut controller = MenuController::new(store, launcher, &mut console);
        controller.run().unwrap();
    }
    console
}

const DEMO_CATALOG: &str = r#"{
    "Recon": [
        {"name": "Nmap", "description": "Network scanner", "path": "tools/nmap.exe", "type": "exe", "version": "7.94"},
        {"name": "Whois", "description": "Domain lookup", "path": "tools/whois.py", "type": "py"}
    ],
    "Web": [
        {"name": "SQLMap", "description": "SQL injection tester", "path": "tools/sqlmap.py", "type": "py",
         "parameters": "-u {url} --batch"}
    ]
}"#;

/// Integration test: drill categories -> tools -> detail -> back -> exit
#[test]
fn test_session_navigation_round_trip() {
    let file = catalog_file(DEMO_CATALOG);
    let store = CatalogStore::new(file.path());
    let launcher = Launcher::new("/nonexistent/project");

    let console = run_session(&store, &launcher, &["1", "1", "b", "3", "3"]);

    assert!(console.said("Recon"));
    assert!(console.said("Nmap"));
    assert!(console.said("7.94"));
    assert!(console.said("Session ended"));
}

/// Integration test: launching a tool with an absent target simulates
/// instead of failing, and the post-launch prompt returns to the main menu
#[test]
fn test_session_simulated_launch() {
    let file = catalog_file(DEMO_CATALOG);
    let store = CatalogStore::new(file.path());
    let launcher = Launcher::new("/nonexistent/project");

    let console = run_session(&store, &launcher, &["1", "1", "", "", "exit"]);

    assert!(console.said("simulating Nmap"));
    assert!(console.said("open ports"));
    assert!(console.said("demo mode"));
    assert!(console.said("Session ended"));
}

/// Integration test: the {url} placeholder is filled from the prompt before
/// the (simulated) launch
#[test]
fn test_session_url_parameter_substitution() {
    let file = catalog_file(DEMO_CATALOG);
    let store = CatalogStore::new(file.path());
    let launcher = Launcher::new("/nonexistent/project");

    let console = run_session(
        &store,
        &launcher,
        &["2", "1", "", "http://example.com", "", "exit"],
    );

    assert!(console.said("-u http://example.com --batch"));
    assert!(console.said("demo mode"));
}

/// Integration test: a real on-disk script runs and reports success
#[test]
fn test_session_real_launch() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("tools")).unwrap();
    std::fs::write(dir.path().join("tools/hello.sh"), "exit 0\n").unwrap();

    let file = catalog_file(
        r#"{"Local": [
            {"name": "Hello", "description": "Trivial script", "path": "tools/hello.sh", "type": "sh"}
        ]}"#,
    );
    let store = CatalogStore::new(file.path());
    let launcher = Launcher::new(dir.path());

    let console = run_session(&store, &launcher, &["1", "1", "", "x"]);

    assert!(console.said("Hello finished"));
    assert!(console.said("Hello completed"));
    assert!(!console.said("demo mode"));
}

/// Integration test: a missing catalog source falls back to the built-in
/// default and the session stays fully navigable
#[test]
fn test_session_fallback_catalog() {
    let store = CatalogStore::new("/nonexistent/armory/tools.json");
    let launcher = Launcher::new("/nonexistent/project");

    let names: Vec<String> = CatalogStore::default_catalog()
        .category_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(names.len() >= 2);

    let exit_entry = (names.len() + 1).to_string();
    let console = run_session(&store, &launcher, &[exit_entry.as_str()]);

    for name in &names {
        assert!(console.said(name), "fallback category {} not shown", name);
    }
    assert!(console.said("Session ended"));
}

/// Integration test: catalog edits between screens are picked up because
/// every render reloads the source
#[test]
fn test_session_reload_per_view() {
    let file = catalog_file(DEMO_CATALOG);
    let store = CatalogStore::new(file.path());

    assert_eq!(store.load().category_names(), vec!["Recon", "Web"]);

    std::fs::write(
        file.path(),
        r#"{"Fresh": [
            {"name": "NewTool", "description": "d", "path": "t.sh", "type": "sh"},
            {"name": "Other", "description": "d", "path": "o.sh", "type": "sh"}
        ]}"#,
    )
    .unwrap();

    let launcher = Launcher::new("/nonexistent/project");
    let console = run_session(&store, &launcher, &["1", "3", "2"]);

    assert!(console.said("Fresh"));
    assert!(console.said("NewTool"));
    assert!(console.said("Session ended"));
}

/// Integration test: the registry resolves every supported type and rejects
/// unknown ones
#[test]
fn test_registry_resolution_surface() {
    for file_type in ["vbs", "exe", "bat", "jar", "py", "sh", "php", "js"] {
        assert!(resolve(file_type, None).is_some());
    }
    assert!(resolve("docx", None).is_none());

    let direct = resolve("exe", None).unwrap();
    let shelled = resolve("exe", Some("command")).unwrap();
    assert_ne!(direct.method, shelled.method);
}

/// Integration test: unsupported tool types surface as a launch failure,
/// not a crash, and the session continues
#[test]
fn test_session_unsupported_type() {
    let file = catalog_file(
        r#"{"Odd": [
            {"name": "Doc", "description": "not launchable", "path": "tools/doc.docx", "type": "docx"},
            {"name": "Pad", "description": "padding", "path": "tools/pad.sh", "type": "sh"}
        ]}"#,
    );
    let store = CatalogStore::new(file.path());
    let launcher = Launcher::new("/nonexistent/project");

    let console = run_session(&store, &launcher, &["1", "1", "", "", "exit"]);

    assert!(console.said("Launch failed"));
    assert!(console.said("unsupported tool type: docx"));
    assert!(console.said("Session ended"));
}

/// Integration test: the auth gate respects its attempt bound
#[test]
fn test_auth_gate_bound() {
    let mut console = ScriptedConsole::new(&["nope", "still-nope", "admin123"]);
    assert!(auth::authenticate(&mut console, "admin123", 3).unwrap());

    let mut console = ScriptedConsole::new(&["a", "b", "c"]);
    assert!(!auth::authenticate(&mut console, "admin123", 3).unwrap());
    assert!(console.said("access denied"));
}

/// Integration test: launch outcomes distinguish real runs from demo mode
#[test]
fn test_launch_outcome_variants_distinguishable() {
    let _guard = SESSION_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("real.sh"), "exit 0\n").unwrap();
    let launcher = Launcher::new(dir.path());

    let real = armory::catalog::ToolRecord::new("Real", "", "real.sh", "sh");
    let ghost = armory::catalog::ToolRecord::new("Ghost", "", "ghost.sh", "sh");

    let mut console = ScriptedConsole::new(&[]);
    assert_eq!(launcher.launch(&real, &mut console).unwrap(), LaunchOutcome::Success);
    assert_eq!(
        launcher.launch(&ghost, &mut console).unwrap(),
        LaunchOutcome::SimulatedSuccess
    );
}
