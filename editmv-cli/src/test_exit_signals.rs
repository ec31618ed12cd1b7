#[cfg(test)]
#[cfg(unix)] // Signal tests only work on Unix-like systems
mod signal_tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::{Child, Command, Stdio};
    use std::thread;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    const EDIT_FILE: &str = "new_names_signal_test.txt";

    fn get_editmv_binary() -> PathBuf {
        let mut path = std::env::current_exe().unwrap();
        path.pop(); // Remove test binary name
        if path.ends_with("deps") {
            path.pop();
        }
        path.push("editmv");
        path
    }

    fn spawn_session(temp_dir: &TempDir) -> Child {
        // stdin stays open so the prompt loop blocks until the signal lands.
        Command::new(get_editmv_binary())
            .args(["--edit-file", EDIT_FILE])
            .current_dir(temp_dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn editmv")
    }

    fn wait_for_file(path: &Path, timeout: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if path.exists() {
                return true;
            }
            thread::sleep(Duration::from_millis(20));
        }
        path.exists()
    }

    #[test]
    fn test_sigint_keeps_edit_file_and_exits_zero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        let edit_file = temp_dir.path().join(EDIT_FILE);

        let child = spawn_session(&temp_dir);
        assert!(
            wait_for_file(&edit_file, Duration::from_secs(5)),
            "Edit file should be created at session start"
        );

        unsafe {
            libc::kill(child.id() as i32, libc::SIGINT);
        }
        // Let the handler run before closing stdin, so the exit cannot be
        // mistaken for an end-of-input quit.
        thread::sleep(Duration::from_millis(300));

        let output = child.wait_with_output().expect("Failed to wait for child");
        assert_eq!(output.status.code(), Some(0), "Interrupt should exit 0");

        assert!(
            edit_file.exists(),
            "Edit file should survive the interrupt"
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Interrupted"));
        assert!(stderr.contains(EDIT_FILE));
    }

    #[test]
    fn test_sigterm_keeps_edit_file_and_exits_zero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        let edit_file = temp_dir.path().join(EDIT_FILE);

        let child = spawn_session(&temp_dir);
        assert!(
            wait_for_file(&edit_file, Duration::from_secs(5)),
            "Edit file should be created at session start"
        );

        unsafe {
            libc::kill(child.id() as i32, libc::SIGTERM);
        }
        thread::sleep(Duration::from_millis(300));

        let output = child.wait_with_output().expect("Failed to wait for child");
        assert_eq!(output.status.code(), Some(0), "SIGTERM should exit 0");

        assert!(
            edit_file.exists(),
            "Edit file should survive the termination"
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Terminated"));
    }

    #[test]
    fn test_sigkill_also_leaves_the_edit_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        let edit_file = temp_dir.path().join(EDIT_FILE);

        let child = spawn_session(&temp_dir);
        assert!(
            wait_for_file(&edit_file, Duration::from_secs(5)),
            "Edit file should be created at session start"
        );

        // No handler can run for SIGKILL; the file simply stays behind.
        unsafe {
            libc::kill(child.id() as i32, libc::SIGKILL);
        }

        let output = child.wait_with_output().expect("Failed to wait for child");
        assert!(output.status.code().is_none(), "Should be killed by signal");
        assert!(edit_file.exists());
    }
}
