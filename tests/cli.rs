use std::io::{BufRead, BufReader};
use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dirlister() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dirlister"));
    cmd.env("NO_COLOR", "1").env("CLICOLOR", "0");
    cmd
}

fn run_to_end(args: Vec<String>) -> Output {
    dirlister()
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("run dirlister")
}

async fn wordlist_server(words: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(words))
        .mount(&server)
        .await;
    server
}

#[test]
fn unreachable_wordlist_exits_with_failure() {
    let output = run_to_end(
        ["-u", "http://127.0.0.1:1", "-d", "http://127.0.0.1:1/list.txt", "-y"]
            .map(String::from)
            .to_vec(),
    );

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot continue without a wordlist"), "{}", stderr);
}

#[test]
fn zero_threads_exits_with_failure() {
    let output = run_to_end(
        ["-u", "http://127.0.0.1:1", "-d", "http://127.0.0.1:1/list.txt", "-y", "-t", "0"]
            .map(String::from)
            .to_vec(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid arguments"), "{}", stderr);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn completed_run_exits_cleanly() {
    let server = wordlist_server("admin\n# comment\nmissing\n").await;
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let target = server.uri();
    let args = vec![
        "-u".to_string(),
        target.clone(),
        "-d".to_string(),
        format!("{}/list.txt", target),
        "-y".to_string(),
    ];
    let output = tokio::task::spawn_blocking(move || run_to_end(args))
        .await
        .expect("join");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("[*] [200]: {}/admin", target)), "{}", stdout);
    assert!(!stdout.contains("/missing"), "{}", stdout);
}

#[cfg(unix)]
fn interrupt_at_prompt(target: &str) -> (Option<i32>, Vec<String>) {
    let mut child = dirlister()
        .args(["-u", target, "-d", &format!("{}/list.txt", target)])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn dirlister");

    // Held open so the prompt keeps waiting; `wait` would otherwise close it.
    let _stdin = child.stdin.take();
    let stdout = child.stdout.take().expect("piped stdout");

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut lines = Vec::new();
    loop {
        let line = rx
            .recv_timeout(Duration::from_secs(15))
            .expect("prompt shown before timeout");
        let at_prompt = line.contains("Press enter");
        lines.push(line);
        if at_prompt {
            break;
        }
    }

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("run kill");
    assert!(killed.success());

    let status = child.wait().expect("wait for dirlister");
    lines.extend(rx.iter());
    (status.code(), lines)
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn interrupt_exits_with_success() {
    let server = wordlist_server("admin\nlogin\n").await;
    let target = server.uri();

    let (code, lines) = tokio::task::spawn_blocking(move || interrupt_at_prompt(&target))
        .await
        .expect("join");

    assert_eq!(code, Some(0));
    assert!(
        lines.iter().any(|line| line.contains("[!] Exiting...")),
        "{:?}",
        lines
    );
}
