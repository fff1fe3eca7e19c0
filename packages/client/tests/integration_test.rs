//! Process-based end-to-end tests: spawn the server and client binaries and
//! drive the client through stdin.

use std::io::Write;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread;
use std::time::Duration;

/// Path to the compiled `hibiki-server` binary, next to the client binary in
/// the target directory. Spawning the binary directly (instead of `cargo run`)
/// ensures `kill()` terminates the server itself, not a cargo wrapper process.
fn server_bin() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_BIN_EXE_hibiki-client")).with_file_name("hibiki-server")
}

/// Helper struct to manage server process lifecycle
struct TestServer {
    process: Child,
    port: u16,
}

impl TestServer {
    /// Start a test server on the specified port
    fn start(port: u16) -> Self {
        let process = Command::new(server_bin())
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start server");

        // Give server time to start
        thread::sleep(Duration::from_millis(800));

        TestServer { process, port }
    }

    /// Get the WebSocket URL for this server
    fn url(&self) -> String {
        format!("ws://127.0.0.1:{}/", self.port)
    }

    /// Kill the server, simulating the device going away
    fn kill(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Kill the server process when the test ends
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// Helper struct to manage client process lifecycle
struct TestClient {
    process: Child,
    stdin: Option<ChildStdin>,
}

impl TestClient {
    /// Start a test client pointed at the given URL
    fn start(url: &str) -> Self {
        let mut process = Command::new(env!("CARGO_BIN_EXE_hibiki-client"))
            .args(["--url", url])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .spawn()
            .expect("Failed to start client");

        // Take stdin for sending commands
        let stdin = process.stdin.take();

        // Give client time to connect
        thread::sleep(Duration::from_millis(500));

        TestClient { process, stdin }
    }

    /// Send a command line to the client's stdin
    fn send_command(&mut self, command: &str) -> Result<(), std::io::Error> {
        if let Some(stdin) = &mut self.stdin {
            writeln!(stdin, "{}", command)?;
            stdin.flush()?;
        }
        Ok(())
    }

    /// Check if the client process is still running (not crashed)
    fn is_running(&mut self) -> bool {
        matches!(self.process.try_wait(), Ok(None))
    }

    /// Wait for the client process to exit with timeout
    fn wait_for_exit(&mut self, timeout: Duration) -> Result<std::process::ExitStatus, String> {
        let start = std::time::Instant::now();
        loop {
            if let Ok(Some(status)) = self.process.try_wait() {
                return Ok(status);
            }
            if start.elapsed() > timeout {
                return Err(format!("Timeout waiting for process to exit after {:?}", timeout));
            }
            thread::sleep(Duration::from_millis(50));
        }
    }
}

impl Drop for TestClient {
    fn drop(&mut self) {
        // Kill the client process when done
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

#[test]
fn test_server_starts_successfully() {
    // テスト項目: サーバーが正常に起動する
    // given (前提条件):
    let port = 19080;

    // when (操作):
    let _server = TestServer::start(port);

    // then (期待する結果):
    // Server started successfully (no panic)
    thread::sleep(Duration::from_millis(100));
}

#[test]
fn test_client_connects_to_server() {
    // テスト項目: クライアントがサーバーに接続できる
    // given (前提条件):
    let port = 19081;
    let server = TestServer::start(port);

    // when (操作):
    let mut client = TestClient::start(&server.url());

    // then (期待する結果):
    thread::sleep(Duration::from_millis(300));
    assert!(client.is_running(), "Client should stay connected");
}

#[test]
fn test_client_sends_commands_without_crashing() {
    // テスト項目: コマンド送受信が正常に動作する（クラッシュしない）
    // given (前提条件):
    let port = 19082;
    let server = TestServer::start(port);
    let mut client = TestClient::start(&server.url());

    // when (操作):
    client
        .send_command("turn_on")
        .expect("Failed to send turn_on");
    thread::sleep(Duration::from_millis(300));
    client
        .send_command("volume_up")
        .expect("Failed to send volume_up");
    thread::sleep(Duration::from_millis(300));

    // then (期待する結果):
    assert!(
        client.is_running(),
        "Client should still be running after sending commands"
    );

    // Note: Status text content verification is done in the server's
    // websocket integration tests; this test covers process stability.
}

#[test]
fn test_multiple_controllers_can_connect() {
    // テスト項目: 複数のコントローラが同時に接続できる
    // given (前提条件):
    let port = 19083;
    let server = TestServer::start(port);

    // when (操作):
    let mut client1 = TestClient::start(&server.url());
    let mut client2 = TestClient::start(&server.url());

    // then (期待する結果):
    thread::sleep(Duration::from_millis(300));
    assert!(
        client1.is_running() && client2.is_running(),
        "Both controllers should stay connected"
    );
}

#[test]
fn test_client_exits_without_reconnecting_when_server_dies() {
    // テスト項目: サーバー消失後、クライアントは再接続せずに終了する
    // given (前提条件):
    let port = 19084;
    let mut server = TestServer::start(port);
    let mut client = TestClient::start(&server.url());
    thread::sleep(Duration::from_millis(300));
    assert!(client.is_running(), "Client should be connected initially");

    // when (操作):
    server.kill();

    // then (期待する結果):
    // 再接続ループは存在しないため、クライアントは自力で終了する
    let exit_result = client.wait_for_exit(Duration::from_secs(5));
    assert!(
        exit_result.is_ok(),
        "Client should have exited after losing the connection: {:?}",
        exit_result
    );
}
