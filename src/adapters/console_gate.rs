//! Terminal stand-in for the biometric prompt
//!
//! Shows the prompt on stderr and reads the user's answer from a shared line
//! source. The line source is shared with whoever else reads the terminal
//! (the CLI shell), so answers and commands never race for stdin.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use crate::model::AuthorizationPrompt;
use crate::ports::{AuthOutcome, BiometricGate, LA_ERROR_NOT_INTERACTIVE, LA_ERROR_USER_CANCEL};

/// Lines typed by the user, in order
pub type LineReceiver = Arc<Mutex<mpsc::Receiver<String>>>;

/// Read stdin line by line on a dedicated thread
pub fn stdin_lines() -> LineReceiver {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    Arc::new(Mutex::new(rx))
}

pub struct ConsoleGate {
    lines: LineReceiver,
    timeout: Duration,
}

impl ConsoleGate {
    pub fn new(lines: LineReceiver, timeout: Duration) -> Self {
        Self { lines, timeout }
    }
}

#[async_trait]
impl BiometricGate for ConsoleGate {
    fn is_available(&self) -> bool {
        true
    }

    async fn authorize(&self, prompt: &AuthorizationPrompt) -> AuthOutcome {
        let mut stderr = io::stderr();
        // A closed stderr only loses the prompt text.
        let _ = write!(stderr, "{prompt} - approve? [y/N] ");
        let _ = stderr.flush();

        let mut lines = self.lines.lock().await;
        match tokio::time::timeout(self.timeout, lines.recv()).await {
            Err(_) => AuthOutcome::TimedOut,
            Ok(None) => AuthOutcome::Refused {
                reason: "no interactive input".to_string(),
                code: Some(LA_ERROR_NOT_INTERACTIVE),
            },
            Ok(Some(answer)) => {
                let answer = answer.trim().to_ascii_lowercase();
                debug!("Console gate answer: {:?}", answer);
                if answer == "y" || answer == "yes" {
                    AuthOutcome::Approved
                } else {
                    AuthOutcome::Denied {
                        code: LA_ERROR_USER_CANCEL,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with_lines(lines: &[&str], timeout: Duration) -> (ConsoleGate, mpsc::Sender<String>) {
        let (tx, rx) = mpsc::channel(16);
        for line in lines {
            tx.try_send(line.to_string()).unwrap();
        }
        (ConsoleGate::new(Arc::new(Mutex::new(rx)), timeout), tx)
    }

    fn prompt() -> AuthorizationPrompt {
        AuthorizationPrompt::new("decrypt data").unwrap()
    }

    #[tokio::test]
    async fn test_console_gate_approves_on_yes() {
        let (gate, _tx) = gate_with_lines(&["y", " YES "], Duration::from_secs(1));
        assert_eq!(gate.authorize(&prompt()).await, AuthOutcome::Approved);
        assert_eq!(gate.authorize(&prompt()).await, AuthOutcome::Approved);
    }

    #[tokio::test]
    async fn test_console_gate_denies_anything_else() {
        let (gate, _tx) = gate_with_lines(&["", "nope"], Duration::from_secs(1));
        assert_eq!(
            gate.authorize(&prompt()).await,
            AuthOutcome::Denied {
                code: LA_ERROR_USER_CANCEL
            }
        );
        assert!(matches!(
            gate.authorize(&prompt()).await,
            AuthOutcome::Denied { .. }
        ));
    }

    #[tokio::test]
    async fn test_console_gate_times_out() {
        let (gate, _tx) = gate_with_lines(&[], Duration::from_millis(20));
        assert_eq!(gate.authorize(&prompt()).await, AuthOutcome::TimedOut);
    }

    #[tokio::test]
    async fn test_console_gate_refuses_without_input() {
        let (gate, tx) = gate_with_lines(&[], Duration::from_secs(1));
        drop(tx);
        assert!(matches!(
            gate.authorize(&prompt()).await,
            AuthOutcome::Refused { .. }
        ));
    }
}
