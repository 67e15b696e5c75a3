// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notifications via the platform's command-line notifier

use super::{Notification, Notifier, NotifyError};
use async_trait::async_trait;
use tokio::process::Command;

/// Desktop notifier: `osascript` on macOS, `notify-send` elsewhere
#[derive(Clone, Debug)]
pub struct DesktopNotifier {
    app_name: String,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new("pagewatch")
    }
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn command(&self, notification: &Notification) -> (&'static str, Vec<String>) {
        if cfg!(target_os = "macos") {
            ("osascript", osascript_args(notification))
        } else {
            ("notify-send", notify_send_args(&self.app_name, notification))
        }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let (program, args) = self.command(&notification);
        let output = Command::new(program)
            .args(&args)
            .output()
            .await
            .map_err(|e| NotifyError::Failed(format!("{program}: {e}")))?;

        if !output.status.success() {
            return Err(NotifyError::Command {
                program: program.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

fn osascript_args(notification: &Notification) -> Vec<String> {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        escape_applescript(&notification.message),
        escape_applescript(&notification.title),
    );
    vec!["-e".to_string(), script]
}

fn notify_send_args(app_name: &str, notification: &Notification) -> Vec<String> {
    vec![
        "--app-name".to_string(),
        app_name.to_string(),
        // Expire after 10s like a transient toast
        "--expire-time=10000".to_string(),
        notification.title.clone(),
        notification.message.clone(),
    ]
}

/// Escape special characters for AppleScript strings
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
