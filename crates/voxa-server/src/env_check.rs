//! Presence report for the LiveKit environment variables.
//!
//! Backs the `voxa-check-env` binary. Only presence is checked; the values are
//! never validated against LiveKit.

/// Variables the server needs for token issuance and room listing.
pub const REQUIRED_VARS: [&str; 3] = ["LIVEKIT_URL", "LIVEKIT_API_KEY", "LIVEKIT_API_SECRET"];

/// Characters of a secret-like value left visible when masking.
const VISIBLE_PREFIX_CHARS: usize = 8;

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarStatus {
    pub name: &'static str,
    /// Display form of the value, masked for keys and secrets. `None` when unset.
    pub display: Option<String>,
}

impl VarStatus {
    pub fn is_set(&self) -> bool {
        self.display.is_some()
    }
}

/// Masks values of variables whose name contains `KEY` or `SECRET`.
pub fn mask_value(name: &str, value: &str) -> String {
    if !(name.contains("KEY") || name.contains("SECRET")) {
        return value.to_string();
    }
    if value.chars().count() > VISIBLE_PREFIX_CHARS {
        let prefix: String = value.chars().take(VISIBLE_PREFIX_CHARS).collect();
        format!("{prefix}...")
    } else {
        "***".to_string()
    }
}

/// Checks every required variable through `var`. Empty values count as unset.
pub fn check_vars<F>(var: F) -> Vec<VarStatus>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_VARS
        .iter()
        .map(|&name| VarStatus {
            name,
            display: var(name)
                .filter(|value| !value.is_empty())
                .map(|value| mask_value(name, &value)),
        })
        .collect()
}

/// Renders the report as printable lines.
pub fn render_report(statuses: &[VarStatus]) -> Vec<String> {
    let rule = "-".repeat(50);
    let mut lines = vec!["Checking environment variables...".to_string(), rule.clone()];

    for status in statuses {
        match &status.display {
            Some(display) => lines.push(format!("✓ {}: {}", status.name, display)),
            None => lines.push(format!("✗ {}: NOT SET", status.name)),
        }
    }

    lines.push(rule);
    if statuses.iter().all(VarStatus::is_set) {
        lines.push("✓ All required environment variables are set!".to_string());
    } else {
        lines.push("✗ Some environment variables are missing.".to_string());
        lines.push(String::new());
        lines.push("Please create a .env file in the backend directory with:".to_string());
        lines.push(format!("  LIVEKIT_URL={}", voxa_voice::PLACEHOLDER_LIVEKIT_URL));
        lines.push(format!("  LIVEKIT_API_KEY={}", voxa_voice::PLACEHOLDER_API_KEY));
        lines.push(format!(
            "  LIVEKIT_API_SECRET={}",
            voxa_voice::PLACEHOLDER_API_SECRET
        ));
    }
    lines
}
