//! User-agent classification into device type, OS and browser.

use woothee::parser::Parser;

/// Classification used when nothing can be determined.
pub const UNKNOWN: &str = "unknown";

/// Parsed device information for a single user-agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device_type: String,
    pub os: String,
    pub browser: String,
}

impl DeviceInfo {
    pub fn unknown() -> Self {
        Self {
            device_type: UNKNOWN.to_string(),
            os: UNKNOWN.to_string(),
            browser: UNKNOWN.to_string(),
        }
    }
}

/// Classifies a user-agent string.
///
/// Deterministic and total: empty or unparsable input yields the
/// `unknown` triple instead of failing.
pub fn classify(user_agent: &str) -> DeviceInfo {
    if user_agent.is_empty() {
        return DeviceInfo::unknown();
    }

    let parser = Parser::new();
    match parser.parse(user_agent) {
        Some(result) => DeviceInfo {
            device_type: map_category(result.category),
            os: normalize(result.os),
            browser: normalize(result.name),
        },
        None => DeviceInfo::unknown(),
    }
}

/// Maps woothee's device categories onto the analytics vocabulary.
fn map_category(category: &str) -> String {
    match category {
        "pc" => "desktop".to_string(),
        "smartphone" | "mobilephone" => "mobile".to_string(),
        "crawler" => "bot".to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Woothee reports unknown fields as "UNKNOWN" or empty strings.
fn normalize(value: &str) -> String {
    if value.is_empty() || value == "UNKNOWN" {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}
