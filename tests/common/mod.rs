//! Test helpers for msgcat integration tests.
//!
//! Provides scripted menu sessions and fixed timestamps.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use msgcat::config::Config;
use msgcat::{Application, MessageCatalog};

/// Output and final catalog of a scripted session.
pub struct Session {
    pub catalog: MessageCatalog,
    pub output: String,
}

impl Session {
    /// Number of times `needle` was printed.
    pub fn count(&self, needle: &str) -> usize {
        self.output.matches(needle).count()
    }
}

/// Configuration with the demo messages seeded.
pub fn test_config() -> Config {
    Config::default()
}

/// Configuration starting from an empty catalog.
pub fn empty_config() -> Config {
    let mut config = Config::default();
    config.catalog.seed_defaults = false;
    config
}

/// Run a menu session fed with the given input lines.
pub async fn run_session(config: Config, lines: &[&str]) -> Session {
    let mut input = lines.join("\n");
    if !lines.is_empty() {
        input.push('\n');
    }

    let app = Application::new(config);
    let catalog = app.build_catalog().expect("catalog should build");
    let mut output = Vec::new();
    let catalog = app
        .run(catalog, input.as_bytes(), &mut output)
        .await
        .expect("session should end cleanly");

    Session {
        catalog,
        output: String::from_utf8(output).expect("output should be UTF-8"),
    }
}

/// A fixed send time: 2024-03-05 09:07:30 UTC.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 30).unwrap()
}
