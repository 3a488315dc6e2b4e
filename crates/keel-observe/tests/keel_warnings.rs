use std::{
    io,
    sync::{Arc, Mutex},
};

use keel_observe::{LoggerConfig, LoggerFormat, logger_init_with_writer};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
#[allow(deprecated)]
fn keel_warnings_pass_a_quiet_application_level() {
    let out = Captured::default();
    let cfg = LoggerConfig {
        format: LoggerFormat::Json,
        level: "error".into(),
        use_color: false,
        ..LoggerConfig::default()
    };
    logger_init_with_writer(&cfg, out.clone()).unwrap();

    let overrides = keel_core::query::no_pagination();
    assert!(overrides.as_map().is_some());

    tracing::debug!(target: "keel_core::query", "keel debug stays hidden");
    tracing::warn!(target: "my_app", "application warning below its level");

    let logged = out.contents();
    assert!(logged.contains("deprecated"), "missing deprecation warning: {logged}");
    assert!(logged.contains(r#""target":"keel_core::query""#));
    assert!(logged.contains(r#""level":"WARN""#));
    assert!(!logged.contains("keel debug stays hidden"));
    assert!(!logged.contains("application warning"));
}
