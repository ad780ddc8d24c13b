use std::io::{self, Write};

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

/// One line per job: `<platform>  <provenance>  <message>`.
pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "Result: {}", env.op)?;
        let jobs = env.result.get("jobs").and_then(|j| j.as_array()).cloned().unwrap_or_default();
        for job in &jobs {
            let field = |k: &str| job.get(k).and_then(|v| v.as_str()).unwrap_or("-").to_string();
            let written = job.get("written").and_then(|v| v.as_bool()).unwrap_or(false);
            let mark = if written { "" } else { "  (not written)" };
            writeln!(w, "  {:<12} {:<12} {}{}", field("platform"), field("provenance"), field("message"), mark)?;
        }
        if self.pretty {
            if let Some(ts) = env.result.get("last_run").and_then(|v| v.as_i64()) { writeln!(w, "  last_run={}", ts)?; }
        }
        Ok(())
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn new(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout();
        self.presenter.emit(env, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Envelope {
        let result = json!({
            "jobs": [
                {"platform": "spoj", "provenance": "fresh", "message": "Solved 5", "written": true},
                {"platform": "leetcode", "provenance": "placeholder", "message": "Visit profile", "written": false}
            ],
            "last_run": 1700000000
        });
        Envelope::result("badges", &result).unwrap()
    }

    #[test]
    fn text_lists_each_job() {
        let mut buf = Vec::new();
        TextPresenter { pretty: false }.emit(&sample(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Result: badges\n"));
        assert!(out.contains("spoj"));
        assert!(out.contains("Solved 5"));
        assert!(out.contains("Visit profile  (not written)"));
        assert!(!out.contains("last_run"));
    }

    #[test]
    fn json_is_single_line() {
        let mut buf = Vec::new();
        JsonPresenter { pretty: false }.emit(&sample(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["result"]["jobs"][0]["message"], "Solved 5");
    }
}
