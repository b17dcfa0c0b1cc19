//! mackerel-agent plugin output
//!
//! Two modes, selected by the agent through an environment variable:
//! - meta: `# mackerel-agent-plugin` followed by the graph definitions as JSON
//! - values: `<key>\t<value>\t<unix seconds>` per metric

use super::types::{Graph, MetricSource};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Environment variable the agent sets when it wants graph definitions
pub const META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";

const META_HEADER: &str = "# mackerel-agent-plugin";

/// Diffs across a longer gap than this are dropped
const MAX_DIFF_SECONDS: i64 = 600;

#[derive(Serialize)]
struct GraphDefinitions<'a> {
    graphs: BTreeMap<String, &'a Graph>,
}

/// Values persisted between runs for diff metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct LastValues {
    timestamp: i64,
    values: HashMap<String, f64>,
}

/// Prints metrics in the mackerel-agent plugin format
#[derive(Debug, Clone)]
pub struct Reporter {
    tempfile: PathBuf,
}

impl Reporter {
    /// Create a reporter that keeps diff state in `tempfile`
    pub fn new(tempfile: impl Into<PathBuf>) -> Self {
        Self {
            tempfile: tempfile.into(),
        }
    }

    /// Path of the diff state file
    pub fn tempfile(&self) -> &Path {
        &self.tempfile
    }

    /// Check if the agent asked for graph definitions
    pub fn meta_requested() -> bool {
        std::env::var(META_ENV).is_ok_and(|v| v == "1")
    }

    /// Print definitions or values depending on what the agent asked for
    pub async fn run<S, W>(&self, source: &S, cancel: &CancellationToken, out: &mut W) -> Result<()>
    where
        S: MetricSource + ?Sized,
        W: Write,
    {
        if Self::meta_requested() {
            return self.write_definitions(source, out);
        }

        let values = source.fetch_metrics(cancel).await?;
        self.write_values(source, &values, Utc::now(), out)
    }

    /// Print the graph definitions
    pub fn write_definitions<S, W>(&self, source: &S, out: &mut W) -> Result<()>
    where
        S: MetricSource + ?Sized,
        W: Write,
    {
        let prefix = source.metric_key_prefix();
        let definition = source.graph_definition();
        let graphs = definition
            .iter()
            .map(|(key, graph)| (join_key(prefix, key), graph))
            .collect();

        writeln!(out, "{META_HEADER}")?;
        serde_json::to_writer(&mut *out, &GraphDefinitions { graphs })?;
        writeln!(out)?;
        Ok(())
    }

    /// Print one line per metric present in `values`
    pub fn write_values<S, W>(
        &self,
        source: &S,
        values: &HashMap<String, f64>,
        now: DateTime<Utc>,
        out: &mut W,
    ) -> Result<()>
    where
        S: MetricSource + ?Sized,
        W: Write,
    {
        let prefix = source.metric_key_prefix();
        let definition = source.graph_definition();
        let has_diff = definition.values().any(Graph::has_diff);

        let last = if has_diff { self.load_last_values() } else { None };

        for (graph_key, graph) in &definition {
            for metric in &graph.metrics {
                let Some(&value) = values.get(&metric.name) else {
                    continue;
                };

                let value = if metric.diff {
                    let previous = last
                        .as_ref()
                        .and_then(|l| l.values.get(&metric.name).map(|v| (*v, l.timestamp)));
                    match previous.and_then(|(v, t)| per_minute_diff(value, now, v, t)) {
                        Some(diff) => diff,
                        None => {
                            debug!("No usable previous value for diff metric {}", metric.name);
                            continue;
                        }
                    }
                } else {
                    value
                };

                let key = join_key(&join_key(prefix, graph_key), &metric.name);
                writeln!(out, "{key}\t{value:.6}\t{}", now.timestamp())?;
            }
        }

        if has_diff {
            self.save_values(values, now)?;
        }

        Ok(())
    }

    fn load_last_values(&self) -> Option<LastValues> {
        let contents = std::fs::read_to_string(&self.tempfile).ok()?;
        match serde_json::from_str(&contents) {
            Ok(last) => Some(last),
            Err(e) => {
                warn!(
                    "Ignoring unreadable tempfile {}: {e}",
                    self.tempfile.display()
                );
                None
            }
        }
    }

    fn save_values(&self, values: &HashMap<String, f64>, now: DateTime<Utc>) -> Result<()> {
        let state = LastValues {
            timestamp: now.timestamp(),
            values: values.clone(),
        };
        let contents = serde_json::to_string(&state)?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.tempfile.with_extension("tmp");
        std::fs::write(&temp_path, contents)?;
        std::fs::rename(&temp_path, &self.tempfile)?;
        Ok(())
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Rate of change per minute, or `None` when it cannot be trusted
fn per_minute_diff(value: f64, now: DateTime<Utc>, last_value: f64, last_time: i64) -> Option<f64> {
    let elapsed = now.timestamp() - last_time;
    if elapsed <= 0 || elapsed > MAX_DIFF_SECONDS {
        return None;
    }

    let diff = (value - last_value) * 60.0 / elapsed as f64;
    // Counter reset
    if diff < 0.0 {
        return None;
    }
    Some(diff)
}

/// Upper-case the first letter of every word, leaving the rest untouched
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace() || matches!(c, '-' | '_' | '.');
    }
    out
}
