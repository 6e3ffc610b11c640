use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;

use crate::algorithm::DistanceMap;
use crate::graph::Weight;
use crate::Result;

/// Output format for distance reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `Node i: distance` line per node
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Serializable summary of one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport<W> {
    pub source: usize,
    /// `null` for unreachable nodes
    pub distances: Vec<Option<W>>,
    pub reachable: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_micros: Option<u64>,
}

impl<W> DistanceReport<W>
where
    W: Weight,
{
    pub fn new(distances: &DistanceMap<W>, elapsed: Option<Duration>) -> Self {
        DistanceReport {
            source: distances.source(),
            distances: distances.as_slice().to_vec(),
            reachable: distances.reachable_count(),
            elapsed_micros: elapsed.map(|d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX)),
        }
    }
}

/// Renders distance mappings for humans or tools
#[derive(Debug, Clone)]
pub struct Reporter {
    format: ReportFormat,
    unreachable_marker: String,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportFormat::default())
    }
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Reporter {
            format,
            unreachable_marker: "unreachable".to_string(),
        }
    }

    /// Sets the text shown instead of a distance for unreachable nodes (text format only)
    pub fn with_unreachable_marker(mut self, marker: impl Into<String>) -> Self {
        self.unreachable_marker = marker.into();
        self
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn write_report<W, O>(&self, out: &mut O, distances: &DistanceMap<W>, elapsed: Option<Duration>) -> Result<()>
    where
        W: Weight + Serialize,
        O: Write,
    {
        match self.format {
            ReportFormat::Text => self.write_text(out, distances, elapsed)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &DistanceReport::new(distances, elapsed))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Renders the report into a string
    pub fn render<W>(&self, distances: &DistanceMap<W>, elapsed: Option<Duration>) -> Result<String>
    where
        W: Weight + Serialize,
    {
        let mut buffer = Vec::new();
        self.write_report(&mut buffer, distances, elapsed)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn write_text<W, O>(&self, out: &mut O, distances: &DistanceMap<W>, elapsed: Option<Duration>) -> std::io::Result<()>
    where
        W: Weight,
        O: Write,
    {
        writeln!(out, "Shortest distances from node {}:", distances.source())?;
        for (node, distance) in distances.iter() {
            match distance {
                Some(d) => writeln!(out, "Node {}: {}", node, d)?,
                None => writeln!(out, "Node {}: {}", node, self.unreachable_marker)?,
            }
        }
        if let Some(elapsed) = elapsed {
            writeln!(out)?;
            writeln!(out, "Elapsed: {} µs", elapsed.as_micros())?;
        }
        Ok(())
    }
}
