//! Fleet snapshot files.
//!
//! A snapshot is one JSON object holding the three dashboard datasets:
//!
//! ```json
//! {"vehicles": [{"id": "VH-001", ...}], "shipments": [...], "compliance": [...]}
//! ```
//!
//! Paths ending in `.br` are read and written with Brotli compression.

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::{CompressorWriter, Decompressor};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

use crate::row::Record;

/// The datasets behind the dashboard tabs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    #[serde(default)]
    pub vehicles: Vec<Record>,
    #[serde(default)]
    pub shipments: Vec<Record>,
    #[serde(default)]
    pub compliance: Vec<Record>,
}

fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "br")
}

impl FleetSnapshot {
    /// Total number of rows across all datasets.
    pub fn total_rows(&self) -> usize {
        self.vehicles.len() + self.shipments.len() + self.compliance.len()
    }

    /// Reads a snapshot from disk, decompressing `.br` files.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open snapshot: {}", path.display()))?;

        let reader: Box<dyn Read> = if is_compressed(path) {
            Box::new(Decompressor::new(file, 4096))
        } else {
            Box::new(file)
        };

        let snapshot: FleetSnapshot = serde_json::from_reader(BufReader::new(reader))
            .with_context(|| format!("Failed to parse snapshot JSON: {}", path.display()))?;

        info!(
            path = %path.display(),
            vehicles = snapshot.vehicles.len(),
            shipments = snapshot.shipments.len(),
            compliance = snapshot.compliance.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Writes the snapshot to disk, compressing when the path ends in `.br`.
    ///
    /// Brotli runs at quality 6, which keeps generation fast while still
    /// shrinking the repetitive JSON considerably.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create snapshot: {}", path.display()))?;

        let mut writer: Box<dyn Write> = if is_compressed(path) {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to serialize snapshot: {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush snapshot: {}", path.display()))?;
        Ok(())
    }
}
