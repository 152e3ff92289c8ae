//! Seeded demo fleet generator.
//!
//! Produces a deterministic `FleetSnapshot` for a given seed so the dashboard
//! has something to show without a snapshot file, and so `logiview-mockgen`
//! can write reproducible fixtures.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::row::Record;
use crate::snapshot::FleetSnapshot;

const DEFAULT_VEHICLES: usize = 48;
const DEFAULT_SHIPMENTS: usize = 120;
const DEFAULT_COMPLIANCE: usize = 36;

const MODELS: &[&str] = &[
    "Volvo FH16", "Scania R450", "MAN TGX", "DAF XF", "Mercedes Actros", "Iveco S-Way",
    "Ford Transit", "Renault T",
];

const DRIVERS: &[&str] = &[
    "A. Novak", "B. Okafor", "C. Lindqvist", "D. Moreau", "E. Tanaka", "F. Haddad",
    "G. Kowalski", "H. Silva", "I. Jensen", "J. Rossi", "K. Petrov", "L. Byrne",
];

const DEPOTS: &[&str] = &["Rotterdam", "Hamburg", "Antwerp", "Lyon", "Milan", "Gdansk", "Madrid"];

const CITIES: &[&str] = &[
    "Rotterdam", "Hamburg", "Antwerp", "Lyon", "Milan", "Gdansk", "Madrid", "Vienna",
    "Prague", "Copenhagen", "Zurich", "Barcelona",
];

const CARRIERS: &[&str] = &["NorthSea Freight", "Alpine Haulage", "Baltic Express", "Iberia Cargo"];

const CHECKS: &[&str] = &[
    "Insurance", "Roadworthiness", "Emissions", "Tachograph", "Driver Licence", "ADR Permit",
];

// The last entry of each status list is deliberately absent from the
// dashboard status maps and renders as a gray badge.
const VEHICLE_STATUSES: &[&str] = &["active", "active", "active", "maintenance", "idle", "retired"];
const SHIPMENT_STATUSES: &[&str] = &[
    "in_transit", "in_transit", "delivered", "delivered", "pending", "delayed", "cancelled", "on_hold",
];
const COMPLIANCE_STATUSES: &[&str] = &["valid", "valid", "expiring", "expired", "pending", "archived"];
const PRIORITIES: &[&str] = &["low", "normal", "normal", "high", "urgent"];

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFleet {
    pub vehicles: usize,
    pub shipments: usize,
    pub compliance: usize,
    pub seed: u64,
}

impl Default for MockFleet {
    fn default() -> Self {
        Self {
            vehicles: DEFAULT_VEHICLES,
            shipments: DEFAULT_SHIPMENTS,
            compliance: DEFAULT_COMPLIANCE,
            seed: 42, // Default seed for reproducibility
        }
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// A date in 2026 as `YYYY-MM-DD`.
fn date(rng: &mut StdRng) -> String {
    format!("2026-{:02}-{:02}", rng.gen_range(1..=12), rng.gen_range(1..=28))
}

impl MockFleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(vehicles: usize, shipments: usize, compliance: usize, seed: u64) -> Self {
        Self {
            vehicles,
            shipments,
            compliance,
            seed,
        }
    }

    /// Generates the three datasets. The same configuration always yields the
    /// same snapshot.
    pub fn generate(&self) -> FleetSnapshot {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let vehicles: Vec<Record> = (1..=self.vehicles)
            .map(|n| Self::vehicle(&mut rng, n))
            .collect();
        let shipments = (1..=self.shipments)
            .map(|n| Self::shipment(&mut rng, n))
            .collect();
        let compliance = (1..=self.compliance)
            .map(|n| Self::compliance_check(&mut rng, n, self.vehicles))
            .collect();

        FleetSnapshot {
            vehicles,
            shipments,
            compliance,
        }
    }

    fn vehicle(rng: &mut StdRng, n: usize) -> Record {
        let plate = format!(
            "{}{}-{:03}",
            (b'A' + rng.gen_range(0..26)) as char,
            (b'A' + rng.gen_range(0..26)) as char,
            rng.gen_range(100..1000)
        );
        Record::new(format!("VH-{:03}", n))
            .with("plate", plate)
            .with("model", pick(rng, MODELS))
            .with("driver", pick(rng, DRIVERS))
            .with("depot", pick(rng, DEPOTS))
            .with("mileage", rng.gen_range(2_000..650_000) as i64)
            .with("fuel_pct", rng.gen_range(5..=100) as i64)
            .with("last_service", date(rng))
            .with("status", pick(rng, VEHICLE_STATUSES))
    }

    fn shipment(rng: &mut StdRng, n: usize) -> Record {
        let origin = pick(rng, CITIES);
        let mut destination = pick(rng, CITIES);
        while destination == origin {
            destination = pick(rng, CITIES);
        }
        let weight_kg = (rng.gen_range(50.0..24_000.0_f64) * 10.0).round() / 10.0;
        Record::new(format!("SH-{:05}", 10_000 + n))
            .with("reference", format!("PO-{}", rng.gen_range(100_000..999_999)))
            .with("origin", origin)
            .with("destination", destination)
            .with("carrier", pick(rng, CARRIERS))
            .with("weight_kg", weight_kg)
            .with("eta", date(rng))
            .with("priority", pick(rng, PRIORITIES))
            .with("status", pick(rng, SHIPMENT_STATUSES))
    }

    fn compliance_check(rng: &mut StdRng, n: usize, vehicles: usize) -> Record {
        let vehicle = if vehicles == 0 {
            "VH-000".to_string()
        } else {
            format!("VH-{:03}", rng.gen_range(1..=vehicles))
        };
        Record::new(format!("CP-{:04}", n))
            .with("vehicle_id", vehicle)
            .with("check", pick(rng, CHECKS))
            .with("inspector", pick(rng, DRIVERS))
            .with("expires", date(rng))
            .with("status", pick(rng, COMPLIANCE_STATUSES))
    }
}
