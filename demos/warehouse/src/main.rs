//! warehouse: small end-to-end run of the fleet manager.
//!
//! Five robots cross a 4×3 warehouse grid between the loading docks and the
//! shelves.  Robots 4 and 5 start at opposite ends of the same column, so the
//! run exercises lane contention and the wait queue.
//!
//! ```text
//! cargo run -p warehouse                  # embedded floor plan
//! cargo run -p warehouse -- plan.json     # any nav-graph JSON with the same names
//! RUST_LOG=debug cargo run -p warehouse   # lane grants, denials and releases
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fm_core::{FleetConfig, Point, RobotId, Tick};
use fm_fleet::{AssignOutcome, FleetBuilder, FleetObserver, TickReport};
use fm_graph::{NavGraph, load_nav_graph, load_nav_graph_str};
use fm_output::{CsvWriter, FleetOutputObserver, OutputWriter};
use fm_robot::Robot;
use fm_traffic::LaneReservations;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64  = 7;
const TICK_DURATION_MS:      u32  = 50; // 20 Hz
const TOTAL_TICKS:           u64  = 600;
const OUTPUT_INTERVAL_TICKS: u64  = 10;
const OUTPUT_DIR:            &str = "output/warehouse";
const LEVEL:                 &str = "L1";

/// (start vertex, destination vertex) per robot, in spawn order.
const JOBS: [(&str, &str); 5] = [
    ("dock_a",  "shelf_4"),
    ("dock_b",  "shelf_3"),
    ("dock_c",  "shelf_2"),
    ("dock_d",  "shelf_1"),
    ("shelf_4", "dock_d"),
];

// ── Floor plan ────────────────────────────────────────────────────────────────

// Vertex v = row * 4 + column, 2 m spacing.  Row 0 docks, row 2 shelves.
const FLOOR_PLAN: &str = r#"{
  "building_name": "warehouse",
  "levels": {
    "L1": {
      "vertices": [
        [0.0, 0.0, {"name": "dock_a", "is_charger": true}],
        [2.0, 0.0, {"name": "dock_b"}],
        [4.0, 0.0, {"name": "dock_c"}],
        [6.0, 0.0, {"name": "dock_d", "is_charger": true}],
        [0.0, 2.0], [2.0, 2.0], [4.0, 2.0], [6.0, 2.0, {"name": ""}],
        [0.0, 4.0, {"name": "shelf_1"}],
        [2.0, 4.0, {"name": "shelf_2"}],
        [4.0, 4.0, {"name": "shelf_3"}],
        [6.0, 4.0, {"name": "shelf_4", "zone": "cold"}]
      ],
      "lanes": [
        [0, 1], [1, 2], [2, 3],
        [4, 5], [5, 6], [6, 7],
        [8, 9], [9, 10], [10, 11],
        [0, 4, {"speed_limit": 0.0}], [4, 8],
        [1, 5], [5, 9],
        [2, 6], [6, 10],
        [3, 7], [7, 11]
      ]
    }
  }
}"#;

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer and keeps a few run totals.
struct TallyObserver<W: OutputWriter> {
    inner:       FleetOutputObserver<W>,
    arrivals:    Vec<(RobotId, Tick)>,
    wait_events: usize,
    peak_held:   usize,
}

impl<W: OutputWriter> TallyObserver<W> {
    fn new(inner: FleetOutputObserver<W>) -> Self {
        Self { inner, arrivals: Vec::new(), wait_events: 0, peak_held: 0 }
    }
}

impl<W: OutputWriter> FleetObserver for TallyObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        self.arrivals.extend(report.arrived.iter().map(|&id| (id, report.tick)));
        self.wait_events += report.newly_waiting.len();
        self.peak_held = self.peak_held.max(report.reservations);
        self.inner.on_tick_end(report);
    }

    fn on_snapshot(&mut self, tick: Tick, robots: &[Robot], traffic: &LaneReservations) {
        self.inner.on_snapshot(tick, robots, traffic);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_graph() -> Result<NavGraph> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading nav graph");
            load_nav_graph(Path::new(&path)).with_context(|| format!("loading {path}"))
        }
        None => Ok(load_nav_graph_str(FLOOR_PLAN)?),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Nav graph.
    let graph = load_graph()?;
    {
        let level = graph.level(LEVEL)?;
        info!(
            building = graph.building_name(),
            level = LEVEL,
            vertices = level.vertex_count(),
            lanes = level.lane_count(),
            chargers = level.chargers().count(),
            "nav graph ready"
        );
    }

    // 2. Fleet.
    let config = FleetConfig {
        tick_duration_ms:      TICK_DURATION_MS,
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        ..FleetConfig::default()
    };
    let mut fleet = FleetBuilder::new(config.clone(), graph).level(LEVEL).build()?;

    // 3. Resolve job endpoints by vertex name.
    let mut legs = Vec::with_capacity(JOBS.len());
    {
        let level = fleet.active_level()?;
        let pos = |name: &str| {
            level
                .vertex_by_name(name)
                .map(|v| v.pos)
                .with_context(|| format!("no vertex named {name:?} on {LEVEL}"))
        };
        for (from, to) in JOBS {
            legs.push((pos(from)?, pos(to)?));
        }
    }

    // 4. Spawn and dispatch.
    for (start, dest) in legs {
        let id = fleet.spawn(start).id();
        match fleet.assign_destination(id, dest)? {
            AssignOutcome::Assigned { path } => {
                info!(robot = id.0, hops = path.len() - 1, "dispatched");
            }
            other => warn!(robot = id.0, ?other, "not dispatched"),
        }
    }

    // 5. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TallyObserver::new(FleetOutputObserver::new(writer, &config));

    // 6. Run.
    let t0 = Instant::now();
    fleet.run(&mut obs);
    let wall = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
    }

    // 7. Summary.
    println!(
        "Ran {} ticks ({}) in {:.3} s wall",
        TOTAL_TICKS,
        fleet.clock(),
        wall.as_secs_f64()
    );
    println!(
        "  wait events: {}  |  peak reservations: {}  |  output: {OUTPUT_DIR}/",
        obs.wait_events, obs.peak_held
    );
    println!();
    println!("{:<8} {:<8} {:<10} {:<18} {:<10}", "Robot", "Colour", "Status", "Position", "Arrived");
    println!("{}", "-".repeat(58));
    for robot in fleet.robots() {
        let arrived = obs
            .arrivals
            .iter()
            .find(|(id, _)| *id == robot.id())
            .map(|(_, t)| t.to_string())
            .unwrap_or_else(|| "-".to_owned());
        println!(
            "{:<8} {:<8} {:<10} {:<18} {:<10}",
            robot.id().0,
            robot.color(),
            robot.status(),
            robot.position().to_string(),
            arrived,
        );
    }

    Ok(())
}
