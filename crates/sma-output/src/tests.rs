//! Integration tests for sma-output.

use std::path::Path;

fn read_semicolon(path: &Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::ReaderBuilder::new().delimiter(b';').from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[cfg(test)]
mod csv_tests {
    use sma_core::Tick;
    use tempfile::TempDir;

    use super::read_semicolon;
    use crate::csv::{AGENTS_FILE, CsvWriter, SNAPSHOTS_FILE, SUMMARIES_FILE, export_agents};
    use crate::row::{AgentRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            iteration:     tick,
            food_count:    2,
            best_fitness:  Some(3.25),
            worst_fitness: Some(80.5),
            mean_weight:   0.5,
        }
    }

    #[test]
    fn streaming_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOTS_FILE).exists());
        assert!(dir.path().join(SUMMARIES_FILE).exists());
        assert!(!dir.path().join(AGENTS_FILE).exists());
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_final(&[]).unwrap();
        w.finish().unwrap();

        let (agents, _) = read_semicolon(&dir.path().join(AGENTS_FILE));
        assert_eq!(agents, ["X", "Y", "Weight"]);
        let (snaps, _) = read_semicolon(&dir.path().join(SNAPSHOTS_FILE));
        assert_eq!(snaps, ["Tick", "X", "Y", "Weight"]);
        let (sums, _) = read_semicolon(&dir.path().join(SUMMARIES_FILE));
        assert_eq!(
            sums,
            ["tick", "iteration", "food_count", "best_fitness", "worst_fitness", "mean_weight"]
        );
    }

    #[test]
    fn export_uses_semicolons_and_full_precision() {
        let dir = tmp();
        let path = dir.path().join("export.csv");
        let rows = [
            AgentRow { x: 12.345678, y: 0.1, weight: 1.0 },
            AgentRow { x: 99.5, y: 3.0, weight: -0.6931472 },
        ];
        export_agents(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("X;Y;Weight"));
        assert_eq!(lines.next(), Some("12.345678;0.1;1"));
        assert_eq!(lines.next(), Some("99.5;3;-0.6931472"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn exported_floats_read_back_exactly() {
        let dir = tmp();
        let path = dir.path().join("export.csv");
        let rows: Vec<AgentRow> = (1..50)
            .map(|i| {
                let f = i as f32;
                AgentRow { x: f / 7.0, y: f.sqrt(), weight: (f / 3.0).ln() }
            })
            .collect();
        export_agents(&path, &rows).unwrap();

        let (_, read) = read_semicolon(&path);
        assert_eq!(read.len(), rows.len());
        for (rec, row) in read.iter().zip(&rows) {
            assert_eq!(rec[0].parse::<f32>().unwrap(), row.x);
            assert_eq!(rec[1].parse::<f32>().unwrap(), row.y);
            assert_eq!(rec[2].parse::<f32>().unwrap(), row.weight);
        }
    }

    #[test]
    fn snapshot_rows_carry_tick() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [AgentRow { x: 1.0, y: 2.0, weight: 0.0 }, AgentRow { x: 3.0, y: 4.0, weight: 0.25 }];
        w.write_snapshot(Tick(0), &rows).unwrap();
        w.write_snapshot(Tick(5), &rows[..1]).unwrap();
        w.finish().unwrap();

        let (_, read) = read_semicolon(&dir.path().join(SNAPSHOTS_FILE));
        assert_eq!(read.len(), 3);
        assert_eq!(&read[0][0], "0");
        assert_eq!(&read[1][3], "0.25");
        assert_eq!(&read[2][0], "5");
    }

    #[test]
    fn missing_fitness_is_an_empty_field() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            best_fitness: None,
            worst_fitness: None,
            ..summary_row(4)
        })
        .unwrap();
        w.finish().unwrap();

        let (_, read) = read_semicolon(&dir.path().join(SUMMARIES_FILE));
        assert_eq!(read.len(), 2);
        assert_eq!(&read[0][0], "3");
        assert_eq!(&read[0][3], "3.25");
        assert_eq!(&read[0][4], "80.5");
        assert_eq!(&read[1][3], "");
        assert_eq!(&read[1][4], "");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use sma_agent::{AgentStoreBuilder, SpawnMode};
    use sma_behavior::SlimeMouldBehavior;
    use sma_core::{AnnealPolicy, BoundaryPolicy, SimConfig, Tick, Vec2};
    use sma_sim::{SimBuilder, SimObserver, TickSummary};

    use super::read_semicolon;
    use crate::csv::{AGENTS_FILE, CsvWriter, SNAPSHOTS_FILE, SUMMARIES_FILE};
    use crate::row::{AgentRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    fn config(total_ticks: u64, interval: u64) -> SimConfig {
        SimConfig {
            width:                 64,
            height:                64,
            total_ticks,
            max_iteration:         total_ticks,
            seed:                  7,
            num_threads:           Some(1),
            output_interval_ticks: interval,
            boundary:              BoundaryPolicy::Wrap,
            anneal:                AnnealPolicy::Always,
        }
    }

    #[test]
    fn full_run_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let agents = AgentStoreBuilder::new(12, 7).domain(64, 64).spawn(SpawnMode::Noise).build();
        let mut sim = SimBuilder::new(config(10, 5), agents, SlimeMouldBehavior::default()).build().unwrap();
        sim.add_food(Vec2::new(32.0, 32.0));

        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let (_, summaries) = read_semicolon(&dir.path().join(SUMMARIES_FILE));
        assert_eq!(summaries.len(), 10);
        assert_eq!(&summaries[9][0], "9");
        assert_eq!(&summaries[0][2], "1");

        // Snapshots at ticks 0 and 5.
        let (_, snaps) = read_semicolon(&dir.path().join(SNAPSHOTS_FILE));
        assert_eq!(snaps.len(), 24);

        let (_, agents) = read_semicolon(&dir.path().join(AGENTS_FILE));
        assert_eq!(agents.len(), 12);
        for (rec, p) in agents.iter().zip(sim.positions()) {
            assert_eq!(rec[0].parse::<f32>().unwrap(), p.x);
            assert_eq!(rec[1].parse::<f32>().unwrap(), p.y);
        }
    }

    /// Fails every write; counts calls.
    #[derive(Default)]
    struct Failing {
        calls: usize,
    }

    impl OutputWriter for Failing {
        fn write_snapshot(&mut self, _tick: Tick, _rows: &[AgentRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("first")))
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("later")))
        }

        fn write_final(&mut self, _rows: &[AgentRow]) -> OutputResult<()> {
            self.calls += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let agents = AgentStoreBuilder::new(2, 1).domain(64, 64).build();
        let mut obs = SimOutputObserver::new(Failing::default());
        let field = sma_world::TrailField::new(64, 64, Default::default()).unwrap();

        obs.on_snapshot(Tick(0), &agents, &field);
        obs.on_tick_end(&TickSummary {
            tick:          Tick(0),
            iteration:     0,
            food_count:    0,
            best_fitness:  None,
            worst_fitness: None,
            mean_weight:   0.0,
        });
        obs.on_sim_end(Tick(1), &agents);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("first"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }
}
