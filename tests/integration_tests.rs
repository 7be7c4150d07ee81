//! Tests de integración para el simulador de planificación de CPU

use std::fs;

use cpu_scheduling_simulator::{
    config, optimize_round_robin, optimize_sjf, parse_processes, read_input, simulate,
    sjf_scheduling_with_history, sort_by_arrival, write_output, write_sweep_report, Process,
    SchedError, ScheduleEntry, SchedulingAlgorithm, Simulation, SweepRange,
};

fn reference() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5),
        Process::new(2, 1, 3),
        Process::new(3, 2, 1),
    ]
}

/// Carga con ids repetidos: cada id vuelve con una segunda ráfaga.
fn bursty_workload() -> Vec<Process> {
    let mut processes = parse_processes(
        "0 0 9\n1 1 8\n2 2 2\n3 5 2\n0 30 2\n1 31 7\n2 32 3\n3 35 1\n0 60 6\n2 62 4\n",
    )
    .unwrap();
    sort_by_arrival(&mut processes);
    processes
}

fn all_algorithms() -> Vec<SchedulingAlgorithm> {
    vec![
        SchedulingAlgorithm::fcfs(),
        SchedulingAlgorithm::round_robin(1),
        SchedulingAlgorithm::round_robin(4),
        SchedulingAlgorithm::srtf(),
        SchedulingAlgorithm::predictive_sjf(0.0, 5.0),
        SchedulingAlgorithm::predictive_sjf(0.5, 5.0),
        SchedulingAlgorithm::predictive_sjf(1.0, 5.0),
    ]
}

#[test]
fn test_fcfs_reference_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("FCFS.txt");

    let metrics = simulate(reference(), &SchedulingAlgorithm::fcfs()).unwrap();
    write_output(&path, &metrics).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "(0, 1)\n(5, 2)\n(8, 3)\naverage waiting time 3.33\n");
}

#[test]
fn test_round_robin_reference_scenario() {
    let metrics = simulate(reference(), &SchedulingAlgorithm::round_robin(2)).unwrap();

    // El proceso 1 corre 2 unidades; 2 y 3 entran a la cola antes de que vuelva
    assert_eq!(metrics.schedule[0], ScheduleEntry::new(0, 1));
    assert_eq!(metrics.dispatch_order(), vec![1, 2, 3, 1, 2, 1]);
    assert_eq!(metrics.schedule.last().unwrap().time, 8);
}

#[test]
fn test_every_algorithm_is_deterministic_and_non_negative() {
    let processes = bursty_workload();
    for algorithm in all_algorithms() {
        let first = simulate(processes.clone(), &algorithm).unwrap();
        let second = simulate(processes.clone(), &algorithm).unwrap();

        assert_eq!(first, second, "{}", algorithm);
        assert!(first.average_waiting_time >= 0.0);
        assert_eq!(first.process_count, processes.len());
    }
}

#[test]
fn test_every_process_is_dispatched() {
    let processes = bursty_workload();
    for algorithm in all_algorithms() {
        let metrics = simulate(processes.clone(), &algorithm).unwrap();
        for id in 0..4 {
            assert!(
                metrics.schedule.iter().any(|entry| entry.process_id == id),
                "{} nunca despachó el proceso {}",
                algorithm,
                id
            );
        }
    }
}

#[test]
fn test_schedule_times_are_monotonic() {
    let processes = bursty_workload();
    for algorithm in all_algorithms() {
        let metrics = simulate(processes.clone(), &algorithm).unwrap();
        assert!(metrics.schedule.windows(2).all(|w| w[0].time < w[1].time), "{}", algorithm);
    }
}

#[test]
fn test_non_preemptive_policies_dispatch_once_per_record() {
    let processes = bursty_workload();
    let fcfs = simulate(processes.clone(), &SchedulingAlgorithm::fcfs()).unwrap();
    let sjf = simulate(processes.clone(), &SchedulingAlgorithm::predictive_sjf(0.5, 5.0)).unwrap();

    assert_eq!(fcfs.schedule.len(), processes.len());
    assert_eq!(sjf.schedule.len(), processes.len());
    let arrival_order: Vec<u32> = processes.iter().map(|p| p.id).collect();
    assert_eq!(fcfs.dispatch_order(), arrival_order);
}

#[test]
fn test_srtf_waiting_matches_completion_times() {
    // Con pasos unitarios, la suma de largos de cola coincide con la espera real
    let processes = reference();
    let metrics = simulate(processes, &SchedulingAlgorithm::srtf()).unwrap();

    // Finalizaciones: p3 en 3, p2 en 5, p1 en 9
    let expected = (9 - 0 - 5) + (5 - 1 - 3) + (3 - 2 - 1);
    assert_eq!(metrics.total_waiting_time, expected);
}

#[test]
fn test_sjf_prediction_history_per_id() {
    let outcome = sjf_scheduling_with_history(bursty_workload(), 1.0, 5.0).unwrap();

    // Con alpha = 1 cada nueva predicción es la última ráfaga real del id
    let history = &outcome.history[&0];
    assert_eq!(history.bursts, vec![9, 2, 6]);
    assert_eq!(history.predictions, vec![5.0, 9.0, 2.0]);

    let frozen = sjf_scheduling_with_history(bursty_workload(), 0.0, 5.0).unwrap();
    for history in frozen.history.values() {
        assert!(history.predictions.iter().all(|&p| p == 5.0));
    }
}

#[test]
fn test_sjf_prediction_uses_burst_completed_while_sibling_waits() {
    // Las dos primeras ráfagas del id 4 esperan juntas; la tercera llega en t=3
    let processes = parse_processes("7 0 6\n4 0 3\n4 0 8\n4 3 1\n").unwrap();

    let follow = sjf_scheduling_with_history(processes.clone(), 1.0, 5.0).unwrap();
    assert_eq!(follow.history[&4].predictions, vec![5.0, 5.0, 3.0]);
    assert_eq!(follow.metrics.dispatch_order(), vec![4, 4, 4, 7]);

    let smoothed = sjf_scheduling_with_history(processes, 0.5, 5.0).unwrap();
    assert_eq!(smoothed.history[&4].predictions, vec![5.0, 5.0, 4.0]);
    assert_eq!(smoothed.history[&4].bursts, vec![3, 1, 8]);
}

#[test]
fn test_srtf_runs_shortest_remaining_every_unit() {
    // Reconstruye la ejecución unidad por unidad a partir de la planificación
    let processes = bursty_workload();
    let metrics = simulate(processes.clone(), &SchedulingAlgorithm::srtf()).unwrap();

    let mut remaining: Vec<u32> = processes.iter().map(|p| p.burst_time).collect();
    let mut entries = metrics.schedule.iter().peekable();
    let mut running: Option<u32> = None;
    let mut t: u64 = 0;

    while remaining.iter().any(|&r| r > 0) {
        while let Some(entry) = entries.next_if(|e| e.time <= t) {
            running = Some(entry.process_id);
        }
        let ready: Vec<usize> = (0..processes.len())
            .filter(|&slot| u64::from(processes[slot].arrival_time) <= t && remaining[slot] > 0)
            .collect();

        match ready.iter().find(|&&slot| Some(processes[slot].id) == running) {
            Some(&slot) => {
                let shortest = ready.iter().map(|&s| remaining[s]).min().unwrap();
                assert_eq!(remaining[slot], shortest, "t = {}", t);
                remaining[slot] -= 1;
            }
            None => assert!(ready.is_empty(), "CPU ociosa en t = {} con procesos listos", t),
        }
        t += 1;
    }
    assert!(entries.next().is_none());
}

#[test]
fn test_sjf_single_process_uses_initial_guess() {
    let outcome = sjf_scheduling_with_history(vec![Process::new(1, 0, 5)], 0.5, 5.0).unwrap();
    assert_eq!(outcome.metrics.schedule, vec![ScheduleEntry::new(0, 1)]);
    assert_eq!(outcome.history[&1].predictions, vec![5.0]);
}

#[test]
fn test_read_input_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(config::DEFAULT_INPUT_FILE);
    fs::write(&path, "3 4 1\n1 0 5\n2 4 3\n").unwrap();

    let mut processes = read_input(&path).unwrap();
    sort_by_arrival(&mut processes);
    let ids: Vec<u32> = processes.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[test]
fn test_read_input_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.txt");
    assert!(matches!(read_input(&missing), Err(SchedError::Io { .. })));

    let bad = dir.path().join("bad.txt");
    fs::write(&bad, "1 0 5\n2 1\n").unwrap();
    assert!(matches!(read_input(&bad), Err(SchedError::InputFormat { line: 2, .. })));
}

#[test]
fn test_empty_input_is_rejected_everywhere() {
    for algorithm in all_algorithms() {
        assert!(matches!(simulate(Vec::new(), &algorithm), Err(SchedError::EmptyInput)));
    }
    assert!(matches!(
        Simulation::new(Vec::new(), SchedulingAlgorithm::srtf()),
        Err(SchedError::EmptyInput)
    ));
    assert!(matches!(
        optimize_sjf(&[], SweepRange::new(0.0, 1.0, 0.5), 5.0),
        Err(SchedError::EmptyInput)
    ));
}

#[test]
fn test_optimizer_reports() {
    let dir = tempfile::tempdir().unwrap();
    let processes = bursty_workload();

    let rr = optimize_round_robin(&processes, config::default_rr_sweep()).unwrap();
    let path = dir.path().join(config::RR_SWEEP_REPORT);
    write_sweep_report(&path, "quantum avg.wait", &rr.rows, |q| q.to_string()).unwrap();

    let report = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "quantum avg.wait");
    assert_eq!(lines.len(), 16);
    assert!(lines[1].starts_with("1 "));

    let sjf = optimize_sjf(&processes, config::default_sjf_sweep(), config::DEFAULT_INITIAL_GUESS).unwrap();
    assert_eq!(sjf.rows.len(), 51);
    let best = simulate(processes, &SchedulingAlgorithm::predictive_sjf(sjf.best, 5.0)).unwrap();
    assert_eq!(best.average_waiting_time, sjf.best_average);
}
