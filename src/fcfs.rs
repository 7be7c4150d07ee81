//! # First-Come First-Served
//!
//! Planificación no preemptiva: cada proceso corre hasta completarse en el
//! orden de la lista recibida (que el llamador ya ordenó por llegada).

use log::debug;

use crate::error::{Result, SchedError};
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;

/// Simula FCFS sobre una copia propia de los procesos.
///
/// Si el reloj está detrás de la llegada del siguiente proceso, salta
/// hasta ella (CPU ociosa). La espera de cada proceso es `reloj - llegada`
/// en el momento de su despacho.
///
/// # Errors
///
/// `SchedError::EmptyInput` si la lista está vacía.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{fcfs_scheduling, Process};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3), Process::new(3, 2, 1)];
/// let metrics = fcfs_scheduling(processes).unwrap();
/// assert_eq!(metrics.schedule[1].time, 5);
/// assert_eq!(format!("{:.2}", metrics.average_waiting_time), "3.33");
/// ```
pub fn fcfs_scheduling(mut processes: Vec<Process>) -> Result<SimulationMetrics> {
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }

    let mut calc = MetricsCalculator::new();
    let mut clock: u64 = 0;

    for process in processes.iter_mut() {
        let arrival = u64::from(process.arrival_time);
        if clock < arrival {
            clock = arrival;
        }
        debug!("t = {:3}: despachando {}", clock, process);
        calc.record_dispatch(clock, process.id);
        calc.add_waiting(clock - arrival);
        clock += u64::from(process.run_for(process.burst_time));
    }

    calc.finish("FCFS", processes.len())
}
