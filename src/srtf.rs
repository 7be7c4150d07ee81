//! # Shortest Remaining Time First
//!
//! Planificación preemptiva evaluada en cada unidad de tiempo: se ejecuta
//! siempre el proceso admitido con menor tiempo restante.

use std::collections::VecDeque;

use log::debug;

use crate::admission::Admission;
use crate::error::{Result, SchedError};
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;

/// Clave de orden de la cola de listos: restante, llegada, ráfaga, id.
fn priority_key(process: &Process) -> (u32, u32, u32, u32) {
    (
        process.remaining_time,
        process.arrival_time,
        process.burst_time,
        process.id,
    )
}

/// Simula SRTF con pasos de una unidad de tiempo.
///
/// Solo se emite un cambio de contexto cuando el proceso elegido difiere del
/// que corrió en la unidad anterior. En cada unidad la espera aumenta en el
/// número de procesos que quedan en la cola detrás del elegido.
///
/// # Errors
///
/// `SchedError::EmptyInput` si la lista está vacía.
pub fn srtf_scheduling(mut processes: Vec<Process>) -> Result<SimulationMetrics> {
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }

    let total = processes.len();
    let mut calc = MetricsCalculator::new();
    let mut admission = Admission::new(total);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut clock = processes
        .iter()
        .map(|p| u64::from(p.arrival_time))
        .min()
        .unwrap_or(0);
    let mut previous: Option<usize> = None;
    let mut completed = 0;

    while completed < total {
        admission.admit(&processes, clock, &mut ready);

        ready
            .make_contiguous()
            .sort_by_key(|&slot| priority_key(&processes[slot]));

        let Some(slot) = ready.pop_front() else {
            clock += 1;
            previous = None;
            continue;
        };

        let process = &mut processes[slot];
        if previous != Some(slot) {
            debug!("t = {:3}: cambio a {} (en cola: {})", clock, process, ready.len());
            calc.record_dispatch(clock, process.id);
        }
        calc.add_waiting(ready.len() as u64);

        process.run_for(1);
        clock += 1;
        previous = Some(slot);

        if process.is_completed() {
            completed += 1;
            debug!("t = {:3}: completado {}", clock, process);
        } else {
            ready.push_back(slot);
        }
    }

    calc.finish("SRTF", total)
}
