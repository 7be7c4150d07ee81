//! # Round Robin
//!
//! Despacho cíclico preemptivo con quantum fijo. Un proceso interrumpido
//! vuelve al final de la cola detrás de los que llegaron durante su quantum.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::admission::Admission;
use crate::error::{Result, SchedError};
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;

/// Simula Round Robin con el quantum indicado.
///
/// La cola se siembra con el proceso de menor llegada y el reloj arranca en
/// su llegada. Con la cola vacía el reloj avanza de a una unidad sin emitir
/// cambios de contexto. En cada despacho se suma a la espera el tiempo
/// transcurrido desde que el proceso cedió la CPU por última vez (o desde su
/// llegada si nunca corrió).
///
/// # Errors
///
/// - `SchedError::EmptyInput` si la lista está vacía
/// - `SchedError::InvalidParameter` si `time_quantum` es 0
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{round_robin_scheduling, Process};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3), Process::new(3, 2, 1)];
/// let metrics = round_robin_scheduling(processes, 2).unwrap();
/// assert_eq!(metrics.dispatch_order(), vec![1, 2, 3, 1, 2, 1]);
/// ```
pub fn round_robin_scheduling(mut processes: Vec<Process>, time_quantum: u32) -> Result<SimulationMetrics> {
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }
    if time_quantum == 0 {
        return Err(SchedError::invalid_parameter(
            "time_quantum",
            time_quantum,
            "el quantum debe ser mayor que 0",
        ));
    }

    let total = processes.len();
    let mut calc = MetricsCalculator::new();
    let mut admission = Admission::new(total);
    let mut queue: VecDeque<usize> = VecDeque::new();
    // Instante en que cada slot cedió la CPU por última vez
    let mut last_yield: HashMap<usize, u64> = HashMap::new();

    let first = (0..total)
        .min_by_key(|&slot| processes[slot].arrival_time)
        .ok_or(SchedError::EmptyInput)?;
    admission.mark(first);
    queue.push_back(first);
    let mut clock = u64::from(processes[first].arrival_time);
    let mut completed = 0;

    while completed < total {
        let Some(slot) = queue.pop_front() else {
            // CPU ociosa: esperar la próxima llegada
            clock += 1;
            admission.admit(&processes, clock, &mut queue);
            continue;
        };

        let process = &mut processes[slot];
        debug!("t = {:3}: despachando {} (en cola: {})", clock, process, queue.len());
        calc.record_dispatch(clock, process.id);
        let since = last_yield
            .get(&slot)
            .copied()
            .unwrap_or_else(|| u64::from(process.arrival_time));
        calc.add_waiting(clock - since);

        let slice = process.run_for(time_quantum);
        let finished = process.is_completed();

        for _ in 0..slice {
            clock += 1;
            admission.admit(&processes, clock, &mut queue);
        }

        if finished {
            completed += 1;
            debug!("t = {:3}: completado {}", clock, processes[slot]);
        } else {
            last_yield.insert(slot, clock);
            queue.push_back(slot);
        }
    }

    calc.finish(format!("RR(q={})", time_quantum), total)
}
