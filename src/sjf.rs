//! # Shortest Job First predictivo
//!
//! Planificación no preemptiva que elige el proceso con menor ráfaga
//! *predicha*. La predicción es un promedio exponencial de las ráfagas
//! reales anteriores del mismo `id`:
//!
//! ```text
//! τ(n+1) = α · t(n) + (1 − α) · τ(n)
//! ```
//!
//! La ráfaga real de un proceso solo se usa para avanzar el reloj y para
//! alimentar el historial, nunca para decidir su propio despacho.

use std::collections::{BTreeMap, VecDeque};

use log::debug;

use crate::admission::Admission;
use crate::error::{Result, SchedError};
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;

/// Historial de ráfagas reales y predicciones de un `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BurstHistory {
    /// Ráfagas reales completadas, en orden
    pub bursts: Vec<u32>,
    /// Predicciones sucesivas, en orden
    pub predictions: Vec<f64>,
    /// Ráfagas reales ya incorporadas a alguna predicción
    consumed_bursts: usize,
}

impl BurstHistory {
    /// Calcula la siguiente predicción y la agrega al historial.
    ///
    /// - Sin predicciones previas: `initial_guess`.
    /// - Con una ráfaga real completada desde la última recurrencia: la
    ///   recurrencia sobre la última ráfaga y la última predicción.
    /// - Si no se completó ninguna ráfaga nueva (otra ráfaga del mismo `id`
    ///   sigue esperando): se hereda la última predicción.
    pub fn predict(&mut self, alpha: f64, initial_guess: f64) -> f64 {
        let prediction = match (self.predictions.last(), self.bursts.last()) {
            (None, _) => initial_guess,
            (Some(&previous), Some(&actual)) if self.bursts.len() > self.consumed_bursts => {
                self.consumed_bursts = self.bursts.len();
                alpha * f64::from(actual) + (1.0 - alpha) * previous
            }
            (Some(&previous), _) => previous,
        };
        self.predictions.push(prediction);
        prediction
    }

    /// Registra una ráfaga real completada.
    pub fn record_burst(&mut self, burst: u32) {
        self.bursts.push(burst);
    }
}

/// Resultado de una ejecución de SJF junto con el historial por `id`.
#[derive(Debug, Clone)]
pub struct SjfOutcome {
    pub metrics: SimulationMetrics,
    pub history: BTreeMap<u32, BurstHistory>,
}

/// Valida los parámetros del SJF predictivo.
pub fn validate_sjf_parameters(alpha: f64, initial_guess: f64) -> Result<()> {
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(SchedError::invalid_parameter(
            "alpha",
            alpha,
            "debe estar en el intervalo [0, 1]",
        ));
    }
    if !initial_guess.is_finite() || initial_guess < 0.0 {
        return Err(SchedError::invalid_parameter(
            "initial_guess",
            initial_guess,
            "debe ser un número finito no negativo",
        ));
    }
    Ok(())
}

/// Simula el SJF predictivo y devuelve solo las métricas.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{sjf_scheduling, Process};
///
/// let metrics = sjf_scheduling(vec![Process::new(1, 3, 5)], 0.5, 5.0).unwrap();
/// assert_eq!(metrics.schedule.len(), 1);
/// assert_eq!(metrics.schedule[0].time, 3);
/// ```
pub fn sjf_scheduling(processes: Vec<Process>, alpha: f64, initial_guess: f64) -> Result<SimulationMetrics> {
    sjf_scheduling_with_history(processes, alpha, initial_guess).map(|outcome| outcome.metrics)
}

/// Simula el SJF predictivo y devuelve también el historial de predicciones.
///
/// Las decisiones se toman solo cuando la CPU queda libre. En cada decisión
/// se admiten las llegadas, se predice la ráfaga de cada proceso en cola que
/// aún no tiene predicción, se ordena la cola por (predicción, llegada, id) y
/// se despacha la cabeza hasta completarse.
///
/// # Errors
///
/// - `SchedError::EmptyInput` si la lista está vacía
/// - `SchedError::InvalidParameter` si `alpha` o `initial_guess` están fuera de rango
pub fn sjf_scheduling_with_history(
    mut processes: Vec<Process>,
    alpha: f64,
    initial_guess: f64,
) -> Result<SjfOutcome> {
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }
    validate_sjf_parameters(alpha, initial_guess)?;

    let total = processes.len();
    let mut calc = MetricsCalculator::new();
    let mut admission = Admission::new(total);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut history: BTreeMap<u32, BurstHistory> = BTreeMap::new();
    let mut clock: u64 = 0;
    let mut dispatched = 0;

    while dispatched < total {
        admission.admit(&processes, clock, &mut ready);

        if ready.is_empty() {
            match admission.next_arrival(&processes) {
                Some(arrival) => clock = clock.max(u64::from(arrival)),
                None => break,
            }
            continue;
        }

        for &slot in ready.iter() {
            let process = &mut processes[slot];
            if process.predicted_burst.is_none() {
                let prediction = history
                    .entry(process.id)
                    .or_default()
                    .predict(alpha, initial_guess);
                debug!("t = {:3}: predicción {:.3} para {}", clock, prediction, process);
                process.predicted_burst = Some(prediction);
            }
        }

        ready.make_contiguous().sort_by(|&a, &b| {
            let (pa, pb) = (&processes[a], &processes[b]);
            let predicted = |p: &Process| p.predicted_burst.unwrap_or(initial_guess);
            predicted(pa)
                .total_cmp(&predicted(pb))
                .then(pa.arrival_time.cmp(&pb.arrival_time))
                .then(pa.id.cmp(&pb.id))
        });

        let Some(slot) = ready.pop_front() else {
            continue;
        };
        let process = &mut processes[slot];
        let arrival = u64::from(process.arrival_time);
        debug!("t = {:3}: despachando {} (en cola: {})", clock, process, ready.len());
        calc.record_dispatch(clock, process.id);
        calc.add_waiting(clock - arrival);

        let burst = process.run_for(process.burst_time);
        clock += u64::from(burst);
        history.entry(process.id).or_default().record_burst(burst);
        dispatched += 1;
    }

    let metrics = calc.finish(format!("SJF(alpha={:.2})", alpha), total)?;
    Ok(SjfOutcome { metrics, history })
}
