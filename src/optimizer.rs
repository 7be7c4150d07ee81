//! # Módulo de Optimización de Parámetros
//!
//! Barre un rango de quantums (Round Robin) o de factores de suavizado
//! (SJF predictivo), simula cada candidato sobre su propia copia de la carga
//! y elige el que minimiza el tiempo promedio de espera.
//!
//! Los candidatos son independientes entre sí, así que se simulan en
//! paralelo con hilos con alcance; las filas se devuelven en el orden del
//! barrido, por lo que el resultado no depende de la planificación de hilos.

use std::num::NonZeroUsize;
use std::thread;

use log::{debug, info};

use crate::error::{Result, SchedError};
use crate::process::Process;
use crate::scheduler::{simulate, SchedulingAlgorithm};

/// Rango inclusivo `[lower, upper]` recorrido con paso `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange<T> {
    pub lower: T,
    pub upper: T,
    pub step: T,
}

impl<T> SweepRange<T> {
    pub fn new(lower: T, upper: T, step: T) -> Self {
        Self { lower, upper, step }
    }
}

impl SweepRange<u32> {
    /// Valores de quantum del barrido.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SweepRange;
    ///
    /// assert_eq!(SweepRange::<u32>::new(1, 7, 3).values().unwrap(), vec![1, 4, 7]);
    /// ```
    pub fn values(&self) -> Result<Vec<u32>> {
        if self.step == 0 {
            return Err(SchedError::invalid_parameter("step", self.step, "el paso debe ser mayor que 0"));
        }
        if self.lower == 0 {
            return Err(SchedError::invalid_parameter("lower", self.lower, "el quantum debe ser mayor que 0"));
        }
        if self.lower > self.upper {
            return Err(SchedError::invalid_parameter(
                "lower",
                self.lower,
                format!("no puede superar el límite superior {}", self.upper),
            ));
        }
        Ok((self.lower..=self.upper).step_by(self.step as usize).collect())
    }
}

impl SweepRange<f64> {
    /// Valores de alpha del barrido, calculados como `lower + i·step` para
    /// `i` en `0..=round((upper − lower) / step)` y acotados a `upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SweepRange;
    ///
    /// let values = SweepRange::<f64>::new(0.0, 1.0, 0.25).values().unwrap();
    /// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn values(&self) -> Result<Vec<f64>> {
        let Self { lower, upper, step } = *self;
        if !step.is_finite() || step <= 0.0 {
            return Err(SchedError::invalid_parameter("step", step, "el paso debe ser mayor que 0"));
        }
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(SchedError::invalid_parameter(
                "lower",
                lower,
                format!("rango inválido hasta {}", upper),
            ));
        }
        if lower < 0.0 || upper > 1.0 {
            return Err(SchedError::invalid_parameter(
                "alpha",
                format!("[{}, {}]", lower, upper),
                "el rango debe estar contenido en [0, 1]",
            ));
        }

        let count = ((upper - lower) / step).round() as usize;
        Ok((0..=count)
            .map(|i| (lower + i as f64 * step).min(upper))
            .collect())
    }
}

/// Resultado de un barrido de parámetros.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome<P> {
    /// Pares (parámetro, espera promedio) en el orden del barrido
    pub rows: Vec<(P, f64)>,
    /// Primer parámetro con la menor espera promedio
    pub best: P,
    /// Espera promedio del mejor parámetro
    pub best_average: f64,
}

/// Barre los quantums de Round Robin.
///
/// # Errors
///
/// Los de [`SweepRange::values`] y `SchedError::EmptyInput` si no hay procesos.
pub fn optimize_round_robin(processes: &[Process], range: SweepRange<u32>) -> Result<SweepOutcome<u32>> {
    let outcome = sweep(processes, range.values()?, SchedulingAlgorithm::round_robin)?;
    info!(
        "Round Robin: mejor quantum {} (espera promedio {:.5})",
        outcome.best, outcome.best_average
    );
    Ok(outcome)
}

/// Barre el factor de suavizado del SJF predictivo.
pub fn optimize_sjf(
    processes: &[Process],
    range: SweepRange<f64>,
    initial_guess: f64,
) -> Result<SweepOutcome<f64>> {
    let outcome = sweep(processes, range.values()?, |alpha| {
        SchedulingAlgorithm::predictive_sjf(alpha, initial_guess)
    })?;
    info!(
        "SJF: mejor alpha {:.3} (espera promedio {:.5})",
        outcome.best, outcome.best_average
    );
    Ok(outcome)
}

fn sweep<P, F>(processes: &[Process], params: Vec<P>, make_algorithm: F) -> Result<SweepOutcome<P>>
where
    P: Copy + Send + Sync + std::fmt::Debug,
    F: Fn(P) -> SchedulingAlgorithm + Sync,
{
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }

    let workers = thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1);
    let mut rows = Vec::with_capacity(params.len());

    for chunk in params.chunks(workers) {
        let results: Vec<Result<(P, f64)>> = thread::scope(|scope| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|&param| {
                    let make_algorithm = &make_algorithm;
                    scope.spawn(move || -> Result<(P, f64)> {
                        let metrics = simulate(processes.to_vec(), &make_algorithm(param))?;
                        Ok((param, metrics.average_waiting_time))
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        for result in results {
            let row = result?;
            debug!("{:?} -> {:.5}", row.0, row.1);
            rows.push(row);
        }
    }

    let &(best, best_average) = rows
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| SchedError::invalid_parameter("range", "vacío", "el barrido no tiene valores"))?;

    Ok(SweepOutcome {
        rows,
        best,
        best_average,
    })
}
