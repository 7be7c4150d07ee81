//! # Módulo de Simulación Principal
//!
//! Este módulo contiene el orquestador de una simulación: una carga de
//! trabajo fija más el algoritmo con que se planifica.

use log::info;

use crate::error::{Result, SchedError};
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;
use crate::scheduler::{simulate, SchedulingAlgorithm};

/// Orquestador de una simulación de planificación.
///
/// La `Simulation` conserva la carga de trabajo original intacta: cada
/// llamada a `run` entrega al simulador una copia independiente, de modo
/// que puede ejecutarse cualquier número de veces con resultados idénticos.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Procesos ordenados por llegada
    processes: Vec<Process>,
    /// Algoritmo de planificación a simular
    algorithm: SchedulingAlgorithm,
}

impl Simulation {
    /// Crea una nueva simulación validando la carga y el algoritmo.
    ///
    /// # Errors
    ///
    /// - `SchedError::EmptyInput` si no hay procesos
    /// - `SchedError::InvalidParameter` si el algoritmo tiene parámetros fuera de rango
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::{Process, Simulation, SchedulingAlgorithm};
    ///
    /// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
    /// let simulation = Simulation::new(processes, SchedulingAlgorithm::round_robin(2)).unwrap();
    /// let metrics = simulation.run().unwrap();
    /// println!("Tiempo promedio de espera: {:.2}", metrics.average_waiting_time);
    /// ```
    pub fn new(processes: Vec<Process>, algorithm: SchedulingAlgorithm) -> Result<Self> {
        if processes.is_empty() {
            return Err(SchedError::EmptyInput);
        }
        algorithm.validate()?;
        Ok(Self { processes, algorithm })
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn algorithm(&self) -> &SchedulingAlgorithm {
        &self.algorithm
    }

    /// Crea una simulación con otro algoritmo sobre la misma carga.
    pub fn with_algorithm(&self, algorithm: SchedulingAlgorithm) -> Result<Self> {
        Self::new(self.processes.clone(), algorithm)
    }

    /// Ejecuta la simulación sobre una copia de la carga y retorna las métricas.
    pub fn run(&self) -> Result<SimulationMetrics> {
        info!(
            "=== Simulando {} sobre {} procesos ===",
            self.algorithm.description(),
            self.processes.len()
        );
        let metrics = simulate(self.processes.clone(), &self.algorithm)?;
        info!(
            "{}: {} cambios de contexto, espera promedio {:.2}",
            self.algorithm,
            metrics.schedule.len(),
            metrics.average_waiting_time
        );
        Ok(metrics)
    }

    /// Genera el reporte de texto de los resultados.
    pub fn generate_report(&self, metrics: &SimulationMetrics) -> String {
        MetricsCalculator::generate_report(metrics)
    }

    /// Genera el reporte en formato JSON.
    pub fn generate_json_report(&self, metrics: &SimulationMetrics) -> Result<String> {
        MetricsCalculator::generate_json_report(metrics)
    }
}
