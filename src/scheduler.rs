//! # Módulo de Algoritmos de Planificación
//!
//! Este módulo define las políticas de planificación disponibles y el punto
//! de entrada único `simulate`, que ejecuta cualquiera de ellas sobre una
//! lista de procesos propia.

use std::fmt;

use crate::error::{Result, SchedError};
use crate::fcfs::fcfs_scheduling;
use crate::metrics::SimulationMetrics;
use crate::process::Process;
use crate::round_robin::round_robin_scheduling;
use crate::sjf::{sjf_scheduling, validate_sjf_parameters};
use crate::srtf::srtf_scheduling;

/// Algoritmos de planificación de CPU disponibles.
///
/// Cada algoritmo define una estrategia diferente para repartir la CPU:
/// - FCFS y SJF predictivo ejecutan cada proceso hasta completarse
/// - Round Robin y SRTF pueden interrumpir al proceso en ejecución
#[derive(Clone, Debug, PartialEq)]
pub enum SchedulingAlgorithm {
    /// First-Come First-Served: procesamiento no preemptivo en orden de llegada.
    Fcfs,

    /// Round Robin: procesamiento preemptivo con quantum fijo.
    ///
    /// Cada proceso recibe como máximo `quantum` unidades por despacho y,
    /// si no terminó, vuelve al final de la cola.
    RoundRobin {
        /// Unidades de tiempo máximas por despacho
        quantum: u32,
    },

    /// Shortest Remaining Time First: preemptivo, reevaluado en cada unidad.
    Srtf,

    /// Shortest Job First no preemptivo con ráfaga predicha por promedio exponencial.
    PredictiveSjf {
        /// Peso de la última ráfaga real, en [0, 1]
        alpha: f64,
        /// Predicción para un `id` nunca visto
        initial_guess: f64,
    },
}

impl SchedulingAlgorithm {
    /// Crea un nuevo algoritmo FCFS.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SchedulingAlgorithm;
    ///
    /// let algorithm = SchedulingAlgorithm::fcfs();
    /// assert!(!algorithm.is_preemptive());
    /// ```
    pub fn fcfs() -> Self {
        Self::Fcfs
    }

    /// Crea un nuevo algoritmo Round Robin con el quantum especificado.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SchedulingAlgorithm;
    ///
    /// let algorithm = SchedulingAlgorithm::round_robin(2);
    /// assert!(algorithm.is_preemptive());
    /// ```
    pub fn round_robin(quantum: u32) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Crea un SRTF preemptivo.
    pub fn srtf() -> Self {
        Self::Srtf
    }

    /// Crea un SJF predictivo con el factor de suavizado y la predicción inicial dados.
    pub fn predictive_sjf(alpha: f64, initial_guess: f64) -> Self {
        Self::PredictiveSjf { alpha, initial_guess }
    }

    /// Verifica que los parámetros del algoritmo estén en rango.
    ///
    /// # Errors
    ///
    /// `SchedError::InvalidParameter` si el quantum es 0, o si `alpha` no está
    /// en [0, 1], o si `initial_guess` es negativo o no finito.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Fcfs | Self::Srtf => Ok(()),
            Self::RoundRobin { quantum } => {
                if *quantum == 0 {
                    return Err(SchedError::invalid_parameter(
                        "time_quantum",
                        quantum,
                        "el quantum debe ser mayor que 0",
                    ));
                }
                Ok(())
            }
            Self::PredictiveSjf { alpha, initial_guess } => validate_sjf_parameters(*alpha, *initial_guess),
        }
    }

    /// Determina si el algoritmo es preemptivo.
    pub fn is_preemptive(&self) -> bool {
        match self {
            Self::Fcfs | Self::PredictiveSjf { .. } => false,
            Self::RoundRobin { .. } | Self::Srtf => true,
        }
    }

    /// Nombre de archivo de salida por defecto para este algoritmo.
    pub fn output_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::RoundRobin { .. } => "RR",
            Self::Srtf => "SRTF",
            Self::PredictiveSjf { .. } => "SJF",
        }
    }

    /// Obtiene una descripción textual del algoritmo.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SchedulingAlgorithm;
    ///
    /// let fcfs = SchedulingAlgorithm::fcfs();
    /// assert_eq!(fcfs.description(), "First-Come First-Served (no preemptivo)");
    ///
    /// let rr = SchedulingAlgorithm::round_robin(4);
    /// assert!(rr.description().contains("Round Robin"));
    /// ```
    pub fn description(&self) -> String {
        match self {
            Self::Fcfs => "First-Come First-Served (no preemptivo)".to_string(),
            Self::RoundRobin { quantum } => {
                format!("Round Robin preemptivo (quantum: {} unidades)", quantum)
            }
            Self::Srtf => "Shortest Remaining Time First (preemptivo)".to_string(),
            Self::PredictiveSjf { alpha, initial_guess } => format!(
                "Shortest Job First predictivo, no preemptivo (alpha: {:.3}, predicción inicial: {})",
                alpha, initial_guess
            ),
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {})", quantum),
            Self::Srtf => write!(f, "SRTF"),
            Self::PredictiveSjf { alpha, .. } => write!(f, "SJF predictivo (alpha {:.3})", alpha),
        }
    }
}

/// Ejecuta el algoritmo indicado sobre una lista de procesos propia.
///
/// La lista se recibe por valor: cada ejecución trabaja sobre su propia
/// copia y no puede observar las mutaciones de otra. Se espera la lista ya
/// ordenada por llegada.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{simulate, Process, SchedulingAlgorithm};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3), Process::new(3, 2, 1)];
/// let metrics = simulate(processes, &SchedulingAlgorithm::fcfs()).unwrap();
/// assert_eq!(metrics.dispatch_order(), vec![1, 2, 3]);
/// ```
pub fn simulate(processes: Vec<Process>, algorithm: &SchedulingAlgorithm) -> Result<SimulationMetrics> {
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }
    algorithm.validate()?;

    match algorithm {
        SchedulingAlgorithm::Fcfs => fcfs_scheduling(processes),
        SchedulingAlgorithm::RoundRobin { quantum } => round_robin_scheduling(processes, *quantum),
        SchedulingAlgorithm::Srtf => srtf_scheduling(processes),
        SchedulingAlgorithm::PredictiveSjf { alpha, initial_guess } => {
            sjf_scheduling(processes, *alpha, *initial_guess)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ]
    }

    fn all_algorithms() -> Vec<SchedulingAlgorithm> {
        vec![
            SchedulingAlgorithm::fcfs(),
            SchedulingAlgorithm::round_robin(2),
            SchedulingAlgorithm::srtf(),
            SchedulingAlgorithm::predictive_sjf(0.5, 5.0),
        ]
    }

    #[test]
    fn test_preemption_flags() {
        assert!(!SchedulingAlgorithm::fcfs().is_preemptive());
        assert!(SchedulingAlgorithm::round_robin(1).is_preemptive());
        assert!(SchedulingAlgorithm::srtf().is_preemptive());
        assert!(!SchedulingAlgorithm::predictive_sjf(0.5, 5.0).is_preemptive());
    }

    #[test]
    fn test_validate() {
        assert!(SchedulingAlgorithm::round_robin(0).validate().is_err());
        assert!(SchedulingAlgorithm::predictive_sjf(-0.1, 5.0).validate().is_err());
        assert!(SchedulingAlgorithm::predictive_sjf(1.0, 0.0).validate().is_ok());
        for algorithm in all_algorithms() {
            assert!(algorithm.validate().is_ok());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SchedulingAlgorithm::fcfs()), "FCFS");
        assert_eq!(format!("{}", SchedulingAlgorithm::round_robin(3)), "Round Robin (quantum 3)");
        assert_eq!(
            format!("{}", SchedulingAlgorithm::predictive_sjf(0.25, 5.0)),
            "SJF predictivo (alpha 0.250)"
        );
        assert_eq!(SchedulingAlgorithm::srtf().output_name(), "SRTF");
    }

    #[test]
    fn test_simulate_is_deterministic() {
        for algorithm in all_algorithms() {
            let first = simulate(reference(), &algorithm).unwrap();
            let second = simulate(reference(), &algorithm).unwrap();
            assert_eq!(first, second, "{} no es determinista", algorithm);
            assert!(first.average_waiting_time >= 0.0);
        }
    }

    #[test]
    fn test_simulate_rejects_empty_input() {
        for algorithm in all_algorithms() {
            assert!(matches!(simulate(Vec::new(), &algorithm), Err(SchedError::EmptyInput)));
        }
    }
}
