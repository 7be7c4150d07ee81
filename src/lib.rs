//! # Simulador de Planificación de CPU
//!
//! Esta biblioteca simula políticas de planificación de CPU sobre una lista
//! de procesos descritos por su tiempo de llegada y su ráfaga de CPU, y
//! produce la secuencia de cambios de contexto y el tiempo promedio de espera.
//!
//! ## Características principales
//!
//! - **Algoritmos de scheduling**: FCFS, Round Robin con quantum fijo, SRTF
//!   (preemptivo, evaluado en cada unidad de tiempo) y SJF predictivo con
//!   promedio exponencial de las ráfagas anteriores de cada proceso.
//! - **Determinismo**: reglas de desempate explícitas; dos ejecuciones sobre
//!   copias de la misma entrada producen resultados idénticos.
//! - **Aislamiento**: cada simulador recibe la lista de procesos por valor.
//! - **Optimización**: barrido de quantum y de alpha, con los candidatos
//!   simulados en paralelo.
//!
//! ## Estructura del proyecto
//!
//! - `process`: Proceso planificable y orden por llegada
//! - `admission`: Admisión de llegadas a la cola de listos
//! - `fcfs`, `round_robin`, `srtf`, `sjf`: Los cuatro simuladores
//! - `scheduler`: Selección de algoritmo y punto de entrada `simulate`
//! - `simulation`: Orquestador de una carga de trabajo con un algoritmo
//! - `metrics`: Acumulador de la planificación y reportes
//! - `io`: Lectura de la entrada y escritura de reportes
//! - `optimizer`: Barrido de parámetros
//! - `logger`: Logger de consola para el binario
//! - `error`: Tipo de error del crate

pub mod admission;
pub mod error;
pub mod fcfs;
pub mod io;
pub mod logger;
pub mod metrics;
pub mod optimizer;
pub mod process;
pub mod round_robin;
pub mod scheduler;
pub mod simulation;
pub mod sjf;
pub mod srtf;

// Re-exportar las estructuras principales para facilitar su uso
pub use admission::Admission;
pub use error::{Result, SchedError};
pub use fcfs::fcfs_scheduling;
pub use io::{parse_processes, read_input, write_json_output, write_output, write_sweep_report};
pub use metrics::{MetricsCalculator, ScheduleEntry, SimulationMetrics};
pub use optimizer::{optimize_round_robin, optimize_sjf, SweepOutcome, SweepRange};
pub use process::{sort_by_arrival, Process};
pub use round_robin::round_robin_scheduling;
pub use scheduler::{simulate, SchedulingAlgorithm};
pub use simulation::Simulation;
pub use sjf::{sjf_scheduling, sjf_scheduling_with_history, BurstHistory, SjfOutcome};
pub use srtf::srtf_scheduling;

/// Configuración por defecto del simulador
pub mod config {
    use crate::optimizer::SweepRange;

    /// Quantum por defecto para Round Robin
    pub const DEFAULT_TIME_QUANTUM: u32 = 2;

    /// Factor de suavizado por defecto del SJF predictivo
    pub const DEFAULT_ALPHA: f64 = 0.5;

    /// Predicción para un proceso sin historial
    pub const DEFAULT_INITIAL_GUESS: f64 = 5.0;

    /// Archivo de entrada por defecto
    pub const DEFAULT_INPUT_FILE: &str = "input.txt";

    /// Reportes de los barridos de parámetros
    pub const RR_SWEEP_REPORT: &str = "rr-op.txt";
    pub const SJF_SWEEP_REPORT: &str = "sjf-op.txt";

    /// Rango de quantums barrido por defecto
    pub fn default_rr_sweep() -> SweepRange<u32> {
        SweepRange::new(1, 15, 1)
    }

    /// Rango de alphas barrido por defecto
    pub fn default_sjf_sweep() -> SweepRange<f64> {
        SweepRange::new(0.0, 1.0, 0.02)
    }
}
