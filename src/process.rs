//! # Módulo de Procesos
//!
//! Este módulo define la unidad planificable de la simulación: un proceso
//! con identidad, tiempo de llegada y ráfaga de CPU fijos, más el estado
//! mutable que cada simulador escribe sobre su propia copia.

use std::fmt;

use crate::error::{Result, SchedError};

/// Representa un proceso que compite por la CPU.
///
/// Los campos `id`, `arrival_time` y `burst_time` son inmutables tras la
/// construcción. `remaining_time` y `predicted_burst` pertenecen a la
/// ejecución en curso: cada simulador recibe su propia copia de la lista
/// (por valor), de modo que ninguna ejecución observa las mutaciones de otra.
#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    /// Identificador del proceso. Puede repetirse en la entrada: cada
    /// aparición es una ráfaga posterior del mismo proceso lógico.
    pub id: u32,
    /// Instante de llegada simulado
    pub arrival_time: u32,
    /// Tiempo total real de CPU que requiere la ráfaga (> 0)
    pub burst_time: u32,
    /// Tiempo de servicio pendiente, `0 ≤ remaining_time ≤ burst_time`
    pub remaining_time: u32,
    /// Predicción de la ráfaga, solo la usa el SJF predictivo
    pub predicted_burst: Option<f64>,
}

impl Process {
    /// Crea un nuevo proceso con el tiempo restante igual a su ráfaga.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::Process;
    ///
    /// let p = Process::new(1, 0, 5);
    /// assert_eq!(p.remaining_time, 5);
    /// assert!(p.predicted_burst.is_none());
    /// ```
    pub fn new(id: u32, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            predicted_burst: None,
        }
    }

    /// Igual que [`Process::new`] pero rechaza ráfagas nulas.
    pub fn try_new(id: u32, arrival_time: u32, burst_time: u32) -> Result<Self> {
        if burst_time == 0 {
            return Err(SchedError::invalid_parameter(
                "burst_time",
                burst_time,
                "la ráfaga de CPU debe ser mayor que 0",
            ));
        }
        Ok(Self::new(id, arrival_time, burst_time))
    }

    /// `true` cuando el proceso ya recibió todo su servicio.
    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }

    /// Entrega hasta `units` unidades de servicio y devuelve las efectivamente consumidas.
    pub fn run_for(&mut self, units: u32) -> u32 {
        let slice = self.remaining_time.min(units);
        self.remaining_time -= slice;
        slice
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[id {} : arrival_time {},  burst_time {}/{}]",
            self.id, self.arrival_time, self.remaining_time, self.burst_time
        )
    }
}

/// Ordena los procesos por tiempo de llegada, preservando el orden de la
/// entrada en los empates.
///
/// Los simuladores esperan la lista ya ordenada; este paso es
/// responsabilidad del llamador.
pub fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by_key(|p| p.arrival_time);
}
