//! # Módulo de Métricas y Reportes
//!
//! Este módulo define la forma de salida común a todos los simuladores
//! (la secuencia de cambios de contexto y el tiempo promedio de espera)
//! y genera los reportes de texto y JSON de una ejecución.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SchedError};

/// Cambio de contexto: en `time` la CPU pasa a ejecutar `process_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Instante simulado del cambio
    pub time: u64,
    /// Proceso que recibe la CPU
    pub process_id: u32,
}

impl ScheduleEntry {
    pub fn new(time: u64, process_id: u32) -> Self {
        Self { time, process_id }
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.time, self.process_id)
    }
}

impl From<(u64, u32)> for ScheduleEntry {
    fn from((time, process_id): (u64, u32)) -> Self {
        Self::new(time, process_id)
    }
}

/// Resultado de una ejecución de un simulador.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationMetrics {
    /// Nombre corto del algoritmo que produjo el resultado
    pub algorithm: String,
    /// Secuencia ordenada de cambios de contexto
    pub schedule: Vec<ScheduleEntry>,
    /// Suma de los tiempos de espera acumulados
    pub total_waiting_time: u64,
    /// Tiempo promedio de espera por proceso
    pub average_waiting_time: f64,
    /// Número de procesos simulados
    pub process_count: usize,
}

impl SimulationMetrics {
    /// Orden en que los procesos recibieron la CPU (con repeticiones).
    pub fn dispatch_order(&self) -> Vec<u32> {
        self.schedule.iter().map(|entry| entry.process_id).collect()
    }
}

/// Acumulador de la salida de un simulador.
///
/// Cada simulador registra los cambios de contexto y suma el tiempo de
/// espera a medida que avanza; al terminar, `finish` calcula el promedio.
#[derive(Debug, Default)]
pub struct MetricsCalculator {
    schedule: Vec<ScheduleEntry>,
    total_waiting_time: u64,
}

impl MetricsCalculator {
    /// Crea un acumulador vacío.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un cambio de contexto.
    pub fn record_dispatch(&mut self, time: u64, process_id: u32) {
        self.schedule.push(ScheduleEntry::new(time, process_id));
    }

    /// Suma tiempo de espera al total acumulado.
    pub fn add_waiting(&mut self, units: u64) {
        self.total_waiting_time += units;
    }

    /// Cierra la ejecución y calcula el tiempo promedio de espera.
    ///
    /// # Errors
    ///
    /// `SchedError::EmptyInput` si `process_count` es 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::MetricsCalculator;
    ///
    /// let mut calc = MetricsCalculator::new();
    /// calc.record_dispatch(0, 1);
    /// calc.add_waiting(10);
    /// let metrics = calc.finish("FCFS", 3).unwrap();
    /// assert!((metrics.average_waiting_time - 10.0 / 3.0).abs() < 1e-9);
    /// ```
    pub fn finish(self, algorithm: impl Into<String>, process_count: usize) -> Result<SimulationMetrics> {
        let average_waiting_time = Self::average(self.total_waiting_time, process_count)?;
        Ok(SimulationMetrics {
            algorithm: algorithm.into(),
            schedule: self.schedule,
            total_waiting_time: self.total_waiting_time,
            average_waiting_time,
            process_count,
        })
    }

    /// Promedio protegido contra la división por una lista vacía.
    pub fn average(total: u64, count: usize) -> Result<f64> {
        if count == 0 {
            return Err(SchedError::EmptyInput);
        }
        Ok(total as f64 / count as f64)
    }

    /// Genera el reporte de texto de una ejecución.
    ///
    /// Una línea `(tiempo, id)` por cambio de contexto, seguida de la línea
    /// `average waiting time X.XX`.
    pub fn generate_report(metrics: &SimulationMetrics) -> String {
        let mut report = String::new();
        for entry in &metrics.schedule {
            report.push_str(&format!("{}\n", entry));
        }
        report.push_str(&format!(
            "average waiting time {:.2}\n",
            metrics.average_waiting_time
        ));
        report
    }

    /// Genera el reporte de una ejecución en formato JSON.
    pub fn generate_json_report(metrics: &SimulationMetrics) -> Result<String> {
        Ok(serde_json::to_string_pretty(metrics)?)
    }
}
