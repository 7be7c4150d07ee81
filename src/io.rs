//! # Módulo de Entrada y Salida
//!
//! Lectura del archivo de procesos (`id llegada ráfaga` por línea) y
//! escritura de los reportes de cada ejecución y de los barridos de
//! parámetros.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, SchedError};
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;

/// Interpreta el texto de entrada, una línea por proceso.
///
/// Cada línea debe tener exactamente tres enteros no negativos separados
/// por espacios: `id llegada ráfaga`. Una línea en blanco también es un
/// error de formato. El orden de la entrada se conserva.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::parse_processes;
///
/// let processes = parse_processes("0 0 9\n1 1 8\n").unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].burst_time, 8);
/// assert!(parse_processes("0 0\n").is_err());
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<Process> {
    let format_error = |reason: String| SchedError::InputFormat {
        line: line_number,
        content: line.to_string(),
        reason,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(format_error(format!(
            "se esperaban 3 campos, se encontraron {}",
            tokens.len()
        )));
    }

    let mut fields = [0u32; 3];
    for (field, token) in fields.iter_mut().zip(&tokens) {
        *field = token
            .parse()
            .map_err(|_| format_error(format!("{:?} no es un entero no negativo", token)))?;
    }

    let [id, arrival_time, burst_time] = fields;
    Process::try_new(id, arrival_time, burst_time).map_err(|_| format_error("la ráfaga debe ser mayor que 0".to_string()))
}

/// Lee y valida el archivo de procesos.
pub fn read_input(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SchedError::io(path, e))?;
    let processes = parse_processes(&text)?;
    debug!("{} procesos leídos de {}", processes.len(), path.display());
    Ok(processes)
}

/// Escribe el reporte de texto de una ejecución.
pub fn write_output(path: impl AsRef<Path>, metrics: &SimulationMetrics) -> Result<()> {
    write_file(path.as_ref(), &MetricsCalculator::generate_report(metrics))
}

/// Escribe el reporte JSON de una ejecución.
pub fn write_json_output(path: impl AsRef<Path>, metrics: &SimulationMetrics) -> Result<()> {
    write_file(path.as_ref(), &MetricsCalculator::generate_json_report(metrics)?)
}

/// Genera la tabla de un barrido: encabezado y una fila `parámetro espera`.
///
/// `format_param` decide cómo se imprime el parámetro (entero para el
/// quantum, tres decimales para alpha). La espera se imprime con cinco
/// decimales.
pub fn format_sweep_report<P: Copy>(
    header: &str,
    rows: &[(P, f64)],
    format_param: impl Fn(P) -> String,
) -> String {
    let mut report = format!("{}\n", header);
    for &(param, average_waiting_time) in rows {
        report.push_str(&format!("{} {:.5}\n", format_param(param), average_waiting_time));
    }
    report
}

/// Escribe la tabla de un barrido de parámetros.
pub fn write_sweep_report<P: Copy>(
    path: impl AsRef<Path>,
    header: &str,
    rows: &[(P, f64)],
    format_param: impl Fn(P) -> String,
) -> Result<()> {
    write_file(path.as_ref(), &format_sweep_report(header, rows, format_param))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| SchedError::io(path, e))?;
    debug!("reporte escrito en {}", path.display());
    Ok(())
}
