//! # Módulo de Logging
//!
//! Implementación mínima de `log::Log` para el binario: escribe cada
//! registro en stderr como `[NIVEL] mensaje`, de modo que los reportes
//! impresos en stdout no se mezclen con el diagnóstico.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Instala el logger global con el nivel máximo indicado.
///
/// # Errors
///
/// Falla si ya había otro logger instalado en el proceso.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Traduce los contadores `-v` / `-q` de la línea de comandos a un nivel.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0, false), LevelFilter::Info);
        assert_eq!(level_from_verbosity(1, false), LevelFilter::Debug);
        assert_eq!(level_from_verbosity(5, false), LevelFilter::Trace);
        assert_eq!(level_from_verbosity(2, true), LevelFilter::Warn);
    }
}
