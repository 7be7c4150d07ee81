//! # Módulo de Errores
//!
//! Define el tipo de error único del simulador. Todos los errores se
//! propagan al llamador; ninguno se recupera internamente.

use std::path::PathBuf;

use thiserror::Error;

/// Errores que puede producir la lectura de la entrada, la validación de
/// parámetros o la ejecución de una simulación.
#[derive(Debug, Error)]
pub enum SchedError {
    /// Una línea de la entrada no contiene exactamente tres enteros válidos.
    #[error("formato de entrada inválido en la línea {line} ({content:?}): {reason}")]
    InputFormat {
        /// Número de línea (1-indexado)
        line: usize,
        /// Contenido original de la línea
        content: String,
        /// Motivo del rechazo
        reason: String,
    },

    /// La lista de procesos está vacía: el tiempo promedio de espera no está definido.
    #[error("la lista de procesos está vacía")]
    EmptyInput,

    /// Parámetro de planificación fuera de rango.
    #[error("parámetro inválido {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Fallo de lectura o escritura de archivos.
    #[error("error de E/S en {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fallo al serializar el reporte JSON.
    #[error("error al serializar el reporte: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchedError {
    /// Construye un `InvalidParameter` a partir de cualquier valor imprimible.
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Alias de resultado usado en todo el crate.
pub type Result<T> = std::result::Result<T, SchedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SchedError::InputFormat {
            line: 3,
            content: "1 2".to_string(),
            reason: "se esperaban 3 campos, se encontraron 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("línea 3"));
        assert!(msg.contains("\"1 2\""));

        let err = SchedError::invalid_parameter("alpha", 1.5, "debe estar en [0, 1]");
        assert_eq!(err.to_string(), "parámetro inválido alpha = 1.5: debe estar en [0, 1]");

        assert_eq!(SchedError::EmptyInput.to_string(), "la lista de procesos está vacía");
    }
}
