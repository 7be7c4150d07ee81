//! # Módulo de Admisión de Llegadas
//!
//! Mueve a la cola de listos los procesos cuyo tiempo de llegada ya fue
//! alcanzado por el reloj simulado. Cada proceso se admite exactamente una
//! vez por ejecución, sin importar cuántas veces se invoque la admisión.
//!
//! Los procesos se identifican por su posición en la lista de la ejecución
//! (su "slot"), no por `id`, ya que un mismo `id` puede aparecer varias veces.

use std::collections::VecDeque;

use log::trace;

use crate::process::Process;

/// Conjunto de procesos ya admitidos en una ejecución.
#[derive(Debug, Clone)]
pub struct Admission {
    admitted: Vec<bool>,
    count: usize,
}

impl Admission {
    /// Crea un conjunto vacío para una lista de `len` procesos.
    pub fn new(len: usize) -> Self {
        Self {
            admitted: vec![false; len],
            count: 0,
        }
    }

    /// Marca un slot como admitido sin pasar por la comparación de llegada.
    ///
    /// Lo usa Round Robin para sembrar la cola con el primer proceso.
    pub fn mark(&mut self, slot: usize) {
        if !self.admitted[slot] {
            self.admitted[slot] = true;
            self.count += 1;
        }
    }

    /// Indica si el slot ya entró a la cola.
    pub fn is_admitted(&self, slot: usize) -> bool {
        self.admitted[slot]
    }

    /// `true` cuando todos los procesos de la lista ya fueron admitidos.
    pub fn all_admitted(&self) -> bool {
        self.count == self.admitted.len()
    }

    /// Agrega a `queue`, en el orden de la lista, cada proceso no admitido
    /// con `arrival_time <= now`. Devuelve cuántos procesos se admitieron.
    ///
    /// No modifica `remaining_time` ni ningún otro campo de los procesos.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::VecDeque;
    /// use cpu_scheduling_simulator::{Admission, Process};
    ///
    /// let processes = vec![Process::new(1, 0, 3), Process::new(2, 4, 1)];
    /// let mut admission = Admission::new(processes.len());
    /// let mut queue = VecDeque::new();
    ///
    /// assert_eq!(admission.admit(&processes, 0, &mut queue), 1);
    /// assert_eq!(admission.admit(&processes, 0, &mut queue), 0);
    /// assert_eq!(admission.admit(&processes, 4, &mut queue), 1);
    /// assert_eq!(queue, VecDeque::from(vec![0, 1]));
    /// ```
    pub fn admit(&mut self, processes: &[Process], now: u64, queue: &mut VecDeque<usize>) -> usize {
        let mut admitted = 0;
        for (slot, process) in processes.iter().enumerate() {
            if self.admitted[slot] || u64::from(process.arrival_time) > now {
                continue;
            }
            self.admitted[slot] = true;
            self.count += 1;
            admitted += 1;
            queue.push_back(slot);
            trace!("t = {:3}: admitido {}", now, process);
        }
        admitted
    }

    /// Menor tiempo de llegada entre los procesos aún no admitidos.
    pub fn next_arrival(&self, processes: &[Process]) -> Option<u32> {
        processes
            .iter()
            .enumerate()
            .filter(|(slot, _)| !self.admitted[*slot])
            .map(|(_, p)| p.arrival_time)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
            Process::new(4, 2, 2),
        ]
    }

    #[test]
    fn test_admits_in_list_order() {
        let processes = sample();
        let mut admission = Admission::new(processes.len());
        let mut queue = VecDeque::new();

        admission.admit(&processes, 2, &mut queue);
        assert_eq!(queue, VecDeque::from(vec![0, 1, 2, 3]));
        assert!(admission.all_admitted());
    }

    #[test]
    fn test_admission_is_idempotent() {
        let processes = sample();
        let mut admission = Admission::new(processes.len());
        let mut queue = VecDeque::new();

        assert_eq!(admission.admit(&processes, 1, &mut queue), 2);
        assert_eq!(admission.admit(&processes, 1, &mut queue), 0);
        queue.clear();
        assert_eq!(admission.admit(&processes, 5, &mut queue), 2);
        assert_eq!(queue, VecDeque::from(vec![2, 3]));
        assert_eq!(admission.admit(&processes, 100, &mut queue), 0);
    }

    #[test]
    fn test_marked_slot_is_not_readmitted() {
        let processes = sample();
        let mut admission = Admission::new(processes.len());
        let mut queue = VecDeque::new();

        admission.mark(0);
        admission.mark(0);
        admission.admit(&processes, 0, &mut queue);
        assert!(queue.is_empty());
        assert!(admission.is_admitted(0));
        assert_eq!(admission.next_arrival(&processes), Some(1));
    }

    #[test]
    fn test_admission_leaves_remaining_time_untouched() {
        let mut processes = sample();
        processes[1].run_for(1);
        let snapshot = processes.clone();
        let mut admission = Admission::new(processes.len());
        let mut queue = VecDeque::new();

        admission.admit(&processes, 10, &mut queue);
        assert_eq!(processes, snapshot);
        assert_eq!(admission.next_arrival(&processes), None);
    }
}
