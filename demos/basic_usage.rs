//! Ejemplo básico de uso del simulador de planificación de CPU

use cpu_scheduling_simulator::{
    optimize_round_robin, parse_processes, sort_by_arrival, SchedulingAlgorithm, Simulation,
    SweepRange,
};

const WORKLOAD: &str = "\
0 0 9
1 1 8
2 2 2
3 5 2
0 30 2
1 31 7
2 32 3
3 35 1
";

fn main() -> cpu_scheduling_simulator::Result<()> {
    println!("=== Ejemplo: Uso Básico del Simulador ===\n");

    let mut processes = parse_processes(WORKLOAD)?;
    sort_by_arrival(&mut processes);

    let base = Simulation::new(processes.clone(), SchedulingAlgorithm::fcfs())?;
    let algorithms = [
        SchedulingAlgorithm::fcfs(),
        SchedulingAlgorithm::round_robin(2),
        SchedulingAlgorithm::srtf(),
        SchedulingAlgorithm::predictive_sjf(0.5, 5.0),
    ];

    println!("| Algoritmo                        | Cambios | Espera promedio |");
    println!("|----------------------------------|---------|-----------------|");
    for algorithm in algorithms {
        let simulation = base.with_algorithm(algorithm)?;
        let metrics = simulation.run()?;
        println!(
            "| {:<32} | {:>7} | {:>15.2} |",
            simulation.algorithm().to_string(),
            metrics.schedule.len(),
            metrics.average_waiting_time
        );
    }

    println!("\n--- Reporte SRTF ---");
    let srtf = base.with_algorithm(SchedulingAlgorithm::srtf())?;
    print!("{}", srtf.generate_report(&srtf.run()?));

    let outcome = optimize_round_robin(&processes, SweepRange::new(1, 10, 1))?;
    println!(
        "\nQuantum óptimo en [1, 10]: {} (espera promedio {:.2})",
        outcome.best, outcome.best_average
    );

    Ok(())
}
