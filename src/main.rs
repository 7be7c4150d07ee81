use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::info;

use cpu_scheduling_simulator::config;
use cpu_scheduling_simulator::{
    logger, optimize_round_robin, optimize_sjf, read_input, sort_by_arrival, write_json_output,
    write_output, write_sweep_report, Process, Result, SchedError, SchedulingAlgorithm, Simulation,
    SimulationMetrics, SweepRange,
};

/// Simulador de políticas de planificación de CPU.
#[derive(Parser, Debug)]
#[command(name = "cpu-scheduling-simulator", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simula FCFS, RR, SRTF y SJF y escribe un reporte por algoritmo (por defecto)
    Run(RunArgs),
    /// Barre quantum y alpha y escribe las tablas y las planificaciones óptimas
    Optimize(OptimizeArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Archivo de procesos: `id llegada ráfaga` por línea
    #[arg(default_value = config::DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Directorio donde se escriben los reportes
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Predicción inicial del SJF para procesos sin historial
    #[arg(long, default_value_t = config::DEFAULT_INITIAL_GUESS)]
    initial_guess: f64,

    /// Más detalle en el log (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Solo advertencias y errores
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Quantum de Round Robin
    #[arg(long, default_value_t = config::DEFAULT_TIME_QUANTUM)]
    quantum: u32,

    /// Factor de suavizado del SJF predictivo, en [0, 1]
    #[arg(long, default_value_t = config::DEFAULT_ALPHA)]
    alpha: f64,

    /// Escribe además un reporte JSON por algoritmo
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct OptimizeArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Rango de quantums: inferior superior paso
    #[arg(long, num_args = 3, value_names = ["LOWER", "UPPER", "STEP"])]
    rr_range: Option<Vec<u32>>,

    /// Rango de alphas: inferior superior paso
    #[arg(long, num_args = 3, value_names = ["LOWER", "UPPER", "STEP"])]
    alpha_range: Option<Vec<f64>>,
}

impl Command {
    fn common(&self) -> &CommonArgs {
        match self {
            Command::Run(args) => &args.common,
            Command::Optimize(args) => &args.common,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run(cli.run));

    let common = command.common();
    if let Err(e) = logger::init(logger::level_from_verbosity(common.verbose, common.quiet)) {
        eprintln!("No se pudo inicializar el logger: {}", e);
    }

    let result = match &command {
        Command::Run(args) => run_all(args),
        Command::Optimize(args) => run_optimizer(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Lee la entrada, la ordena por llegada y prepara el directorio de salida.
fn load_workload(common: &CommonArgs) -> Result<Vec<Process>> {
    let mut processes = read_input(&common.input)?;
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }
    sort_by_arrival(&mut processes);

    info!("Procesos de entrada ({}):", processes.len());
    for process in &processes {
        info!("  {}", process);
    }

    fs::create_dir_all(&common.output_dir).map_err(|e| SchedError::Io {
        path: common.output_dir.clone(),
        source: e,
    })?;
    Ok(processes)
}

fn run_all(args: &RunArgs) -> Result<()> {
    let processes = load_workload(&args.common)?;
    let algorithms = [
        SchedulingAlgorithm::fcfs(),
        SchedulingAlgorithm::round_robin(args.quantum),
        SchedulingAlgorithm::srtf(),
        SchedulingAlgorithm::predictive_sjf(args.alpha, args.common.initial_guess),
    ];

    let base = Simulation::new(processes, SchedulingAlgorithm::fcfs())?;
    let mut results: Vec<(SchedulingAlgorithm, SimulationMetrics)> = Vec::new();

    for algorithm in algorithms {
        let simulation = base.with_algorithm(algorithm.clone())?;
        let metrics = simulation.run()?;

        let name = algorithm.output_name();
        let dir = &args.common.output_dir;
        write_output(dir.join(format!("{}.txt", name)), &metrics)?;
        if args.json {
            write_json_output(dir.join(format!("{}.json", name)), &metrics)?;
        }
        results.push((algorithm, metrics));
    }

    print_summary(&results);
    Ok(())
}

fn run_optimizer(args: &OptimizeArgs) -> Result<()> {
    let processes = load_workload(&args.common)?;
    let dir = &args.common.output_dir;

    let rr_range = match args.rr_range.as_deref() {
        Some(&[lower, upper, step]) => SweepRange::new(lower, upper, step),
        _ => config::default_rr_sweep(),
    };
    let rr = optimize_round_robin(&processes, rr_range)?;
    write_sweep_report(dir.join(config::RR_SWEEP_REPORT), "quantum avg.wait", &rr.rows, |q| {
        q.to_string()
    })?;
    let rr_metrics = Simulation::new(processes.clone(), SchedulingAlgorithm::round_robin(rr.best))?.run()?;
    write_output(dir.join(format!("rr-optimal-{}.txt", rr.best)), &rr_metrics)?;

    let alpha_range = match args.alpha_range.as_deref() {
        Some(&[lower, upper, step]) => SweepRange::new(lower, upper, step),
        _ => config::default_sjf_sweep(),
    };
    let sjf = optimize_sjf(&processes, alpha_range, args.common.initial_guess)?;
    write_sweep_report(dir.join(config::SJF_SWEEP_REPORT), "alpha avg.wait", &sjf.rows, |a| {
        format!("{:.3}", a)
    })?;
    let sjf_metrics = Simulation::new(
        processes,
        SchedulingAlgorithm::predictive_sjf(sjf.best, args.common.initial_guess),
    )?
    .run()?;
    write_output(dir.join(format!("sjf-optimal-{:.2}.txt", sjf.best)), &sjf_metrics)?;

    println!("Quantum óptimo para Round Robin: {} (espera promedio {:.2})", rr.best, rr.best_average);
    println!("Alpha óptimo para SJF predictivo: {:.3} (espera promedio {:.2})", sjf.best, sjf.best_average);
    println!("Reportes escritos en {}", dir.display());
    Ok(())
}

/// Imprime la tabla comparativa de los algoritmos.
fn print_summary(results: &[(SchedulingAlgorithm, SimulationMetrics)]) {
    println!("\n{:=^72}", "  RESUMEN  ");
    println!("{:<34} {:>16} {:>18}", "Algoritmo", "Cambios", "Espera promedio");
    println!("{:-<72}", "");
    for (algorithm, metrics) in results {
        println!(
            "{:<34} {:>16} {:>18.2}",
            algorithm.to_string(),
            metrics.schedule.len(),
            metrics.average_waiting_time
        );
    }
    println!("{:=<72}", "");
}
