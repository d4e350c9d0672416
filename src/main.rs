use game_of_life_in_terminal::{
    frontend::{Driver, Frontend},
    game::{Board, Simulation},
    GameOfLifeOpt, Result,
};
use log::{debug, error, info};
use rand::{rngs::StdRng, SeedableRng};
use structopt::StructOpt;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opt = GameOfLifeOpt::from_args();
    std::env::set_var("RUST_LOG", opt.rust_log.clone());
    env_logger::init();

    debug!("start game_of_life with config: {:#?}", opt);

    if let Err(err) = run(opt).await {
        error!("game of life stopped: {:#}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

async fn run(opt: GameOfLifeOpt) -> Result<()> {
    let pattern = opt.pattern()?;
    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let board = Board::create(opt.height, opt.width, &pattern, &mut rng)?;
    info!(
        "starting {}x{} board from {} ({} alive), edges: {}",
        opt.height,
        opt.width,
        pattern,
        board.population(),
        opt.edges
    );

    let driver = Driver::new(
        Simulation::new(board, opt.edges),
        Frontend::new(opt.render_mode()),
        opt.delay(),
        opt.generations,
    );
    let mut stdout = std::io::stdout();
    let simulation = driver.run(&mut stdout, tokio::signal::ctrl_c()).await?;

    info!(
        "stopped at generation {} with {} alive",
        simulation.generation(),
        simulation.board().population()
    );
    Ok(())
}
