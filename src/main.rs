use clap::Parser;
use elevator_sim::utils::logger;
use elevator_sim::{
    Building, CliConfig, Dispatcher, Direction, ElevatorController, SimConfig, TracingLogger,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🛗 Starting elevator-sim");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match SimConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "✅ Configuration loaded: {} floors, {} cars, {} ms travel / {} ms boarding",
        config.total_floors,
        config.cars,
        config.travel_ms,
        config.boarding_ms
    );

    let building = Building::new(config.total_floors, config.cars);
    let dispatcher = Dispatcher::new(building, config.delays());
    let mut controller = ElevatorController::new(dispatcher, TracingLogger);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // 隨機產生請求，每回合：請求 → 移動 → 顯示狀態
    let mut tick: u64 = 0;
    while config.ticks == 0 || tick < config.ticks {
        tick += 1;

        let floor = rng.gen_range(1..=config.total_floors);
        let direction = if rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        };

        // A rejected request only ends this iteration, not the simulation.
        if let Err(e) = controller.request_elevator(floor, direction).await {
            tracing::debug!("request rejected: {}", e);
        }
        controller.move_elevators().await?;
        controller.display_status().await;
    }

    tracing::info!("✅ Simulation finished after {} ticks", tick);
    Ok(())
}
