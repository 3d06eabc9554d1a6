use cognitive_twin_db::{
    DatabaseContext, config::Config, models::Record, models::SimRun, models::Venture,
    models::VentureModel, utils::tracing::init_standard_tracing,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::load_from(std::env::args_os()).unwrap_or_else(|err| err.exit());
    init_standard_tracing(env!("CARGO_CRATE_NAME"), &config.log_level);

    let context = DatabaseContext::new(config.database);
    let database = context.connect().await?;

    println!("database: {}", database.name());
    for name in [
        Venture::COLLECTION_NAME,
        VentureModel::COLLECTION_NAME,
        SimRun::COLLECTION_NAME,
    ] {
        println!("collection: {name}");
    }

    Ok(())
}
