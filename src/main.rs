use anyhow::Result;
use clap::Parser;
use open311_loader::{
    command_line::Cli, dynamodb::DynamoDb, logging, pipeline, provision::Provisioned,
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let config = cli.into_config();
    if !config.has_sources() {
        Cli::missing_sources_error().exit();
    }

    let sdk_config = config.sdk_config().await;
    let ddb = DynamoDb::new(&sdk_config);
    info!("Loading into {}", config.target_display());

    match pipeline::run(&ddb, &config).await {
        Ok(reports) => {
            for report in reports {
                let how = match report.provisioned {
                    Provisioned::Created => "new",
                    Provisioned::Reused => "existing",
                };
                info!(
                    "{}: {} items in {} table '{}'",
                    report.kind, report.written, how, report.table
                );
            }
            Ok(())
        }
        Err(err) => {
            error!("{err}");
            if err.written() > 0 {
                warn!("{} items were written before the failure", err.written());
            }
            Err(err.into())
        }
    }
}
