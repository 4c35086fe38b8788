use aws_sg_summary::get_security_groups;
use aws_sg_summary::output::print_rule_rows;
use aws_sg_summary::processing::collect_rule_rows;
use log4rs;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Keep main() thin, it can't carry tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let set = get_security_groups().await?;
    let rows = collect_rule_rows(&set)?;
    print_rule_rows(&rows);

    log::info!("#End main()");
    Ok(())
}
