use std::{env, error::Error, path::PathBuf};

use budget_ledger::{
    config::{ReportConfig, CONFIG_ENV_VAR},
    init,
    report::chart::create_spend_chart_with,
    Category,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match env::var_os(CONFIG_ENV_VAR) {
        Some(path) => ReportConfig::load(&PathBuf::from(path))?,
        None => ReportConfig::default(),
    };

    let categories = sample_categories()?;
    for category in &categories {
        println!("{}\n", category.render_with(&config));
    }
    println!("{}", create_spend_chart_with(&categories, &config)?);
    Ok(())
}

fn sample_categories() -> Result<Vec<Category>, Box<dyn Error>> {
    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");
    let mut transport = Category::new("Transport");
    let mut health = Category::new("Health");

    food.deposit(1000.0, "Initial deposit")?;
    food.withdraw(10.15, "Groceries")?;
    food.withdraw(15.89, "Restaurant and more food")?;

    clothing.deposit(5000.0, "Initial deposit")?;
    clothing.withdraw(1000.0, "chocolate")?;
    food.transfer(50.0, &mut clothing)?;
    clothing.withdraw(2000.0, "Fair of shoes")?;

    transport.deposit(50000.0, "Initial deposit")?;
    transport.withdraw(4000.0, "Weekly fare")?;
    transport.withdraw(1000.0, "servicing")?;

    health.deposit(2000.0, "Initial deposit")?;
    health.withdraw(1500.0, "Pharmacy")?;

    Ok(vec![food, clothing, transport, health])
}
