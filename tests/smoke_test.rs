use budget_ledger::{create_spend_chart, init, Category};

#[test]
fn ledger_and_chart_smoke() {
    init();

    let mut food = Category::new("Food");
    let mut entertainment = Category::new("Entertainment");
    food.deposit(900.0, "deposit").unwrap();
    food.withdraw(105.55, "groceries").unwrap();
    food.transfer(100.0, &mut entertainment).unwrap();
    entertainment.withdraw(33.40, "movies").unwrap();

    let chart = create_spend_chart(&[&food, &entertainment]).expect("chart renders");
    assert!(chart.starts_with("Percentage spent by category\n100|"));
    assert_eq!(chart.lines().count(), 1 + 11 + 1 + "Entertainment".len());
    assert!(food.to_string().ends_with("Total:                  694.45"));
}
