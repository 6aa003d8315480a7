use rand::rngs::StdRng;
use rand::SeedableRng;
use trip_planner::models::{BudgetVerdict, PlanReport};
use trip_planner::TripPlanner;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let planner = TripPlanner::default();

    println!("Known destinations:");
    for name in planner.catalog().names() {
        println!("  {}", name);
    }
    println!("\nInterest categories: {}\n", planner.catalog().all_categories().join(", "));

    // Demo request mirroring a typical interactive session
    let destinations = vec![
        "New York".to_string(),
        "Paris".to_string(),
        "Rome".to_string(),
        "Barcelona".to_string(),
    ];
    let start = "New York".to_string();
    let budget = 2000.0;
    let days = 7;
    let interests = vec!["Culture".to_string(), "Food".to_string()];

    let mut rng = StdRng::seed_from_u64(42);
    let report = match planner.plan_request(destinations, start, budget, days, interests, &mut rng)
    {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            return;
        }
    };

    if std::env::args().any(|arg| arg == "--json") {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize report: {}", e),
        }
        return;
    }

    print_report(&report);
}

fn print_report(report: &PlanReport) {
    println!(
        "Destinations: {}\nStart: {}\nBudget: ${:.2}\nDays: {}\nInterests: {}\n",
        report.selection.destinations().join(", "),
        report.selection.start(),
        report.selection.budget(),
        report.selection.duration_days(),
        report.selection.interests().join(", "),
    );

    println!("OPTIMAL ROUTE:");
    println!("{}", report.route.path.join(" -> "));
    println!("Distance: {:.1} km", report.route.distance_km);
    println!("Time: {:.1} hrs\n", report.route.time_hours);

    println!("ITINERARY:");
    for (day, destination) in report.itinerary.order.iter().enumerate() {
        println!("Day {}: {}", day + 1, destination);
    }
    println!("Fitness: {:.2}\n", report.itinerary.fitness);

    println!("COSTS:");
    for (category, amount) in report.costs.categories() {
        println!("{}: ${:.2}", category, amount);
    }
    println!("Total: ${:.2}", report.total);

    let status = match report.verdict {
        BudgetVerdict::WithinBudget => "Within budget",
        BudgetVerdict::OverBudget => "Over budget",
    };
    println!("Budget Status: {}", status);
}
