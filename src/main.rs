fn main() {
    if let Err(error) = food_share_dashboard_lib::run() {
        eprintln!("food-share-dashboard: {error:#}");
        std::process::exit(1);
    }
}
