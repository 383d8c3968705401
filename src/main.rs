use deals_ng::App;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("[App] Starting");
    dioxus::launch(App);
}
