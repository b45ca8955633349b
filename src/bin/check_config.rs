fn main() {
    shotdiff::app::cli::check_config();
}
