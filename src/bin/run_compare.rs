fn main() {
    shotdiff::app::cli::run_compare();
}
