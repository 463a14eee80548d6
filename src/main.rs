fn main() {
    senaite_init::app::cli::run();
}
