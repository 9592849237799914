fn main() {
    cookiesweep::cli::run();
}
