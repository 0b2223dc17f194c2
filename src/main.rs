fn main() {
    gh_mirror::app::cli::run();
}
