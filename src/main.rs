fn main() -> std::process::ExitCode {
    poemforge_lib::run()
}
