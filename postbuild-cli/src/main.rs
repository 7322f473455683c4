//! Binary entrypoint for the post-build hook.

fn main() {
    if let Err(err) = postbuild_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
