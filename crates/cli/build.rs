use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("docsift")
        .version("0.3.0")
        .about("Extract documentation pages to Markdown with language filtering")
        .arg(clap::arg!(<INPUT> "Documentation URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <DIR> "Output directory for the Markdown file")
                .value_name("DIR")
                .default_value(".")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-l --languages <LANG> "Programming languages to keep (e.g. swift web kotlin)")
                .value_name("LANG")
                .num_args(1..),
        )
        .arg(clap::arg!(-i --interactive "Interactively select languages after detection"))
        .arg(clap::arg!(--no_header "Skip the title/source header block in the output"))
        .arg(clap::arg!(--no_images "Strip images from output"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "docsift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "docsift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "docsift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "docsift", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
